//! Error type shared by the core modules and the server entry point

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    /// The name does not match any navigable section
    #[error("unknown section anchor: {0:?}")]
    UnknownAnchor(String),

    /// `CONNECTLIFT_SITE_ADDR` could not be parsed as `host:port`
    #[error("invalid site address {value:?}: {reason}")]
    InvalidSiteAddr { value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LandingError>;
