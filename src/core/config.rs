//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;

use super::error::{LandingError, Result};

pub const SITE_ADDR_VAR: &str = "CONNECTLIFT_SITE_ADDR";
pub const COMPRESSION_VAR: &str = "CONNECTLIFT_COMPRESSION";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Overrides the `site-addr` from `[package.metadata.leptos]`
    /// Example: 0.0.0.0:8080
    pub site_addr: Option<SocketAddr>,

    /// Whether responses are compressed (brotli/gzip)
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_addr: None,
            compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(SITE_ADDR_VAR).ok().as_deref(),
            std::env::var(COMPRESSION_VAR).ok().as_deref(),
        )
    }

    fn from_vars(site_addr: Option<&str>, compression: Option<&str>) -> Result<Self> {
        let site_addr = site_addr
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_site_addr)
            .transpose()?;

        Ok(Self {
            site_addr,
            compression: compression.map(parse_flag).unwrap_or(true),
        })
    }

    /// The address to bind, preferring the environment override
    pub fn resolve_addr(&self, fallback: SocketAddr) -> SocketAddr {
        self.site_addr.unwrap_or(fallback)
    }
}

fn parse_site_addr(value: &str) -> Result<SocketAddr> {
    value
        .parse()
        .map_err(|e: std::net::AddrParseError| LandingError::InvalidSiteAddr {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Config::from_vars only; tests never touch the process environment.

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.compression);
    }

    #[test]
    fn test_site_addr_override() {
        let config = Config::from_vars(Some("0.0.0.0:8080"), None).unwrap();
        assert_eq!(config.site_addr, Some("0.0.0.0:8080".parse().unwrap()));

        let fallback: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        assert_eq!(config.resolve_addr(fallback).port(), 8080);
        assert_eq!(Config::default().resolve_addr(fallback), fallback);
    }

    #[test]
    fn test_blank_site_addr_is_ignored() {
        let config = Config::from_vars(Some("   "), None).unwrap();
        assert!(config.site_addr.is_none());
    }

    #[test]
    fn test_invalid_site_addr() {
        let err = Config::from_vars(Some("localhost"), None).unwrap_err();
        assert!(matches!(
            err,
            LandingError::InvalidSiteAddr { ref value, .. } if value == "localhost"
        ));
    }

    #[test]
    fn test_compression_flag() {
        for off in ["0", "false", "OFF", " no "] {
            assert!(!Config::from_vars(None, Some(off)).unwrap().compression);
        }
        for on in ["1", "true", "yes", ""] {
            assert!(Config::from_vars(None, Some(on)).unwrap().compression);
        }
    }
}
