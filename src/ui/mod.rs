pub mod browser;
pub mod common;
pub mod icon;
pub mod landing;
pub mod pages;
pub mod state;
pub mod theme;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use state::{LandingState, provide_landing_state};
pub use theme::{ThemeContext, provide_theme_context};
