//! Page content and the DOM-free state behind the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod demo;
pub mod error;
mod faq;
mod loading;
mod modal;
mod navigation;
mod theme;
pub mod typewriter;
#[cfg(test)]
mod tests;

pub use content::*;
pub use error::LandingError;
pub use faq::FaqSelection;
pub use loading::{LOADING_DELAY_MS, LoadGate};
pub use modal::{Bounds, ModalState, ScrollLockTarget, is_outside_click};
pub use navigation::{
    Anchor, HEADER_OFFSET_PX, SCROLL_SHADOW_THRESHOLD_PX, Viewport, is_scrolled, navigate_to,
    scroll_target,
};
pub use theme::{ClassTarget, ColorScheme, DARK_CLASS, PREFERS_DARK_QUERY};
pub use typewriter::Typewriter;
