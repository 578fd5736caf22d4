//! Common reusable UI components

pub mod button;
pub mod modal;
pub mod spinner;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use modal::Overlay;
pub use spinner::{PageLoader, Spinner};
