//! Theme context for the light/dark color scheme
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme, read once on mount
//! - The `dark` class on the document root, kept in sync with the state

use leptos::prelude::*;

use crate::core::ColorScheme;
use crate::ui::browser::{DocumentRoot, system_prefers_dark};

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current color scheme
    pub scheme: RwSignal<ColorScheme>,
}

impl ThemeContext {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: RwSignal::new(initial),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.get().is_dark()
    }

    pub fn set_dark_mode(&self, dark: bool) {
        let scheme = if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        self.scheme.set(scheme);
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.scheme.update(|scheme| *scheme = scheme.toggled());
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        self.scheme.get_untracked().apply(&mut DocumentRoot);
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext::new(ColorScheme::from_prefers_dark(system_prefers_dark()));

    // Apply theme class initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.scheme.track();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signals need an active owner to allocate into
    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_toggle_twice_restores() {
        with_owner(|| {
            let theme = ThemeContext::new(ColorScheme::Light);

            theme.toggle();
            assert!(theme.is_dark());
            theme.toggle();
            assert!(!theme.is_dark());
        });
    }

    #[test]
    fn test_set_dark_mode() {
        with_owner(|| {
            let theme = ThemeContext::new(ColorScheme::Dark);

            theme.set_dark_mode(false);
            assert_eq!(theme.scheme.get_untracked(), ColorScheme::Light);
            theme.set_dark_mode(true);
            assert_eq!(theme.scheme.get_untracked(), ColorScheme::Dark);
        });
    }
}
