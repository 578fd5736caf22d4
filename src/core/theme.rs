//! Light/dark color scheme
//!
//! The whole palette switches on a single class on the document root, so
//! the scheme itself is just a flag plus the logic to apply it.

use std::collections::BTreeSet;

/// Class that activates the `dark:` variants in the stylesheet
pub const DARK_CLASS: &str = "dark";

/// Media query used to detect the operating system preference
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Add or remove the dark class on `target`
    pub fn apply<T: ClassTarget + ?Sized>(&self, target: &mut T) {
        target.set_class(DARK_CLASS, self.is_dark());
    }
}

/// An element class list
pub trait ClassTarget {
    fn set_class(&mut self, class: &str, present: bool);
}

impl ClassTarget for BTreeSet<String> {
    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.insert(class.to_string());
        } else {
            self.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(ColorScheme::from_prefers_dark(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_prefers_dark(false), ColorScheme::Light);
    }

    #[test]
    fn test_apply_dark_and_light() {
        let mut root = classes(&["scroll-smooth"]);

        ColorScheme::Dark.apply(&mut root);
        assert_eq!(root, classes(&["dark", "scroll-smooth"]));

        ColorScheme::Light.apply(&mut root);
        assert_eq!(root, classes(&["scroll-smooth"]));
    }

    #[test]
    fn test_double_toggle_restores_classes() {
        for start in [ColorScheme::Light, ColorScheme::Dark] {
            let mut root = classes(&["scroll-smooth", "antialiased"]);
            start.apply(&mut root);
            let original = root.clone();

            let once = start.toggled();
            once.apply(&mut root);
            assert_ne!(root, original);

            let twice = once.toggled();
            twice.apply(&mut root);
            assert_eq!(twice, start);
            assert_eq!(root, original);
        }
    }
}
