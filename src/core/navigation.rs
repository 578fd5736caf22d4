//! In-page navigation
//!
//! Sections are addressed by stable anchor ids. Navigating to a section
//! scrolls the viewport so the section starts just below the fixed header.

use std::fmt;
use std::str::FromStr;

use super::error::LandingError;

/// Height of the fixed navigation bar, in CSS pixels
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Vertical scroll offset past which the navigation bar gets its shadow
pub const SCROLL_SHADOW_THRESHOLD_PX: f64 = 10.0;

/// Navigable page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Hero,
    Features,
    Testimonials,
    Pricing,
    Faq,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Hero,
        Anchor::Features,
        Anchor::Testimonials,
        Anchor::Pricing,
        Anchor::Faq,
    ];

    /// The DOM id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::Features => "features",
            Anchor::Testimonials => "testimonials",
            Anchor::Pricing => "pricing",
            Anchor::Faq => "faq",
        }
    }

    /// Link label in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Hero => "Home",
            Anchor::Features => "Features",
            Anchor::Testimonials => "Testimonials",
            Anchor::Pricing => "Pricing",
            Anchor::Faq => "FAQs",
        }
    }

    /// Sections linked from the navigation bar, in display order
    pub fn nav_links() -> &'static [Anchor] {
        &[
            Anchor::Features,
            Anchor::Testimonials,
            Anchor::Pricing,
            Anchor::Faq,
        ]
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Anchor {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == s)
            .ok_or_else(|| LandingError::UnknownAnchor(s.to_string()))
    }
}

/// Scroll position that puts an element's top edge just below the header
pub fn scroll_target(element_top: f64) -> f64 {
    element_top - HEADER_OFFSET_PX
}

/// Whether the navigation bar should render in its "scrolled" state
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_SHADOW_THRESHOLD_PX
}

/// The scrollable surface that hosts the sections
pub trait Viewport {
    /// Document-relative top of the element with `id`, if present
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Start a smooth scroll to `top`
    fn scroll_to(&mut self, top: f64);
}

/// Scroll to the element with `id`.
///
/// Returns the requested scroll position, or `None` when no such element
/// exists, in which case the viewport is left untouched.
pub fn navigate_to<V: Viewport + ?Sized>(viewport: &mut V, id: &str) -> Option<f64> {
    let top = scroll_target(viewport.element_top(id)?);
    viewport.scroll_to(top);
    Some(top)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    /// In-memory viewport with fixed section positions
    #[derive(Default)]
    pub(crate) struct FakeViewport {
        pub tops: HashMap<String, f64>,
        pub scrolls: Vec<f64>,
    }

    impl FakeViewport {
        pub(crate) fn with_sections() -> Self {
            let mut tops = HashMap::new();
            for (i, anchor) in Anchor::ALL.iter().enumerate() {
                tops.insert(anchor.id().to_string(), i as f64 * 900.0);
            }
            Self {
                tops,
                scrolls: Vec::new(),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }
    }

    #[test]
    fn test_anchor_ids_round_trip() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.id().parse::<Anchor>().unwrap(), anchor);
            assert_eq!(anchor.to_string(), anchor.id());
        }
    }

    #[test]
    fn test_unknown_anchor() {
        let err = "blog".parse::<Anchor>().unwrap_err();
        assert_eq!(err, LandingError::UnknownAnchor("blog".to_string()));
    }

    #[test]
    fn test_nav_links_exclude_hero() {
        assert!(!Anchor::nav_links().contains(&Anchor::Hero));
        assert_eq!(Anchor::nav_links().len(), 4);
    }

    #[test]
    fn test_navigate_to_every_anchor() {
        let mut viewport = FakeViewport::with_sections();

        for anchor in Anchor::ALL {
            let element_top = viewport.tops[anchor.id()];
            let target = navigate_to(&mut viewport, anchor.id());
            assert_eq!(target, Some(element_top - HEADER_OFFSET_PX));
            assert_eq!(viewport.scrolls.last(), Some(&(element_top - 80.0)));
        }
        assert_eq!(viewport.scrolls.len(), Anchor::ALL.len());
    }

    #[test]
    fn test_navigate_to_missing_is_noop() {
        let mut viewport = FakeViewport::with_sections();

        assert_eq!(navigate_to(&mut viewport, "pricing-table"), None);
        assert_eq!(navigate_to(&mut viewport, ""), None);
        assert!(viewport.scrolls.is_empty());
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(400.0));
    }
}
