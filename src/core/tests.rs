#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::core::modal::tests::FakeBody;
    use crate::core::navigation::tests::FakeViewport;
    use crate::core::{
        Anchor, Bounds, ColorScheme, DARK_CLASS, FAQS, FaqSelection, LoadGate, ModalState,
        is_outside_click, navigate_to,
    };

    #[test]
    fn test_fresh_load_with_dark_preference() {
        let mut root: BTreeSet<String> = BTreeSet::new();

        let scheme = ColorScheme::from_prefers_dark(true);
        scheme.apply(&mut root);

        assert!(scheme.is_dark());
        assert!(root.contains(DARK_CLASS));
    }

    #[test]
    fn test_fresh_load_with_light_preference() {
        let mut root: BTreeSet<String> = BTreeSet::new();
        ColorScheme::from_prefers_dark(false).apply(&mut root);
        assert!(root.is_empty());
    }

    #[test]
    fn test_live_demo_then_outside_click() {
        let mut body = FakeBody::default();
        let mut demo = ModalState::default();
        let dialog = Bounds::new(320.0, 120.0, 672.0, 560.0);

        // "Live Demo" in the navigation bar
        demo.open(&mut body);
        assert!(demo.is_open());
        assert!(body.locked);

        // A click inside the dialog leaves it open
        assert!(!is_outside_click(Some(&dialog), 600.0, 400.0));

        // Click on the dimmed backdrop
        assert!(is_outside_click(Some(&dialog), 40.0, 700.0));
        assert!(demo.close(&mut body));
        assert!(!demo.is_open());
        assert!(!body.locked);
    }

    #[test]
    fn test_live_demo_then_close_button() {
        let mut body = FakeBody::default();
        let mut demo = ModalState::default();

        demo.set(true, &mut body);
        demo.set(false, &mut body);

        assert!(!body.locked);
        assert_eq!(body.changes, vec![true, false]);
    }

    #[test]
    fn test_nav_links_reach_their_sections() {
        let mut viewport = FakeViewport::with_sections();

        for anchor in Anchor::nav_links() {
            assert!(navigate_to(&mut viewport, anchor.id()).is_some());
        }
        assert_eq!(viewport.scrolls.len(), Anchor::nav_links().len());
        assert!(navigate_to(&mut viewport, "testimonial").is_none());
        assert_eq!(viewport.scrolls.len(), Anchor::nav_links().len());
    }

    #[test]
    fn test_faq_walkthrough() {
        let mut faq = FaqSelection::default();
        assert_eq!(faq.as_index(), 0);

        faq.toggle(0);
        assert_eq!(faq.as_index(), -1);

        faq.toggle(FAQS.len() - 1);
        assert_eq!(faq.expanded(), Some(FAQS.len() - 1));

        faq.toggle(2);
        assert_eq!(faq.as_index(), 2);
    }

    #[test]
    fn test_loading_is_monotonic() {
        let mut gate = LoadGate::default();
        let mut transitions = 0;
        for _ in 0..5 {
            if gate.finish() {
                transitions += 1;
            }
        }
        assert_eq!(transitions, 1);
        assert!(!gate.is_loading());
    }
}
