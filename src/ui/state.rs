//! Page-level state shared by the landing sections
//!
//! `LandingState` is created once by the page container and handed to the
//! sections through context. Sections never own any of this state.

use leptos::logging::debug_warn;
use leptos::prelude::*;

use crate::core::{Anchor, LoadGate, ModalState, navigate_to};
use crate::ui::browser::{BodyScroll, BrowserViewport};
use crate::ui::theme::{ThemeContext, provide_theme_context};

#[derive(Clone, Copy)]
pub struct LandingState {
    pub theme: ThemeContext,
    demo: RwSignal<ModalState>,
    loading: RwSignal<LoadGate>,
}

impl LandingState {
    pub fn new(theme: ThemeContext) -> Self {
        Self {
            theme,
            demo: RwSignal::new(ModalState::default()),
            loading: RwSignal::new(LoadGate::default()),
        }
    }

    /// Whether the AI demo modal is shown
    pub fn show_demo(&self) -> bool {
        self.demo.with(ModalState::is_open)
    }

    /// Show or hide the AI demo; background scrolling is locked while shown.
    /// Safe to call after the page state has been disposed.
    pub fn set_show_demo(&self, open: bool) {
        self.demo.try_update(|demo| {
            demo.set(open, &mut BodyScroll);
        });
    }

    pub fn is_loading(&self) -> bool {
        self.loading.with(LoadGate::is_loading)
    }

    /// Reveal the page content. Only the first call has any effect.
    pub fn finish_loading(&self) {
        self.loading.update(|gate| {
            gate.finish();
        });
    }

    /// Smooth-scroll to the element with `id`; does nothing if it is missing
    pub fn scroll_to_id(&self, id: &str) {
        if navigate_to(&mut BrowserViewport, id).is_none() {
            debug_warn!("scroll target #{} not found", id);
        }
    }

    pub fn scroll_to(&self, anchor: Anchor) {
        self.scroll_to_id(anchor.id());
    }
}

/// Create the page state and provide it (and the theme) to descendants
pub fn provide_landing_state() -> LandingState {
    let state = LandingState::new(provide_theme_context());
    provide_context(state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorScheme;

    /// Signals need an active owner to allocate into
    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    fn state() -> LandingState {
        LandingState::new(ThemeContext::new(ColorScheme::Light))
    }

    #[test]
    fn test_initial_flags() {
        with_owner(|| {
            let state = state();
            assert!(state.is_loading());
            assert!(!state.show_demo());
        });
    }

    #[test]
    fn test_demo_open_close() {
        with_owner(|| {
            let state = state();

            state.set_show_demo(true);
            assert!(state.show_demo());
            state.set_show_demo(true);
            assert!(state.show_demo());
            state.set_show_demo(false);
            assert!(!state.show_demo());
        });
    }

    #[test]
    fn test_loading_clears_once() {
        with_owner(|| {
            let state = state();

            state.finish_loading();
            assert!(!state.is_loading());
            state.finish_loading();
            assert!(!state.is_loading());
        });
    }

    #[test]
    fn test_scroll_to_missing_is_silent() {
        with_owner(|| {
            // No document on the server side: every target is missing
            let state = state();
            state.scroll_to_id("nowhere");
            state.scroll_to(Anchor::Faq);
        });
    }
}
