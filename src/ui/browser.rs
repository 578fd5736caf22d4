//! Browser-backed implementations of the core traits
//!
//! On the server every adapter is inert: there is no document to scroll,
//! lock or restyle while rendering HTML.

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::{ClassTarget, ScrollLockTarget, Viewport};

/// The window and its document
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        #[cfg(not(feature = "ssr"))]
        {
            let element = web_sys::window()?.document()?.get_element_by_id(id)?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(element.offset_top() as f64)
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
            None
        }
    }

    fn scroll_to(&mut self, top: f64) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = top;
        }
    }
}

/// Class list of the `<html>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ClassTarget for DocumentRoot {
    fn set_class(&mut self, class: &str, present: bool) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.class_list().toggle_with_force(class, present);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (class, present);
        }
    }
}

/// `overflow` of the `<body>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl ScrollLockTarget for BodyScroll {
    fn set_scroll_locked(&mut self, locked: bool) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let style = body.style();
                let _ = if locked {
                    style.set_property("overflow", "hidden")
                } else {
                    style.remove_property("overflow").map(|_| ())
                };
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = locked;
        }
    }
}

/// Detect system color scheme preference
pub fn system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media(crate::core::PREFERS_DARK_QUERY) {
                return media_query.matches();
            }
        }
    }
    false
}

/// Current vertical scroll offset of the window
pub fn scroll_y() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Bounding box of an element in viewport coordinates
#[cfg(not(feature = "ssr"))]
pub fn bounds_of(element: &web_sys::Element) -> crate::core::Bounds {
    let rect = element.get_bounding_client_rect();
    crate::core::Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Write `text` to the system clipboard; completion is not awaited
pub fn copy_to_clipboard(text: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let promise = window.navigator().clipboard().write_text(text);
            leptos::task::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    leptos::logging::warn!("clipboard write failed: {:?}", err);
                }
            });
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = text;
    }
}
