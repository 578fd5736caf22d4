use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Full-viewport overlay with a centered dialog.
///
/// Mount it only while the dialog should be visible. Closes through
/// `on_close` on the close button, on Escape, and on any pointer-down
/// outside the dialog box. Listeners are removed when the overlay unmounts.
#[component]
pub fn Overlay(
    /// Callback to close the overlay
    on_close: Callback<()>,
    /// Dialog content
    children: Children,
    /// Accessible label for the dialog
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::is_outside_click;
        use crate::ui::browser::bounds_of;
        use leptos::ev::{keydown, mousedown};

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                on_close.run(());
            }
        });

        let handle_mousedown = window_event_listener(mousedown, move |ev| {
            let bounds = dialog_ref.get_untracked().map(|dialog| bounds_of(&dialog));
            if is_outside_click(bounds.as_ref(), ev.client_x() as f64, ev.client_y() as f64) {
                on_close.run(());
            }
        });

        on_cleanup(move || {
            handle_keydown.remove();
            handle_mousedown.remove();
        });
    }

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4 overlay-fade-in">
            <div
                node_ref=dialog_ref
                role="dialog"
                aria-modal="true"
                aria-label=label
                class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-white dark:bg-gray-800 \
                       text-gray-900 dark:text-white rounded-xl p-6 shadow-xl dialog-pop-in"
            >
                <button
                    class="absolute top-4 right-4 text-gray-500 hover:text-gray-700 dark:text-gray-400 dark:hover:text-gray-200"
                    on:click=move |_| on_close.run(())
                    title="Close"
                    aria-label="Close dialog"
                >
                    <Icon path=icons::X class="h-6 w-6" />
                </button>

                {children()}
            </div>
        </div>
    }
}
