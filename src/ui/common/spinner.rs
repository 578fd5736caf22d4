use leptos::prelude::*;

/// Ring spinner
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="w-12 h-12 border-4 border-primary-500 border-t-transparent rounded-full animate-spin"
            role="status"
            aria-live="polite"
        >
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Full-screen placeholder shown while the page is loading
#[component]
pub fn PageLoader(
    /// Whether the loader is visible
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-[60] flex items-center justify-center bg-white dark:bg-gray-900 transition-opacity duration-300"
            class:opacity-0=move || !visible.get()
            class:pointer-events-none=move || !visible.get()
            aria-hidden=move || (!visible.get()).to_string()
        >
            <Spinner />
        </div>
    }
}
