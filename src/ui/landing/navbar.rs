//! Fixed navigation bar with theme toggle and mobile menu

use leptos::prelude::*;

use crate::core::{Anchor, BRAND_NAME};
use crate::ui::icon::{Icon, icons};
use crate::ui::state::LandingState;

#[component]
pub fn Navbar(state: LandingState) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Shadow once the page is scrolled past the threshold
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::is_scrolled;
        use crate::ui::browser::scroll_y;

        // Pick up the restored scroll position after hydration
        Effect::new(move |_| set_scrolled.set(is_scrolled(scroll_y())));
        let handle_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            set_scrolled.set(is_scrolled(scroll_y()));
        });
        on_cleanup(move || handle_scroll.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = set_scrolled;
    }

    let open_demo = move || state.set_show_demo(true);

    view! {
        <header
            class="fixed top-0 w-full z-50 p-4 backdrop-blur-md bg-white/80 dark:bg-gray-900/80 transition-colors duration-300"
            class:shadow-sm=move || scrolled.get()
        >
            <div class="container mx-auto flex justify-between items-center px-4 md:px-8">
                <div class="flex items-center space-x-1">
                    <Icon path=icons::BOLT class="h-6 w-6 text-primary-600 dark:text-primary-400" />
                    <h1
                        class="font-bold text-lg cursor-pointer"
                        on:click=move |_| state.scroll_to(Anchor::Hero)
                    >
                        {BRAND_NAME}
                    </h1>
                </div>

                // Desktop Navigation
                <nav class="hidden md:flex gap-6 text-sm font-medium">
                    {Anchor::nav_links().iter().map(|&anchor| view! {
                        <button
                            class="hover:text-primary-600 dark:hover:text-primary-400 transition"
                            on:click=move |_| state.scroll_to(anchor)
                        >
                            {anchor.label()}
                        </button>
                    }).collect_view()}
                    <button
                        class="hover:text-primary-600 dark:hover:text-primary-400 transition"
                        on:click=move |_| open_demo()
                    >
                        "Live Demo"
                    </button>
                </nav>

                <div class="flex items-center gap-4">
                    <ThemeToggle state=state />

                    // Mobile menu button
                    <button
                        class="md:hidden p-1 rounded-md focus:outline-none"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon path=icons::X class="h-6 w-6" /> }.into_any()
                            } else {
                                view! { <Icon path=icons::MENU class="h-6 w-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_menu_open.get()>
                <div class="md:hidden absolute top-full left-0 right-0 bg-white dark:bg-gray-900 p-4 shadow-md menu-slide-down">
                    <nav class="flex flex-col space-y-3 text-sm font-medium">
                        {Anchor::nav_links().iter().map(|&anchor| view! {
                            <button
                                class="hover:text-primary-600 dark:hover:text-primary-400 transition py-2"
                                on:click=move |_| {
                                    state.scroll_to(anchor);
                                    set_mobile_menu_open.set(false);
                                }
                            >
                                {anchor.label()}
                            </button>
                        }).collect_view()}
                        <button
                            class="hover:text-primary-600 dark:hover:text-primary-400 transition py-2"
                            on:click=move |_| {
                                open_demo();
                                set_mobile_menu_open.set(false);
                            }
                        >
                            "Live Demo"
                        </button>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Theme toggle button; both icons render and CSS shows the right one
#[component]
fn ThemeToggle(state: LandingState) -> impl IntoView {
    view! {
        <button
            class="p-1 rounded-full bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300 transition-all hover:bg-gray-200 dark:hover:bg-gray-700"
            on:click=move |_| state.theme.toggle()
            aria-label="Toggle dark mode"
        >
            <span class="hidden dark:block">
                <Icon path=icons::SUN class="h-5 w-5" />
            </span>
            <span class="block dark:hidden">
                <Icon path=icons::MOON class="h-5 w-5" />
            </span>
        </button>
    }
}
