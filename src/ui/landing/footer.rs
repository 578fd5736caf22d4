use leptos::prelude::*;

use crate::core::{Anchor, BRAND_NAME};
use crate::ui::icon::{Icon, icons};
use crate::ui::state::LandingState;

const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn Footer(state: LandingState) -> impl IntoView {
    view! {
        <footer class="py-12 px-4 bg-gray-900 text-gray-400">
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <div class="flex items-center space-x-1 text-white">
                        <Icon path=icons::BOLT class="h-6 w-6 text-primary-400" />
                        <span class="font-bold text-lg">{BRAND_NAME}</span>
                    </div>

                    <nav class="flex flex-wrap justify-center gap-6 text-sm" aria-label="Footer">
                        {Anchor::nav_links().iter().map(|&anchor| view! {
                            <button
                                class="hover:text-white transition"
                                on:click=move |_| state.scroll_to(anchor)
                            >
                                {anchor.label()}
                            </button>
                        }).collect_view()}
                    </nav>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-sm">
                    {format!("\u{a9} {} ConnectLift. All rights reserved.", COPYRIGHT_YEAR)}
                </div>
            </div>
        </footer>
    }
}
