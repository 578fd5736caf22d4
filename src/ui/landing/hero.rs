//! Hero section with the typed headline and a mock of the extension window

use leptos::prelude::*;

use crate::core::{Anchor, HERO_PHRASES, HERO_PLACEHOLDER};
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::state::LandingState;

#[component]
pub fn HeroSection(state: LandingState) -> impl IntoView {
    let typed = use_typewriter();

    view! {
        <section
            id=Anchor::Hero.id()
            class="pt-28 md:pt-32 pb-16 md:pb-24 px-4 md:px-8 bg-gradient-to-br from-white via-blue-50 to-indigo-50 dark:from-gray-900 dark:via-gray-800 dark:to-gray-800 transition-colors duration-300"
        >
            <div class="container mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between">
                    <div class="w-full md:w-1/2 mb-12 md:mb-0 md:pr-8 landing-fade-in-up">
                        <div class="inline-block px-3 py-1 mb-6 rounded-full bg-primary-100 dark:bg-primary-900/30 text-primary-800 dark:text-primary-300 text-sm font-medium">
                            "LinkedIn Networking Superpower ⚡"
                        </div>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 leading-tight">
                            <span>"Make meaningful LinkedIn connections with "</span>
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary-600 to-purple-600 dark:from-primary-400 dark:to-purple-400">
                                {move || typed.get()}
                            </span>
                            <span class="typed-cursor text-primary-600 dark:text-primary-400" aria-hidden="true">
                                "|"
                            </span>
                        </h1>
                        <p class="text-lg text-gray-700 dark:text-gray-300 mb-8 max-w-xl">
                            "Boost your networking impact with smart connection requests, AI-powered messaging, and organized job tracking."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <Button variant=ButtonVariant::Gradient size=ButtonSize::ExtraLarge>
                                "Add to Chrome"
                            </Button>
                            <Button
                                variant=ButtonVariant::White
                                size=ButtonSize::ExtraLarge
                                on_click=Callback::new(move |()| state.set_show_demo(true))
                            >
                                "Try Demo"
                            </Button>
                        </div>
                        <div class="mt-8 space-y-2">
                            <div class="text-sm text-gray-600 dark:text-gray-400 flex items-center">
                                <Icon path=icons::CHECK_CIRCLE class="w-5 h-5 mr-2 text-green-500" />
                                <span>"Free forever. No subscriptions or hidden fees."</span>
                            </div>
                            <div class="text-sm text-gray-600 dark:text-gray-400 flex items-center">
                                <Icon path=icons::BOLT class="w-5 h-5 mr-2 text-blue-500" />
                                <span>"Bring your own Groq API key for AI features"</span>
                            </div>
                        </div>
                    </div>

                    <div class="w-full md:w-1/2 relative landing-fade-in-up landing-delay-200">
                        <ExtensionMockup />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Static picture of the extension popup
#[component]
fn ExtensionMockup() -> impl IntoView {
    view! {
        <div class="rounded-xl shadow-2xl bg-white dark:bg-gray-800 border border-gray-100 dark:border-gray-700 overflow-hidden landing-float">
            <div class="border-b border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-900 px-4 py-3 flex items-center">
                <div class="flex space-x-1.5">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                </div>
                <div class="mx-auto text-sm font-medium text-gray-500 dark:text-gray-400">
                    "ConnectLift Chrome Extension"
                </div>
            </div>
            <div class="p-5">
                <div class="space-y-4">
                    <div class="rounded-lg bg-gray-100 dark:bg-gray-700 p-3">
                        <div class="text-sm font-medium mb-2">"🤖 AI Message Generator"</div>
                        <div class="mb-2 text-xs text-gray-500 dark:text-gray-400">
                            "Enter profile details for a personalized message:"
                        </div>
                        <div class="flex mb-3">
                            <input
                                type="text"
                                value="Senior Software Engineer at Google"
                                readonly=true
                                tabindex="-1"
                                class="flex-1 p-2 text-sm border border-gray-300 dark:border-gray-600 rounded-l-md bg-white dark:bg-gray-900"
                            />
                            <span class="bg-primary-600 text-white px-3 py-2 text-sm rounded-r-md">
                                "Generate"
                            </span>
                        </div>
                        <div class="bg-white dark:bg-gray-800 p-3 rounded-md border border-gray-200 dark:border-gray-600 text-sm">
                            <p>
                                "Hi [Name], I noticed your impressive work as a Senior Engineer at Google. Your experience with [specific technology] caught my attention as I'm working on similar projects. Would love to connect and exchange insights!"
                            </p>
                        </div>
                    </div>
                    <div class="rounded-lg bg-gray-100 dark:bg-gray-700 p-3">
                        <div class="text-sm font-medium mb-2">"📌 Saved Connections"</div>
                        <div class="space-y-2">
                            {["Product Managers", "Startup Founders"].into_iter().map(|name| view! {
                                <div class="flex items-center justify-between bg-white dark:bg-gray-800 p-2 rounded border border-gray-200 dark:border-gray-600">
                                    <div class="text-sm">{name}</div>
                                    <span class="text-xs text-primary-600 dark:text-primary-400">"Use"</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Text of the typed headline. The server renders the placeholder; in the
/// browser a loop drives a [`Typewriter`](crate::core::Typewriter) until the
/// section unmounts.
fn use_typewriter() -> ReadSignal<&'static str> {
    let (text, set_text) = signal(HERO_PLACEHOLDER);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;

        use crate::core::Typewriter;

        // Disposed with the section, which ends the loop
        let alive = StoredValue::new(true);

        leptos::task::spawn_local(async move {
            let mut typewriter = Typewriter::new(HERO_PHRASES);
            while alive.try_get_value().unwrap_or(false) {
                let delay = typewriter.tick();
                set_text.set(typewriter.text());
                TimeoutFuture::new(delay).await;
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (set_text, HERO_PHRASES);
    }

    text
}
