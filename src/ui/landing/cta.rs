use leptos::prelude::*;

use crate::core::Anchor;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::state::LandingState;

/// Closing call-to-action banner
#[component]
pub fn CtaSection(state: LandingState) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 px-4 bg-gradient-to-r from-primary-600 to-indigo-600 dark:from-primary-800 dark:to-indigo-800 text-white">
            <div class="container mx-auto text-center landing-fade-in-up">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">
                    "Ready to supercharge your LinkedIn networking?"
                </h2>
                <p class="text-xl text-white/80 mb-8 max-w-2xl mx-auto">
                    "Join thousands of professionals who are already making meaningful connections with ConnectLift."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button
                        variant=ButtonVariant::White
                        size=ButtonSize::ExtraLarge
                        class="hover:scale-105"
                    >
                        "Add to Chrome \u{2014} It's Free"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::ExtraLarge
                        on_click=Callback::new(move |()| state.scroll_to(Anchor::Features))
                    >
                        "Learn More"
                    </Button>
                </div>
            </div>
        </section>
    }
}
