use leptos::prelude::*;

use crate::core::{Anchor, FEATURES, Feature, stagger_style};

/// Card backgrounds, cycled by index
const CARD_GRADIENTS: [&str; 6] = [
    "from-indigo-50 to-purple-50 dark:from-indigo-950/40 dark:to-purple-950/30",
    "from-purple-50 to-pink-50 dark:from-purple-950/40 dark:to-pink-950/30",
    "from-blue-50 to-indigo-50 dark:from-blue-950/40 dark:to-indigo-950/30",
    "from-violet-50 to-fuchsia-50 dark:from-violet-950/40 dark:to-fuchsia-950/30",
    "from-indigo-50 to-cyan-50 dark:from-indigo-950/40 dark:to-cyan-950/30",
    "from-fuchsia-50 to-rose-50 dark:from-fuchsia-950/40 dark:to-rose-950/30",
];

const ICON_COLORS: [&str; 6] = [
    "text-indigo-600 dark:text-indigo-400",
    "text-purple-600 dark:text-purple-400",
    "text-blue-600 dark:text-blue-400",
    "text-violet-600 dark:text-violet-400",
    "text-fuchsia-600 dark:text-fuchsia-400",
    "text-rose-600 dark:text-rose-400",
];

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section
            id=Anchor::Features.id()
            class="py-16 md:py-24 px-4 bg-gradient-to-b from-white to-indigo-50 dark:from-gray-900 dark:to-indigo-950/20 transition-colors duration-300"
        >
            <div class="container mx-auto">
                <div class="text-center mb-16 landing-fade-in-up">
                    <div class="inline-block landing-animated-gradient px-6 py-2 rounded-full mb-4">
                        <h2 class="text-3xl md:text-4xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-purple-600 dark:from-indigo-400 dark:to-purple-400">
                            "Powerful Features"
                        </h2>
                    </div>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Everything you need to enhance your LinkedIn networking experience and manage your professional connections."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {FEATURES.iter().enumerate().map(|(index, feature)| view! {
                        <FeatureCard feature=*feature index=index />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let gradient = CARD_GRADIENTS[index % CARD_GRADIENTS.len()];
    let icon_color = ICON_COLORS[index % ICON_COLORS.len()];

    view! {
        <div
            class=format!(
                "bg-gradient-to-br {} p-6 rounded-xl border border-gray-100 dark:border-gray-800 shadow-lg hover:shadow-xl hover:-translate-y-1 transition-all duration-300 flex flex-col landing-fade-in-up",
                gradient,
            )
            style=stagger_style(index)
        >
            <div class=format!("text-4xl mb-4 {}", icon_color) aria-hidden="true">{feature.icon}</div>
            <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
            <p class="text-gray-600 dark:text-gray-400 flex-grow">{feature.description}</p>
        </div>
    }
}
