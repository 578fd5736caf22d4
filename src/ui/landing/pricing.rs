use leptos::prelude::*;

use crate::core::{API_KEY_STEPS, Anchor, PRICING_PLANS, PricingPlan, stagger_style};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section
            id=Anchor::Pricing.id()
            class="py-16 md:py-24 px-4 bg-gradient-to-b from-indigo-50 to-white dark:from-indigo-950/20 dark:to-gray-900 transition-colors duration-300"
        >
            <div class="container mx-auto">
                <div class="text-center mb-16 landing-fade-in-up">
                    <div class="inline-block landing-animated-gradient px-6 py-2 rounded-full mb-4">
                        <h2 class="text-3xl md:text-4xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-purple-600 dark:from-indigo-400 dark:to-purple-400">
                            "Simple, Free Forever"
                        </h2>
                    </div>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "ConnectLift Mate is completely free to use. You only need to supply your own API key for the AI features."
                    </p>
                </div>

                <div class="max-w-4xl mx-auto space-y-8">
                    {PRICING_PLANS.iter().map(|plan| view! { <PricingCard plan=*plan /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: PricingPlan) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-indigo-100 via-purple-50 to-indigo-100 dark:from-indigo-900/30 dark:via-purple-900/20 dark:to-indigo-900/30 border border-indigo-200 dark:border-indigo-800/50 shadow-xl p-8 rounded-2xl flex flex-col relative overflow-hidden hover:-translate-y-1 transition-transform duration-200 landing-fade-in-up">
            // Decorative circles
            <div class="absolute -top-20 -right-20 w-40 h-40 bg-gradient-to-br from-indigo-500/10 to-purple-500/10 rounded-full" aria-hidden="true"></div>
            <div class="absolute -bottom-20 -left-20 w-40 h-40 bg-gradient-to-tr from-purple-500/10 to-pink-500/10 rounded-full" aria-hidden="true"></div>

            <div class="relative">
                <div class="flex items-center justify-between mb-4">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white">{plan.title}</h3>
                        <p class="text-indigo-700 dark:text-indigo-300 mt-1 font-medium">{plan.description}</p>
                    </div>
                    {(plan.popular && plan.is_free()).then(|| view! {
                        <div class="bg-indigo-600 dark:bg-indigo-500 text-white text-sm font-bold px-4 py-2 rounded-full animate-pulse">
                            "FREE FOREVER"
                        </div>
                    })}
                </div>

                <div class="mb-8">
                    <div class="flex items-center">
                        <span class="text-5xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-indigo-600 to-purple-600 dark:from-indigo-400 dark:to-purple-400">
                            {plan.display_price()}
                        </span>
                        <span class="text-gray-600 dark:text-gray-400 ml-2">{format!("/{}", plan.period)}</span>
                    </div>
                    <p class="text-gray-500 dark:text-gray-400 mt-2 text-sm">"No credit card required"</p>
                </div>

                <div class="grid md:grid-cols-2 gap-4 mb-8">
                    <div>
                        <h4 class="font-semibold text-lg mb-3 text-gray-900 dark:text-white flex items-center">
                            <span class="text-green-500 mr-2">"✓"</span>
                            "Included Features"
                        </h4>
                        <ul class="space-y-3">
                            {plan.features.iter().enumerate().map(|(i, feature)| view! {
                                <li class="flex items-start landing-fade-in-up" style=stagger_style(i + 2)>
                                    <Icon path=icons::CHECK class="w-5 h-5 text-green-500 mr-2 mt-0.5 flex-shrink-0" />
                                    <span class="text-gray-700 dark:text-gray-300">{*feature}</span>
                                </li>
                            }).collect_view()}
                            {plan.disabled_features.iter().map(|feature| view! {
                                <li class="flex items-start">
                                    <Icon path=icons::X class="w-5 h-5 text-gray-400 mr-2 mt-0.5 flex-shrink-0" />
                                    <span class="text-gray-400 dark:text-gray-500 line-through">{*feature}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-lg mb-3 text-gray-900 dark:text-white flex items-center">
                            <span class="text-indigo-500 mr-2">"🔑"</span>
                            "API Key Requirements"
                        </h4>
                        <ul class="space-y-3">
                            {API_KEY_STEPS.iter().enumerate().map(|(i, step)| view! {
                                <li class="flex items-start landing-fade-in-up" style=stagger_style(i + 3)>
                                    <Icon path=icons::INFO class="w-5 h-5 text-indigo-500 mr-2 mt-0.5 flex-shrink-0" />
                                    <span class="text-gray-700 dark:text-gray-300">{*step}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <button
                    type="button"
                    class=format!(
                        "w-full font-semibold py-3 px-4 rounded-xl shadow-lg hover:shadow-xl hover:scale-[1.03] active:scale-[0.98] transition-all duration-300 {}",
                        plan.button_style,
                    )
                >
                    {plan.button_text}
                </button>
            </div>
        </div>
    }
}
