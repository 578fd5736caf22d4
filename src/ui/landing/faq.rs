use leptos::prelude::*;

use crate::core::{Anchor, FAQS, FaqItem, FaqSelection, stagger_style};
use crate::ui::icon::{Icon, icons};

/// FAQ accordion; at most one answer is open at a time
#[component]
pub fn FaqSection() -> impl IntoView {
    let selection = RwSignal::new(FaqSelection::default());

    view! {
        <section
            id=Anchor::Faq.id()
            class="py-16 md:py-24 px-4 bg-gray-50 dark:bg-gray-800 transition-colors duration-300"
        >
            <div class="container mx-auto">
                <div class="text-center mb-16 landing-fade-in-up">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Frequently Asked Questions"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Everything you need to know about ConnectLift."
                    </p>
                </div>

                <div class="max-w-3xl mx-auto">
                    {FAQS.iter().enumerate().map(|(index, item)| view! {
                        <FaqEntry item=*item index=index selection=selection />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqEntry(item: FaqItem, index: usize, selection: RwSignal<FaqSelection>) -> impl IntoView {
    let is_open = move || selection.with(|s| s.is_expanded(index));
    let answer_id = format!("faq-answer-{}", index);

    view! {
        <div class="mb-6 landing-fade-in-up" style=stagger_style(index)>
            <button
                class="flex justify-between items-center w-full p-5 bg-white dark:bg-gray-900 rounded-lg shadow-sm hover:shadow-md transition"
                on:click=move |_| selection.update(|s| s.toggle(index))
                aria-expanded=move || is_open().to_string()
                aria-controls=answer_id.clone()
            >
                <h3 class="text-lg font-medium text-left text-gray-900 dark:text-white">{item.question}</h3>
                <div
                    class="flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || !is_open())
                >
                    <Icon path=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=answer_id
                class="bg-white dark:bg-gray-900 px-5 pt-0 pb-5 rounded-b-lg shadow-sm"
                class:hidden=move || !is_open()
            >
                <p class="text-gray-700 dark:text-gray-300">{item.answer}</p>
            </div>
        </div>
    }
}
