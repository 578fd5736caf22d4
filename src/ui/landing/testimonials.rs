use leptos::prelude::*;

use crate::core::{Anchor, TESTIMONIALS, Testimonial, stagger_style};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <section
            id=Anchor::Testimonials.id()
            class="py-16 md:py-24 px-4 bg-white dark:bg-gray-900 transition-colors duration-300"
        >
            <div class="container mx-auto">
                <div class="text-center mb-16 landing-fade-in-up">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"What Our Users Say"</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Professionals are growing their networks faster with ConnectLift."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| view! {
                        <TestimonialCard testimonial=*testimonial index=index />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    view! {
        <figure
            class="bg-gray-50 dark:bg-gray-800 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow duration-300 flex flex-col landing-fade-in-up"
            style=stagger_style(index)
        >
            <Icon path=icons::QUOTE class="w-8 h-8 mb-4 text-primary-500 dark:text-primary-400" />
            <blockquote class="text-gray-700 dark:text-gray-300 italic flex-grow mb-6">
                {format!("\u{201c}{}\u{201d}", testimonial.quote)}
            </blockquote>
            <figcaption class="flex items-center">
                <img
                    src=testimonial.avatar_url
                    alt=testimonial.name
                    class="w-12 h-12 rounded-full mr-4 object-cover"
                    loading="lazy"
                />
                <div>
                    <div class="font-semibold text-gray-900 dark:text-white">{testimonial.name}</div>
                    <div class="text-sm text-gray-500 dark:text-gray-400">{testimonial.title}</div>
                </div>
            </figcaption>
        </figure>
    }
}
