//! Landing page container
//!
//! Owns the page state and composes the sections:
//! - Navigation bar with theme toggle
//! - Hero with typed headline
//! - Features, testimonials, pricing and FAQ
//! - Call-to-action and footer
//! - AI demo modal, mounted while open

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{PAGE_DESCRIPTION, PAGE_TITLE, structured_data};
use crate::ui::common::PageLoader;
use crate::ui::landing::{
    AiDemo, CtaSection, FaqSection, FeaturesSection, Footer, HeroSection, LandingStyles, Navbar,
    PricingSection, TestimonialsSection,
};
use crate::ui::state::provide_landing_state;

#[component]
pub fn LandingPage() -> impl IntoView {
    let state = provide_landing_state();

    // Hide the loader once, shortly after mount
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::LOADING_DELAY_MS;

        match set_timeout_with_handle(
            move || state.finish_loading(),
            std::time::Duration::from_millis(LOADING_DELAY_MS),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                leptos::logging::warn!("loading timer failed: {:?}", err);
                state.finish_loading();
            }
        }
    }

    // Release the scroll lock if the page goes away with the demo open
    on_cleanup(move || state.set_show_demo(false));

    view! {
        <SeoMeta />
        <LandingStyles />

        <PageLoader visible=Signal::derive(move || state.is_loading()) />

        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300 overflow-x-hidden">
            <Navbar state=state />
            <main>
                <HeroSection state=state />
                <FeaturesSection />
                <TestimonialsSection />
                <PricingSection />
                <FaqSection />
                <CtaSection state=state />
            </main>
            <Footer state=state />
        </div>

        <Show when=move || state.show_demo()>
            <AiDemo state=state />
        </Show>
    }
}

/// SEO meta tags and structured data
#[component]
fn SeoMeta() -> impl IntoView {
    let json_ld = structured_data().unwrap_or_else(|e| {
        leptos::logging::error!("failed to build structured data: {}", e);
        String::new()
    });

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[cfg(test)]
mod tests {
    use leptos_meta::provide_meta_context;

    use super::*;
    use crate::core::{Anchor, FAQS};

    fn render_page() -> String {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();
        view! { <LandingPage /> }.to_html()
    }

    #[test]
    fn test_every_anchor_rendered_once() {
        let html = render_page();

        for anchor in Anchor::ALL {
            let needle = format!("id=\"{}\"", anchor.id());
            assert_eq!(html.matches(&needle).count(), 1, "anchor {}", anchor);
        }
    }

    #[test]
    fn test_first_faq_starts_open() {
        let html = render_page();

        for index in 0..FAQS.len() {
            assert!(html.contains(&format!("id=\"faq-answer-{}\"", index)));
        }
        let collapsed = html.matches("rounded-b-lg shadow-sm hidden").count();
        assert_eq!(collapsed, FAQS.len() - 1);
    }
}
