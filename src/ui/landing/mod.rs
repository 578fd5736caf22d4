//! Sections of the landing page, top to bottom

mod ai_demo;
mod cta;
mod faq;
mod features;
mod footer;
mod hero;
mod navbar;
mod pricing;
mod styles;
mod testimonials;

pub use ai_demo::AiDemo;
pub use cta::CtaSection;
pub use faq::FaqSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use pricing::PricingSection;
pub use styles::LandingStyles;
pub use testimonials::TestimonialsSection;
