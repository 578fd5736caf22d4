//! Static page content
//!
//! Every record on the landing page is a compile-time constant. Sections
//! render these slices in order; nothing here is ever mutated.

use serde::Serialize;

/// Product name as shown in the navigation bar and footer
pub const BRAND_NAME: &str = "ConnectLift Mate";

/// Document title injected into `<head>`
pub const PAGE_TITLE: &str = "ConnectLift Landing";

pub const PAGE_DESCRIPTION: &str = "Boost your LinkedIn networking with saved connection notes, \
    AI-personalized messages, a Boolean search builder and a job tracker. Free forever.";

pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap";

pub const FAVICON_URL: &str =
    "https://cdn.jsdelivr.net/npm/heroicons@2.0.18/outline/rocket-launch.svg";

/// A card in the features grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Emoji glyph shown above the title
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub avatar_url: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A pricing tier. Serializes as the body of a schema.org `Offer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    #[serde(rename = "name")]
    pub title: &'static str,
    pub description: &'static str,
    /// Price without currency sign
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub disabled_features: &'static [&'static str],
    pub button_text: &'static str,
    /// Tailwind classes for the call-to-action button
    #[serde(skip)]
    pub button_style: &'static str,
    pub popular: bool,
}

impl PricingPlan {
    pub fn is_free(&self) -> bool {
        self.price == "0"
    }

    /// Price with currency sign, e.g. `$0`
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Saved Connection Notes",
        description: "Store, manage, and reuse frequently sent connection requests.",
        icon: "📌",
    },
    Feature {
        title: "Personalized AI Messages",
        description: "Generate custom messages using LLaMA3 with your own Groq API key.",
        icon: "🧠",
    },
    Feature {
        title: "Boolean Search Builder",
        description: "Craft advanced LinkedIn Boolean queries with ease.",
        icon: "🔍",
    },
    Feature {
        title: "Job Tracker Dashboard",
        description: "Keep track of your job applications in a structured view.",
        icon: "📊",
    },
    Feature {
        title: "Export / Import Data",
        description: "Take your data anywhere by exporting or importing JSON files.",
        icon: "💾",
    },
    Feature {
        title: "BYOK (Bring Your Own Key)",
        description: "Use your own Groq API key for AI features - no subscription needed!",
        icon: "🔑",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        title: "Marketing Director",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
        quote: "The AI message generator has transformed how I approach LinkedIn connections. I'm getting 3x more responses with personalized messages.",
    },
    Testimonial {
        name: "David Chen",
        title: "Software Engineer",
        avatar_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
        quote: "The Boolean search builder has been a game-changer for finding the right connections. The job tracker also helped me land my current role.",
    },
    Testimonial {
        name: "Maya Patel",
        title: "Career Coach",
        avatar_url: "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80",
        quote: "I recommend ConnectLift to all my clients. The saved templates and AI suggestions have helped them build meaningful professional networks.",
    },
];

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "Is this extension really free?",
        answer: "Yes! All features are completely free to use, including saving unlimited templates, advanced boolean search, job tracking, and data export/import. AI features require you to provide your own Groq API key.",
    },
    FaqItem {
        question: "Will my data sync across devices?",
        answer: "Currently, saved data is local to your browser. You can manually export your data from one device and import it to another. Cloud synchronization is planned for a future update to make this process seamless.",
    },
    FaqItem {
        question: "How does the AI message generation work?",
        answer: "We use Groq's API with LLaMA3 to generate personalized connection messages based on the profile information you provide. You'll need to provide your own Groq API key to use this feature. We don't charge for AI generations - you only pay for what you use directly with Groq.",
    },
    FaqItem {
        question: "Where do I get a Groq API key?",
        answer: "You can sign up for a free Groq API key at groq.com. They offer generous free tier limits that are sufficient for most users. Once you have your key, simply enter it in the extension settings to enable AI message generation.",
    },
    FaqItem {
        question: "Can I import/export my notes?",
        answer: "Absolutely! Use the Import/Export options in the Settings page to backup your data or transfer it between devices. Your data is exported as a JSON file that you can safely store and import when needed.",
    },
    FaqItem {
        question: "Is my data private and secure?",
        answer: "Your data is stored locally in your browser and never sent to our servers unless you're using the AI features. Even then, we don't store the content of your messages or connection notes. Your privacy is our top priority.",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[PricingPlan {
    title: "Free",
    description: "Everything you need to get started",
    price: "0",
    period: "forever",
    features: &[
        "Save unlimited connection templates",
        "Advanced Boolean search builder",
        "Export/Import your data",
        "Job tracking dashboard",
        "AI message generation (with your own API key)",
    ],
    disabled_features: &[],
    button_text: "Install Free",
    button_style: "w-full bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-700 hover:to-purple-700 \
                   text-white font-semibold py-3 px-4 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300",
    popular: true,
}];

/// Bring-your-own-key requirements listed next to the plan
pub const API_KEY_STEPS: &[&str] = &[
    "Bring your own Groq API key for AI features",
    "Sign up for free at groq.com",
    "Easy setup within the extension",
];

/// Phrases cycled by the hero typewriter
pub const HERO_PHRASES: &[&str] = &[
    "Save your best LinkedIn messages.",
    "Connect smarter, not harder.",
    "Track jobs. Automate follow-ups.",
    "Use AI to personalize everything.",
];

/// Text shown in the typewriter slot before it starts ticking
pub const HERO_PLACEHOLDER: &str = "personalized messages";

/// Per-item entrance delay for staggered cards, in milliseconds
pub const STAGGER_STEP_MS: u32 = 100;

/// Inline `animation-delay` style for the item at `index`
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * STAGGER_STEP_MS)
}

/// JSON-LD `SoftwareApplication` description built from the content above
pub fn structured_data() -> serde_json::Result<String> {
    let offers = PRICING_PLANS
        .iter()
        .map(|plan| {
            let mut offer = serde_json::to_value(plan)?;
            if let Some(fields) = offer.as_object_mut() {
                fields.insert("@type".into(), "Offer".into());
                fields.insert("priceCurrency".into(), "USD".into());
            }
            Ok(offer)
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    let feature_list: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();

    serde_json::to_string(&serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": BRAND_NAME,
        "applicationCategory": "BrowserApplication",
        "operatingSystem": "Chrome",
        "description": PAGE_DESCRIPTION,
        "offers": offers,
        "featureList": feature_list,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_counts() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQS.len(), 6);
        assert_eq!(PRICING_PLANS.len(), 1);
        assert_eq!(HERO_PHRASES.len(), 4);
    }

    #[test]
    fn test_free_plan() {
        let plan = &PRICING_PLANS[0];
        assert!(plan.is_free());
        assert_eq!(plan.display_price(), "$0");
        assert!(plan.disabled_features.is_empty());
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0), "animation-delay: 0ms;");
        assert_eq!(stagger_style(3), "animation-delay: 300ms;");
    }

    #[test]
    fn test_structured_data_is_valid_json() {
        let raw = structured_data().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed["@type"], "SoftwareApplication");
        assert_eq!(parsed["name"], BRAND_NAME);

        let list = parsed["featureList"].as_array().unwrap();
        assert_eq!(list.len(), FEATURES.len());
        for feature in FEATURES {
            assert!(list.iter().any(|v| v == feature.title));
        }
    }

    #[test]
    fn test_offers_come_from_pricing_plans() {
        let raw = structured_data().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let offers = parsed["offers"].as_array().unwrap();
        assert_eq!(offers.len(), PRICING_PLANS.len());

        let offer = &offers[0];
        assert_eq!(offer["@type"], "Offer");
        assert_eq!(offer["name"], PRICING_PLANS[0].title);
        assert_eq!(offer["price"], "0");
        assert_eq!(offer["priceCurrency"], "USD");
        assert_eq!(offer["features"].as_array().unwrap().len(), 5);
        assert!(offer.get("buttonStyle").is_none());
        assert!(offer.get("button_style").is_none());
    }
}
