use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Indigo-to-purple gradient, the main call to action
    Gradient,
    /// White with primary text, for use on light or colored backgrounds
    White,
    Primary,
    /// Translucent with a light border, for colored banners
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
    ExtraLarge,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => {
                "bg-gradient-to-r from-primary-600 to-purple-600 hover:from-primary-700 hover:to-purple-700 text-white shadow-lg hover:shadow-xl"
            }
            ButtonVariant::White => {
                "bg-white text-primary-700 hover:bg-gray-100 border border-gray-200 dark:bg-gray-800 dark:text-white dark:border-gray-700 dark:hover:bg-gray-700 shadow-md"
            }
            ButtonVariant::Primary => "bg-primary-600 hover:bg-primary-700 text-white",
            ButtonVariant::Outline => {
                "bg-primary-800/50 hover:bg-primary-800/80 text-white border border-white/20"
            }
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "px-4 py-2",
            ButtonSize::Large => "px-6 py-3 text-lg",
            ButtonSize::ExtraLarge => "px-8 py-4 text-lg font-bold",
        }
    }
}

/// Button with a fixed set of variants and sizes
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "transition duration-300 rounded-lg font-semibold {} {} {}",
        variant.class(),
        size.class(),
        class
    );

    view! {
        <button
            type="button"
            class=classes
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
