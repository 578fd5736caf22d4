use leptos::prelude::*;

/// CSS animations for the landing page
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                font-family: 'Inter', sans-serif;
            }

            /* Entrance animation; per-item delay comes from an inline style */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.5s ease-out both;
            }
            .landing-delay-200 {
                animation-delay: 200ms;
            }

            /* Extension mockup */
            @keyframes landing-float {
                0%, 100% {
                    transform: translateY(0);
                }
                50% {
                    transform: translateY(-10px);
                }
            }
            .landing-float {
                animation: landing-float 3s ease-in-out infinite;
            }

            /* Section title pills */
            @keyframes landing-gradient-shift {
                0% {
                    background-position: 0% 50%;
                }
                50% {
                    background-position: 100% 50%;
                }
                100% {
                    background-position: 0% 50%;
                }
            }
            .landing-animated-gradient {
                background: linear-gradient(-45deg, rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1), rgba(236, 72, 153, 0.1), rgba(59, 130, 246, 0.1));
                background-size: 400% 400%;
                animation: landing-gradient-shift 15s ease infinite;
            }

            /* Typewriter cursor */
            @keyframes typed-blink {
                0%, 100% {
                    opacity: 1;
                }
                50% {
                    opacity: 0;
                }
            }
            .typed-cursor {
                font-weight: 300;
                animation: typed-blink 0.7s infinite;
            }

            /* Modal */
            @keyframes overlay-fade-in {
                from {
                    opacity: 0;
                }
                to {
                    opacity: 1;
                }
            }
            .overlay-fade-in {
                animation: overlay-fade-in 0.3s ease-out;
            }
            @keyframes dialog-pop-in {
                from {
                    opacity: 0;
                    transform: scale(0.9);
                }
                to {
                    opacity: 1;
                    transform: scale(1);
                }
            }
            .dialog-pop-in {
                animation: dialog-pop-in 0.3s ease-out;
            }

            /* Mobile menu */
            @keyframes menu-slide-down {
                from {
                    opacity: 0;
                    transform: translateY(-10px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }
            .menu-slide-down {
                animation: menu-slide-down 0.2s ease-out;
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-fade-in-up,
                .landing-float,
                .landing-animated-gradient,
                .overlay-fade-in,
                .dialog-pop-in,
                .menu-slide-down {
                    animation: none;
                }
                html {
                    scroll-behavior: auto;
                }
            }
            "#
        </style>
    }
}
