//! AI message generator demo shown in a modal

use leptos::prelude::*;

use crate::core::demo::{DemoSession, PROMPT_PLACEHOLDER, RECENT_PROMPTS, Tone};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, Overlay};
use crate::ui::icon::{Icon, icons};
use crate::ui::state::LandingState;

/// Demo dialog. Mount it only while `state.show_demo()` is true.
#[component]
pub fn AiDemo(state: LandingState) -> impl IntoView {
    let session = RwSignal::new(DemoSession::default());
    let (copied, set_copied) = signal(false);
    let copy_timer = StoredValue::new(None::<TimeoutHandle>);

    let on_close = Callback::new(move |()| state.set_show_demo(false));

    let on_generate = Callback::new(move |()| {
        session.update(|s| {
            s.generate();
        });
    });

    let on_copy = move |_| {
        let message = session.with_untracked(DemoSession::output);
        crate::ui::browser::copy_to_clipboard(message);
        set_copied.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::demo::COPY_FEEDBACK_MS;

            if let Some(previous) = copy_timer.get_value() {
                previous.clear();
            }
            let handle = set_timeout_with_handle(
                move || set_copied.set(false),
                std::time::Duration::from_millis(COPY_FEEDBACK_MS),
            )
            .ok();
            copy_timer.set_value(handle);
        }
    };

    on_cleanup(move || {
        if let Some(handle) = copy_timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <Overlay on_close=on_close label="AI Message Generator">
            <div class="text-center">
                <div class="flex items-center justify-center mb-4">
                    <Icon path=icons::LIGHTBULB class="h-8 w-8 text-primary-600 dark:text-primary-400 mr-2" />
                    <h2 class="text-2xl font-bold">"AI Message Generator"</h2>
                </div>
                <p class="mb-6">
                    "Enter a job title or profile description to generate a personalized connection message using AI."
                </p>

                <div class="flex flex-col space-y-4">
                    <input
                        type="text"
                        placeholder=PROMPT_PLACEHOLDER
                        aria-label="Profile description"
                        class="w-full px-4 py-3 rounded-md border border-gray-300 dark:border-gray-700 dark:bg-gray-900"
                        prop:value=move || session.with(|s| s.prompt.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.prompt = value);
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                on_generate.run(());
                            }
                        }
                    />
                    <div class="flex space-x-2">
                        <select
                            aria-label="Message tone"
                            class="px-4 py-3 rounded-md border border-gray-300 dark:border-gray-700 dark:bg-gray-900 flex-shrink-0"
                            on:change=move |ev| {
                                let tone = Tone::from_value(&event_target_value(&ev));
                                session.update(|s| s.tone = tone);
                            }
                        >
                            {Tone::ALL.into_iter().map(|tone| view! {
                                <option
                                    value=tone.to_string()
                                    selected=move || session.with(|s| s.tone == tone)
                                >
                                    {tone.to_string()}
                                </option>
                            }).collect_view()}
                        </select>
                        <Button
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Large
                            class="flex-1 !text-base font-medium rounded-md"
                            on_click=on_generate
                        >
                            "Generate Message"
                        </Button>
                    </div>
                </div>

                <div class="mt-6 bg-gray-50 dark:bg-gray-700 p-4 rounded-md text-left">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="font-semibold">"Generated Message"</h3>
                        <button
                            class="text-primary-600 dark:text-primary-400 text-sm hover:underline"
                            on:click=on_copy
                        >
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                    </div>
                    <p class="text-gray-800 dark:text-gray-200" aria-live="polite">
                        {move || session.with(DemoSession::output)}
                    </p>
                </div>

                <div class="mt-6 bg-gray-50 dark:bg-gray-700 p-4 rounded-md text-left">
                    <h3 class="font-semibold mb-2">"Recent Generations"</h3>
                    <div class="space-y-2">
                        {RECENT_PROMPTS.iter().enumerate().map(|(index, prompt)| view! {
                            <div class="flex justify-between items-center text-sm">
                                <span>{*prompt}</span>
                                <button
                                    class="text-primary-600 dark:text-primary-400 hover:underline"
                                    on:click=move |_| session.update(|s| {
                                        s.use_recent(index);
                                    })
                                >
                                    "Use"
                                </button>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </Overlay>
    }
}
