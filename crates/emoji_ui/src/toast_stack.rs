//! Signal-driven toast notices.

use emoji_host::{next_monotonic_timestamp_ms, ToastService, ToastTone};
use leptos::*;

/// One transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique id used as the render key and dismiss handle.
    pub id: u64,
    /// Semantic tone.
    pub tone: ToastTone,
    /// Message text.
    pub message: String,
}

fn tone_token(tone: ToastTone) -> &'static str {
    match tone {
        ToastTone::Success => "success",
        ToastTone::Error => "error",
    }
}

/// [`ToastService`] adapter that pushes notices into a Leptos signal for
/// [`ToastStack`] to render.
#[derive(Debug, Clone, Copy)]
pub struct ToastSignalService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastSignalService {
    /// Creates the adapter over the signal the page renders from.
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self { toasts }
    }
}

impl ToastService for ToastSignalService {
    fn toast(&self, tone: ToastTone, message: &str) {
        let toast = Toast {
            id: next_monotonic_timestamp_ms(),
            tone,
            message: message.to_string(),
        };
        self.toasts.update(|list| list.push(toast));
    }
}

#[component]
/// Renders the current notices with per-notice dismissal.
pub fn ToastStack(
    /// The notice list owned by the page.
    toasts: RwSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toast-stack" data-ui-kind="toast-stack" role="status" aria-live="polite">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div class="toast" data-ui-tone=tone_token(toast.tone)>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button
                                type="button"
                                class="toast-dismiss"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    toasts.update(|list| list.retain(|t| t.id != id));
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
