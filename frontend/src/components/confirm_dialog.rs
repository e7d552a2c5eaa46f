use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Modal yes/no prompt. Escape, the backdrop and the cancel button all
/// resolve to `on_cancel`.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_tone = if destructive {
        "bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
    } else {
        "bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
    };
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_text = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_text.get()}
                        </button>
                        <button
                            type="button"
                            class=format!("rounded-md px-4 py-2 text-sm font-semibold {}", confirm_tone)
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
