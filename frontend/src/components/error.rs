use leptos::*;

/// Page-level error banner. Retry and dismiss buttons appear only when the
/// matching callback is supplied.
#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex items-start justify-between gap-3">
                <div class="flex items-start">
                    <span class="mr-3" aria-hidden="true">"⚠"</span>
                    <div>
                        <p class="font-semibold">"Error"</p>
                        <p class="text-sm mt-1">{message}</p>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    {on_retry.map(|retry| view! {
                        <button
                            type="button"
                            class="px-3 py-1 text-sm font-medium rounded border border-status-error-border hover:bg-surface-elevated"
                            on:click=move |_| retry.call(())
                        >
                            "Retry"
                        </button>
                    })}
                    {on_dismiss.map(|dismiss| view! {
                        <button
                            type="button"
                            aria-label="Dismiss"
                            class="text-status-error-text hover:opacity-75"
                            on:click=move |_| dismiss.call(())
                        >
                            "✕"
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_message_renders_retry_when_supplied() {
        let html = render_to_string(|| {
            view! {
                <ErrorMessage
                    message="Network error. Please check your connection."
                    on_retry=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Network error. Please check your connection."));
        assert!(html.contains("Retry"));
        assert!(!html.contains("Dismiss"));
    }

    #[test]
    fn error_message_without_actions_is_plain() {
        let html = render_to_string(|| view! { <ErrorMessage message="Server error occurred"/> });
        assert!(html.contains("Server error occurred"));
        assert!(!html.contains("Retry"));
    }
}
