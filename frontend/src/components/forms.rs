use leptos::*;

const FIELD_CLASS: &str = "w-full rounded-md border px-3 py-2 text-sm bg-form-control-bg text-fg focus:outline-none focus:ring-2 disabled:opacity-60 disabled:cursor-not-allowed";

fn field_classes(has_error: bool) -> String {
    if has_error {
        format!(
            "{} border-status-error-border focus:ring-status-error-border",
            FIELD_CLASS
        )
    } else {
        format!(
            "{} border-form-control-border focus:ring-action-primary-focus",
            FIELD_CLASS
        )
    }
}

#[component]
fn FieldLabel(#[prop(into)] for_id: String, label: String, required: bool) -> impl IntoView {
    view! {
        <label for=for_id class="block text-sm font-medium text-fg mb-1">
            {label}
            {required.then(|| view! { <span class="text-status-error-text ml-1">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! { <p class="mt-1 text-sm text-status-error-text">{message}</p> }
        })
    }
}

/// Controlled text-like input. The parent owns the value and is told about
/// every edit through `on_input`.
#[component]
pub fn Input(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] max: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_id = format!("field-{}", name);
    let error = Signal::derive(move || error.get());
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="mb-4">
            {label.map(|label| view! { <FieldLabel for_id=input_id.clone() label=label required=required/> })}
            <input
                id=input_id.clone()
                name=name
                type=input_type
                placeholder=placeholder
                max=max
                required=required
                class=move || field_classes(error.get().is_some())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn Select(
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let select_id = format!("field-{}", name);
    let error = Signal::derive(move || error.get());
    let placeholder_text = Signal::derive(move || {
        let text = placeholder.get();
        if text.trim().is_empty() {
            "Select an option".to_string()
        } else {
            text
        }
    });
    view! {
        <div class="mb-4">
            {label.map(|label| view! { <FieldLabel for_id=select_id.clone() label=label required=required/> })}
            <select
                id=select_id.clone()
                name=name
                required=required
                class=move || field_classes(error.get().is_some())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="">{move || placeholder_text.get()}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = option.value == current;
                            view! { <option value=option.value selected=selected>{option.label}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error/>
        </div>
    }
}
