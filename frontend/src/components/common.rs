use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-action-secondary-bg hover:bg-action-secondary-bg-hover text-action-secondary-text",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
            ButtonVariant::Outline => "border-2 border-action-primary-bg text-action-primary-bg hover:bg-action-primary-bg hover:text-action-primary-text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-6 py-3 text-base",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let width = if full_width { "w-full" } else { "" };
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {} {} {}",
                    variant.classes(),
                    size.classes(),
                    width,
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
