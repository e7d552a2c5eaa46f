use leptos::*;
use leptos_router::use_location;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/employees", "Employees"),
    ("/attendance", "Attendance"),
];

const LINK_CLASS: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors";
const ACTIVE_CLASS: &str = "bg-action-primary-bg text-action-primary-text";
const IDLE_CLASS: &str = "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover";

fn link_class(current: &str, href: &str, block: bool) -> String {
    let state = if current == href {
        ACTIVE_CLASS
    } else {
        IDLE_CLASS
    };
    if block {
        format!("block {} {}", LINK_CLASS, state)
    } else {
        format!("{} {}", LINK_CLASS, state)
    }
}

#[component]
pub fn Navbar(#[prop(into)] current_path: Signal<String>) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <span class="h-8 w-8 rounded-lg bg-action-primary-bg flex items-center justify-center font-bold text-action-primary-text">
                            "HR"
                        </span>
                        <h1 class="text-xl font-semibold text-fg">"HRMS Lite"</h1>
                    </div>
                    <nav class="hidden md:flex items-center space-x-2">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a href=*href class=move || link_class(&current_path.get(), href, false)>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <span class="ml-4 text-sm text-fg-muted">"Admin"</span>
                    </nav>
                    <button
                        type="button"
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class=move || link_class(&current_path.get(), href, true)
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Persistent shell around every routed page. Must be rendered inside a `Router`.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar current_path=current_path/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SpinnerSize {
    fn classes(&self) -> &'static str {
        match self {
            SpinnerSize::Sm => "h-4 w-4",
            SpinnerSize::Md => "h-8 w-8",
            SpinnerSize::Lg => "h-12 w-12",
        }
    }
}

#[component]
pub fn LoadingSpinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional, into)] message: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <div class="flex flex-col justify-center items-center p-8" role="status">
            <div class=format!(
                "animate-spin rounded-full border-b-2 border-action-primary-bg {}",
                size.classes()
            )></div>
            <p class="mt-3 text-sm text-fg-muted">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
                    <div class="flex items-center">
                        <span class="mr-3">"✓"</span>
                        <p class="text-sm font-medium">{text}</p>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_lists_every_page_and_highlights_current() {
        let html = render_to_string(|| {
            view! { <Navbar current_path=Signal::derive(|| "/employees".to_string())/> }
        });
        assert!(html.contains("HRMS Lite"));
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("href=\"/attendance\""));
        assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
    }

    #[test]
    fn link_class_marks_only_exact_match() {
        assert!(link_class("/", "/", false).contains(ACTIVE_CLASS));
        assert!(!link_class("/employees", "/", false).contains(ACTIVE_CLASS));
        assert!(link_class("/attendance", "/attendance", true).starts_with("block"));
    }

    #[test]
    fn spinner_shows_message() {
        let html = render_to_string(|| {
            view! { <LoadingSpinner size=SpinnerSize::Lg message="Loading employees..."/> }
        });
        assert!(html.contains("Loading employees..."));
        assert!(html.contains("h-12 w-12"));

        let html = render_to_string(|| view! { <LoadingSpinner/> });
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn success_message_renders_only_when_set() {
        let html = render_to_string(|| {
            view! { <SuccessMessage message=Signal::derive(|| Some("Employee added successfully!".to_string()))/> }
        });
        assert!(html.contains("Employee added successfully!"));

        let html = render_to_string(|| {
            view! { <SuccessMessage message=Signal::derive(|| None::<String>)/> }
        });
        assert!(!html.contains("bg-status-success-bg"));
    }
}
