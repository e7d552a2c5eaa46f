use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="text-center py-12">
            <h2 class="text-4xl font-bold text-fg">"404"</h2>
            <p class="mt-2 text-fg-muted">"Page not found"</p>
            <a href="/" class="mt-4 inline-block text-action-primary-bg hover:underline">
                "Go back to Dashboard"
            </a>
        </div>
    }
}
