use leptos::*;

const ACTIONS: &[(&str, &str, &str, &str)] = &[
    ("/employees", "👥", "Manage Employees", "Add, view, or delete employees"),
    ("/attendance", "📅", "Mark Attendance", "Record daily attendance"),
    ("/attendance", "📊", "View Reports", "Check attendance records"),
];

#[component]
pub fn QuickActions() -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6">
            <h3 class="text-xl font-semibold text-fg mb-4">"Quick Actions"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {ACTIONS
                    .iter()
                    .map(|(href, icon, title, hint)| view! {
                        <a
                            href=*href
                            class="flex items-center p-4 border-2 border-border rounded-lg hover:border-action-primary-bg hover:bg-surface-muted transition-all"
                        >
                            <span class="text-2xl mr-3">{*icon}</span>
                            <div>
                                <p class="font-medium text-fg">{*title}</p>
                                <p class="text-sm text-fg-muted">{*hint}</p>
                            </div>
                        </a>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
