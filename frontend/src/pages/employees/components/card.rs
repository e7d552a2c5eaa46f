use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        confirm_dialog::ConfirmDialog,
    },
    pages::employees::utils::avatar_initial,
};
use leptos::*;

#[component]
pub fn EmployeeCard(
    employee: Employee,
    #[prop(into)] show_stats: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let confirm_open = create_rw_signal(false);
    let id = employee.id;
    let present_days = employee.total_present_days;
    let confirm_message = format!("Are you sure you want to delete {}?", employee.full_name);

    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6 hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-3">
                        <div class="w-12 h-12 rounded-full bg-surface-muted flex items-center justify-center">
                            <span class="text-xl font-semibold text-action-primary-bg">
                                {avatar_initial(&employee.full_name)}
                            </span>
                        </div>
                        <div>
                            <h3 class="text-lg font-semibold text-fg">{employee.full_name.clone()}</h3>
                            <p class="text-sm text-fg-muted">{employee.employee_id.clone()}</p>
                        </div>
                    </div>
                    <div class="space-y-2 text-sm">
                        <div class="flex items-center gap-2">
                            <span class="text-fg-muted">"📧"</span>
                            <span class="text-fg">{employee.email.clone()}</span>
                        </div>
                        <div class="flex items-center gap-2">
                            <span class="text-fg-muted">"🏢"</span>
                            <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-info-bg text-status-info-text">
                                {employee.department.clone()}
                            </span>
                        </div>
                        {move || {
                            present_days
                                .filter(|_| show_stats.get())
                                .map(|days| view! {
                                    <div class="flex items-center gap-2 mt-3 pt-3 border-t border-border">
                                        <span class="text-fg-muted">"📊"</span>
                                        <span class="text-fg font-medium">{format!("Present Days: {}", days)}</span>
                                    </div>
                                })
                        }}
                    </div>
                </div>
                <Button
                    variant=ButtonVariant::Danger
                    size=ButtonSize::Sm
                    on:click=move |_| confirm_open.set(true)
                >
                    "Delete"
                </Button>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || confirm_open.get())
                title="Delete employee"
                message=confirm_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| {
                    confirm_open.set(false);
                    on_delete.call(id);
                })
                on_cancel=Callback::new(move |_| confirm_open.set(false))
            />
        </div>
    }
}
