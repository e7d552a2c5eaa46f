use crate::{
    api::{AttendanceFilter, Employee},
    components::{
        common::{Button, ButtonSize, ButtonVariant},
        forms::{Input, Select},
    },
    pages::attendance::utils::{employee_options, FilterDraft},
};
use leptos::*;

#[component]
pub fn AttendanceFilterPanel(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_apply: Callback<AttendanceFilter>,
    on_reset: Callback<()>,
    /// Fired once when the panel mounts so the selector can load employees.
    #[prop(optional)]
    on_mount: Option<Callback<()>>,
) -> impl IntoView {
    let draft = FilterDraft::new();
    create_effect(move |_| {
        if let Some(on_mount) = on_mount {
            on_mount.call(());
        }
    });
    let options = Signal::derive(move || employees.with(|list| employee_options(list)));
    let set = |signal: RwSignal<String>| Callback::new(move |value: String| signal.set(value));

    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6">
            <h3 class="text-lg font-semibold text-fg mb-4">"Filter Attendance"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Select
                    name="filter_employee_id"
                    label="Employee"
                    placeholder="All employees"
                    options=options
                    value=draft.employee_id
                    on_change=set(draft.employee_id)
                />
                <Input
                    name="start_date"
                    label="Start Date"
                    input_type="date"
                    value=draft.start_date
                    on_input=set(draft.start_date)
                />
                <Input
                    name="end_date"
                    label="End Date"
                    input_type="date"
                    value=draft.end_date
                    on_input=set(draft.end_date)
                />
            </div>
            <div class="flex gap-3 mt-4">
                <Button size=ButtonSize::Sm on:click=move |_| on_apply.call(draft.to_filter())>
                    "Apply Filters"
                </Button>
                <Show when=move || draft.has_values()>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Sm
                        on:click=move |_| {
                            draft.clear();
                            on_reset.call(());
                        }
                    >
                        "Reset"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
