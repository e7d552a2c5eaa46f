use crate::{
    api::{Employee, MarkAttendance},
    components::{
        common::{Button, ButtonVariant},
        forms::{Input, Select},
    },
    pages::attendance::utils::{
        employee_options, status_options, AttendanceField, AttendanceFormState,
    },
    utils::time::today_string,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AttendanceForm(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] employees_loading: Signal<bool>,
    on_submit: Callback<MarkAttendance>,
    on_cancel: Callback<()>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(optional)] on_mount: Option<Callback<()>>,
) -> impl IntoView {
    let form = AttendanceFormState::new();
    create_effect(move |_| {
        if let Some(on_mount) = on_mount {
            on_mount.call(());
        }
    });
    let options = Signal::derive(move || employees.with(|list| employee_options(list)));
    let employee_placeholder = Signal::derive(move || {
        if employees_loading.get() {
            "Loading employees...".to_string()
        } else {
            "Select employee".to_string()
        }
    });
    let selector_disabled = Signal::derive(move || is_submitting.get() || employees_loading.get());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(payload) = form.submit() {
            on_submit.call(payload);
        }
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=handle_submit>
            <Select
                name="employee_id"
                label="Employee"
                required=true
                placeholder=employee_placeholder
                options=options
                value=form.value(AttendanceField::Employee)
                on_change=form.setter(AttendanceField::Employee)
                error=form.error(AttendanceField::Employee)
                disabled=selector_disabled
            />
            <Input
                name="date"
                label="Date"
                input_type="date"
                required=true
                max=today_string()
                value=form.value(AttendanceField::Date)
                on_input=form.setter(AttendanceField::Date)
                error=form.error(AttendanceField::Date)
                disabled=is_submitting
            />
            <Select
                name="status"
                label="Status"
                required=true
                options=status_options()
                value=form.value(AttendanceField::Status)
                on_change=form.setter(AttendanceField::Status)
                error=form.error(AttendanceField::Status)
                disabled=is_submitting
            />
            <div class="flex gap-3 pt-4">
                <Button button_type="submit" full_width=true disabled=selector_disabled>
                    {move || if is_submitting.get() { "Marking Attendance..." } else { "Mark Attendance" }}
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=is_submitting
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
