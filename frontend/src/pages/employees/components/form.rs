use crate::{
    api::CreateEmployee,
    components::{
        common::{Button, ButtonVariant},
        forms::{Input, Select},
    },
    pages::employees::utils::{department_options, EmployeeField, EmployeeFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeForm(
    on_submit: Callback<CreateEmployee>,
    on_cancel: Callback<()>,
    #[prop(into)] is_submitting: Signal<bool>,
) -> impl IntoView {
    let form = EmployeeFormState::new();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(payload) = form.submit() {
            on_submit.call(payload);
        }
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=handle_submit>
            <Input
                name="employee_id"
                label="Employee ID"
                placeholder="e.g., EMP001"
                required=true
                value=form.value(EmployeeField::EmployeeId)
                on_input=form.setter(EmployeeField::EmployeeId)
                error=form.error(EmployeeField::EmployeeId)
                disabled=is_submitting
            />
            <Input
                name="full_name"
                label="Full Name"
                placeholder="e.g., John Doe"
                required=true
                value=form.value(EmployeeField::FullName)
                on_input=form.setter(EmployeeField::FullName)
                error=form.error(EmployeeField::FullName)
                disabled=is_submitting
            />
            <Input
                name="email"
                label="Email Address"
                input_type="email"
                placeholder="e.g., john.doe@company.com"
                required=true
                value=form.value(EmployeeField::Email)
                on_input=form.setter(EmployeeField::Email)
                error=form.error(EmployeeField::Email)
                disabled=is_submitting
            />
            <Select
                name="department"
                label="Department"
                placeholder="Select department"
                required=true
                options=department_options()
                value=form.value(EmployeeField::Department)
                on_change=form.setter(EmployeeField::Department)
                error=form.error(EmployeeField::Department)
                disabled=is_submitting
            />
            <div class="flex gap-3 pt-4">
                <Button button_type="submit" full_width=true disabled=is_submitting>
                    {move || if is_submitting.get() { "Adding Employee..." } else { "Add Employee" }}
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
