use super::{
    components::{form::EmployeeForm, list::EmployeeList},
    view_model::{use_employees_view_model, EmployeesViewModel},
};
use crate::{
    api::CreateEmployee,
    components::{
        common::{Button, ButtonVariant},
        error::ErrorMessage,
        layout::SuccessMessage,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    create_effect(move |_| spawn_local(vm.refresh()));
    view! { <EmployeesView vm=vm/> }
}

#[component]
fn EmployeesView(vm: EmployeesViewModel) -> impl IntoView {
    let state = vm.state;
    let show_stats = vm.show_stats();
    let show_form = Signal::derive(move || state.with(|s| s.show_form));
    let is_submitting = Signal::derive(move || state.with(|s| s.is_submitting));
    let employees = Signal::derive(move || state.with(|s| s.data.clone()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let success = Signal::derive(move || state.with(|s| s.success_message.clone()));
    let error = Signal::derive(move || state.with(|s| s.error_message()));

    let on_submit = Callback::new(move |payload: CreateEmployee| spawn_local(vm.create(payload)));
    let on_delete = Callback::new(move |id: i64| spawn_local(vm.delete(id)));

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Employee Management"</h2>
                    <p class="mt-1 text-sm text-fg-muted">"Manage your organization's employees"</p>
                </div>
                <div class="flex gap-3">
                    {move || {
                        let variant = if show_stats.get() {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Outline
                        };
                        view! {
                            <Button variant=variant on:click=move |_| spawn_local(vm.toggle_stats())>
                                {if show_stats.get() { "Hide Stats" } else { "Show Stats" }}
                            </Button>
                        }
                    }}
                    <Button on:click=move |_| vm.toggle_form()>
                        {move || if show_form.get() { "Cancel" } else { "+ Add Employee" }}
                    </Button>
                </div>
            </div>

            <SuccessMessage message=success/>
            {move || {
                error.get().map(|message| {
                    view! {
                        <ErrorMessage
                            message=message
                            on_retry=Callback::new(move |_| spawn_local(vm.refresh()))
                            on_dismiss=Callback::new(move |_| vm.dismiss_error())
                        />
                    }
                })
            }}

            <Show when=move || show_form.get()>
                <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"Add New Employee"</h3>
                    <EmployeeForm
                        on_submit=on_submit
                        on_cancel=Callback::new(move |_| vm.close_form())
                        is_submitting=is_submitting
                    />
                </div>
            </Show>

            <EmployeeList
                employees=employees
                loading=loading
                show_stats=show_stats
                on_delete=on_delete
            />
        </div>
    }
}
