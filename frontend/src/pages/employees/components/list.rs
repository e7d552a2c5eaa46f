use super::card::EmployeeCard;
use crate::{
    api::Employee,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
};
use leptos::*;

#[component]
pub fn EmployeeList(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] show_stats: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    move || {
        if loading.get() {
            return view! { <LoadingSpinner message="Loading employees..."/> }.into_view();
        }
        let list = employees.get();
        if list.is_empty() {
            return view! {
                <EmptyState
                    icon="👥"
                    title="No employees found"
                    description="Start by adding your first employee to the system."
                />
            }
            .into_view();
        }
        view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" data-testid="employee-grid">
                {list
                    .into_iter()
                    .map(|employee| {
                        view! { <EmployeeCard employee=employee show_stats=show_stats on_delete=on_delete/> }
                    })
                    .collect_view()}
            </div>
        }
        .into_view()
    }
}
