use super::{
    components::{filter::AttendanceFilterPanel, form::AttendanceForm, list::AttendanceList},
    utils::filter_badge_label,
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::{
    api::{AttendanceFilter, MarkAttendance},
    components::{
        common::{Button, ButtonVariant},
        error::ErrorMessage,
        layout::SuccessMessage,
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    create_effect(move |_| spawn_local(vm.refresh()));
    view! { <AttendanceView vm=vm/> }
}

#[component]
fn AttendanceView(vm: AttendanceViewModel) -> impl IntoView {
    let state = vm.state;
    let show_filters = vm.show_filters();
    let filter_count = vm.active_filter_count();
    let show_form = Signal::derive(move || state.with(|s| s.show_form));
    let is_submitting = Signal::derive(move || state.with(|s| s.is_submitting));
    let records = Signal::derive(move || state.with(|s| s.data.clone()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let success = Signal::derive(move || state.with(|s| s.success_message.clone()));
    let error = Signal::derive(move || state.with(|s| s.error_message()));
    let employees = Signal::derive(move || vm.employees.get());
    let employees_loading = Signal::derive(move || vm.employees_loading.get());

    let load_employees = Callback::new(move |_: ()| spawn_local(vm.load_employees()));
    let toggle_filters = move |_| vm.toggle_filters();
    let toggle_form = move |_| vm.toggle_form();

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Attendance Management"</h2>
                    <p class="mt-1 text-sm text-fg-muted">"Track and manage daily employee attendance"</p>
                    <Show when=move || { filter_count.get() > 0 }>
                        <span class="mt-2 inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-info-bg text-status-info-text">
                            {move || filter_badge_label(filter_count.get())}
                        </span>
                    </Show>
                </div>
                <div class="flex gap-3">
                    {move || {
                        let variant = if show_filters.get() {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Outline
                        };
                        view! {
                            <Button variant=variant on:click=toggle_filters>
                                {if show_filters.get() { "Hide Filters" } else { "🔍 Filter" }}
                            </Button>
                        }
                    }}
                    <Button on:click=toggle_form>
                        {move || if show_form.get() { "Cancel" } else { "+ Mark Attendance" }}
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

            <Show when=move || show_filters.get()>
                <AttendanceFilterPanel
                    employees=employees
                    on_apply=Callback::new(move |filter: AttendanceFilter| spawn_local(vm.apply_filter(filter)))
                    on_reset=Callback::new(move |_| spawn_local(vm.reset_filter()))
                    on_mount=load_employees
                />
            </Show>

            <Show when=move || show_form.get()>
                <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"Mark Attendance"</h3>
                    <AttendanceForm
                        employees=employees
                        employees_loading=employees_loading
                        on_submit=Callback::new(move |payload: MarkAttendance| spawn_local(vm.mark(payload)))
                        on_cancel=Callback::new(move |_| vm.close_form())
                        is_submitting=is_submitting
                        on_mount=load_employees
                    />
                </div>
            </Show>

            <AttendanceList records=records loading=loading/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::ApiClient;
    use crate::pages::attendance::repository::AttendanceRepository;
    use crate::test_support::{helpers::attendance_json, ssr::with_local_runtime_async};
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn page_shows_filter_badge_and_records() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(GET).path("/api/v1/attendance");
                then.status(200)
                    .json_body(json!([attendance_json(1, 2, "2024-01-10", "Present")]));
            });
            let vm = AttendanceViewModel::new(AttendanceRepository::new_with_client(Rc::new(
                ApiClient::new_with_base_url(server.url("/api/v1")),
            )));
            vm.apply_filter(AttendanceFilter {
                employee_id: Some(2),
                start_date: Some("2024-01-01".into()),
                end_date: None,
            })
            .await;

            let html = view! { <AttendanceView vm=vm/> }.into_view().render_to_string();
            assert!(html.contains("Attendance Management"));
            assert!(html.contains("2 filter(s) applied"));
            assert!(html.contains("🔍 Filter"));
            assert!(html.contains("+ Mark Attendance"));
            assert!(html.contains("Employee 2"));
            assert!(html.contains("Showing 1 record(s)"));
            runtime.dispose();
        });
    }
}
