use crate::{
    api::AttendanceRecord,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::attendance::utils::{record_count_label, status_badge},
    utils::time::format_display_date,
};
use leptos::*;

#[component]
fn AttendanceRow(record: AttendanceRecord) -> impl IntoView {
    let (mark, tone) = status_badge(record.status);
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{format_display_date(&record.date)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-fg">
                {record.employee_name.unwrap_or_default()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg-muted">
                {record.employee_code.unwrap_or_default()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!("inline-flex items-center gap-1 px-2.5 py-0.5 rounded-full text-xs font-medium {}", tone)>
                    {mark}" "{record.status.as_str()}
                </span>
            </td>
        </tr>
    }
}

#[component]
pub fn AttendanceList(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    move || {
        if loading.get() {
            return view! { <LoadingSpinner message="Loading attendance records..."/> }.into_view();
        }
        let rows = records.get();
        if rows.is_empty() {
            return view! {
                <EmptyState
                    icon="📋"
                    title="No attendance records found"
                    description="Start by marking attendance for employees."
                />
            }
            .into_view();
        }
        let count = rows.len();
        view! {
            <div class="rounded-lg bg-surface-elevated border border-border shadow-sm overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border" data-testid="attendance-table">
                        <thead class="bg-surface-muted">
                            <tr>
                                {["Date", "Employee", "Employee ID", "Status"]
                                    .into_iter()
                                    .map(|heading| view! {
                                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                            {heading}
                                        </th>
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rows
                                .into_iter()
                                .map(|record| view! { <AttendanceRow record=record/> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <div class="px-6 py-3 bg-surface-muted border-t border-border text-sm text-fg-muted">
                    {record_count_label(count)}
                </div>
            </div>
        }
        .into_view()
    }
}
