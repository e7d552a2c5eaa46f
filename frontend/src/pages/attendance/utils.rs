use crate::{
    api::{AttendanceFilter, AttendanceStatus, Employee, MarkAttendance},
    components::forms::SelectOption,
    utils::{time::today_string, validation::FieldErrors},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendanceField {
    Employee,
    Date,
    Status,
}

impl AttendanceField {
    pub fn key(&self) -> &'static str {
        match self {
            AttendanceField::Employee => "employee_id",
            AttendanceField::Date => "date",
            AttendanceField::Status => "status",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceFormInput {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

fn selected_employee(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id != 0)
}

pub fn validate_attendance_form(
    input: &AttendanceFormInput,
) -> Result<MarkAttendance, FieldErrors> {
    let mut errors = FieldErrors::new();

    let employee_id = selected_employee(&input.employee_id);
    if employee_id.is_none() {
        errors.insert(AttendanceField::Employee.key(), "Please select an employee");
    }
    if input.date.trim().is_empty() {
        errors.insert(AttendanceField::Date.key(), "Date is required");
    }
    let status = AttendanceStatus::parse(&input.status);
    if status.is_none() {
        errors.insert(AttendanceField::Status.key(), "Status is required");
    }

    match (employee_id, status) {
        (Some(employee_id), Some(status)) if errors.is_empty() => Ok(MarkAttendance {
            employee_id,
            date: input.date.clone(),
            status,
        }),
        _ => Err(errors),
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    employee_id: RwSignal<String>,
    date: RwSignal<String>,
    status: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceFormState {
    /// Starts on today's date with the status preset to Present.
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(today_string()),
            status: create_rw_signal(AttendanceStatus::default().as_str().to_string()),
            errors: create_rw_signal(FieldErrors::new()),
        }
    }

    fn signal(&self, field: AttendanceField) -> RwSignal<String> {
        match field {
            AttendanceField::Employee => self.employee_id,
            AttendanceField::Date => self.date,
            AttendanceField::Status => self.status,
        }
    }

    pub fn value(&self, field: AttendanceField) -> Signal<String> {
        self.signal(field).into()
    }

    pub fn error(&self, field: AttendanceField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field.key()).map(str::to_string)))
    }

    pub fn set_field(&self, field: AttendanceField, value: String) {
        self.signal(field).set(value);
        if self.errors.with_untracked(|e| e.get(field.key()).is_some()) {
            self.errors.update(|e| {
                e.clear(field.key());
            });
        }
    }

    pub fn setter(&self, field: AttendanceField) -> Callback<String> {
        let form = *self;
        Callback::new(move |value: String| form.set_field(field, value))
    }

    pub fn input(&self) -> AttendanceFormInput {
        AttendanceFormInput {
            employee_id: self.employee_id.get_untracked(),
            date: self.date.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn submit(&self) -> Option<MarkAttendance> {
        match validate_attendance_form(&self.input()) {
            Ok(payload) => {
                self.errors.set(FieldErrors::new());
                Some(payload)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }
}

/// Draft values of the filter panel before they are applied.
#[derive(Clone, Copy)]
pub struct FilterDraft {
    pub employee_id: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl Default for FilterDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDraft {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
        }
    }

    pub fn has_values(&self) -> bool {
        !(self.employee_id.get().is_empty()
            && self.start_date.get().is_empty()
            && self.end_date.get().is_empty())
    }

    pub fn to_filter(&self) -> AttendanceFilter {
        build_filter(
            &self.employee_id.get_untracked(),
            &self.start_date.get_untracked(),
            &self.end_date.get_untracked(),
        )
    }

    pub fn clear(&self) {
        self.employee_id.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
    }
}

pub fn build_filter(employee_id: &str, start_date: &str, end_date: &str) -> AttendanceFilter {
    let text = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
    AttendanceFilter {
        employee_id: selected_employee(employee_id),
        start_date: text(start_date),
        end_date: text(end_date),
    }
}

pub fn employee_options(employees: &[Employee]) -> Vec<SelectOption> {
    employees
        .iter()
        .map(|e| {
            SelectOption::new(
                e.id.to_string(),
                format!("{} ({})", e.full_name, e.employee_id),
            )
        })
        .collect()
}

pub fn status_options() -> Vec<SelectOption> {
    AttendanceStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.as_str()))
        .collect()
}

pub fn status_badge(status: AttendanceStatus) -> (&'static str, &'static str) {
    match status {
        AttendanceStatus::Present => ("✓", "bg-status-success-bg text-status-success-text"),
        AttendanceStatus::Absent => ("✗", "bg-status-error-bg text-status-error-text"),
    }
}

pub fn filter_badge_label(active: usize) -> String {
    format!("{} filter(s) applied", active)
}

pub fn record_count_label(count: usize) -> String {
    format!("Showing {} record(s)", count)
}
