use crate::{
    api::{CreateEmployee, Department},
    components::forms::SelectOption,
    utils::validation::{is_valid_email, FieldErrors},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }
}

/// Raw, unvalidated values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFormInput {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

pub fn validate_employee_form(input: &EmployeeFormInput) -> Result<CreateEmployee, FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.employee_id.trim().is_empty() {
        errors.insert(EmployeeField::EmployeeId.key(), "Employee ID is required");
    }
    if input.full_name.trim().is_empty() {
        errors.insert(EmployeeField::FullName.key(), "Full name is required");
    }
    if input.email.trim().is_empty() {
        errors.insert(EmployeeField::Email.key(), "Email is required");
    } else if !is_valid_email(&input.email) {
        errors.insert(EmployeeField::Email.key(), "Invalid email format");
    }
    let department = Department::parse(&input.department);
    if department.is_none() {
        errors.insert(EmployeeField::Department.key(), "Department is required");
    }

    match department {
        Some(department) if errors.is_empty() => Ok(CreateEmployee {
            employee_id: input.employee_id.clone(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            department,
        }),
        _ => Err(errors),
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    employee_id: RwSignal<String>,
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            errors: create_rw_signal(FieldErrors::new()),
        }
    }

    fn signal(&self, field: EmployeeField) -> RwSignal<String> {
        match field {
            EmployeeField::EmployeeId => self.employee_id,
            EmployeeField::FullName => self.full_name,
            EmployeeField::Email => self.email,
            EmployeeField::Department => self.department,
        }
    }

    pub fn value(&self, field: EmployeeField) -> Signal<String> {
        self.signal(field).into()
    }

    pub fn error(&self, field: EmployeeField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field.key()).map(str::to_string)))
    }

    /// Stores an edit and drops that field's pending error.
    pub fn set_field(&self, field: EmployeeField, value: String) {
        self.signal(field).set(value);
        if self.errors.with_untracked(|e| e.get(field.key()).is_some()) {
            self.errors.update(|e| {
                e.clear(field.key());
            });
        }
    }

    pub fn setter(&self, field: EmployeeField) -> Callback<String> {
        let form = *self;
        Callback::new(move |value: String| form.set_field(field, value))
    }

    pub fn input(&self) -> EmployeeFormInput {
        EmployeeFormInput {
            employee_id: self.employee_id.get_untracked(),
            full_name: self.full_name.get_untracked(),
            email: self.email.get_untracked(),
            department: self.department.get_untracked(),
        }
    }

    /// Validates the current values. On failure the field errors are shown
    /// and nothing is returned.
    pub fn submit(&self) -> Option<CreateEmployee> {
        match validate_employee_form(&self.input()) {
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

pub fn department_options() -> Vec<SelectOption> {
    Department::ALL
        .iter()
        .map(|d| SelectOption::new(d.as_str(), d.as_str()))
        .collect()
}

pub fn avatar_initial(full_name: &str) -> String {
    full_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
