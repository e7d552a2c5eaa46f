#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use serde_json::{json, Value};

    pub fn employee_json(id: i64, code: &str, name: &str, department: &str) -> Value {
        json!({
            "id": id,
            "employee_id": code,
            "full_name": name,
            "email": format!("{}@example.com", code.to_lowercase()),
            "department": department
        })
    }

    pub fn attendance_json(id: i64, employee_id: i64, date: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "date": date,
            "status": status,
            "employee_name": format!("Employee {}", employee_id),
            "employee_code": format!("EMP{:03}", employee_id)
        })
    }

    pub fn employee(id: i64, code: &str, name: &str) -> Employee {
        Employee {
            id,
            employee_id: code.to_string(),
            full_name: name.to_string(),
            email: format!("{}@example.com", code.to_lowercase()),
            department: "Engineering".to_string(),
            total_present_days: None,
        }
    }

    pub fn record(id: i64, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: 1,
            date: date.to_string(),
            status,
            employee_name: Some("Ana Diaz".to_string()),
            employee_code: Some("EMP001".to_string()),
        }
    }
}
