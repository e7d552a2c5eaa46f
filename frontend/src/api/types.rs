use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    /// Only returned by the with-stats listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_present_days: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    #[serde(rename = "HR")]
    Hr,
    Marketing,
    Sales,
    Finance,
    Operations,
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Engineering,
        Department::Hr,
        Department::Marketing,
        Department::Sales,
        Department::Finance,
        Department::Operations,
        Department::It,
        Department::CustomerSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Hr => "HR",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::It => "IT",
            Department::CustomerSupport => "Customer Support",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    /// Kept as the backend's string so "today" comparisons match it verbatim.
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub employee_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
}

/// Optional narrowing of the attendance listing. Unset or empty fields are
/// left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AttendanceFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        // 0 is indistinguishable from "no employee" and is dropped like an empty value.
        if let Some(id) = self.employee_id.filter(|id| *id != 0) {
            pairs.push(("employee_id", id.to_string()));
        }
        if let Some(start) = non_empty(&self.start_date) {
            pairs.push(("start_date", start.to_string()));
        }
        if let Some(end) = non_empty(&self.end_date) {
            pairs.push(("end_date", end.to_string()));
        }
        pairs
    }

    pub fn active_count(&self) -> usize {
        self.query_pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_without_stats_deserializes() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "department": "Engineering"
        }))
        .unwrap();
        assert_eq!(employee.total_present_days, None);

        let with_stats: Employee = serde_json::from_value(json!({
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "department": "Engineering",
            "total_present_days": 12
        }))
        .unwrap();
        assert_eq!(with_stats.total_present_days, Some(12));
    }

    #[test]
    fn department_serializes_display_names() {
        let payload = CreateEmployee {
            employee_id: "EMP002".into(),
            full_name: "John Roe".into(),
            email: "john@example.com".into(),
            department: Department::CustomerSupport,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["department"], "Customer Support");
        assert_eq!(Department::parse("IT"), Some(Department::It));
        assert_eq!(Department::parse(""), None);
        assert_eq!(Department::parse("hr"), None);
    }

    #[test]
    fn attendance_record_tolerates_missing_display_fields() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 5,
            "employee_id": 1,
            "date": "2024-01-01",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert!(record.employee_name.is_none());
        assert!(record.employee_code.is_none());
    }

    #[test]
    fn filter_omits_empty_and_zero_values() {
        let filter = AttendanceFilter {
            employee_id: Some(0),
            start_date: Some(String::new()),
            end_date: None,
        };
        assert!(filter.query_pairs().is_empty());
        assert!(filter.is_empty());

        let filter = AttendanceFilter {
            employee_id: Some(3),
            start_date: Some("2024-01-01".into()),
            end_date: Some(String::new()),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("employee_id", "3".to_string()),
                ("start_date", "2024-01-01".to_string())
            ]
        );
        assert_eq!(filter.active_count(), 2);
    }
}
