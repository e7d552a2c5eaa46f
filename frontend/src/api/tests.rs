use super::test_support::mock::*;
use super::*;
use crate::test_support::helpers::{attendance_json, employee_json};
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api/v1"))
}

#[tokio::test]
async fn employee_endpoints_round_trip_through_client() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200).json_body(json!([
            employee_json(2, "EMP002", "Bea Lee", "HR"),
            employee_json(1, "EMP001", "Ana Diaz", "Engineering"),
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/with-stats");
        then.status(200).json_body(json!([{
            "id": 1,
            "employee_id": "EMP001",
            "full_name": "Ana Diaz",
            "email": "ana@example.com",
            "department": "Engineering",
            "total_present_days": 4
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/1");
        then.status(200)
            .json_body(employee_json(1, "EMP001", "Ana Diaz", "Engineering"));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/employees/1");
        then.status(204);
    });

    let api = client(&server);

    let employees = api.list_employees().await.unwrap();
    let codes: Vec<_> = employees.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(codes, vec!["EMP002", "EMP001"]);

    let with_stats = api.list_employees_with_stats().await.unwrap();
    assert_eq!(with_stats[0].total_present_days, Some(4));

    let employee = api.get_employee(1).await.unwrap();
    assert_eq!(employee.full_name, "Ana Diaz");

    api.delete_employee(1).await.unwrap();
    assert_eq!(server.hits(DELETE, "/api/v1/employees/1"), 1);
}

#[tokio::test]
async fn create_employee_posts_payload_and_surfaces_detail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/employees");
        then.status(400)
            .json_body(json!({ "detail": "Employee ID 'EMP001' already exists" }));
    });

    let api = client(&server);
    let payload = CreateEmployee {
        employee_id: "EMP001".into(),
        full_name: "Ana Diaz".into(),
        email: "ana@example.com".into(),
        department: Department::Engineering,
    };
    let err = api.create_employee(&payload).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Employee ID 'EMP001' already exists");

    let sent = server.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].body,
        Some(json!({
            "employee_id": "EMP001",
            "full_name": "Ana Diaz",
            "email": "ana@example.com",
            "department": "Engineering"
        }))
    );
}

#[tokio::test]
async fn attendance_list_sends_only_non_empty_filters() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/attendance");
        then.status(200).json_body(json!([attendance_json(
            1,
            3,
            "2024-01-01",
            "Present"
        )]));
    });
    let api = client(&server);

    let records = api
        .list_attendance(&AttendanceFilter::default())
        .await
        .unwrap();
    assert_eq!(records.len(), 1);

    let filter = AttendanceFilter {
        employee_id: Some(3),
        start_date: Some("2024-01-01".into()),
        end_date: Some(String::new()),
    };
    api.list_attendance(&filter).await.unwrap();

    let zero = AttendanceFilter {
        employee_id: Some(0),
        start_date: None,
        end_date: Some("2024-01-31".into()),
    };
    api.list_attendance(&zero).await.unwrap();

    let queries: Vec<_> = server.requests().into_iter().map(|r| r.query).collect();
    assert_eq!(
        queries,
        vec![
            None,
            Some("employee_id=3&start_date=2024-01-01".to_string()),
            Some("end_date=2024-01-31".to_string()),
        ]
    );
}

#[tokio::test]
async fn mark_attendance_and_employee_history() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/attendance");
        then.status(201).json_body(json!({
            "id": 9,
            "employee_id": 3,
            "date": "2024-02-01",
            "status": "Absent"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/attendance/employee/3");
        then.status(200).json_body(json!([
            attendance_json(9, 3, "2024-02-01", "Absent"),
            attendance_json(8, 3, "2024-01-31", "Present"),
        ]));
    });
    let api = client(&server);

    let created = api
        .mark_attendance(&MarkAttendance {
            employee_id: 3,
            date: "2024-02-01".into(),
            status: AttendanceStatus::Absent,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 9);
    assert!(created.employee_name.is_none());
    assert_eq!(
        server.requests()[0].body,
        Some(json!({ "employee_id": 3, "date": "2024-02-01", "status": "Absent" }))
    );

    let history = api.list_employee_attendance(3).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn failures_are_classified_at_the_boundary() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees/404");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/employees");
        then.status(200).json_body(json!({ "unexpected": true }));
    });
    let api = client(&server);

    let not_found = api.get_employee(404).await.unwrap_err();
    assert_eq!(not_found, ApiError::server(404, None));
    assert_eq!(not_found.user_message(), SERVER_ERROR_MESSAGE);

    let decode = api.list_employees().await.unwrap_err();
    assert!(matches!(decode, ApiError::Client { .. }));

    let unrouted = api.list_employee_attendance(1).await.unwrap_err();
    assert!(matches!(unrouted, ApiError::Network { .. }));
    assert_eq!(unrouted.user_message(), NETWORK_ERROR_MESSAGE);
}
