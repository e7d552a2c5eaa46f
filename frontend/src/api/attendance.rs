use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{AttendanceFilter, AttendanceRecord, MarkAttendance},
};

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let request = self.request(Method::POST, "/attendance").await.json(payload);
        self.send_json(request).await
    }

    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut request = self.request(Method::GET, "/attendance").await;
        let params = filter.query_pairs();
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn list_employee_attendance(
        &self,
        employee_id: i64,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let request = self
            .request(Method::GET, &format!("/attendance/employee/{}", employee_id))
            .await;
        self.send_json(request).await
    }
}
