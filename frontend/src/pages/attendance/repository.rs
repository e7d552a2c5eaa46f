use crate::api::{
    ApiClient, ApiError, AttendanceFilter, AttendanceRecord, Employee, MarkAttendance,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.list_attendance(filter).await
    }

    pub async fn mark(&self, payload: MarkAttendance) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(&payload).await
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }
}
