use crate::api::{ApiClient, ApiError, AttendanceFilter, AttendanceRecord, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Employees first, then every attendance record; the first failure wins.
    pub async fn fetch_overview(
        &self,
    ) -> Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError> {
        let employees = self.client.list_employees().await?;
        let records = self
            .client
            .list_attendance(&AttendanceFilter::default())
            .await?;
        Ok((employees, records))
    }
}
