use reqwest::Method;

use super::{
    client::ApiClient,
    error::ApiError,
    types::{CreateEmployee, Employee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/employees").await;
        self.send_json(request).await
    }

    /// Same listing with `total_present_days` filled in by the backend.
    pub async fn list_employees_with_stats(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.request(Method::GET, "/employees/with-stats").await;
        self.send_json(request).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        let request = self
            .request(Method::GET, &format!("/employees/{}", id))
            .await;
        self.send_json(request).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let request = self.request(Method::POST, "/employees").await.json(payload);
        self.send_json(request).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, &format!("/employees/{}", id))
            .await;
        self.send_empty(request).await
    }
}
