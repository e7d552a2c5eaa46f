use crate::api::{ApiClient, ApiError, CreateEmployee, Employee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self, with_stats: bool) -> Result<Vec<Employee>, ApiError> {
        if with_stats {
            self.client.list_employees_with_stats().await
        } else {
            self.client.list_employees().await
        }
    }

    pub async fn create_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }
}
