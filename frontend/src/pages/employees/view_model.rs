use super::repository::EmployeesRepository;
use crate::{
    api::{ApiClient, CreateEmployee, Employee},
    state::page::{announce_success, PageEvent, PageState},
};
use leptos::*;
use std::rc::Rc;

pub const EMPLOYEE_CREATED_MESSAGE: &str = "Employee added successfully!";
pub const EMPLOYEE_DELETED_MESSAGE: &str = "Employee deleted successfully!";

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub state: RwSignal<PageState<Vec<Employee>>>,
    repository: StoredValue<EmployeesRepository>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    EmployeesViewModel::new(EmployeesRepository::new_with_client(Rc::new(api)))
}

impl EmployeesViewModel {
    pub fn new(repository: EmployeesRepository) -> Self {
        Self {
            state: create_rw_signal(PageState::new(Vec::new())),
            repository: store_value(repository),
        }
    }

    pub fn show_stats(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.show_panel))
    }

    /// Loads the list from whichever endpoint the stats toggle selects.
    /// A reply that arrives after a newer refresh started is dropped.
    pub async fn refresh(self) {
        self.state.update(|s| s.apply(PageEvent::FetchStarted));
        let (generation, with_stats) = self
            .state
            .with_untracked(|s| (s.fetch_generation(), s.show_panel));
        let result = self
            .repository
            .get_value()
            .fetch_employees(with_stats)
            .await;
        self.state
            .update(|s| s.apply(PageEvent::FetchFinished { generation, result }));
    }

    pub async fn create(self, payload: CreateEmployee) {
        self.state.update(|s| s.apply(PageEvent::SubmitStarted));
        match self.repository.get_value().create_employee(payload).await {
            Ok(_) => {
                announce_success(self.state, EMPLOYEE_CREATED_MESSAGE);
                self.refresh().await;
            }
            Err(err) => self.state.update(|s| s.apply(PageEvent::ActionFailed(err))),
        }
    }

    pub async fn delete(self, id: i64) {
        self.state.update(|s| s.apply(PageEvent::ActionStarted));
        match self.repository.get_value().delete_employee(id).await {
            Ok(()) => {
                announce_success(self.state, EMPLOYEE_DELETED_MESSAGE);
                self.refresh().await;
            }
            Err(err) => self.state.update(|s| s.apply(PageEvent::ActionFailed(err))),
        }
    }

    pub async fn toggle_stats(self) {
        self.state.update(|s| s.apply(PageEvent::PanelToggled));
        self.refresh().await;
    }

    pub fn toggle_form(&self) {
        self.state.update(|s| s.apply(PageEvent::FormToggled));
    }

    pub fn close_form(&self) {
        self.state.update(|s| s.apply(PageEvent::FormClosed));
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.apply(PageEvent::ErrorDismissed));
    }
}
