use super::repository::AttendanceRepository;
use crate::{
    api::{ApiClient, AttendanceFilter, AttendanceRecord, Employee, MarkAttendance},
    state::page::{announce_success, PageEvent, PageState},
};
use leptos::*;
use std::rc::Rc;

pub const ATTENDANCE_MARKED_MESSAGE: &str = "Attendance marked successfully!";

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: RwSignal<PageState<Vec<AttendanceRecord>>>,
    pub active_filter: RwSignal<AttendanceFilter>,
    pub employees: RwSignal<Vec<Employee>>,
    pub employees_loading: RwSignal<bool>,
    repository: StoredValue<AttendanceRepository>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AttendanceViewModel::new(AttendanceRepository::new_with_client(Rc::new(api)))
}

impl AttendanceViewModel {
    pub fn new(repository: AttendanceRepository) -> Self {
        Self {
            state: create_rw_signal(PageState::new(Vec::new())),
            active_filter: create_rw_signal(AttendanceFilter::default()),
            employees: create_rw_signal(Vec::new()),
            employees_loading: create_rw_signal(false),
            repository: store_value(repository),
        }
    }

    pub fn show_filters(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.show_panel))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let filter = self.active_filter;
        Signal::derive(move || filter.with(AttendanceFilter::active_count))
    }

    /// Re-fetches with whatever filter is currently applied.
    pub async fn refresh(self) {
        self.state.update(|s| s.apply(PageEvent::FetchStarted));
        let generation = self.state.with_untracked(PageState::fetch_generation);
        let filter = self.active_filter.get_untracked();
        let result = self.repository.get_value().fetch_records(&filter).await;
        self.state
            .update(|s| s.apply(PageEvent::FetchFinished { generation, result }));
    }

    pub async fn apply_filter(self, filter: AttendanceFilter) {
        self.active_filter.set(filter);
        self.refresh().await;
    }

    pub async fn reset_filter(self) {
        self.active_filter.set(AttendanceFilter::default());
        self.refresh().await;
    }

    pub async fn mark(self, payload: MarkAttendance) {
        self.state.update(|s| s.apply(PageEvent::SubmitStarted));
        match self.repository.get_value().mark(payload).await {
            Ok(_) => {
                announce_success(self.state, ATTENDANCE_MARKED_MESSAGE);
                self.refresh().await;
            }
            Err(err) => self.state.update(|s| s.apply(PageEvent::ActionFailed(err))),
        }
    }

    /// Populates the employee selectors. A failure is logged and leaves
    /// the selectors empty; it never reaches the page banner.
    pub async fn load_employees(self) {
        self.employees_loading.set(true);
        match self.repository.get_value().fetch_employees().await {
            Ok(list) => self.employees.set(list),
            Err(err) => log::error!("Failed to fetch employees: {}", err),
        }
        self.employees_loading.set(false);
    }

    pub fn toggle_filters(&self) {
        self.state.update(|s| s.apply(PageEvent::PanelToggled));
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
