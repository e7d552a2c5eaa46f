use super::{
    repository::DashboardRepository,
    utils::{compute_dashboard_stats, DashboardStats},
};
use crate::{
    api::ApiClient,
    state::page::{PageEvent, PageState},
    utils::time::today_string,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub state: RwSignal<PageState<DashboardStats>>,
    repository: StoredValue<DashboardRepository>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    DashboardViewModel::new(DashboardRepository::new_with_client(Rc::new(api)))
}

impl DashboardViewModel {
    pub fn new(repository: DashboardRepository) -> Self {
        Self {
            state: create_rw_signal(PageState::new(DashboardStats::default())),
            repository: store_value(repository),
        }
    }

    pub async fn refresh(self) {
        self.refresh_for(today_string()).await;
    }

    pub async fn refresh_for(self, today: String) {
        self.state.update(|s| s.apply(PageEvent::FetchStarted));
        let generation = self.state.with_untracked(PageState::fetch_generation);
        let result = self
            .repository
            .get_value()
            .fetch_overview()
            .await
            .map(|(employees, records)| {
                compute_dashboard_stats(employees.len(), &records, &today)
            });
        if let Err(err) = &result {
            log::error!("Failed to fetch dashboard data: {}", err);
        }
        self.state
            .update(|s| s.apply(PageEvent::FetchFinished { generation, result }));
    }
}
