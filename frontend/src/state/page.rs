use leptos::*;

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error,
}

/// Everything a page renders from: the fetched data, its load status, the
/// banner messages and the UI toggles. Only [`PageState::apply`] changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    pub status: LoadStatus,
    pub data: T,
    pub error: Option<ApiError>,
    pub is_submitting: bool,
    pub show_form: bool,
    /// Page-specific secondary toggle (filters on Attendance, stats on Employees).
    pub show_panel: bool,
    pub success_message: Option<String>,
    success_generation: u64,
    fetch_generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent<T> {
    FetchStarted,
    FetchFinished {
        generation: u64,
        result: Result<T, ApiError>,
    },
    SubmitStarted,
    ActionStarted,
    ActionSucceeded {
        message: String,
    },
    ActionFailed(ApiError),
    SuccessExpired {
        generation: u64,
    },
    ErrorDismissed,
    FormToggled,
    FormClosed,
    PanelToggled,
}

impl<T> PageState<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: LoadStatus::Loading,
            data,
            error: None,
            is_submitting: false,
            show_form: false,
            show_panel: false,
            success_message: None,
            success_generation: 0,
            fetch_generation: 0,
        }
    }

    pub fn fetch_generation(&self) -> u64 {
        self.fetch_generation
    }

    pub fn success_generation(&self) -> u64 {
        self.success_generation
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ApiError::user_message)
    }

    pub fn apply(&mut self, event: PageEvent<T>) {
        match event {
            PageEvent::FetchStarted => {
                self.fetch_generation = self.fetch_generation.wrapping_add(1);
                self.status = LoadStatus::Loading;
                self.error = None;
            }
            PageEvent::FetchFinished { generation, result } => {
                if generation != self.fetch_generation {
                    return;
                }
                match result {
                    Ok(data) => {
                        self.data = data;
                        self.status = LoadStatus::Ready;
                    }
                    Err(err) => {
                        self.error = Some(err);
                        self.status = LoadStatus::Error;
                    }
                }
            }
            PageEvent::SubmitStarted => {
                self.is_submitting = true;
                self.error = None;
            }
            PageEvent::ActionStarted => {
                self.error = None;
            }
            PageEvent::ActionSucceeded { message } => {
                self.is_submitting = false;
                self.show_form = false;
                self.error = None;
                self.success_generation = self.success_generation.wrapping_add(1);
                self.success_message = Some(message);
            }
            PageEvent::ActionFailed(err) => {
                self.is_submitting = false;
                self.error = Some(err);
            }
            PageEvent::SuccessExpired { generation } => {
                if generation == self.success_generation {
                    self.success_message = None;
                }
            }
            PageEvent::ErrorDismissed => {
                self.error = None;
            }
            PageEvent::FormToggled => {
                self.show_form = !self.show_form;
            }
            PageEvent::FormClosed => {
                self.show_form = false;
            }
            PageEvent::PanelToggled => {
                self.show_panel = !self.show_panel;
            }
        }
    }
}

/// Records a successful mutation and arms the banner's self-clear.
pub fn announce_success<T: 'static>(state: RwSignal<PageState<T>>, message: &str) {
    state.update(|s| {
        s.apply(PageEvent::ActionSucceeded {
            message: message.to_string(),
        })
    });
    let generation = state.with_untracked(PageState::success_generation);
    schedule_success_expiry(state, generation);
}

#[cfg(target_arch = "wasm32")]
fn schedule_success_expiry<T: 'static>(state: RwSignal<PageState<T>>, generation: u64) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::config::SUCCESS_BANNER_MS).await;
        state.try_update(|s| s.apply(PageEvent::SuccessExpired { generation }));
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_success_expiry<T: 'static>(_state: RwSignal<PageState<T>>, _generation: u64) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(items: Vec<u32>) -> PageState<Vec<u32>> {
        let mut state = PageState::new(Vec::new());
        state.apply(PageEvent::FetchStarted);
        let generation = state.fetch_generation();
        state.apply(PageEvent::FetchFinished {
            generation,
            result: Ok(items),
        });
        state
    }

    #[test]
    fn fetch_moves_from_loading_to_ready_or_error() {
        let state = ready(vec![1, 2]);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.data, vec![1, 2]);

        let mut failed = ready(vec![7]);
        failed.apply(PageEvent::FetchStarted);
        assert!(failed.is_loading());
        let generation = failed.fetch_generation();
        failed.apply(PageEvent::FetchFinished {
            generation,
            result: Err(ApiError::network("offline")),
        });
        assert_eq!(failed.status, LoadStatus::Error);
        assert_eq!(failed.data, vec![7]);
        assert_eq!(
            failed.error_message().as_deref(),
            Some("Network error. Please check your connection.")
        );
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut state = PageState::new(Vec::<u32>::new());
        state.apply(PageEvent::FetchStarted);
        let first = state.fetch_generation();
        state.apply(PageEvent::FetchStarted);
        let second = state.fetch_generation();

        state.apply(PageEvent::FetchFinished {
            generation: second,
            result: Ok(vec![2]),
        });
        state.apply(PageEvent::FetchFinished {
            generation: first,
            result: Ok(vec![1]),
        });
        assert_eq!(state.data, vec![2]);
        assert_eq!(state.status, LoadStatus::Ready);
    }

    #[test]
    fn earlier_success_timer_does_not_clear_newer_banner() {
        let mut state = ready(vec![]);
        state.apply(PageEvent::ActionSucceeded {
            message: "Employee added successfully!".into(),
        });
        let first = state.success_generation();
        state.apply(PageEvent::ActionSucceeded {
            message: "Employee deleted successfully!".into(),
        });
        let second = state.success_generation();

        state.apply(PageEvent::SuccessExpired { generation: first });
        assert_eq!(
            state.success_message.as_deref(),
            Some("Employee deleted successfully!")
        );
        state.apply(PageEvent::SuccessExpired { generation: second });
        assert!(state.success_message.is_none());
    }

    #[test]
    fn failed_submit_keeps_form_open() {
        let mut state = ready(vec![1]);
        state.apply(PageEvent::FormToggled);
        state.apply(PageEvent::SubmitStarted);
        assert!(state.is_submitting);

        state.apply(PageEvent::ActionFailed(ApiError::client("boom")));
        assert!(state.show_form);
        assert!(!state.is_submitting);
        assert_eq!(state.data, vec![1]);
        assert_eq!(state.error_message().as_deref(), Some("boom"));

        state.apply(PageEvent::SubmitStarted);
        assert!(state.error.is_none());
        state.apply(PageEvent::ActionSucceeded {
            message: "done".into(),
        });
        assert!(!state.show_form);
        assert!(!state.is_submitting);
    }

    #[test]
    fn toggles_are_independent_of_data_state() {
        let mut state = ready(vec![1]);
        state.apply(PageEvent::PanelToggled);
        state.apply(PageEvent::FormToggled);
        assert!(state.show_panel && state.show_form);
        state.apply(PageEvent::FormClosed);
        state.apply(PageEvent::ActionFailed(ApiError::client("x")));
        state.apply(PageEvent::ErrorDismissed);
        assert!(state.show_panel);
        assert!(!state.show_form);
        assert!(state.error.is_none());
        assert_eq!(state.status, LoadStatus::Ready);
    }
}
