use crate::{ChatMessage, DraftState, FilterState, JobListing};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub filters: FilterState,
    pub draft: DraftState,
    pub page: u32,
    pub can_go_prev: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub jobs: Vec<JobListing>,
    pub chat: Vec<ChatMessage>,
    pub assistant_pending: bool,
}

impl AppViewModel {
    /// The list is shown only when nothing is loading and there is no error.
    pub fn shows_results(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}
