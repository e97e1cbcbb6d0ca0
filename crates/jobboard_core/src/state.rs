use std::fmt;

use crate::assistant::{NOT_UNDERSTOOD, REPLY_FALLBACK};
use crate::failure::SERVER_NOT_RESPONDING;
use crate::view_model::AppViewModel;
use crate::{
    AssistantReply, ChatMessage, DraftState, Effect, FailureContext, FetchFailure, FilterPatch,
    FilterState, JobListing, SearchQuery, ASSISTANT_GREETING,
};

pub const FIRST_PAGE: u32 = 1;

/// Identifies one issued job search. Strictly increasing per [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filters: FilterState,
    draft: DraftState,
    page: u32,
    jobs: Vec<JobListing>,
    error: Option<String>,
    last_request: u64,
    /// Latest issued search that has not completed yet.
    pending_search: Option<RequestId>,
    chat: Vec<ChatMessage>,
    assistant_pending: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            draft: DraftState::default(),
            page: FIRST_PAGE,
            jobs: Vec::new(),
            error: None,
            last_request: 0,
            pending_search: None,
            chat: vec![ChatMessage::assistant(ASSISTANT_GREETING)],
            assistant_pending: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            filters: self.filters.clone(),
            draft: self.draft.clone(),
            page: self.page,
            can_go_prev: self.page > FIRST_PAGE,
            loading: self.pending_search.is_some(),
            error: self.error.clone(),
            jobs: self.jobs.clone(),
            chat: self.chat.clone(),
            assistant_pending: self.assistant_pending,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn is_assistant_pending(&self) -> bool {
        self.assistant_pending
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
        self.dirty = true;
        &mut self.filters
    }

    pub(crate) fn draft_mut(&mut self) -> &mut DraftState {
        self.dirty = true;
        &mut self.draft
    }

    /// Copies the draft terms into the applied filters, leaving the rest alone.
    pub(crate) fn commit_draft(&mut self) {
        self.filters.what = self.draft.what.clone();
        self.filters.location = self.draft.location.clone();
        self.dirty = true;
    }

    pub(crate) fn reset_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.dirty = true;
    }

    pub(crate) fn merge_filters(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        self.dirty = true;
    }

    pub(crate) fn reset_page(&mut self) {
        self.page = FIRST_PAGE;
        self.dirty = true;
    }

    pub(crate) fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
        self.dirty = true;
    }

    /// Returns false, leaving the page alone, when already on the first page.
    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page <= FIRST_PAGE {
            return false;
        }
        self.page -= 1;
        self.dirty = true;
        true
    }

    /// Issues a search for the current filters and page. Any earlier search
    /// still in flight becomes stale.
    pub(crate) fn begin_search(&mut self) -> Effect {
        self.last_request += 1;
        let request_id = RequestId(self.last_request);
        self.pending_search = Some(request_id);
        self.error = None;
        self.dirty = true;
        Effect::FetchJobs {
            request_id,
            query: SearchQuery::new(&self.filters, self.page),
        }
    }

    /// Applies a completed search. Returns false when the completion was
    /// stale and therefore ignored.
    pub(crate) fn complete_search(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<JobListing>, FetchFailure>,
    ) -> bool {
        if self.pending_search != Some(request_id) {
            return false;
        }
        self.pending_search = None;
        match result {
            Ok(jobs) => {
                self.jobs = jobs;
                self.error = None;
            }
            Err(failure) => {
                self.error = Some(failure.user_message(FailureContext::Jobs));
            }
        }
        self.dirty = true;
        true
    }

    /// Records a user message for the assistant. Returns the trimmed text to
    /// send, or `None` when there is nothing to send or a reply is pending.
    pub(crate) fn submit_to_assistant(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || self.assistant_pending {
            return None;
        }
        self.chat.push(ChatMessage::user(text));
        self.assistant_pending = true;
        self.dirty = true;
        Some(text.to_string())
    }

    /// Records the assistant's answer. Returns the filter patch to apply
    /// when the answer was successful.
    pub(crate) fn receive_assistant_reply(
        &mut self,
        result: Result<AssistantReply, FetchFailure>,
    ) -> Option<FilterPatch> {
        self.assistant_pending = false;
        self.dirty = true;
        match result {
            Ok(AssistantReply { reply, filters }) => {
                let text = reply
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| REPLY_FALLBACK.to_string());
                self.chat.push(ChatMessage::assistant(text));
                Some(filters)
            }
            Err(FetchFailure::Application(_)) => {
                self.chat.push(ChatMessage::assistant(NOT_UNDERSTOOD));
                None
            }
            Err(FetchFailure::Network) => {
                self.chat.push(ChatMessage::assistant(SERVER_NOT_RESPONDING));
                None
            }
        }
    }
}
