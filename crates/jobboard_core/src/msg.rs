use crate::{
    AssistantReply, DatePosted, FetchFailure, FilterPatch, JobListing, JobType, RequestId,
    WorkMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View became visible: load page 1 with the current filters.
    Mounted,
    /// User typed into the hero role box.
    DraftWhatChanged(String),
    /// User typed into the hero location box.
    DraftWhereChanged(String),
    /// Hero "Find Jobs": commit the draft and search from page 1.
    CommitSearch,
    /// Sidebar role field edit.
    SetWhat(String),
    /// Sidebar location field edit.
    SetWhere(String),
    SetDatePosted(DatePosted),
    SetJobType(JobType),
    SetWorkMode(WorkMode),
    /// Sidebar skill chip click.
    ToggleSkill(String),
    /// Sidebar "Apply".
    ApplyFilters,
    /// Sidebar "Clear".
    ClearFilters,
    /// Partial filter update from outside the sidebar.
    ExternalMerge(FilterPatch),
    /// Pagination buttons.
    PageDelta(PageStep),
    /// A job search finished.
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<JobListing>, FetchFailure>,
    },
    /// User sent a message to the AI assistant.
    AssistantSubmitted(String),
    /// The AI assistant answered.
    AssistantReplied(Result<AssistantReply, FetchFailure>),
}
