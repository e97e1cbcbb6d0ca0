//! Jobboard engine: HTTP clients for the backend services and effect execution.
mod ai;
mod applications;
mod client;
mod engine;
mod jobs;
mod resumes;
mod types;

pub use ai::{Assistant, MatchScorer};
pub use applications::ApplicationStore;
pub use client::{BackendClient, ClientSettings, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineEvent, EngineHandle, EventSink};
pub use jobs::JobSearch;
pub use resumes::{
    validate_resume, ResumeFile, ResumeStore, UploadRejection, MAX_RESUME_BYTES, PDF_MIME,
};
pub use types::{
    ApiError, ApplicationRecord, AssistantAnswer, AssistantFilters, FailureKind, JobRecord,
    MatchResult, NewApplication, ResumeRecord,
};
