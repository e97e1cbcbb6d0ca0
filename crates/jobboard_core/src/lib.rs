//! Jobboard core: pure filter/pagination state machine and view-model helpers.
mod assistant;
mod effect;
mod failure;
mod filters;
mod listing;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use assistant::{AssistantReply, ChatMessage, ChatRole, ASSISTANT_GREETING};
pub use effect::Effect;
pub use failure::{FailureContext, FetchFailure};
pub use filters::{DatePosted, DraftState, FilterPatch, FilterState, JobType, WorkMode};
pub use listing::{ApplicationStatus, JobListing, MatchBand, StatusTab};
pub use msg::{Msg, PageStep};
pub use query::{SearchQuery, DEFAULT_WHAT, DEFAULT_WHERE};
pub use state::{AppState, RequestId, FIRST_PAGE};
pub use update::update;
pub use view_model::AppViewModel;
