use crate::{RequestId, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJobs {
        request_id: RequestId,
        query: SearchQuery,
    },
    AskAssistant {
        message: String,
    },
}
