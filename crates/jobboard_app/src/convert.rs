//! Engine wire types to core types.

use jobboard_core::{
    AssistantReply, DatePosted, FailureContext, FetchFailure, FilterPatch, JobListing, JobType,
    WorkMode,
};
use jobboard_engine::{ApiError, AssistantAnswer, FailureKind, JobRecord};

pub fn job_listing(record: JobRecord) -> JobListing {
    JobListing {
        id: record.id,
        title: record.title,
        company: record.company,
        location: record.location,
        description: record.description,
        job_type: record.job_type,
        posted: record.posted,
        apply_url: record.apply_url,
    }
}

/// Only a `success: false` envelope counts as an application failure; every
/// transport, timeout or decode problem reads as "server not responding".
pub fn fetch_failure(err: &ApiError) -> FetchFailure {
    match &err.kind {
        FailureKind::Rejected { message } => FetchFailure::Application(message.clone()),
        FailureKind::Validation(rejection) => FetchFailure::Application(Some(rejection.to_string())),
        FailureKind::InvalidUrl
        | FailureKind::Timeout
        | FailureKind::Network
        | FailureKind::Decode
        | FailureKind::TooLarge { .. } => FetchFailure::Network,
    }
}

pub fn failure_text(err: &ApiError, context: FailureContext) -> String {
    fetch_failure(err).user_message(context)
}

pub fn jobs_result(
    result: Result<Vec<JobRecord>, ApiError>,
) -> Result<Vec<JobListing>, FetchFailure> {
    result
        .map(|records| records.into_iter().map(job_listing).collect())
        .map_err(|err| fetch_failure(&err))
}

pub fn assistant_reply(answer: AssistantAnswer) -> AssistantReply {
    let skills = answer.filters.skill_list();
    let filters = answer.filters;
    AssistantReply {
        reply: answer.reply,
        filters: FilterPatch {
            clear: filters.clear,
            what: filters.what,
            location: filters.location,
            skills,
            date_posted: filters.date_posted.as_deref().map(DatePosted::from),
            job_type: filters.job_type.as_deref().map(JobType::from),
            work_mode: filters.work_mode.as_deref().map(WorkMode::from),
        },
    }
}
