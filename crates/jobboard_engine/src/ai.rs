use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{ApiError, AssistantAnswer, BackendClient, MatchResult};

/// Natural-language filter assistant.
#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    async fn ask(&self, message: &str) -> Result<AssistantAnswer, ApiError>;
}

/// Resume/job compatibility scoring.
#[async_trait::async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, job_title: &str, job_description: &str)
        -> Result<MatchResult, ApiError>;
}

#[derive(Serialize)]
struct AskBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreBody<'a> {
    job_title: &'a str,
    job_description: &'a str,
}

#[derive(Deserialize)]
struct Scored {
    #[serde(rename = "match")]
    result: MatchResult,
}

#[async_trait::async_trait]
impl Assistant for BackendClient {
    async fn ask(&self, message: &str) -> Result<AssistantAnswer, ApiError> {
        let url = self.endpoint(&["api", "v1", "assistant"], None)?;
        let request = Self::with_json(self.request(Method::POST, url), &AskBody { message })?;
        self.send(request).await
    }
}

#[async_trait::async_trait]
impl MatchScorer for BackendClient {
    async fn score(
        &self,
        job_title: &str,
        job_description: &str,
    ) -> Result<MatchResult, ApiError> {
        let url = self.endpoint(&["api", "v1", "match-score"], None)?;
        let body = ScoreBody {
            job_title,
            job_description,
        };
        let request = Self::with_json(self.request(Method::POST, url), &body)?;
        let scored: Scored = self.send(request).await?;
        Ok(scored.result)
    }
}
