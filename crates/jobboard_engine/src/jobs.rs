use reqwest::Method;
use serde::Deserialize;

use crate::{ApiError, BackendClient, JobRecord};

#[async_trait::async_trait]
pub trait JobSearch: Send + Sync {
    /// Runs one search. `query` is an already-encoded query string.
    async fn search(&self, query: &str) -> Result<Vec<JobRecord>, ApiError>;
}

#[derive(Deserialize)]
struct JobsPage {
    #[serde(default)]
    jobs: Option<Vec<JobRecord>>,
}

#[async_trait::async_trait]
impl JobSearch for BackendClient {
    async fn search(&self, query: &str) -> Result<Vec<JobRecord>, ApiError> {
        let url = self.endpoint(&["api", "v1", "jobs"], Some(query))?;
        let page: JobsPage = self.send(self.request(Method::GET, url)).await?;
        Ok(page.jobs.unwrap_or_default())
    }
}
