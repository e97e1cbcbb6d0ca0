use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{ApiError, ApplicationRecord, BackendClient, NewApplication};

const APPLICATIONS: &[&str] = &["api", "v1", "applications"];

/// Saved applications and their status lifecycle.
#[async_trait::async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ApplicationRecord>, ApiError>;
    async fn save(&self, application: &NewApplication) -> Result<(), ApiError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError>;
    async fn remove(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct ApplicationList {
    #[serde(default)]
    applications: Option<Vec<ApplicationRecord>>,
}

/// Success envelope with nothing else of interest.
#[derive(Deserialize)]
struct Ack {}

#[derive(Serialize)]
struct StatusChange<'a> {
    status: &'a str,
}

#[async_trait::async_trait]
impl ApplicationStore for BackendClient {
    async fn list(&self) -> Result<Vec<ApplicationRecord>, ApiError> {
        let url = self.endpoint(APPLICATIONS, None)?;
        let list: ApplicationList = self.send(self.request(Method::GET, url)).await?;
        Ok(list.applications.unwrap_or_default())
    }

    async fn save(&self, application: &NewApplication) -> Result<(), ApiError> {
        let url = self.endpoint(APPLICATIONS, None)?;
        let request = Self::with_json(self.request(Method::POST, url), application)?;
        let Ack {} = self.send(request).await?;
        Ok(())
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "v1", "applications", id, "status"], None)?;
        let request = Self::with_json(self.request(Method::PATCH, url), &StatusChange { status })?;
        let Ack {} = self.send(request).await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "v1", "applications", id], None)?;
        let Ack {} = self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
