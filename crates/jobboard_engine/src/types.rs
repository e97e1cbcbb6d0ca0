use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::UploadRejection;

/// Raw job record from `GET /api/v1/jobs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub apply_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub status: String,
    /// ISO-8601 timestamp, as sent by the server.
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub apply_url: String,
}

/// Body of `POST /api/v1/applications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub original_name: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub file_url: String,
}

/// Filters parsed by the AI assistant. Absent, `null` and wrongly typed
/// fields are `None` (or `false` for `clear`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantFilters {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub clear: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub what: Option<String>,
    #[serde(default, rename = "where", deserialize_with = "lenient_string")]
    pub location: Option<String>,
    /// Kept as raw JSON: only a list of strings is meaningful.
    #[serde(default)]
    pub skills: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub work_mode: Option<String>,
}

impl AssistantFilters {
    /// The skills list, if the assistant sent a proper array of strings.
    pub fn skill_list(&self) -> Option<Vec<String>> {
        let items = self.skills.as_ref()?.as_array()?;
        items
            .iter()
            .map(|item| item.as_str().map(ToOwned::to_owned))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantAnswer {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub filters: AssistantFilters,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// 0 to 100. Fractional scores are rounded.
    #[serde(deserialize_with = "rounded_score")]
    pub score: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the server answered but reported `success: false`.
    pub fn is_rejection(&self) -> bool {
        matches!(self.kind, FailureKind::Rejected { .. })
    }
}

impl From<UploadRejection> for ApiError {
    fn from(rejection: UploadRejection) -> Self {
        let message = rejection.to_string();
        Self::new(FailureKind::Validation(rejection), message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Network,
    /// Body was not the expected JSON envelope.
    Decode,
    TooLarge { max_bytes: u64 },
    /// Envelope carried `success: false`.
    Rejected { message: Option<String> },
    /// Refused on the client before any request was made.
    Validation(UploadRejection),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::TooLarge { max_bytes } => {
                write!(f, "response too large (max {max_bytes})")
            }
            FailureKind::Rejected { message: Some(message) } => {
                write!(f, "rejected by server ({message})")
            }
            FailureKind::Rejected { message: None } => write!(f, "rejected by server"),
            FailureKind::Validation(_) => write!(f, "rejected before upload"),
        }
    }
}

/// Ids arrive as strings from some backends and numbers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Assistant output is model-generated: anything but `true` is `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Keeps the field only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(ToOwned::to_owned))
}

fn rounded_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?;
    if !score.is_finite() {
        return Err(serde::de::Error::custom("score is not a finite number"));
    }
    Ok(score.round().clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_record_accepts_numeric_ids_and_missing_optionals() {
        let record: JobRecord = serde_json::from_value(json!({
            "id": 42,
            "title": "Rust Developer",
            "company": "Acme",
            "location": "Remote",
            "description": "Systems work",
            "applyUrl": "https://acme.example/apply"
        }))
        .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.job_type, None);
        assert_eq!(record.apply_url, "https://acme.example/apply");
    }

    #[test]
    fn skills_must_be_a_list_of_strings() {
        let filters = |skills| AssistantFilters {
            skills: Some(skills),
            ..AssistantFilters::default()
        };

        assert_eq!(
            filters(json!(["React", "Go"])).skill_list(),
            Some(vec!["React".to_string(), "Go".to_string()])
        );
        assert_eq!(filters(json!("React, Go")).skill_list(), None);
        assert_eq!(filters(json!(["React", 3])).skill_list(), None);
        assert_eq!(filters(json!([])).skill_list(), Some(Vec::new()));
        assert_eq!(AssistantFilters::default().skill_list(), None);
    }

    #[test]
    fn null_filter_fields_are_absent() {
        let answer: AssistantAnswer = serde_json::from_value(json!({
            "reply": "Done",
            "filters": { "what": null, "where": "Pune", "jobType": "contract" }
        }))
        .unwrap();

        assert_eq!(answer.filters.what, None);
        assert_eq!(answer.filters.location.as_deref(), Some("Pune"));
        assert_eq!(answer.filters.job_type.as_deref(), Some("contract"));
        assert!(!answer.filters.clear);
    }

    #[test]
    fn null_clear_merges_the_other_fields() {
        let answer: AssistantAnswer = serde_json::from_value(json!({
            "reply": "ok",
            "filters": { "clear": null, "what": "react", "where": null }
        }))
        .unwrap();

        assert!(!answer.filters.clear);
        assert_eq!(answer.filters.what.as_deref(), Some("react"));
        assert_eq!(answer.filters.location, None);
    }

    #[test]
    fn wrongly_typed_filter_fields_are_dropped() {
        let answer: AssistantAnswer = serde_json::from_value(json!({
            "filters": { "clear": "yes", "what": 3, "jobType": ["contract"], "workMode": "remote" }
        }))
        .unwrap();

        assert!(!answer.filters.clear);
        assert_eq!(answer.filters.what, None);
        assert_eq!(answer.filters.job_type, None);
        assert_eq!(answer.filters.work_mode.as_deref(), Some("remote"));
    }

    #[test]
    fn fractional_match_score_is_rounded() {
        let result: MatchResult =
            serde_json::from_value(json!({ "score": 72.5, "summary": "Close" })).unwrap();
        assert_eq!(result.score, 73);

        let result: MatchResult = serde_json::from_value(json!({ "score": 140 })).unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn job_without_title_still_decodes() {
        let record: JobRecord = serde_json::from_value(json!({ "id": 1, "company": "A" })).unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.title, "");
        assert_eq!(record.company, "A");
    }
}
