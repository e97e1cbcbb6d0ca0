use url::form_urlencoded;

use crate::FilterState;

/// Substituted for an empty `what` when the query is built.
pub const DEFAULT_WHAT: &str = "developer";
/// Substituted for an empty location when the query is built.
pub const DEFAULT_WHERE: &str = "india";

/// Parameters of one job-search request, derived only from the applied
/// filters and the page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub what: String,
    pub location: String,
    pub page: u32,
    /// Comma-joined skill tags, empty when none are selected.
    pub skills: String,
    pub date_posted: String,
    pub job_type: String,
    pub work_mode: String,
}

impl SearchQuery {
    pub fn new(filters: &FilterState, page: u32) -> Self {
        Self {
            what: non_empty_or(&filters.what, DEFAULT_WHAT),
            location: non_empty_or(&filters.location, DEFAULT_WHERE),
            page,
            skills: filters.skills.join(","),
            date_posted: filters.date_posted.as_str().to_string(),
            job_type: filters.job_type.as_str().to_string(),
            work_mode: filters.work_mode.as_str().to_string(),
        }
    }

    /// Ordered `(name, value)` pairs using the backend's parameter names.
    pub fn pairs(&self) -> [(&'static str, String); 7] {
        [
            ("what", self.what.clone()),
            ("where", self.location.clone()),
            ("page", self.page.to_string()),
            ("skills", self.skills.clone()),
            ("datePosted", self.date_posted.clone()),
            ("jobType", self.job_type.clone()),
            ("workMode", self.work_mode.clone()),
        ]
    }

    /// URL-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
