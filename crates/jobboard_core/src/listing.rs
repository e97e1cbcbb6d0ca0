use std::fmt;
use std::str::FromStr;

/// One job record as returned by the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: Option<String>,
    /// Human label such as "2 days ago".
    pub posted: Option<String>,
    pub apply_url: String,
}

impl JobListing {
    pub fn job_type_label(&self) -> &str {
        non_empty(self.job_type.as_deref()).unwrap_or("Full-time")
    }

    pub fn posted_label(&self) -> &str {
        non_empty(self.posted.as_deref()).unwrap_or("Recently")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Lifecycle of a saved application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    /// Case-insensitive, so the command line can take `interview`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| {
                format!("unknown status '{raw}' (expected Applied, Interview, Offer or Rejected)")
            })
    }
}

/// Tab selection on the applications list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusTab {
    /// Whether an application whose status string is `status` belongs in this tab.
    /// Statuses the client does not know only show under `All`.
    pub fn matches(self, status: &str) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Only(wanted) => wanted.as_str() == status,
        }
    }
}

impl FromStr for StatusTab {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusTab::All);
        }
        raw.parse().map(StatusTab::Only)
    }
}

/// Coarse rating of a resume/job match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchBand {
    Strong,
    Fair,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => MatchBand::Strong,
            40..=69 => MatchBand::Fair,
            _ => MatchBand::Weak,
        }
    }
}
