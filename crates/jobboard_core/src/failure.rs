use std::fmt;

pub(crate) const SERVER_NOT_RESPONDING: &str = "Server not responding!";
const AI_SERVER_NOT_RESPONDING: &str = "AI server not responding!";

/// Why a backend call did not produce a usable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The request failed, timed out, or the body was not a valid envelope.
    Network,
    /// The server answered with `success: false`, optionally with a message.
    Application(Option<String>),
}

/// Which call failed; selects the fallback text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureContext {
    Jobs,
    Applications,
    SaveApplication,
    UpdateStatus,
    DeleteApplication,
    ResumeUpload,
    MatchScore,
}

impl FailureContext {
    fn fallback(self) -> &'static str {
        match self {
            FailureContext::Jobs => "Failed to fetch jobs",
            FailureContext::Applications => "Failed to fetch applications",
            FailureContext::SaveApplication => "Could not save application",
            FailureContext::UpdateStatus => "Failed to update status",
            FailureContext::DeleteApplication => "Failed to delete application",
            FailureContext::ResumeUpload => "Upload failed!",
            FailureContext::MatchScore => "Could not calculate match score",
        }
    }

    fn network(self) -> &'static str {
        match self {
            FailureContext::MatchScore => AI_SERVER_NOT_RESPONDING,
            _ => SERVER_NOT_RESPONDING,
        }
    }
}

impl FetchFailure {
    /// Text shown to the user for this failure.
    pub fn user_message(&self, context: FailureContext) -> String {
        match self {
            FetchFailure::Network => context.network().to_string(),
            FetchFailure::Application(Some(message)) if !message.is_empty() => message.clone(),
            FetchFailure::Application(_) => context.fallback().to_string(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network => write!(f, "network failure"),
            FetchFailure::Application(Some(message)) => write!(f, "rejected: {message}"),
            FetchFailure::Application(None) => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let failure = FetchFailure::Application(Some("Quota exceeded".to_string()));
        assert_eq!(failure.user_message(FailureContext::Jobs), "Quota exceeded");
    }

    #[test]
    fn missing_or_empty_message_uses_context_fallback() {
        assert_eq!(
            FetchFailure::Application(None).user_message(FailureContext::ResumeUpload),
            "Upload failed!"
        );
        assert_eq!(
            FetchFailure::Application(Some(String::new()))
                .user_message(FailureContext::UpdateStatus),
            "Failed to update status"
        );
    }

    #[test]
    fn match_score_has_its_own_network_message() {
        assert_eq!(
            FetchFailure::Network.user_message(FailureContext::MatchScore),
            "AI server not responding!"
        );
        assert_eq!(
            FetchFailure::Network.user_message(FailureContext::Applications),
            "Server not responding!"
        );
    }
}
