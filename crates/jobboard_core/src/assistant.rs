use crate::FilterPatch;

pub const ASSISTANT_GREETING: &str =
    "Hi! Tell me what jobs you want. Example: 'Remote React jobs in Kolkata'";
pub(crate) const REPLY_FALLBACK: &str = "Filters applied.";
pub(crate) const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand that.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Successful assistant answer: optional chat text plus the filters it parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssistantReply {
    pub reply: Option<String>,
    pub filters: FilterPatch,
}
