use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Declares a filter enum whose variants map to fixed wire strings, with an
/// `Other` variant that keeps unrecognised values verbatim.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A value outside the known set, forwarded to the server as-is.
            Other(String),
        }

        impl $name {
            /// Every known variant, in sidebar order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Ok(match raw {
                    $($wire => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                })
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw.parse() {
                    Ok(value) => value,
                    Err(never) => match never {},
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Age limit on listings.
    DatePosted {
        Anytime => "anytime",
        Last24h => "24h",
        Week => "week",
        Month => "month",
    }
}

wire_enum! {
    JobType {
        All => "all",
        FullTime => "full-time",
        PartTime => "part-time",
        Contract => "contract",
        Internship => "internship",
    }
}

wire_enum! {
    WorkMode {
        All => "all",
        Remote => "remote",
        Hybrid => "hybrid",
        Onsite => "onsite",
    }
}

impl Default for DatePosted {
    fn default() -> Self {
        DatePosted::Anytime
    }
}

impl Default for JobType {
    fn default() -> Self {
        JobType::All
    }
}

impl Default for WorkMode {
    fn default() -> Self {
        WorkMode::All
    }
}

/// The applied filters: the only input (with the page) of the remote query.
///
/// `Default` is the mount-time state, with empty `what`/`location`. The
/// sidebar "Clear" button resets to [`FilterState::sidebar_baseline`]
/// instead, which carries explicit terms. The two are intentionally kept
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Role or title fragment. Empty means "let the server pick".
    pub what: String,
    /// Location fragment, sent as the `where` parameter.
    pub location: String,
    /// Selected skill tags in selection order, no duplicates.
    pub skills: Vec<String>,
    pub date_posted: DatePosted,
    pub job_type: JobType,
    pub work_mode: WorkMode,
}

impl FilterState {
    /// State after the sidebar "Clear" button.
    pub fn sidebar_baseline() -> Self {
        Self {
            what: "developer".to_string(),
            location: "india".to_string(),
            ..Self::default()
        }
    }

    /// Removes `skill` if selected, otherwise appends it. Remaining skills
    /// keep their relative order.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Shallow merge of a partial update. A patch with `clear` set resets to
    /// the mount-time defaults and ignores every other field.
    pub fn merge(&mut self, patch: FilterPatch) {
        if patch.clear {
            *self = Self::default();
            return;
        }
        if let Some(what) = patch.what {
            self.what = what;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(date_posted) = patch.date_posted {
            self.date_posted = date_posted;
        }
        if let Some(job_type) = patch.job_type {
            self.job_type = job_type;
        }
        if let Some(work_mode) = patch.work_mode {
            self.work_mode = work_mode;
        }
    }
}

/// Hero search box contents. Only reaches [`FilterState`] through a commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    pub what: String,
    pub location: String,
}

/// Partial filter update coming from outside the sidebar (the AI assistant).
///
/// `None` fields leave the current value alone. `skills` is only `Some` when
/// the source carried a proper list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub clear: bool,
    pub what: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub date_posted: Option<DatePosted>,
    pub job_type: Option<JobType>,
    pub work_mode: Option<WorkMode>,
}

impl FilterPatch {
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }
}
