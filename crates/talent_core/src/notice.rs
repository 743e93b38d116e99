use std::fmt;

/// Operation a failure notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Append,
    Archive,
    Jobs,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Refresh => write!(f, "refresh"),
            Operation::Append => write!(f, "load more"),
            Operation::Archive => write!(f, "archive"),
            Operation::Jobs => write!(f, "job list"),
        }
    }
}

/// Non-fatal problems caused by what the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputWarning {
    /// Batch preview with nothing selected.
    NoSelection,
    /// Archive submitted while no job is published.
    NoPublishedJobs,
}

/// Transient user-facing message. Never alters list state by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(UserInputWarning),
    FetchFailed { operation: Operation, message: String },
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::Warning(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Warning(UserInputWarning::NoSelection) => write!(f, "nothing selected"),
            Notice::Warning(UserInputWarning::NoPublishedJobs) => {
                write!(f, "no published jobs, cannot archive")
            }
            Notice::FetchFailed { operation, message } => {
                write!(f, "{operation} failed: {message}")
            }
        }
    }
}
