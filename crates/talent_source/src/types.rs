use std::fmt;

use talent_core::{FetchMode, Job, RecordId, RequestId, TalentPage};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
    /// The source understood the request and refused it.
    Rejected,
    /// The background runtime is gone.
    Unavailable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Rejected => write!(f, "rejected"),
            FailureKind::Unavailable => write!(f, "source unavailable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SourceError {
    pub kind: FailureKind,
    pub message: String,
}

impl SourceError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Completion of a request handed to a [`crate::SourceHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    PageFetched {
        request: RequestId,
        mode: FetchMode,
        result: Result<TalentPage, SourceError>,
    },
    Archived {
        record: RecordId,
        result: Result<(), SourceError>,
    },
    JobsFetched(Result<Vec<Job>, SourceError>),
}
