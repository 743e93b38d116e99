use crate::{JobId, Notice, RecordId, RequestId};

/// Whether a page response replaces the list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Refresh,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request one page of the talent search.
    FetchPage {
        request: RequestId,
        mode: FetchMode,
        page: u32,
        keyword: String,
    },
    /// Archive `record` under `job`.
    Archive { record: RecordId, job: JobId },
    /// Fetch the published job list.
    LoadJobs,
    /// Open a detail page in a new viewing context.
    OpenDetail { url: String },
    /// Show a transient notice.
    Notify(Notice),
}
