use crate::{JobId, Notice, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListViewModel {
    pub rows: Vec<RecordRow>,
    pub draft_search: String,
    pub committed_search: String,
    /// Unknown until the first response for the committed search arrives.
    pub remaining: Option<u64>,
    pub has_more: bool,
    pub selected_count: usize,
    pub all_selected: bool,
    pub loading: bool,
    pub archive: Option<ArchiveDialogView>,
    pub jobs: Vec<JobOption>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: RecordId,
    pub label: String,
    pub detail_url: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDialogView {
    pub target: RecordId,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOption {
    pub id: JobId,
    pub label: String,
}
