use crate::{FetchMode, Job, JobId, RecordId, RequestId, TalentPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Screen shown for the first time; loads the job list.
    Started,
    /// User edited the search box.
    DraftSearchChanged(String),
    /// User submitted the search box (enter, search button or blur).
    SearchCommitted(String),
    /// User clicked the clear button next to the search box.
    SearchCleared,
    /// User asked for the next page.
    LoadMoreRequested,
    /// User ticked or unticked a single record.
    SelectionToggled { id: RecordId, selected: bool },
    /// User ticked or unticked the select-all box.
    SelectAllToggled(bool),
    /// User clicked batch preview.
    PreviewRequested,
    /// User opened the archive dialog on a record.
    ArchiveOpened(RecordId),
    /// User dismissed the archive dialog.
    ArchiveCancelled,
    /// User confirmed the archive dialog with a job.
    ArchiveSubmitted(JobId),
    /// Talent source answered a page request.
    PageLoaded {
        request: RequestId,
        mode: FetchMode,
        result: Result<TalentPage, String>,
    },
    /// Talent source answered an archive request.
    ArchiveFinished {
        record: RecordId,
        result: Result<(), String>,
    },
    /// Job source answered.
    JobsLoaded(Result<Vec<Job>, String>),
    /// User closed the current notice.
    NoticeDismissed,
}
