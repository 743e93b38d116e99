use std::collections::BTreeSet;

use engine_logging::{talent_debug, talent_warn};
use serde::{Deserialize, Serialize};

use crate::record::merge_unique;
use crate::view_model::{ArchiveDialogView, JobOption, ListViewModel, RecordRow};
use crate::{FetchMode, Job, JobId, Notice, Record, RecordId, Selection, TalentPage};

/// Monotonic token attached to every page request.
pub type RequestId = u64;

/// How page responses that arrive out of order are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every response is applied when it arrives, even if a newer request has
    /// been issued since. A slow stale refresh can overwrite fresher records.
    #[default]
    LastResponseWins,
    /// Only the latest refresh, and appends issued after it, are applied.
    LatestRequestWins,
}

/// Archive dialog lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArchiveState {
    #[default]
    Closed,
    Open {
        target: RecordId,
        /// An archive request for `target` is outstanding.
        submitting: bool,
    },
}

impl ArchiveState {
    pub fn is_open(&self) -> bool {
        matches!(self, ArchiveState::Open { .. })
    }

    pub fn target(&self) -> Option<&RecordId> {
        match self {
            ArchiveState::Open { target, .. } => Some(target),
            ArchiveState::Closed => None,
        }
    }
}

/// Search text, page cursor, accumulated records and selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    records: Vec<Record>,
    page: u32,
    draft_search: String,
    committed_search: String,
    selected: Selection,
    remaining: u64,
    /// `remaining` belongs to a previous committed search.
    remaining_stale: bool,
}

impl ListState {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn draft_search(&self) -> &str {
        &self.draft_search
    }

    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Server-reported count of unfetched records, `None` while stale.
    pub fn remaining(&self) -> Option<u64> {
        (!self.remaining_stale).then_some(self.remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    list: ListState,
    archive: ArchiveState,
    jobs: Vec<Job>,
    jobs_loading: bool,
    ordering: ResponseOrdering,
    next_request: RequestId,
    latest_refresh: Option<RequestId>,
    /// Appends issued at or before this token belong to an older list.
    append_floor: RequestId,
    pending: BTreeSet<RequestId>,
    last_notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Self::default()
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn archive(&self) -> &ArchiveState {
        &self.archive
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    /// Number of page requests issued but not yet answered.
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> ListViewModel {
        let list = &self.list;
        let rows = list
            .records
            .iter()
            .map(|record| RecordRow {
                id: record.id.clone(),
                label: record.label(),
                detail_url: record.detail_url.clone(),
                selected: list.selected.contains(&record.id),
            })
            .collect();
        let archive = match &self.archive {
            ArchiveState::Open { target, submitting } => Some(ArchiveDialogView {
                target: target.clone(),
                submitting: *submitting,
            }),
            ArchiveState::Closed => None,
        };
        let remaining = list.remaining();

        ListViewModel {
            rows,
            draft_search: list.draft_search.clone(),
            committed_search: list.committed_search.clone(),
            remaining,
            has_more: remaining.is_some_and(|count| count > 0),
            selected_count: list.selected.len(),
            all_selected: list.selected.covers(&list.records),
            loading: !self.pending.is_empty() || self.jobs_loading || self.is_submitting(),
            archive,
            jobs: self
                .jobs
                .iter()
                .map(|job| JobOption {
                    id: job.id.clone(),
                    label: job.label(),
                })
                .collect(),
            notice: self.last_notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn is_submitting(&self) -> bool {
        matches!(self.archive, ArchiveState::Open { submitting: true, .. })
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        if self.list.draft_search != text {
            self.list.draft_search = text;
            self.dirty = true;
        }
    }

    /// Eager clear when the draft is emptied: no request is issued.
    pub(crate) fn drop_results(&mut self) {
        let list = &mut self.list;
        list.records.clear();
        list.remaining = 0;
        list.remaining_stale = false;
        list.page = 0;
        if !list.committed_search.is_empty() {
            list.committed_search.clear();
            list.selected.clear();
            self.forget_requests();
        }
        self.dirty = true;
    }

    pub(crate) fn commit_search(&mut self, text: String) {
        let list = &mut self.list;
        list.committed_search = text;
        list.page = 0;
        list.selected.clear();
        list.remaining_stale = true;
        self.dirty = true;
    }

    pub(crate) fn clear_search(&mut self) {
        self.list.draft_search.clear();
        self.commit_search(String::new());
    }

    /// Moves the cursor to the next page and returns it.
    pub(crate) fn advance_page(&mut self) -> u32 {
        self.list.page = self.list.page.saturating_add(1);
        self.dirty = true;
        self.list.page
    }

    pub(crate) fn toggle_selection(&mut self, id: RecordId, selected: bool) {
        if self.list.selected.toggle(id, selected) {
            self.dirty = true;
        }
    }

    pub(crate) fn select_all(&mut self, selected: bool) {
        if selected {
            self.list.selected.select_all(&self.list.records);
        } else {
            self.list.selected.clear();
        }
        self.dirty = true;
    }

    /// Registers a new page request and returns its token.
    pub(crate) fn issue_request(&mut self, mode: FetchMode) -> RequestId {
        self.next_request += 1;
        let request = self.next_request;
        match mode {
            FetchMode::Refresh => {
                self.latest_refresh = Some(request);
                self.append_floor = request;
                self.list.page = 0;
            }
            FetchMode::Append => {}
        }
        self.pending.insert(request);
        self.dirty = true;
        request
    }

    /// Marks `request` answered and reports whether its payload may be applied.
    pub(crate) fn settle_request(&mut self, request: RequestId, mode: FetchMode) -> bool {
        if self.pending.remove(&request) {
            self.dirty = true;
        }
        match self.ordering {
            ResponseOrdering::LastResponseWins => true,
            ResponseOrdering::LatestRequestWins => match mode {
                FetchMode::Refresh => self.latest_refresh == Some(request),
                FetchMode::Append => request > self.append_floor,
            },
        }
    }

    /// Outstanding requests no longer count as latest for any search.
    fn forget_requests(&mut self) {
        self.latest_refresh = None;
        self.append_floor = self.next_request;
    }

    pub(crate) fn replace_records(&mut self, page: TalentPage) {
        talent_debug!(
            "Replacing {} records with {} (remaining {})",
            self.list.records.len(),
            page.records.len(),
            page.remaining
        );
        self.list.records = page.records;
        self.set_remaining(page.remaining);
    }

    pub(crate) fn merge_records(&mut self, page: TalentPage) {
        let offered = page.records.len();
        let added = merge_unique(&mut self.list.records, page.records);
        if added < offered {
            talent_debug!("Skipped {} already loaded records", offered - added);
        }
        self.set_remaining(page.remaining);
    }

    fn set_remaining(&mut self, remaining: u64) {
        self.list.remaining = remaining;
        self.list.remaining_stale = false;
        self.dirty = true;
    }

    /// Returns false when a dialog is already open.
    pub(crate) fn open_archive(&mut self, target: RecordId) -> bool {
        if self.archive.is_open() {
            return false;
        }
        self.archive = ArchiveState::Open {
            target,
            submitting: false,
        };
        self.dirty = true;
        true
    }

    pub(crate) fn close_archive(&mut self) {
        if self.archive.is_open() {
            self.archive = ArchiveState::Closed;
            self.dirty = true;
        }
    }

    /// Flags the open dialog as submitting and returns its target.
    ///
    /// `None` when the dialog is closed or a submission is already outstanding.
    pub(crate) fn begin_archive_submit(&mut self) -> Option<RecordId> {
        match &mut self.archive {
            ArchiveState::Open { target, submitting } if !*submitting => {
                *submitting = true;
                self.dirty = true;
                Some(target.clone())
            }
            ArchiveState::Open { target, .. } => {
                talent_warn!("Archive of {} already in progress", target);
                None
            }
            ArchiveState::Closed => None,
        }
    }

    /// Clears the submitting flag if the dialog still targets `record`.
    pub(crate) fn end_archive_submit(&mut self, record: &RecordId) -> bool {
        match &mut self.archive {
            ArchiveState::Open { target, submitting } if target == record => {
                *submitting = false;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn begin_jobs_load(&mut self) {
        self.jobs_loading = true;
        self.dirty = true;
    }

    pub(crate) fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.jobs_loading = false;
        self.dirty = true;
    }

    pub(crate) fn jobs_failed(&mut self) {
        self.jobs_loading = false;
        self.dirty = true;
    }

    pub(crate) fn has_job(&self, job: &JobId) -> bool {
        self.jobs.iter().any(|known| &known.id == job)
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.last_notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.last_notice.take().is_some() {
            self.dirty = true;
        }
    }
}
