use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use engine_logging::talent_debug;
use serde_json::Value;
use talent_core::{Job, JobId, Record, RecordId, TalentPage};

use crate::{FailureKind, JobSource, SourceError, TalentSource};

/// In-process source over a fixed record set.
///
/// Pages are `page_size` long; a keyword matches records whose id or any
/// string field contains it, ignoring case. Archiving removes the record.
#[derive(Debug)]
pub struct MemoryTalentSource {
    records: Mutex<Vec<Record>>,
    jobs: Vec<Job>,
    archived: Mutex<Vec<(RecordId, JobId)>>,
    page_size: usize,
    offline: AtomicBool,
}

impl MemoryTalentSource {
    pub fn new(records: Vec<Record>, jobs: Vec<Job>, page_size: usize) -> Self {
        Self {
            records: Mutex::new(records),
            jobs,
            archived: Mutex::new(Vec::new()),
            page_size: page_size.max(1),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every request fails with `FailureKind::Network`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Archive requests accepted so far, oldest first.
    pub fn archived(&self) -> Vec<(RecordId, JobId)> {
        lock(&self.archived).clone()
    }

    fn ensure_online(&self) -> Result<(), SourceError> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(SourceError::new(FailureKind::Network, "source is offline"));
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn matches_keyword(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.id.as_str().to_lowercase().contains(needle)
        || record
            .fields
            .values()
            .filter_map(Value::as_str)
            .any(|text| text.to_lowercase().contains(needle))
}

#[async_trait::async_trait]
impl TalentSource for MemoryTalentSource {
    async fn fetch(&self, page: u32, keyword: &str) -> Result<TalentPage, SourceError> {
        self.ensure_online()?;
        let needle = keyword.trim().to_lowercase();
        let records = lock(&self.records);
        let matching: Vec<&Record> = records
            .iter()
            .filter(|record| matches_keyword(record, &needle))
            .collect();

        let start = (page as usize).saturating_mul(self.page_size);
        let slice: Vec<Record> = matching
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|record| (*record).clone())
            .collect();
        let remaining = matching.len().saturating_sub(start + slice.len());
        talent_debug!(
            "Memory fetch page={} keyword={:?}: {} records, {} remaining",
            page,
            keyword,
            slice.len(),
            remaining
        );
        Ok(TalentPage::new(slice, remaining as u64))
    }

    async fn archive(&self, record: &RecordId, job: &JobId) -> Result<(), SourceError> {
        self.ensure_online()?;
        let mut records = lock(&self.records);
        let Some(position) = records.iter().position(|candidate| &candidate.id == record) else {
            return Err(SourceError::new(
                FailureKind::Rejected,
                format!("unknown talent {record}"),
            ));
        };
        records.remove(position);
        lock(&self.archived).push((record.clone(), job.clone()));
        Ok(())
    }
}

#[async_trait::async_trait]
impl JobSource for MemoryTalentSource {
    async fn jobs(&self) -> Result<Vec<Job>, SourceError> {
        self.ensure_online()?;
        Ok(self.jobs.clone())
    }
}
