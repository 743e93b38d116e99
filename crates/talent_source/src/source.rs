use talent_core::{Job, JobId, RecordId, TalentPage};

use crate::SourceError;

/// Paged talent search plus the archive action.
#[async_trait::async_trait]
pub trait TalentSource: Send + Sync {
    /// Fetches `page` (0-based) of the results for `keyword`; `""` means no filter.
    async fn fetch(&self, page: u32, keyword: &str) -> Result<TalentPage, SourceError>;

    /// Archives `record` under `job`. Not guaranteed to be idempotent.
    async fn archive(&self, record: &RecordId, job: &JobId) -> Result<(), SourceError>;
}

/// Read-only list of published jobs, owned and refreshed elsewhere.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn jobs(&self) -> Result<Vec<Job>, SourceError>;
}
