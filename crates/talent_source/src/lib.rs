//! Talent sources: async data access and background request execution.
mod handle;
mod http;
mod memory;
mod source;
mod types;

pub use handle::SourceHandle;
pub use http::{HttpSettings, HttpTalentSource};
pub use memory::MemoryTalentSource;
pub use source::{JobSource, TalentSource};
pub use types::{FailureKind, SourceError, SourceEvent};
