//! Talent core: pure list state machine and view-model helpers.
mod effect;
mod msg;
mod notice;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, FetchMode};
pub use msg::Msg;
pub use notice::{Notice, Operation, UserInputWarning};
pub use record::{merge_unique, Job, JobId, Record, RecordId, TalentPage};
pub use selection::Selection;
pub use state::{AppState, ArchiveState, ListState, RequestId, ResponseOrdering};
pub use update::update;
pub use view_model::{ArchiveDialogView, JobOption, ListViewModel, RecordRow};
