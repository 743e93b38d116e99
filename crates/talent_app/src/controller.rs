use std::sync::Arc;
use std::time::{Duration, Instant};

use talent_core::{update, AppState, JobId, ListViewModel, Msg, Notice, RecordId, ResponseOrdering};
use talent_source::{JobSource, TalentSource};

use crate::effects::EffectRunner;
use crate::viewer::ViewingContext;

/// Owns the list state and is its only mutator.
///
/// Every operation becomes a message for [`update`]; the resulting effects
/// run against the sources given at construction, and their completions are
/// fed back through [`ListController::pump`] or [`ListController::settle`].
pub struct ListController {
    state: AppState,
    runner: EffectRunner,
}

impl ListController {
    pub fn new(
        ordering: ResponseOrdering,
        talents: Arc<dyn TalentSource>,
        jobs: Arc<dyn JobSource>,
        viewer: Arc<dyn ViewingContext>,
    ) -> Self {
        Self {
            state: AppState::with_ordering(ordering),
            runner: EffectRunner::new(talents, jobs, viewer),
        }
    }

    /// Applies `msg` and runs its effects. Returns whether the view changed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
        self.state.consume_dirty()
    }

    pub fn start(&mut self) -> bool {
        self.dispatch(Msg::Started)
    }

    pub fn set_draft_search(&mut self, text: &str) -> bool {
        self.dispatch(Msg::DraftSearchChanged(text.to_owned()))
    }

    pub fn commit_search(&mut self, text: &str) -> bool {
        self.dispatch(Msg::SearchCommitted(text.to_owned()))
    }

    pub fn clear_search(&mut self) -> bool {
        self.dispatch(Msg::SearchCleared)
    }

    pub fn load_more(&mut self) -> bool {
        self.dispatch(Msg::LoadMoreRequested)
    }

    pub fn toggle_select(&mut self, id: RecordId, selected: bool) -> bool {
        self.dispatch(Msg::SelectionToggled { id, selected })
    }

    pub fn toggle_select_all(&mut self, selected: bool) -> bool {
        self.dispatch(Msg::SelectAllToggled(selected))
    }

    pub fn preview_selected(&mut self) -> bool {
        self.dispatch(Msg::PreviewRequested)
    }

    pub fn open_archive(&mut self, id: RecordId) -> bool {
        self.dispatch(Msg::ArchiveOpened(id))
    }

    pub fn cancel_archive(&mut self) -> bool {
        self.dispatch(Msg::ArchiveCancelled)
    }

    pub fn submit_archive(&mut self, job: JobId) -> bool {
        self.dispatch(Msg::ArchiveSubmitted(job))
    }

    /// Applies every completion that is already available.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(msg) = self.runner.poll() {
            changed |= self.dispatch(msg);
        }
        changed
    }

    /// Applies completions until nothing is in flight or `timeout` passes.
    /// Returns whether everything settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.view().loading {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            if let Some(msg) = self.runner.wait(deadline - now) {
                self.dispatch(msg);
            }
        }
        true
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> ListViewModel {
        self.state.view()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.runner.take_notices()
    }
}
