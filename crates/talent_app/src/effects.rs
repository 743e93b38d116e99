use std::sync::Arc;
use std::time::Duration;

use engine_logging::{talent_debug, talent_info, talent_warn};
use talent_core::{Effect, Msg, Notice};
use talent_source::{JobSource, SourceEvent, SourceHandle, TalentSource};

use crate::viewer::ViewingContext;

/// Carries effects out against the injected sources and turns their
/// completions back into messages.
pub struct EffectRunner {
    source: SourceHandle,
    viewer: Arc<dyn ViewingContext>,
    notices: Vec<Notice>,
}

impl EffectRunner {
    pub fn new(
        talents: Arc<dyn TalentSource>,
        jobs: Arc<dyn JobSource>,
        viewer: Arc<dyn ViewingContext>,
    ) -> Self {
        Self {
            source: SourceHandle::new(talents, jobs),
            viewer,
            notices: Vec::new(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request,
                    mode,
                    page,
                    keyword,
                } => {
                    talent_info!(
                        "FetchPage request={} mode={:?} page={} keyword={:?}",
                        request,
                        mode,
                        page,
                        keyword
                    );
                    self.source.fetch_page(request, mode, page, keyword);
                }
                Effect::Archive { record, job } => {
                    talent_info!("Archive record={} job={}", record, job);
                    self.source.archive(record, job);
                }
                Effect::LoadJobs => self.source.load_jobs(),
                Effect::OpenDetail { url } => self.viewer.open(&url),
                Effect::Notify(notice) => self.notices.push(notice),
            }
        }
    }

    /// Next completed request, if one is ready.
    pub fn poll(&self) -> Option<Msg> {
        self.source.try_recv().map(event_to_msg)
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.source.recv_timeout(timeout).map(event_to_msg)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

fn event_to_msg(event: SourceEvent) -> Msg {
    match event {
        SourceEvent::PageFetched {
            request,
            mode,
            result,
        } => {
            if let Err(err) = &result {
                talent_warn!("Page request {} failed: {}", request, err);
            } else {
                talent_debug!("Page request {} completed", request);
            }
            Msg::PageLoaded {
                request,
                mode,
                result: result.map_err(|err| err.to_string()),
            }
        }
        SourceEvent::Archived { record, result } => Msg::ArchiveFinished {
            record,
            result: result.map_err(|err| err.to_string()),
        },
        SourceEvent::JobsFetched(result) => Msg::JobsLoaded(result.map_err(|err| err.to_string())),
    }
}
