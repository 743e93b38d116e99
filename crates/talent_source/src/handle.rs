use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{talent_debug, talent_error};
use talent_core::{FetchMode, JobId, RecordId, RequestId};

use crate::{FailureKind, JobSource, SourceError, SourceEvent, TalentSource};

enum SourceCommand {
    FetchPage {
        request: RequestId,
        mode: FetchMode,
        page: u32,
        keyword: String,
    },
    Archive {
        record: RecordId,
        job: JobId,
    },
    LoadJobs,
}

/// Runs source requests on a background runtime.
///
/// Requests are fire-and-forget: each one is spawned as its own task and
/// reports a [`SourceEvent`] when it completes, in completion order.
pub struct SourceHandle {
    cmd_tx: mpsc::Sender<SourceCommand>,
    event_rx: mpsc::Receiver<SourceEvent>,
}

impl SourceHandle {
    pub fn new(talents: Arc<dyn TalentSource>, jobs: Arc<dyn JobSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    talent_error!("Failed to start source runtime: {}", err);
                    fail_all(cmd_rx, event_tx, &err.to_string());
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let talents = talents.clone();
                let jobs = jobs.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(talents.as_ref(), jobs.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            talent_debug!("Source command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, request: RequestId, mode: FetchMode, page: u32, keyword: String) {
        self.send(SourceCommand::FetchPage {
            request,
            mode,
            page,
            keyword,
        });
    }

    pub fn archive(&self, record: RecordId, job: JobId) {
        self.send(SourceCommand::Archive { record, job });
    }

    pub fn load_jobs(&self) {
        self.send(SourceCommand::LoadJobs);
    }

    pub fn try_recv(&self) -> Option<SourceEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SourceEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: SourceCommand) {
        if self.cmd_tx.send(command).is_err() {
            talent_error!("Source runtime is gone; request dropped");
        }
    }
}

async fn handle_command(
    talents: &dyn TalentSource,
    jobs: &dyn JobSource,
    command: SourceCommand,
) -> SourceEvent {
    match command {
        SourceCommand::FetchPage {
            request,
            mode,
            page,
            keyword,
        } => SourceEvent::PageFetched {
            request,
            mode,
            result: talents.fetch(page, &keyword).await,
        },
        SourceCommand::Archive { record, job } => {
            let result = talents.archive(&record, &job).await;
            SourceEvent::Archived { record, result }
        }
        SourceCommand::LoadJobs => SourceEvent::JobsFetched(jobs.jobs().await),
    }
}

/// Answers every command with an error when no runtime could be started.
fn fail_all(
    cmd_rx: mpsc::Receiver<SourceCommand>,
    event_tx: mpsc::Sender<SourceEvent>,
    reason: &str,
) {
    let error = || SourceError::new(FailureKind::Unavailable, reason);
    while let Ok(command) = cmd_rx.recv() {
        let event = match command {
            SourceCommand::FetchPage { request, mode, .. } => SourceEvent::PageFetched {
                request,
                mode,
                result: Err(error()),
            },
            SourceCommand::Archive { record, .. } => SourceEvent::Archived {
                record,
                result: Err(error()),
            },
            SourceCommand::LoadJobs => SourceEvent::JobsFetched(Err(error())),
        };
        if event_tx.send(event).is_err() {
            return;
        }
    }
}
