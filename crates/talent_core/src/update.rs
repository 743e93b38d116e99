use engine_logging::{talent_debug, talent_info, talent_warn};

use crate::{
    AppState, Effect, FetchMode, JobId, Msg, Notice, Operation, RecordId, RequestId, TalentPage,
    UserInputWarning,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.begin_jobs_load();
            vec![Effect::LoadJobs]
        }
        Msg::DraftSearchChanged(text) => {
            let draft = text.trim();
            if draft.is_empty() {
                // Emptying the box drops results right away, without a request.
                state.drop_results();
            }
            state.set_draft(draft.to_owned());
            Vec::new()
        }
        Msg::SearchCommitted(text) => {
            let keyword = text.trim();
            if keyword == state.list().committed_search() {
                talent_debug!("Search {:?} already committed", keyword);
                return (state, Vec::new());
            }
            talent_info!("Committing search {:?}", keyword);
            state.commit_search(keyword.to_owned());
            vec![refresh(&mut state)]
        }
        Msg::SearchCleared => {
            // Always re-syncs, even when nothing was committed.
            state.clear_search();
            vec![refresh(&mut state)]
        }
        Msg::LoadMoreRequested => {
            let page = state.advance_page();
            let request = state.issue_request(FetchMode::Append);
            vec![Effect::FetchPage {
                request,
                mode: FetchMode::Append,
                page,
                keyword: state.list().committed_search().to_owned(),
            }]
        }
        Msg::SelectionToggled { id, selected } => {
            state.toggle_selection(id, selected);
            Vec::new()
        }
        Msg::SelectAllToggled(selected) => {
            state.select_all(selected);
            Vec::new()
        }
        Msg::PreviewRequested => preview_selected(&mut state),
        Msg::ArchiveOpened(id) => {
            if !state.open_archive(id.clone()) {
                talent_debug!("Ignoring archive of {}: dialog already open", id);
            }
            Vec::new()
        }
        Msg::ArchiveCancelled => {
            state.close_archive();
            Vec::new()
        }
        Msg::ArchiveSubmitted(job) => submit_archive(&mut state, job),
        Msg::PageLoaded {
            request,
            mode,
            result,
        } => apply_page(&mut state, request, mode, result),
        Msg::ArchiveFinished { record, result } => finish_archive(&mut state, record, result),
        Msg::JobsLoaded(Ok(jobs)) => {
            talent_debug!("Loaded {} jobs", jobs.len());
            state.set_jobs(jobs);
            Vec::new()
        }
        Msg::JobsLoaded(Err(message)) => {
            talent_warn!("Job list failed to load: {}", message);
            state.jobs_failed();
            vec![notify(
                &mut state,
                Notice::FetchFailed {
                    operation: Operation::Jobs,
                    message,
                },
            )]
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
    };

    (state, effects)
}

/// Page 0 of the committed search, replacing the list on arrival.
fn refresh(state: &mut AppState) -> Effect {
    let request = state.issue_request(FetchMode::Refresh);
    Effect::FetchPage {
        request,
        mode: FetchMode::Refresh,
        page: 0,
        keyword: state.list().committed_search().to_owned(),
    }
}

fn notify(state: &mut AppState, notice: Notice) -> Effect {
    if notice.is_warning() {
        talent_warn!("{}", notice);
    }
    state.set_notice(notice.clone());
    Effect::Notify(notice)
}

fn preview_selected(state: &mut AppState) -> Vec<Effect> {
    let mut effects = Vec::new();
    if state.list().selected().is_empty() {
        // Warn, then carry on: there is simply nothing to open.
        effects.push(notify(state, Notice::Warning(UserInputWarning::NoSelection)));
    }
    let list = state.list();
    effects.extend(
        list.selected()
            .pick(list.records())
            .map(|record| Effect::OpenDetail {
                url: record.detail_url.clone(),
            }),
    );
    effects
}

fn submit_archive(state: &mut AppState, job: JobId) -> Vec<Effect> {
    let Some(record) = state.begin_archive_submit() else {
        talent_debug!("Ignoring archive submit for job {}", job);
        return Vec::new();
    };

    let mut effects = Vec::with_capacity(2);
    if state.jobs().is_empty() {
        // The warning does not block the request.
        effects.push(notify(
            state,
            Notice::Warning(UserInputWarning::NoPublishedJobs),
        ));
    } else if !state.has_job(&job) {
        talent_warn!("Archiving {} under unknown job {}", record, job);
    }
    talent_info!("Archiving {} under job {}", record, job);
    effects.push(Effect::Archive { record, job });
    effects
}

fn finish_archive(
    state: &mut AppState,
    record: RecordId,
    result: Result<(), String>,
) -> Vec<Effect> {
    let still_targeted = state.end_archive_submit(&record);
    match result {
        Ok(()) => {
            talent_info!("Archived {}", record);
            let effect = refresh(state);
            if still_targeted {
                state.close_archive();
            }
            vec![effect]
        }
        Err(message) => {
            talent_warn!("Archive of {} failed: {}", record, message);
            vec![notify(
                state,
                Notice::FetchFailed {
                    operation: Operation::Archive,
                    message,
                },
            )]
        }
    }
}

fn apply_page(
    state: &mut AppState,
    request: RequestId,
    mode: FetchMode,
    result: Result<TalentPage, String>,
) -> Vec<Effect> {
    let accepted = state.settle_request(request, mode);
    match result {
        Ok(page) if accepted => {
            match mode {
                FetchMode::Refresh => state.replace_records(page),
                FetchMode::Append => state.merge_records(page),
            }
            Vec::new()
        }
        Ok(_) => {
            talent_warn!("Dropping stale {:?} response for request {}", mode, request);
            Vec::new()
        }
        Err(message) if accepted => {
            let operation = match mode {
                FetchMode::Refresh => Operation::Refresh,
                FetchMode::Append => Operation::Append,
            };
            talent_warn!("Request {} failed: {}", request, message);
            vec![notify(state, Notice::FetchFailed { operation, message })]
        }
        Err(message) => {
            talent_debug!("Ignoring failure of stale request {}: {}", request, message);
            Vec::new()
        }
    }
}
