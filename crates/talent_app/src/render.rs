use std::fmt::Write;

use talent_core::{ListViewModel, Notice};

/// Plain-text rendering of the list view. Notices are printed separately as
/// they arrive, see `notice_line`.
pub fn render(view: &ListViewModel) -> String {
    let mut out = String::new();

    let search = if view.committed_search.is_empty() {
        "(all)".to_string()
    } else {
        format!("{:?}", view.committed_search)
    };
    let _ = write!(out, "search {search}");
    if view.draft_search != view.committed_search {
        let _ = write!(out, " | typing {:?}", view.draft_search);
    }
    let remaining = match view.remaining {
        Some(count) => count.to_string(),
        None => "?".to_string(),
    };
    let _ = write!(
        out,
        " | {} loaded, {} more | {} selected{}",
        view.rows.len(),
        remaining,
        view.selected_count,
        if view.all_selected { " (all)" } else { "" }
    );
    if view.loading {
        out.push_str(" | loading...");
    }
    out.push('\n');

    for row in &view.rows {
        let mark = if row.selected { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {:<12} {:<20} {}", row.id, row.label, row.detail_url);
    }
    if view.has_more {
        out.push_str("  ... `more` for the next page\n");
    }

    if let Some(dialog) = &view.archive {
        let state = if dialog.submitting { " (submitting)" } else { "" };
        let _ = writeln!(out, "archive {}{state}; `submit <job>` or `cancel`", dialog.target);
        if view.jobs.is_empty() {
            out.push_str("  no published jobs\n");
        }
        for job in &view.jobs {
            let _ = writeln!(out, "  job {:<10} {}", job.id, job.label);
        }
    }
    out
}

pub fn notice_line(notice: &Notice) -> String {
    if notice.is_warning() {
        format!("warning: {notice}")
    } else {
        format!("error: {notice}")
    }
}
