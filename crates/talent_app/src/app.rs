use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use engine_logging::talent_info;

use crate::command::{self, Command, HELP};
use crate::controller::ListController;
use crate::render::{notice_line, render};

/// How long the loop waits for input before applying source completions.
const TICK: Duration = Duration::from_millis(75);
/// Grace period for outstanding requests once input ends.
const DRAIN: Duration = Duration::from_secs(10);

/// Drives the controller from stdin until `quit` or end of input.
pub fn run(mut controller: ListController) -> anyhow::Result<()> {
    let (line_tx, line_rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{HELP}")?;
    controller.start();

    loop {
        let mut changed = false;
        match line_rx.recv_timeout(TICK) {
            Ok(line) => {
                let line = line.context("reading command")?;
                match command::parse(&line) {
                    Ok(Command::Dispatch(msgs)) => {
                        for msg in msgs {
                            changed |= controller.dispatch(msg);
                        }
                    }
                    Ok(Command::Show) => changed = true,
                    Ok(Command::Help) => writeln!(out, "{HELP}")?,
                    Ok(Command::Quit) => break,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                talent_info!("Input closed; waiting for outstanding requests");
                let settled = controller.settle(DRAIN);
                flush(&mut controller, &mut out, true)?;
                if !settled {
                    writeln!(out, "gave up waiting for outstanding requests")?;
                }
                break;
            }
        }
        changed |= controller.pump();
        flush(&mut controller, &mut out, changed)?;
    }
    Ok(())
}

fn flush(controller: &mut ListController, out: &mut impl Write, changed: bool) -> io::Result<()> {
    for notice in controller.take_notices() {
        writeln!(out, "{}", notice_line(&notice))?;
    }
    if changed {
        write!(out, "{}", render(&controller.view()))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::viewer::RecordingViewer;
    use talent_core::ResponseOrdering;
    use talent_source::MemoryTalentSource;

    fn printed(controller: &mut ListController, changed: bool) -> String {
        let mut out = Vec::new();
        flush(controller, &mut out, changed).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn notice_is_printed_once_on_arrival() {
        engine_logging::initialize_for_tests();
        let source = Arc::new(MemoryTalentSource::new(Vec::new(), Vec::new(), 2));
        let mut controller = ListController::new(
            ResponseOrdering::default(),
            source.clone(),
            source,
            Arc::new(RecordingViewer::default()),
        );

        controller.preview_selected();
        let first = printed(&mut controller, true);
        assert_eq!(first.matches("nothing selected").count(), 1);

        let again = printed(&mut controller, true);
        assert!(again.contains("search (all)"));
        assert!(!again.contains("nothing selected"));
    }
}
