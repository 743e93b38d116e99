use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;
#[cfg(test)]
use std::sync::Arc;

use engine_logging::{talent_info, talent_warn};

/// Somewhere a detail page can be opened. Fire-and-forget.
pub trait ViewingContext: Send + Sync {
    fn open(&self, url: &str);
}

/// Opens pages with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]).arg(url);
            command
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        }
    }
}

impl ViewingContext for SystemBrowser {
    fn open(&self, url: &str) {
        let spawned = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_) => talent_info!("Opened {}", url),
            Err(err) => talent_warn!("Could not open {}: {}", url, err),
        }
    }
}

/// Writes each url on its own line instead of opening it.
pub struct PrintViewer<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> PrintViewer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> ViewingContext for PrintViewer<W> {
    fn open(&self, url: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "open {url}");
        }
    }
}

/// Keeps opened urls in memory.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingViewer {
    opened: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingViewer {
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl ViewingContext for RecordingViewer {
    fn open(&self, url: &str) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_owned());
        }
    }
}
