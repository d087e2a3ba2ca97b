//! The single-slot status line.

use log::info;
use tokio::sync::watch;

/// A sink for the one human-readable status string. Last write wins.
pub trait StatusReporter: Send + Sync {
    fn set_status(&self, text: &str);
}

/// [`StatusReporter`] backed by a `watch` channel, so a view can either read
/// the current text or await the next change.
#[derive(Debug)]
pub struct StatusLine {
    sender: watch::Sender<String>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(String::new());
        StatusLine { sender }
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }
}

impl StatusReporter for StatusLine {
    fn set_status(&self, text: &str) {
        info!("status: {text}");
        self.sender.send_replace(text.to_string());
    }
}
