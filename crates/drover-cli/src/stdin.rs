//! Process-wide standard-input ownership.
//!
//! Reading stdin keeps a background task alive, and a dangling reader blocks
//! a clean process exit. [`SharedStdin`] owns that subscription: one
//! instance is created per dispatch, and the test mode releases it during
//! cleanup whether or not anything ever subscribed.

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owner of the process-wide standard-input subscription.
#[derive(Default)]
pub struct SharedStdin {
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl SharedStdin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to stdin lines, spawning the reader task.
    ///
    /// The returned channel yields one item per line and closes when the
    /// subscription is released or stdin reaches end of input. A new
    /// subscription replaces (and stops) any previous one.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        let mut slot = self.reader.lock();
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
        rx
    }

    /// Stop reading stdin. Idempotent; a no-op when nothing subscribed.
    pub fn release(&self) {
        if let Some(handle) = self.reader.lock().take() {
            handle.abort();
        }
    }

    /// Whether a subscription is currently live.
    pub fn is_subscribed(&self) -> bool {
        self.reader.lock().is_some()
    }
}
