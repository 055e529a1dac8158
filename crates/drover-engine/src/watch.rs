use crate::BuildOutcome;
use axum::Router;
use tokio::sync::{mpsc, oneshot};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::StreamExt;

/// Factory producing the request handler for one directory of build output.
///
/// The engine exposes one handler per top-level output directory; serve mode
/// binds each configured target's handler to its own listener.
pub type HandlerFactory = Box<dyn Fn(&str) -> Router + Send + Sync>;

/// Handle to a running continuous watch session.
///
/// A watch session emits exactly one first-build signal, then an unbounded
/// ordered stream of rebuild completions that ends when watching stops
/// (engine-side failure or external termination). The mode executor owns the
/// session for the lifetime of its run and is responsible for draining the
/// completion stream to its end before returning.
pub struct WatchSession {
    first_build: Option<oneshot::Receiver<BuildOutcome>>,
    completions: UnboundedReceiverStream<BuildOutcome>,
    handlers: HandlerFactory,
}

impl WatchSession {
    /// Assemble a session from its channel halves.
    ///
    /// Engine implementations keep the send sides: the oneshot fires when
    /// the baseline build finishes, the unbounded channel carries every
    /// subsequent completion, and dropping the sender ends the stream.
    pub fn new(
        first_build: oneshot::Receiver<BuildOutcome>,
        completions: mpsc::UnboundedReceiver<BuildOutcome>,
        handlers: HandlerFactory,
    ) -> Self {
        Self {
            first_build: Some(first_build),
            completions: UnboundedReceiverStream::new(completions),
            handlers,
        }
    }

    /// Wait for the session's first build to finish.
    ///
    /// Returns `None` when the signal was already consumed or the engine
    /// dropped the session before completing a first build; callers treat
    /// that the same as the stream ending.
    pub async fn first_build(&mut self) -> Option<BuildOutcome> {
        match self.first_build.take() {
            Some(signal) => signal.await.ok(),
            None => None,
        }
    }

    /// Read the next rebuild completion, or `None` once watching stopped.
    pub async fn next_completion(&mut self) -> Option<BuildOutcome> {
        self.completions.next().await
    }

    /// Request handler serving the named directory of build output.
    pub fn handler_for(&self, dir: &str) -> Router {
        (self.handlers)(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session() -> (
        oneshot::Sender<BuildOutcome>,
        mpsc::UnboundedSender<BuildOutcome>,
        WatchSession,
    ) {
        let (first_tx, first_rx) = oneshot::channel();
        let (tx, rx) = mpsc::unbounded_channel();
        let session = WatchSession::new(first_rx, rx, Box::new(|_| Router::new()));
        (first_tx, tx, session)
    }

    #[tokio::test]
    async fn test_first_build_then_stream_end() {
        let (first_tx, tx, mut session) = session();

        first_tx
            .send(BuildOutcome::success(Duration::from_millis(3)))
            .unwrap();
        tx.send(BuildOutcome::failure(Duration::from_millis(1)))
            .unwrap();
        drop(tx);

        assert!(session.first_build().await.unwrap().is_success());
        assert!(!session.next_completion().await.unwrap().is_success());
        assert!(session.next_completion().await.is_none());
    }

    #[tokio::test]
    async fn test_first_build_signal_dropped() {
        let (first_tx, tx, mut session) = session();
        drop(first_tx);
        drop(tx);

        assert!(session.first_build().await.is_none());
        // A second wait observes the consumed signal, not a hang.
        assert!(session.first_build().await.is_none());
        assert!(session.next_completion().await.is_none());
    }
}
