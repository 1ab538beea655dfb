//! Async view model for a single pending fetch.
//!
//! One task is spawned per run; its result travels over a oneshot channel
//! and the frame loop observes it by polling. No cancellation and no
//! retry: a failed fetch is terminal for the run.

use std::future::Future;

use tokio::sync::oneshot;

use sysdash_client::FetchError;

/// View model for a value that arrives asynchronously.
///
/// Generic over the payload: the caller decides what a loaded value looks
/// like, and the fallback path carries the one fetch-failure error kind.
#[derive(Debug)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Handle to one in-flight fetch task.
#[derive(Debug)]
pub struct FetchHandle<T> {
    rx: oneshot::Receiver<Result<T, FetchError>>,
}

impl<T: Send + 'static> FetchHandle<T> {
    /// Spawns `fut` on the current runtime; the returned handle settles
    /// exactly once.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // A dropped receiver means the app already went away.
            let _ = tx.send(fut.await);
        });
        Self { rx }
    }

    /// Non-blocking check: `None` while the fetch is pending, the settled
    /// result once it isn't. A task that died without delivering (panic,
    /// runtime shutdown) reports as an interrupted fetch, not a crash.
    pub fn poll(&mut self) -> Option<Result<T, FetchError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(FetchError::Interrupted)),
        }
    }
}
