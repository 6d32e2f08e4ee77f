//! One-shot delayed work with cancellation.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Runs an effect once after `delay`, unless its token is cancelled first.
///
/// Cancellation is checked before the effect starts; an effect that has
/// already started runs to completion.
#[derive(Debug)]
pub struct DeferredTask {
    token: CancellationToken,
    handle: JoinHandle<bool>,
}

impl DeferredTask {
    /// Spawns the task on the current tokio runtime.
    pub fn spawn<F>(delay: Duration, token: CancellationToken, effect: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let guard = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => false,
                _ = tokio::time::sleep(delay) => {
                    if guard.is_cancelled() {
                        return false;
                    }
                    effect.await;
                    true
                }
            }
        });
        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to settle. Returns `true` if the effect ran.
    pub async fn join(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}
