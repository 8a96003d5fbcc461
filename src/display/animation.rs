//! Entrance animation timer
//!
//! A one-shot timer that flips the display's `animated` flag. The timer is
//! owned by an [`EntranceAnimation`] guard: dropping or cancelling the guard
//! aborts the timer, so a torn-down display never sees the flag change.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::screen::ENTRANCE_DELAY_MS;

/// Delay between the first ready render and the bars growing
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(ENTRANCE_DELAY_MS);

/// Scoped one-shot timer driving the `animated` flag
pub struct EntranceAnimation {
    flag: watch::Receiver<bool>,
    timer: JoinHandle<()>,
}

impl EntranceAnimation {
    /// Arm the timer. Must be called from within a tokio runtime.
    pub fn start(delay: Duration) -> Self {
        let (tx, flag) = watch::channel(false);

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(true).is_ok() {
                tracing::debug!("Entrance animation started after {:?}", delay);
            }
        });

        Self { flag, timer }
    }

    pub fn is_animated(&self) -> bool {
        *self.flag.borrow()
    }

    /// Observe the flag independently of the guard
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.clone()
    }

    /// Wait for the flag to flip. Returns `false` if the timer was aborted
    /// before firing.
    pub async fn wait(&mut self) -> bool {
        self.flag.wait_for(|animated| *animated).await.is_ok()
    }

    /// Tear down without waiting for the timer
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for EntranceAnimation {
    fn drop(&mut self) {
        if !self.timer.is_finished() {
            tracing::trace!("Cancelling pending entrance animation");
        }
        self.timer.abort();
    }
}
