use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays query commits until typing pauses.
///
/// Scheduling a new commit aborts the previous one. A commit that still
/// slips through names the revision it was scheduled for, and the reducer
/// drops it if the shopper has typed since.
pub struct QueryDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// True when commits should be applied inline, without a timer.
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }

    /// Runs `fire` after the delay unless rescheduled or cancelled first.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fire();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
