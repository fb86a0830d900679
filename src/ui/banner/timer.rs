use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Periodic callback owned by a mounted banner.
///
/// The task is aborted when the timer is dropped, so holding it in the
/// widget ties its lifetime to the mount.
pub struct RotationTimer {
    handle: JoinHandle<()>,
}

impl RotationTimer {
    /// Starts firing `on_tick` every `period`, first one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                on_tick();
            }
        });
        Self { handle }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
