//! Scoped polling timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Repeats an async callback on a fixed period while the handle lives.
///
/// The first tick fires immediately, so selecting a conversation fetches
/// at once and then every period. Dropping the handle aborts the task on
/// every exit path: replacing a page's channel deterministically cancels
/// the predecessor, so no two channels ever run concurrently for the same
/// page instance.
///
/// There is no backoff and no error-triggered pause: a failed tick is the
/// callback's to record, and the next tick retries naturally.
#[derive(Debug)]
pub struct PollingChannel {
    handle: JoinHandle<()>,
}

impl PollingChannel {
    /// Spawns the polling task.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        Self { handle }
    }

    /// Stops the channel explicitly. Equivalent to dropping it.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PollingChannel {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate_then_periodic() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let _channel = PollingChannel::spawn(Duration::from_secs(5), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1, "immediate first tick");

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 2, "one tick per period");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_future_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let channel = PollingChannel::spawn(Duration::from_secs(5), move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        channel.stop();
        tokio::time::advance(Duration::from_secs(30)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), 1, "no ticks after stop");
    }
}
