//! Scheduled continuations tied to the lifetime of their owner.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};

/// A spawned timer task that posts an event to a channel.
///
/// Dropping the handle aborts the task, so a timer never fires into a
/// session that has already been torn down.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Sends `event` every `period`, first after one full period.
    ///
    /// Stops on its own once the receiving side is closed. A zero period is
    /// raised to one millisecond.
    pub fn repeating<E>(period: Duration, sender: mpsc::UnboundedSender<E>, event: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let first = Instant::now() + period;
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(first, period);
            loop {
                ticker.tick().await;
                if sender.send(event.clone()).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }

    /// Sends `event` once after `delay`.
    pub fn once<E>(delay: Duration, sender: mpsc::UnboundedSender<E>, event: E) -> Self
    where
        E: Send + 'static,
    {
        let task = tokio::spawn(async move {
            sleep(delay).await;
            let _ = sender.send(event);
        });
        Self { task }
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    #[cfg(test)]
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
