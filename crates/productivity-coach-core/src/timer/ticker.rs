//! Cancellable once-per-period ticker.
//!
//! Spawns a tokio task that sends a sequence number on every period until
//! its [`CancellationToken`] fires. After [`SessionTicker::cancel`] returns
//! no further tick is observable through [`SessionTicker::recv`]; a restart
//! means spawning a new ticker, whose sequence starts again at 1.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

const TICK_BUFFER: usize = 16;

#[derive(Debug)]
pub struct SessionTicker {
    cancel: CancellationToken,
    ticks: mpsc::Receiver<u64>,
    task: JoinHandle<()>,
}

impl SessionTicker {
    /// Spawn a ticker on the current tokio runtime.
    ///
    /// The first tick arrives one full `period` after spawning. A zero
    /// period is bumped to one millisecond.
    pub fn spawn(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let cancel = CancellationToken::new();
        let (tx, ticks) = mpsc::channel(TICK_BUFFER);
        let task = tokio::spawn(run(period, tx, cancel.clone()));
        Self {
            cancel,
            ticks,
            task,
        }
    }

    /// Wait for the next tick. `None` once cancelled.
    pub async fn recv(&mut self) -> Option<u64> {
        if self.cancel.is_cancelled() {
            return None;
        }
        tokio::select! {
            _ = self.cancel.cancelled() => None,
            seq = self.ticks.recv() => seq,
        }
    }

    /// Stop the ticker and discard any tick already buffered.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.ticks.close();
        while self.ticks.try_recv().is_ok() {}
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(period: Duration, tx: mpsc::Sender<u64>, cancel: CancellationToken) {
    let mut interval = interval_at(Instant::now() + period, period);
    let mut seq = 0u64;
    tracing::debug!(period_ms = period.as_millis() as u64, "ticker started");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                seq += 1;
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    sent = tx.send(seq) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(ticks = seq, "ticker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delivers_sequential_ticks() {
        let mut ticker = SessionTicker::spawn(Duration::from_secs(1));
        assert_eq!(ticker.recv().await, Some(1));
        assert_eq!(ticker.recv().await, Some(2));
        assert_eq!(ticker.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let start = Instant::now();
        let mut ticker = SessionTicker::spawn(Duration::from_millis(500));
        ticker.recv().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_cancel() {
        let mut ticker = SessionTicker::spawn(Duration::from_secs(1));
        assert_eq!(ticker.recv().await, Some(1));

        tokio::time::sleep(Duration::from_secs(5)).await;
        ticker.cancel();
        assert!(ticker.is_cancelled());
        assert_eq!(ticker.recv().await, None);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticker.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_yields_fresh_sequence() {
        let mut first = SessionTicker::spawn(Duration::from_secs(1));
        first.recv().await;
        first.recv().await;
        first.cancel();

        let mut second = SessionTicker::spawn(Duration::from_secs(1));
        assert_eq!(second.recv().await, Some(1));
    }
}
