//! Async driver pairing a [`SessionTracker`] with a [`SessionTicker`].
//!
//! Start spawns a ticker, pause and stop cancel it. Each received tick is
//! applied to the tracker before `next_tick` returns, so the tracker never
//! sees a tick from a cancelled ticker.

use std::time::Duration;

use super::ticker::{SessionTicker, DEFAULT_TICK_INTERVAL};
use super::tracker::{SessionRecord, SessionTracker, Visibility};
use crate::events::Event;

#[derive(Debug)]
pub struct FocusSession {
    tracker: SessionTracker,
    ticker: Option<SessionTicker>,
    tick_interval: Duration,
}

impl Default for FocusSession {
    fn default() -> Self {
        Self::new(SessionTracker::default(), DEFAULT_TICK_INTERVAL)
    }
}

impl FocusSession {
    pub fn new(tracker: SessionTracker, tick_interval: Duration) -> Self {
        Self {
            tracker,
            ticker: None,
            tick_interval,
        }
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Option<Event> {
        let event = self.tracker.start()?;
        self.stop_ticker();
        self.ticker = Some(SessionTicker::spawn(self.tick_interval));
        Some(event)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.stop_ticker();
        self.tracker.pause()
    }

    pub fn stop(&mut self) -> Option<SessionRecord> {
        self.stop_ticker();
        self.tracker.stop()
    }

    pub fn visibility_changed(&mut self, visibility: Visibility) -> Option<Event> {
        self.tracker.visibility_changed(visibility)
    }

    pub fn poll_danger_zone(&mut self) -> Option<Event> {
        self.tracker.poll_danger_zone()
    }

    /// Wait for the next tick and apply it. Returns the new elapsed time,
    /// or `None` when no ticker is running.
    pub async fn next_tick(&mut self) -> Option<u64> {
        let ticker = self.ticker.as_mut()?;
        ticker.recv().await?;
        self.tracker.tick();
        Some(self.tracker.elapsed_secs())
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
