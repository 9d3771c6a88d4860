//! Focus session tracker.
//!
//! A tick-driven state machine. It owns no thread and reads no clock for
//! elapsed time: the owner delivers one `tick()` per second (see
//! [`SessionTicker`](super::SessionTicker)) and forwards visibility changes.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!           |           |
//!           +-- stop ---+--> Idle (emits SessionRecord when elapsed > 0)
//! ```
//!
//! The danger zone is the only timed state. It turns on with a distraction
//! and is scheduled to clear a fixed delay after visibility returns. The
//! deadline is fire-once and is dropped by `start()`, `stop()` and a new
//! distraction.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::now_ms;
use crate::events::Event;
use crate::rewards::focus_score;

pub const DEFAULT_DANGER_ZONE_CLEAR_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// A finished session with non-zero duration. Consumed immediately by the
/// reward calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub duration_secs: u64,
    pub distractions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTracker {
    state: TimerState,
    elapsed_secs: u64,
    distractions: u32,
    visibility: Visibility,
    danger_zone: bool,
    /// Epoch ms at which the danger zone clears, once visibility is back.
    #[serde(default)]
    danger_zone_clears_at_ms: Option<u64>,
    danger_zone_clear_ms: u64,
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DANGER_ZONE_CLEAR_MS)
    }
}

impl SessionTracker {
    pub fn new(danger_zone_clear_ms: u64) -> Self {
        Self {
            state: TimerState::Idle,
            elapsed_secs: 0,
            distractions: 0,
            visibility: Visibility::Visible,
            danger_zone: false,
            danger_zone_clears_at_ms: None,
            danger_zone_clear_ms,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn distractions(&self) -> u32 {
        self.distractions
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn in_danger_zone(&self) -> bool {
        self.danger_zone
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn focus_score(&self) -> i64 {
        focus_score(self.elapsed_secs, self.distractions)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            elapsed_secs: self.elapsed_secs,
            distractions: self.distractions,
            visibility: self.visibility,
            danger_zone: self.danger_zone,
            focus_score: self.focus_score(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                self.clear_danger_zone();
                tracing::debug!(elapsed_secs = self.elapsed_secs, "session running");
                Some(Event::SessionStarted {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                tracing::debug!(elapsed_secs = self.elapsed_secs, "session paused");
                Some(Event::SessionPaused {
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// End the session. Returns a record only when time was accumulated.
    ///
    /// Resets elapsed time, distractions and the danger zone either way.
    pub fn stop(&mut self) -> Option<SessionRecord> {
        let record = (self.elapsed_secs > 0).then_some(SessionRecord {
            duration_secs: self.elapsed_secs,
            distractions: self.distractions,
        });
        if record.is_some() || self.state != TimerState::Idle {
            tracing::debug!(?record, "session stopped");
        }
        self.state = TimerState::Idle;
        self.elapsed_secs = 0;
        self.distractions = 0;
        self.clear_danger_zone();
        record
    }

    /// One second of focus. Ignored unless running.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    pub fn visibility_changed(&mut self, visibility: Visibility) -> Option<Event> {
        self.visibility_changed_at(visibility, now_ms())
    }

    /// Apply a visibility signal observed at `now_ms`.
    ///
    /// Only the transition into `Hidden` while running counts as a
    /// distraction. Repeated signals for the current visibility are ignored.
    pub fn visibility_changed_at(&mut self, visibility: Visibility, now_ms: u64) -> Option<Event> {
        if visibility == self.visibility {
            return None;
        }
        self.visibility = visibility;
        match visibility {
            Visibility::Hidden => {
                if self.state != TimerState::Running {
                    return None;
                }
                self.distractions += 1;
                self.danger_zone = true;
                self.danger_zone_clears_at_ms = None;
                tracing::debug!(distractions = self.distractions, "distraction detected");
                Some(Event::DistractionDetected {
                    distractions: self.distractions,
                    at: Utc::now(),
                })
            }
            Visibility::Visible => {
                if !self.danger_zone {
                    return None;
                }
                let clears_at_ms = now_ms + self.danger_zone_clear_ms;
                self.danger_zone_clears_at_ms = Some(clears_at_ms);
                Some(Event::VisibilityRestored {
                    clears_at_ms,
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn poll_danger_zone(&mut self) -> Option<Event> {
        self.poll_danger_zone_at(now_ms())
    }

    /// Fire the pending danger-zone clear if its deadline has passed.
    pub fn poll_danger_zone_at(&mut self, now_ms: u64) -> Option<Event> {
        match self.danger_zone_clears_at_ms {
            Some(deadline) if now_ms >= deadline => {
                self.clear_danger_zone();
                Some(Event::DangerZoneCleared { at: Utc::now() })
            }
            _ => None,
        }
    }

    /// Time left before the pending clear fires, if one is scheduled.
    pub fn danger_zone_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.danger_zone_clears_at_ms
            .map(|deadline| deadline.saturating_sub(now_ms))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn clear_danger_zone(&mut self) {
        self.danger_zone = false;
        self.danger_zone_clears_at_ms = None;
    }
}
