use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ItemCategory;
use crate::timer::{TimerState, Visibility};

/// Every state change in the core produces an Event.
/// The presentation layer renders them; observers subscribe to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// Tab/window went to the background while a session was running.
    DistractionDetected {
        distractions: u32,
        at: DateTime<Utc>,
    },
    /// Focus came back; the danger zone clears once the delay passes.
    VisibilityRestored {
        clears_at_ms: u64,
        at: DateTime<Utc>,
    },
    DangerZoneCleared {
        at: DateTime<Utc>,
    },
    SessionCompleted {
        duration_secs: u64,
        distractions: u32,
        xp_earned: u64,
        coins_earned: u64,
        at: DateTime<Utc>,
    },
    QuizAnswerRevealed {
        question_index: usize,
        selected: usize,
        correct_answer: usize,
        correct: bool,
        at: DateTime<Utc>,
    },
    QuizAdvanced {
        question_index: usize,
        at: DateTime<Utc>,
    },
    QuizCompleted {
        score: u32,
        xp_earned: u64,
        coins_earned: u64,
        at: DateTime<Utc>,
    },
    QuizCancelled {
        at: DateTime<Utc>,
    },
    LevelUp {
        from: u32,
        to: u32,
        at: DateTime<Utc>,
    },
    ItemPurchased {
        item_id: String,
        price: u64,
        balance: u64,
        at: DateTime<Utc>,
    },
    ItemEquipped {
        item_id: String,
        category: ItemCategory,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        elapsed_secs: u64,
        distractions: u32,
        visibility: Visibility,
        danger_zone: bool,
        focus_score: i64,
        at: DateTime<Utc>,
    },
}
