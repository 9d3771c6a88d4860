//! Reward calculation for finished focus sessions and quizzes.
//!
//! Everything here is a pure function of its inputs. The arithmetic keeps
//! the exact floor semantics of the dashboard: the focus multiplier is an
//! `f64` and every product is floored, never rounded.

use serde::{Deserialize, Serialize};

/// XP awarded per whole focused minute before the distraction penalty.
pub const XP_PER_MINUTE: u64 = 10;
/// Coins awarded per whole focused minute before the distraction penalty.
pub const COINS_PER_MINUTE: u64 = 5;
/// Multiplier lost per distraction.
pub const PENALTY_PER_DISTRACTION: f64 = 0.1;
/// The multiplier never drops below this.
pub const MIN_FOCUS_MULTIPLIER: f64 = 0.5;
/// Seconds deducted from the live focus score per distraction.
pub const FOCUS_SCORE_PENALTY_SECS: i64 = 30;

pub const QUIZ_XP_PER_CORRECT: u64 = 50;
pub const QUIZ_COINS_PER_CORRECT: u64 = 25;

/// XP and coins produced by one completed session or quiz.
///
/// Applied exactly once to the profile and today's stats; see
/// [`crate::progression::apply_reward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewardEvent {
    pub xp_earned: u64,
    pub coins_earned: u64,
}

/// `max(0.5, 1 - distractions * 0.1)`
pub fn focus_multiplier(distractions: u32) -> f64 {
    (1.0 - distractions as f64 * PENALTY_PER_DISTRACTION).max(MIN_FOCUS_MULTIPLIER)
}

/// Rewards for a session of `duration_secs` with `distractions` penalties.
///
/// Only whole minutes count: 59 seconds earns nothing.
pub fn session_rewards(duration_secs: u64, distractions: u32) -> RewardEvent {
    let minutes = duration_secs / 60;
    let multiplier = focus_multiplier(distractions);
    let base_xp = minutes * XP_PER_MINUTE;
    let base_coins = minutes * COINS_PER_MINUTE;
    RewardEvent {
        xp_earned: (base_xp as f64 * multiplier).floor() as u64,
        coins_earned: (base_coins as f64 * multiplier).floor() as u64,
    }
}

/// Rewards for a finished quiz with `score` correct answers.
pub fn quiz_rewards(score: u32) -> RewardEvent {
    RewardEvent {
        xp_earned: score as u64 * QUIZ_XP_PER_CORRECT,
        coins_earned: score as u64 * QUIZ_COINS_PER_CORRECT,
    }
}

/// Live focus score shown while a session runs.
///
/// `round((elapsed - distractions * 30) / elapsed * 100)`, or 100 for an
/// empty session. The value is left unclamped: an early
/// distraction drives it negative.
pub fn focus_score(elapsed_secs: u64, distractions: u32) -> i64 {
    if elapsed_secs == 0 {
        return 100;
    }
    let elapsed = elapsed_secs as f64;
    let penalised = elapsed - distractions as f64 * FOCUS_SCORE_PENALTY_SECS as f64;
    round_half_up(penalised / elapsed * 100.0)
}

/// Per-session score folded into today's running average: `100 - 10 * distractions`.
pub fn session_focus_score(distractions: u32) -> i64 {
    100 - distractions as i64 * 10
}

/// Rounds .5 toward positive infinity, so -2.5 becomes -2.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
