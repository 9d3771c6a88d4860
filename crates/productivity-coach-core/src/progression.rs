//! Progression ledger: the user profile and today's aggregate stats.
//!
//! Levels are never stored independently of XP. `level` is recomputed from
//! `total_xp` every time a reward lands, so the invariant
//! `level = total_xp / 1000 + 1` holds for every profile this module returns.
//!
//! Applying rewards is not idempotent. Delivering the same [`RewardEvent`]
//! twice counts it twice; the [`Dashboard`](crate::dashboard::Dashboard)
//! guarantees one delivery per completed session or quiz.

use serde::{Deserialize, Serialize};

use crate::rewards::{round_half_up, session_focus_score, RewardEvent};

/// XP needed to climb one level.
pub const XP_PER_LEVEL: u64 = 1000;

/// `floor(total_xp / 1000) + 1`
pub fn level_for_xp(total_xp: u64) -> u32 {
    (total_xp / XP_PER_LEVEL + 1) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredProfile")]
pub struct UserProfile {
    pub name: String,
    level: u32,
    pub xp: u64,
    total_xp: u64,
    pub coins: u64,
    /// Consecutive study days.
    pub streak: u32,
    pub avatar: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, total_xp: u64, coins: u64, streak: u32) -> Self {
        Self {
            name: name.into(),
            level: level_for_xp(total_xp),
            xp: total_xp,
            total_xp,
            coins,
            streak,
            avatar: "robot".to_string(),
        }
    }

    /// The seeded dashboard user.
    pub fn demo(name: impl Into<String>) -> Self {
        Self::new(name, 4250, 1200, 5)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::for_profile(self)
    }
}

/// Wire shape of [`UserProfile`]. Any stored `level` is ignored and
/// recomputed from `total_xp`.
#[derive(Deserialize)]
struct StoredProfile {
    name: String,
    xp: u64,
    total_xp: u64,
    coins: u64,
    streak: u32,
    avatar: String,
}

impl From<StoredProfile> for UserProfile {
    fn from(stored: StoredProfile) -> Self {
        Self {
            name: stored.name,
            level: level_for_xp(stored.total_xp),
            xp: stored.xp,
            total_xp: stored.total_xp,
            coins: stored.coins,
            streak: stored.streak,
            avatar: stored.avatar,
        }
    }
}

/// How far the profile is into its current level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub next_level: u32,
    /// `xp % 1000`
    pub current_level_xp: u64,
    /// XP label shown beside the bar: `level * 1000`.
    pub xp_to_next_level: u64,
    pub percent: f64,
}

impl LevelProgress {
    fn for_profile(profile: &UserProfile) -> Self {
        let current_level_xp = profile.xp % XP_PER_LEVEL;
        Self {
            level: profile.level,
            next_level: profile.level + 1,
            current_level_xp,
            xp_to_next_level: profile.level as u64 * XP_PER_LEVEL,
            percent: current_level_xp as f64 / XP_PER_LEVEL as f64 * 100.0,
        }
    }
}

/// Add a reward to `profile` and re-derive its level.
pub fn apply_reward(profile: &UserProfile, reward: &RewardEvent) -> UserProfile {
    let total_xp = profile.total_xp + reward.xp_earned;
    UserProfile {
        xp: profile.xp + reward.xp_earned,
        total_xp,
        coins: profile.coins + reward.coins_earned,
        level: level_for_xp(total_xp),
        ..profile.clone()
    }
}

/// Aggregate numbers for the "today" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
    pub sessions_completed: u32,
    /// Seconds.
    pub total_focus_time: u64,
    pub average_focus_score: i64,
    /// Longest single session today, in seconds.
    pub best_streak: u64,
    pub xp_earned: u64,
}

impl Default for TodayStats {
    fn default() -> Self {
        Self {
            sessions_completed: 0,
            total_focus_time: 0,
            average_focus_score: 100,
            best_streak: 0,
            xp_earned: 0,
        }
    }
}

impl TodayStats {
    pub fn demo() -> Self {
        Self {
            sessions_completed: 3,
            total_focus_time: 2340,
            average_focus_score: 87,
            best_streak: 1800,
            xp_earned: 350,
        }
    }

    /// Fold a completed session into the aggregate.
    ///
    /// The average is a running blend, `round((previous + session) / 2)`,
    /// not a true mean over all sessions.
    pub fn record_session(
        &self,
        duration_secs: u64,
        distractions: u32,
        reward: &RewardEvent,
    ) -> Self {
        let blended = (self.average_focus_score + session_focus_score(distractions)) as f64 / 2.0;
        Self {
            sessions_completed: self.sessions_completed + 1,
            total_focus_time: self.total_focus_time + duration_secs,
            average_focus_score: round_half_up(blended),
            best_streak: self.best_streak.max(duration_secs),
            xp_earned: self.xp_earned + reward.xp_earned,
        }
    }

    pub fn record_quiz(&self, reward: &RewardEvent) -> Self {
        Self {
            xp_earned: self.xp_earned + reward.xp_earned,
            ..self.clone()
        }
    }
}
