//! Display helpers for the focus-insights panel and the session clock.

use serde::{Deserialize, Serialize};

use crate::progression::TodayStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsFocus,
}

impl ScoreTier {
    pub fn from_score(score: i64) -> Self {
        if score >= 90 {
            ScoreTier::Excellent
        } else if score >= 70 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsFocus
        }
    }
}

/// `"1h 5m"`, or just `"39m"` under an hour.
pub fn format_focus_time(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Today's report as rendered by the insights panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayReport {
    pub sessions: u32,
    pub focus_time: String,
    pub average_score: i64,
    pub score_tier: ScoreTier,
    pub best_streak: String,
    pub xp_earned: u64,
}

impl TodayReport {
    pub fn new(stats: &TodayStats) -> Self {
        Self {
            sessions: stats.sessions_completed,
            focus_time: format_focus_time(stats.total_focus_time),
            average_score: stats.average_focus_score,
            score_tier: ScoreTier::from_score(stats.average_focus_score),
            best_streak: format_focus_time(stats.best_streak),
            xp_earned: stats.xp_earned,
        }
    }
}
