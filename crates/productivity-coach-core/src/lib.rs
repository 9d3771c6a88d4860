//! # ProductivityCoach Core Library
//!
//! Session and reward accounting for the ProductivityCoach study dashboard.
//! The presentation layer (desktop UI or the bundled CLI) feeds this crate
//! plain events (ticks, visibility changes, button presses) and renders the
//! values it returns. No domain state is persisted.
//!
//! ## Architecture
//!
//! - **Timer**: a tick-driven session tracker plus a cancellable tokio
//!   ticker that delivers one tick per second
//! - **Rewards**: pure XP/coin math for sessions and quizzes
//! - **Progression**: profile levels and today's aggregate stats
//! - **Quiz**: a five-question quiz with a delayed, fire-once advance
//! - **Catalog**: shop items with per-category equip exclusivity
//! - **Team**: roster and XP leaderboard
//!
//! ## Key Components
//!
//! - [`SessionTracker`]: focus session state machine
//! - [`Dashboard`]: the ledger that applies each reward exactly once
//! - [`QuizEngine`]: quiz state machine
//! - [`Config`]: timing and display configuration

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod insights;
pub mod progression;
pub mod quiz;
pub mod rewards;
pub mod storage;
pub mod team;
pub mod timer;

pub use catalog::{Catalog, ItemCategory, ShopItem};
pub use dashboard::{Applied, Dashboard, DashboardObserver};
pub use error::{CatalogError, ConfigError, CoreError, QuizError, TeamError};
pub use events::Event;
pub use insights::{format_clock, format_focus_time, ScoreTier, TodayReport};
pub use progression::{apply_reward, level_for_xp, LevelProgress, TodayStats, UserProfile};
pub use quiz::{QuizEngine, QuizOutcome, QuizPhase, QuizQuestion, QuizStep};
pub use rewards::{focus_score, quiz_rewards, session_rewards, RewardEvent};
pub use storage::Config;
pub use team::{Standing, Team, TeamMember};
pub use timer::{FocusSession, SessionRecord, SessionTicker, SessionTracker, TimerState, Visibility};
