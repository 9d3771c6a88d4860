//! The dashboard ledger: profile, today's stats, shop and team in one
//! explicit mutable object.
//!
//! Each completed session or quiz goes through exactly one `complete_*`
//! call, which applies the reward once and notifies every registered
//! [`DashboardObserver`] once. Failed shop operations change nothing and
//! notify nobody.

use chrono::Utc;

use crate::catalog::{Catalog, ShopItem};
use crate::error::CatalogError;
use crate::events::Event;
use crate::progression::{apply_reward, TodayStats, UserProfile};
use crate::quiz::QuizOutcome;
use crate::rewards::{session_rewards, RewardEvent};
use crate::team::{Team, SELF_MEMBER_ID};
use crate::timer::SessionRecord;

/// Callbacks for the presentation layer. All methods default to no-ops.
pub trait DashboardObserver {
    fn on_session_complete(&mut self, _record: &SessionRecord, _reward: &RewardEvent) {}
    fn on_quiz_complete(&mut self, _score: u32, _xp: u64, _coins: u64) {}
    fn on_purchase(&mut self, _item: &ShopItem) {}
    fn on_equip(&mut self, _item: &ShopItem) {}
}

/// Result of applying one reward to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub reward: RewardEvent,
    pub events: Vec<Event>,
}

pub struct Dashboard {
    profile: UserProfile,
    today: TodayStats,
    catalog: Catalog,
    team: Team,
    observers: Vec<Box<dyn DashboardObserver>>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("profile", &self.profile)
            .field("today", &self.today)
            .field("catalog", &self.catalog)
            .field("team", &self.team)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Dashboard {
    pub fn new(profile: UserProfile, today: TodayStats, catalog: Catalog, team: Team) -> Self {
        let mut dashboard = Self {
            profile,
            today,
            catalog,
            team,
            observers: Vec::new(),
        };
        dashboard.sync_team();
        dashboard
    }

    /// The seeded mock dashboard.
    pub fn demo(name: impl Into<String>) -> Self {
        Self::new(
            UserProfile::demo(name),
            TodayStats::demo(),
            Catalog::default(),
            Team::demo(),
        )
    }

    pub fn subscribe(&mut self, observer: Box<dyn DashboardObserver>) {
        self.observers.push(observer);
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn today(&self) -> &TodayStats {
        &self.today
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Reward a finished session. Zero-length records earn nothing and are
    /// ignored.
    pub fn complete_session(&mut self, record: SessionRecord) -> Option<Applied> {
        if record.duration_secs == 0 {
            return None;
        }
        let reward = session_rewards(record.duration_secs, record.distractions);
        let mut events = vec![Event::SessionCompleted {
            duration_secs: record.duration_secs,
            distractions: record.distractions,
            xp_earned: reward.xp_earned,
            coins_earned: reward.coins_earned,
            at: Utc::now(),
        }];
        events.extend(self.credit(&reward));
        self.today = self
            .today
            .record_session(record.duration_secs, record.distractions, &reward);

        tracing::info!(
            duration_secs = record.duration_secs,
            distractions = record.distractions,
            xp = reward.xp_earned,
            coins = reward.coins_earned,
            "session completed"
        );
        for observer in &mut self.observers {
            observer.on_session_complete(&record, &reward);
        }
        Some(Applied { reward, events })
    }

    pub fn complete_quiz(&mut self, outcome: &QuizOutcome) -> Applied {
        let reward = outcome.reward();
        let mut events = vec![Event::QuizCompleted {
            score: outcome.score,
            xp_earned: reward.xp_earned,
            coins_earned: reward.coins_earned,
            at: Utc::now(),
        }];
        events.extend(self.credit(&reward));
        self.today = self.today.record_quiz(&reward);

        for observer in &mut self.observers {
            observer.on_quiz_complete(outcome.score, reward.xp_earned, reward.coins_earned);
        }
        Applied { reward, events }
    }

    pub fn purchase(&mut self, item_id: &str) -> Result<Event, CatalogError> {
        let item = self
            .catalog
            .purchase(item_id, &mut self.profile.coins)?
            .clone();
        for observer in &mut self.observers {
            observer.on_purchase(&item);
        }
        Ok(Event::ItemPurchased {
            item_id: item.id,
            price: item.price,
            balance: self.profile.coins,
            at: Utc::now(),
        })
    }

    pub fn equip(&mut self, item_id: &str) -> Result<Event, CatalogError> {
        let item = self.catalog.equip(item_id)?.clone();
        for observer in &mut self.observers {
            observer.on_equip(&item);
        }
        Ok(Event::ItemEquipped {
            item_id: item.id,
            category: item.category,
            at: Utc::now(),
        })
    }

    /// Apply a reward to the profile, returning a level-up event if any.
    fn credit(&mut self, reward: &RewardEvent) -> Option<Event> {
        let before = self.profile.level();
        self.profile = apply_reward(&self.profile, reward);
        self.sync_team();
        let after = self.profile.level();
        (after > before).then(|| {
            tracing::info!(from = before, to = after, "level up");
            Event::LevelUp {
                from: before,
                to: after,
                at: Utc::now(),
            }
        })
    }

    fn sync_team(&mut self) {
        if let Err(e) = self.team.sync_member(SELF_MEMBER_ID, &self.profile) {
            tracing::debug!(error = %e, "profile not on team roster");
        }
    }
}
