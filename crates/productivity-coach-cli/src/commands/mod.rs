pub mod config;
pub mod profile;
pub mod quiz;
pub mod reward;
pub mod session;
pub mod shop;
pub mod team;

use productivity_coach_core::{
    Config, Dashboard, DashboardObserver, RewardEvent, SessionRecord, ShopItem,
};

/// Forwards dashboard callbacks to the log.
struct LogObserver;

impl DashboardObserver for LogObserver {
    fn on_session_complete(&mut self, record: &SessionRecord, reward: &RewardEvent) {
        tracing::info!(
            duration_secs = record.duration_secs,
            xp = reward.xp_earned,
            coins = reward.coins_earned,
            "study session complete"
        );
    }

    fn on_quiz_complete(&mut self, score: u32, xp: u64, coins: u64) {
        tracing::info!(score, xp, coins, "quiz mastery");
    }

    fn on_purchase(&mut self, item: &ShopItem) {
        tracing::info!(item = %item.name, price = item.price, "purchase successful");
    }

    fn on_equip(&mut self, item: &ShopItem) {
        tracing::info!(item = %item.name, "item equipped");
    }
}

/// A fresh mock dashboard. Nothing carries over between invocations.
pub fn dashboard(config: &Config) -> Dashboard {
    let mut dashboard = Dashboard::demo(config.profile.name.clone());
    dashboard.subscribe(Box::new(LogObserver));
    dashboard
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
