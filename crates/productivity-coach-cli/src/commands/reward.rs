use clap::Subcommand;
use productivity_coach_core::rewards::{focus_multiplier, focus_score, session_rewards};

use super::print_json;

#[derive(Subcommand)]
pub enum RewardAction {
    /// Compute XP and coins for a session
    Calc {
        /// Session length in seconds
        #[arg(long)]
        duration: u64,
        /// Number of distractions
        #[arg(long, default_value = "0")]
        distractions: u32,
    },
}

pub fn run(action: RewardAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RewardAction::Calc {
            duration,
            distractions,
        } => {
            let reward = session_rewards(duration, distractions);
            print_json(&serde_json::json!({
                "duration_secs": duration,
                "distractions": distractions,
                "focus_multiplier": focus_multiplier(distractions),
                "focus_score": focus_score(duration, distractions),
                "xp_earned": reward.xp_earned,
                "coins_earned": reward.coins_earned,
            }))
        }
    }
}
