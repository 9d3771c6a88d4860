use clap::Subcommand;
use productivity_coach_core::Config;

use super::{dashboard, print_json};

#[derive(Subcommand)]
pub enum TeamAction {
    /// Members ranked by XP
    Leaderboard,
    /// Show the invite code and link
    Invite,
}

pub fn run(action: TeamAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let dashboard = dashboard(&config);
    let team = dashboard.team();

    match action {
        TeamAction::Leaderboard => print_json(&serde_json::json!({
            "team": team.name,
            "visibility": team.visibility,
            "standings": team.leaderboard(),
        })),
        TeamAction::Invite => {
            let link = team.invite_link(&config.team.invite_base_url)?;
            print_json(&serde_json::json!({
                "invite_code": team.invite_code,
                "invite_link": link.as_str(),
            }))
        }
    }
}
