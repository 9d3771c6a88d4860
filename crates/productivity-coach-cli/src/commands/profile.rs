use clap::Subcommand;
use productivity_coach_core::{Config, ItemCategory, TodayReport};

use super::{dashboard, print_json};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Profile with level progress
    Show,
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's stats
    Today {
        /// Print the formatted report instead of raw numbers
        #[arg(long)]
        report: bool,
    },
}

pub fn run_profile(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let dashboard = dashboard(&config);

    match action {
        ProfileAction::Show => {
            let profile = dashboard.profile();
            print_json(&serde_json::json!({
                "profile": profile,
                "progress": profile.level_progress(),
                "equipped": {
                    "theme": dashboard.catalog().equipped(ItemCategory::Theme).map(|i| &i.id),
                    "avatar": dashboard.catalog().equipped(ItemCategory::Avatar).map(|i| &i.id),
                    "music": dashboard.catalog().equipped(ItemCategory::Music).map(|i| &i.id),
                },
            }))
        }
    }
}

pub fn run_stats(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let dashboard = dashboard(&config);

    match action {
        StatsAction::Today { report } => {
            if report {
                print_json(&TodayReport::new(dashboard.today()))
            } else {
                print_json(dashboard.today())
            }
        }
    }
}
