use clap::Subcommand;
use productivity_coach_core::{Config, ItemCategory};

use super::{dashboard, print_json};

#[derive(Subcommand)]
pub enum ShopAction {
    /// List catalog items
    List {
        /// Only show one category (theme, avatar, music)
        #[arg(long)]
        category: Option<ItemCategory>,
    },
    /// Buy one or more items, in order, from the starting balance
    Buy {
        /// Item ids (e.g. "theme-forest")
        #[arg(required = true)]
        ids: Vec<String>,
        /// Equip each item right after buying it
        #[arg(long)]
        equip: bool,
    },
    /// Equip an owned item
    Equip {
        /// Item id
        id: String,
    },
}

pub fn run(action: ShopAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut dashboard = dashboard(&config);

    match action {
        ShopAction::List { category } => {
            let items: Vec<_> = dashboard
                .catalog()
                .items()
                .iter()
                .filter(|i| category.map_or(true, |c| i.category == c))
                .collect();
            print_json(&serde_json::json!({
                "coins": dashboard.profile().coins,
                "items": items,
            }))
        }
        ShopAction::Buy { ids, equip } => {
            let mut events = Vec::new();
            for id in &ids {
                events.push(dashboard.purchase(id)?);
                if equip {
                    events.push(dashboard.equip(id)?);
                }
            }
            print_json(&serde_json::json!({
                "events": events,
                "coins": dashboard.profile().coins,
            }))
        }
        ShopAction::Equip { id } => {
            let event = dashboard.equip(&id)?;
            print_json(&event)
        }
    }
}
