use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "productivity-coach-cli", version, about = "ProductivityCoach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reward calculation
    Reward {
        #[command(subcommand)]
        action: commands::reward::RewardAction,
    },
    /// Focus sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Knowledge quiz
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Rewards shop
    Shop {
        #[command(subcommand)]
        action: commands::shop::ShopAction,
    },
    /// Study team
    Team {
        #[command(subcommand)]
        action: commands::team::TeamAction,
    },
    /// Profile and level progress
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Today's focus stats
    Stats {
        #[command(subcommand)]
        action: commands::profile::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Reward { action } => commands::reward::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Shop { action } => commands::shop::run(action),
        Commands::Team { action } => commands::team::run(action),
        Commands::Profile { action } => commands::profile::run_profile(action),
        Commands::Stats { action } => commands::profile::run_stats(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
