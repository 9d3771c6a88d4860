use std::time::Duration;

use clap::Subcommand;
use productivity_coach_core::{format_clock, Config, Event, FocusSession, Visibility};

use super::{dashboard, print_json};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Replay a session with manual ticks and apply its rewards
    Simulate {
        /// Session length in seconds
        #[arg(long)]
        duration: u64,
        /// Second at which the window loses focus for one second (repeatable)
        #[arg(long = "distraction-at")]
        distraction_at: Vec<u64>,
    },
    /// Run a real session on the ticker until the target or Ctrl-C
    Live {
        /// Stop after this many seconds of focus
        #[arg(long)]
        seconds: u64,
        /// Override the configured tick interval
        #[arg(long)]
        tick_ms: Option<u64>,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        SessionAction::Simulate {
            duration,
            distraction_at,
        } => simulate(&config, duration, &distraction_at),
        SessionAction::Live { seconds, tick_ms } => {
            let interval = tick_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.tick_interval());
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(live(&config, seconds, interval))
        }
    }
}

fn simulate(
    config: &Config,
    duration: u64,
    distraction_at: &[u64],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = config.tracker();
    let mut events: Vec<Event> = Vec::new();
    let mut now_ms = 0u64;

    events.extend(tracker.start());
    for second in 0..duration {
        let distracted = distraction_at.contains(&second);
        if distracted {
            events.extend(tracker.visibility_changed_at(Visibility::Hidden, now_ms));
        }
        tracker.tick();
        now_ms += 1000;
        if distracted {
            events.extend(tracker.visibility_changed_at(Visibility::Visible, now_ms));
        }
        events.extend(tracker.poll_danger_zone_at(now_ms));
    }
    events.push(tracker.snapshot());

    let mut dashboard = dashboard(config);
    let applied = tracker.stop().and_then(|record| dashboard.complete_session(record));
    if let Some(applied) = &applied {
        events.extend(applied.events.iter().cloned());
    }

    print_json(&serde_json::json!({
        "reward": applied.map(|a| a.reward),
        "events": events,
        "profile": dashboard.profile(),
        "today": dashboard.today(),
    }))
}

async fn live(
    config: &Config,
    seconds: u64,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = FocusSession::new(config.tracker(), interval);
    session.start();

    while session.tracker().elapsed_secs() < seconds {
        tokio::select! {
            elapsed = session.next_tick() => match elapsed {
                Some(elapsed) => tracing::debug!(elapsed, "tick"),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, stopping session");
                break;
            }
        }
    }

    let snapshot = session.tracker().snapshot();
    let mut dashboard = dashboard(config);
    let applied = session
        .stop()
        .and_then(|record| dashboard.complete_session(record));

    print_json(&serde_json::json!({
        "final": snapshot,
        "clock": format_clock(session.tracker().elapsed_secs()),
        "reward": applied.map(|a| a.reward),
        "profile": dashboard.profile(),
    }))
}
