mod session;
mod ticker;
mod tracker;

pub use session::FocusSession;
pub use ticker::{SessionTicker, DEFAULT_TICK_INTERVAL};
pub use tracker::{
    SessionRecord, SessionTracker, TimerState, Visibility, DEFAULT_DANGER_ZONE_CLEAR_MS,
};

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
