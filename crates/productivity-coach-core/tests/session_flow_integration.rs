//! Integration tests for the session -> reward -> ledger flow.

use std::time::Duration;

use productivity_coach_core::quiz::answer_key;
use productivity_coach_core::{
    Config, Dashboard, Event, FocusSession, QuizEngine, QuizStep, SessionTracker, TimerState,
    Visibility,
};

fn run_ticks(tracker: &mut SessionTracker, secs: u64) {
    for _ in 0..secs {
        tracker.tick();
    }
}

#[test]
fn test_full_session_workflow() {
    let mut dashboard = Dashboard::demo("Productivity Hero");
    let mut tracker = SessionTracker::default();

    tracker.start();
    run_ticks(&mut tracker, 60);
    tracker.visibility_changed_at(Visibility::Hidden, 60_000);
    run_ticks(&mut tracker, 65);
    tracker.visibility_changed_at(Visibility::Visible, 125_000);

    let record = tracker.stop().expect("non-empty session");
    assert_eq!(record.duration_secs, 125);
    assert_eq!(record.distractions, 1);

    let applied = dashboard.complete_session(record).unwrap();
    assert_eq!(applied.reward.xp_earned, 18);
    assert_eq!(applied.reward.coins_earned, 9);
    assert_eq!(dashboard.profile().coins, 1209);
    assert_eq!(dashboard.profile().total_xp(), 4268);
    assert_eq!(tracker.state(), TimerState::Idle);
}

#[test]
fn test_pause_hides_distractions() {
    let mut tracker = SessionTracker::default();
    tracker.start();
    run_ticks(&mut tracker, 30);
    tracker.pause();

    tracker.visibility_changed_at(Visibility::Hidden, 0);
    run_ticks(&mut tracker, 100);
    tracker.visibility_changed_at(Visibility::Visible, 1_000);

    tracker.start();
    run_ticks(&mut tracker, 30);
    let record = tracker.stop().unwrap();
    assert_eq!(record.duration_secs, 60);
    assert_eq!(record.distractions, 0);
}

#[test]
fn test_empty_stop_leaves_dashboard_untouched() {
    let dashboard = Dashboard::demo("Productivity Hero");
    let before = dashboard.profile().clone();
    let mut tracker = SessionTracker::default();
    tracker.start();
    assert!(tracker.stop().is_none());
    assert_eq!(dashboard.profile(), &before);
}

#[test]
fn test_quiz_then_shopping() {
    let mut dashboard = Dashboard::demo("Productivity Hero");
    let mut quiz = QuizEngine::default();
    let mut answers = answer_key(quiz.questions());
    answers[0] = (answers[0] + 1) % 4;

    let mut now = 0;
    let mut outcome = None;
    for answer in answers {
        quiz.select(answer).unwrap();
        quiz.submit_at(now);
        now += 1500;
        if let Some(QuizStep::Completed(o)) = quiz.poll_at(now) {
            outcome = Some(o);
        }
    }
    let outcome = outcome.expect("quiz finished");
    assert_eq!(outcome.score, 4);

    let applied = dashboard.complete_quiz(&outcome);
    assert_eq!(applied.reward.xp_earned, 200);
    assert_eq!(dashboard.profile().coins, 1300);

    // 1300 coins buys the sunset theme with 50 left over.
    let event = dashboard.purchase("theme-sunset").unwrap();
    assert!(matches!(event, Event::ItemPurchased { balance: 50, .. }));
    assert!(dashboard.purchase("theme-ocean").is_err());
    dashboard.equip("theme-sunset").unwrap();
    assert_eq!(
        dashboard
            .catalog()
            .equipped(productivity_coach_core::ItemCategory::Theme)
            .unwrap()
            .id,
        "theme-sunset"
    );
}

#[tokio::test(start_paused = true)]
async fn test_live_session_with_configured_ticker() {
    let mut cfg = Config::default();
    cfg.set("timer.tick_interval_ms", "250").unwrap();

    let mut session = FocusSession::new(cfg.tracker(), cfg.tick_interval());
    session.start();
    let started = tokio::time::Instant::now();
    while session.tracker().elapsed_secs() < 4 {
        session.next_tick().await;
    }
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(started.elapsed() < Duration::from_millis(1250));

    let record = session.stop().unwrap();
    let mut dashboard = Dashboard::demo("Productivity Hero");
    // Four seconds is less than a minute: a session, but no reward.
    let applied = dashboard.complete_session(record).unwrap();
    assert_eq!(applied.reward.xp_earned, 0);
    assert_eq!(dashboard.today().sessions_completed, 4);
}
