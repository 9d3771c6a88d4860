//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "productivity-coach-cli", "--"])
        .args(args)
        .env("PRODUCTIVITY_COACH_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).expect("stdout should be JSON")
}

#[test]
fn test_reward_calc() {
    let out = run_json(&["reward", "calc", "--duration", "125", "--distractions", "1"]);
    assert_eq!(out["xp_earned"], 18);
    assert_eq!(out["coins_earned"], 9);
    assert_eq!(out["focus_score"], 76);
}

#[test]
fn test_session_simulate_with_distraction() {
    let out = run_json(&[
        "session",
        "simulate",
        "--duration",
        "125",
        "--distraction-at",
        "30",
    ]);
    assert_eq!(out["reward"]["xp_earned"], 18);
    assert_eq!(out["profile"]["coins"], 1209);
    assert_eq!(out["today"]["sessions_completed"], 4);
}

#[test]
fn test_session_simulate_empty() {
    let out = run_json(&["session", "simulate", "--duration", "0"]);
    assert!(out["reward"].is_null());
    assert_eq!(out["profile"]["coins"], 1200);
}

#[test]
fn test_session_live_short() {
    let out = run_json(&["session", "live", "--seconds", "2", "--tick-ms", "10"]);
    assert_eq!(out["final"]["elapsed_secs"], 2);
}

#[test]
fn test_quiz_take() {
    let out = run_json(&["quiz", "take", "--answers", "C,B,A,C,A"]);
    assert_eq!(out["outcome"]["score"], 4);
    assert_eq!(out["outcome"]["xp_earned"], 200);
    assert_eq!(out["outcome"]["coins_earned"], 100);
}

#[test]
fn test_quiz_take_wrong_count_fails() {
    let (_, stderr, code) = run_cli(&["quiz", "take", "--answers", "0,1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("expected 5 answers"));
}

#[test]
fn test_shop_list_category() {
    let out = run_json(&["shop", "list", "--category", "music"]);
    assert_eq!(out["items"].as_array().unwrap().len(), 4);
    assert_eq!(out["coins"], 1200);
}

#[test]
fn test_shop_buy_and_equip() {
    let out = run_json(&["shop", "buy", "avatar-wizard", "--equip"]);
    assert_eq!(out["coins"], 800);
    assert_eq!(out["events"][1]["type"], "ItemEquipped");
}

#[test]
fn test_shop_buy_insufficient_funds() {
    let (_, stderr, code) = run_cli(&["shop", "buy", "theme-ocean", "theme-sunset"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Insufficient funds"));
}

#[test]
fn test_shop_equip_not_owned() {
    let (_, stderr, code) = run_cli(&["shop", "equip", "theme-forest"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("not owned"));
}

#[test]
fn test_team_leaderboard() {
    let out = run_json(&["team", "leaderboard"]);
    assert_eq!(out["standings"][0]["name"], "Alex Chen");
    assert_eq!(out["standings"][0]["crowned"], true);
}

#[test]
fn test_profile_show() {
    let out = run_json(&["profile", "show"]);
    assert_eq!(out["profile"]["level"], 5);
    assert_eq!(out["equipped"]["music"], "music-lofi");
}

#[test]
fn test_stats_today_report() {
    let out = run_json(&["stats", "today", "--report"]);
    assert_eq!(out["focus_time"], "39m");
}

#[test]
fn test_config_get() {
    let (stdout, _, code) = run_cli(&["config", "get", "quiz.advance_delay_ms"]);
    assert_eq!(code, 0, "Config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key() {
    let (_, _, code) = run_cli(&["config", "get", "quiz.missing"]);
    assert_eq!(code, 1);
}
