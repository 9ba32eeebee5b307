//! Unit tests for the per-host command dispatch service.
//!
//! The executor and reporter are both recording mocks, so every test can
//! assert on the exact sequence of remote calls and report events.

#![allow(clippy::expect_used)]

use fleet_cli::application::services::dispatch::dispatch;
use fleet_cli::domain::{ApplicationSet, CommandKind, HOST_REGISTRY, default_targets};

use crate::mocks::{RecordingExecutor, RecordingReporter};

fn apps(token: &str) -> ApplicationSet {
    ApplicationSet::resolve(token).expect("valid application token")
}

// ── Sequencing ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_on_default_targets_queries_both_services_per_host() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Status,
        apps("all"),
        default_targets(),
        &executor,
        &reporter,
    )
    .await;

    let mut expected: Vec<(String, String)> = Vec::new();
    for host in HOST_REGISTRY {
        expected.push(((*host).to_string(), "docker ps --filter name=agora".to_string()));
        expected.push(((*host).to_string(), "docker ps --filter name=stoa".to_string()));
    }
    assert_eq!(executor.recorded_calls(), expected);
}

#[tokio::test]
async fn test_dispatch_emits_one_header_per_host_in_registry_order() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Status,
        apps("agora"),
        default_targets(),
        &executor,
        &reporter,
    )
    .await;

    let headers: Vec<String> = reporter
        .recorded_events()
        .into_iter()
        .filter(|e| e.starts_with("host "))
        .collect();
    assert_eq!(
        headers,
        vec![
            "host na-001.bosagora.io",
            "host na-002.bosagora.io",
            "host eu-002.bosagora.io",
        ]
    );
}

#[tokio::test]
async fn test_update_pulls_both_images_before_restarting_either_service() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Update,
        apps("all"),
        &["na-001.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let commands: Vec<String> = executor
        .recorded_calls()
        .into_iter()
        .map(|(_, command)| command)
        .collect();
    assert_eq!(
        commands,
        vec![
            "docker pull bosagora/agora:latest",
            "docker pull bosagora/stoa:latest",
            "docker restart agora",
            "docker restart stoa",
        ]
    );
}

#[tokio::test]
async fn test_reset_clears_cache_then_pulls_then_restarts() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Reset,
        apps("all"),
        &["eu-002.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let commands: Vec<String> = executor
        .recorded_calls()
        .into_iter()
        .map(|(_, command)| command)
        .collect();
    assert_eq!(
        commands,
        vec![
            "rm -rf ~/agora/.cache",
            "docker pull bosagora/agora:latest",
            "docker pull bosagora/stoa:latest",
            "docker restart agora",
            "docker restart stoa",
        ]
    );
}

#[tokio::test]
async fn test_reset_for_stoa_only_has_no_cache_clear_step() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Reset,
        apps("stoa"),
        &["na-001.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let commands: Vec<String> = executor
        .recorded_calls()
        .into_iter()
        .map(|(_, command)| command)
        .collect();
    assert_eq!(
        commands,
        vec!["docker pull bosagora/stoa:latest", "docker restart stoa"]
    );
}

#[tokio::test]
async fn test_hosts_are_fully_processed_one_at_a_time() {
    let executor = RecordingExecutor::new_ok();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Update,
        apps("agora"),
        &["na-001.bosagora.io", "na-002.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let hosts: Vec<String> = executor
        .recorded_calls()
        .into_iter()
        .map(|(host, _)| host)
        .collect();
    assert_eq!(
        hosts,
        vec![
            "na-001.bosagora.io",
            "na-001.bosagora.io",
            "na-002.bosagora.io",
            "na-002.bosagora.io",
        ]
    );
}

// ── Failure handling ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_failed_pull_never_skips_later_steps_or_hosts() {
    let executor = RecordingExecutor::failing_on("docker pull");
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Update,
        apps("all"),
        &["na-001.bosagora.io", "na-002.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    // Two pulls and two restarts per host, all attempted.
    assert_eq!(executor.recorded_calls().len(), 8);

    let events = reporter.recorded_events();
    let failures = events.iter().filter(|e| e.starts_with("fail ")).count();
    let successes = events.iter().filter(|e| e.starts_with("ok ")).count();
    assert_eq!(failures, 4, "every pull fails: {events:?}");
    assert_eq!(successes, 4, "every restart still runs: {events:?}");
}

#[tokio::test]
async fn test_transport_error_is_reported_and_dispatch_continues() {
    let executor = RecordingExecutor::transport_down();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Restart,
        apps("all"),
        default_targets(),
        &executor,
        &reporter,
    )
    .await;

    assert_eq!(executor.recorded_calls().len(), 6);
    let events = reporter.recorded_events();
    assert_eq!(events.iter().filter(|e| e.starts_with("fail ")).count(), 6);
    assert!(!events.iter().any(|e| e.starts_with("ok ")));
}

#[tokio::test]
async fn test_remote_failure_detail_carries_exit_code_and_output() {
    let executor = RecordingExecutor::failing_on("docker restart");
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Restart,
        apps("agora"),
        &["eu-002.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let events = reporter.recorded_events();
    assert_eq!(events.len(), 2, "header + one failure: {events:?}");
    assert!(events[1].contains("exit code 1"), "got: {}", events[1]);
    assert!(events[1].contains("simulated failure"), "got: {}", events[1]);
}

#[tokio::test]
async fn test_transport_error_detail_names_the_host() {
    let executor = RecordingExecutor::transport_down();
    let reporter = RecordingReporter::new();

    dispatch(
        CommandKind::Status,
        apps("stoa"),
        &["na-002.bosagora.io"],
        &executor,
        &reporter,
    )
    .await;

    let events = reporter.recorded_events();
    assert!(
        events[1].contains("ssh na-002.bosagora.io: connection refused"),
        "got: {}",
        events[1]
    );
}

// ── Statelessness ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_identical_invocations_record_identical_sequences() {
    let mut runs = Vec::new();
    for _ in 0..2 {
        let executor = RecordingExecutor::new_echo();
        let reporter = RecordingReporter::new();
        dispatch(
            CommandKind::Reset,
            apps("all"),
            default_targets(),
            &executor,
            &reporter,
        )
        .await;
        runs.push((executor.recorded_calls(), reporter.recorded_events()));
    }
    assert_eq!(runs[0], runs[1]);
}
