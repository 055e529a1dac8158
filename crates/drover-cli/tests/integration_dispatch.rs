//! Exit-code mapping through the top-level dispatcher.

use drover_cli::{run, run_with_runner};
use drover_engine::testing::{RecordingRunner, ScriptedEngine, StaticResolver};
use drover_engine::BuildOutcome;
use std::time::Duration;

fn success() -> BuildOutcome {
    BuildOutcome::success(Duration::from_millis(5))
}

fn failure() -> BuildOutcome {
    BuildOutcome::failure(Duration::from_millis(5))
}

#[tokio::test]
async fn test_build_success_exits_zero() {
    let engine = ScriptedEngine::new();
    engine.push_build(success());

    let code = run(["drover", "build"], &engine, &StaticResolver::empty()).await;
    assert_eq!(code, 0);
}

#[tokio::test]
async fn test_build_failure_exits_one() {
    let engine = ScriptedEngine::new();
    engine.push_build(failure());

    let code = run(["drover", "build"], &engine, &StaticResolver::empty()).await;
    assert_eq!(code, 1);
}

#[tokio::test]
async fn test_unknown_mode_is_rejected_before_options() {
    let engine = ScriptedEngine::new();

    let code = run(["drover", "deploy"], &engine, &StaticResolver::empty()).await;
    assert_eq!(code, 1);
    assert_eq!(engine.build_count(), 0);
    assert!(engine.watch_requests().is_empty());
}

#[tokio::test]
async fn test_help_exits_zero() {
    let engine = ScriptedEngine::new();

    let code = run(["drover", "--help"], &engine, &StaticResolver::empty()).await;
    assert_eq!(code, 0);
}

#[tokio::test]
async fn test_malformed_serve_target_exits_one_without_starting_a_watch() {
    let engine = ScriptedEngine::new();

    let code = run(
        ["drover", "serve", "web:8080:extra"],
        &engine,
        &StaticResolver::empty(),
    )
    .await;
    assert_eq!(code, 1);
    assert!(engine.watch_requests().is_empty());
}

#[tokio::test]
async fn test_test_mode_propagates_the_runner_exit_code() {
    let engine = ScriptedEngine::new();
    engine.push_build(success());
    let resolver = StaticResolver::with_packages(["drover-test"]);
    let runner = RecordingRunner::with_exit_code(7);

    let code = run_with_runner(
        ["drover", "test", "--", "-p", "chrome"],
        &engine,
        &resolver,
        &runner,
    )
    .await;

    assert_eq!(code, 7);
    assert_eq!(runner.calls()[0].1, vec!["-p", "chrome"]);
}

#[tokio::test]
async fn test_missing_test_dependency_exits_one_without_building() {
    let engine = ScriptedEngine::new();
    let runner = RecordingRunner::with_exit_code(0);

    let code = run_with_runner(
        ["drover", "test"],
        &engine,
        &StaticResolver::empty(),
        &runner,
    )
    .await;

    assert_eq!(code, 1);
    assert_eq!(engine.build_count(), 0);
    assert_eq!(runner.call_count(), 0);
}
