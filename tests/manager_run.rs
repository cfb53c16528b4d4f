// tests/manager_run.rs

use std::collections::HashSet;
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use plantsim::errors::PlantError;
use plantsim::observe::PlantEvent;
use plantsim::plant::Manager;
use plantsim_test_utils::{RecordingLogger, RunConfigBuilder, ScriptedWorkload, init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn manager(
    lines: u32,
    iterations: u32,
    workload: ScriptedWorkload,
    logger: &RecordingLogger,
) -> Result<Manager, PlantError> {
    let config = RunConfigBuilder::new()
        .lines(lines)
        .iterations(iterations)
        .build();
    Manager::new(config, Arc::new(workload), Arc::new(logger.clone()))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_line_runs_every_iteration_exactly_once() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let workload = ScriptedWorkload::new()
        .with_delay(|line, iteration| Duration::from_millis(u64::from((line * 7 + iteration * 3) % 20)));
    let manager = manager(3, 5, workload, &logger)?;

    let summary = with_timeout(manager.run()).await;

    assert_eq!(summary.issued, 15);
    assert_eq!(summary.resolved(), 15);
    assert_eq!(summary.succeeded, 15);

    let started = logger.started();
    assert_eq!(started.len(), 15);
    let distinct: HashSet<_> = started.iter().copied().collect();
    let expected: HashSet<_> = (1..=3)
        .flat_map(|line| (1..=5).map(move |iteration| (line, iteration)))
        .collect();
    assert_eq!(distinct, expected);

    assert_eq!(logger.successes(), 15);
    assert!(logger.run_finished());
    Ok(())
}

#[tokio::test]
async fn two_lines_one_iteration_without_delay_or_failures() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let manager = manager(2, 1, ScriptedWorkload::new(), &logger)?;

    let summary = with_timeout(manager.run()).await;

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(logger.successes(), 2);
    assert_eq!(logger.failures(), 0);
    Ok(())
}

#[tokio::test]
async fn accumulated_set_grows_by_line_count_per_iteration() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let manager = manager(4, 3, ScriptedWorkload::new(), &logger)?;
    with_timeout(manager.run()).await;

    let sizes: Vec<_> = logger
        .events()
        .into_iter()
        .filter_map(|e| match e {
            PlantEvent::IterationCompleted {
                iteration,
                accumulated,
            } => Some((iteration, accumulated)),
            _ => None,
        })
        .collect();
    assert_eq!(sizes, vec![(1, 4), (2, 8), (3, 12)]);
    Ok(())
}

#[tokio::test]
async fn zero_lines_or_iterations_are_rejected_before_any_work() {
    init_tracing();

    let logger = RecordingLogger::new();

    let err = manager(0, 3, ScriptedWorkload::new(), &logger).unwrap_err();
    assert!(matches!(err, PlantError::ConfigError(_)));

    let err = manager(3, 0, ScriptedWorkload::new(), &logger).unwrap_err();
    assert!(matches!(err, PlantError::ConfigError(_)));

    assert!(logger.events().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn next_iteration_starts_while_previous_is_still_running() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    // Line 1 finishes at once and opens the gate; line 2 is still busy.
    let workload = ScriptedWorkload::new().with_delay(|line, _| {
        if line == 1 {
            Duration::ZERO
        } else {
            Duration::from_millis(300)
        }
    });
    let manager = manager(2, 2, workload, &logger)?;
    with_timeout(manager.run()).await;

    let next_started = logger
        .position(|e| matches!(e, PlantEvent::LineStarted { line: 1, iteration: 2, .. }))
        .ok_or("iteration 2 never started")?;
    let slow_done = logger
        .position(|e| matches!(e, PlantEvent::LineSucceeded { line: 2, iteration: 1 }))
        .ok_or("line 2 never finished iteration 1")?;

    assert!(next_started < slow_done);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn gate_only_blocks_on_the_first_iteration() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let workload = ScriptedWorkload::new().with_fixed_delay(Duration::from_millis(200));
    let manager = manager(1, 3, workload, &logger)?;

    let started = Instant::now();
    with_timeout(manager.run()).await;
    let elapsed = started.elapsed();

    // Iteration 1's handle is already resolved when iterations 2 and 3 hit
    // the gate, so both pass before iteration 2's work finishes.
    let last_gate = logger
        .position(|e| matches!(e, PlantEvent::IterationCompleted { iteration: 3, .. }))
        .ok_or("iteration 3 never completed")?;
    let second_done = logger
        .position(|e| matches!(e, PlantEvent::LineSucceeded { line: 1, iteration: 2 }))
        .ok_or("iteration 2 never finished")?;
    assert!(last_gate < second_done);

    // A barrier per iteration would need 600ms.
    assert!(elapsed >= Duration::from_millis(400), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(580), "{elapsed:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn failures_never_abort_the_loop() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let workload = ScriptedWorkload::new().failing_when(|line, _| line == 1);
    let manager = manager(3, 4, workload, &logger)?;

    let summary = with_timeout(manager.run()).await;

    assert_eq!(summary.failed, 4);
    assert_eq!(summary.succeeded, 8);
    assert_eq!(summary.faulted, 0);
    assert_eq!(logger.failures(), 4);
    assert_eq!(
        logger.count(|e| matches!(e, PlantEvent::IterationCompleted { .. })),
        4
    );
    // Contained failures never reach the fault observer.
    assert_eq!(logger.faults(), 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn faulted_handle_is_logged_and_still_drained() -> TestResult {
    init_tracing();

    let logger = RecordingLogger::new();
    let workload = ScriptedWorkload::new().panicking_at(2, 1);
    let manager = manager(2, 3, workload, &logger)?;

    let summary = with_timeout(manager.run()).await;

    assert_eq!(summary.issued, 6);
    assert_eq!(summary.faulted, 1);
    assert_eq!(summary.succeeded, 5);
    assert_eq!(logger.faults(), 1);
    assert!(logger.events().iter().any(|e| matches!(
        e,
        PlantEvent::HandleFaulted { line: 2, iteration: 1, message } if message.contains("scripted panic")
    )));
    assert!(logger.run_finished());
    Ok(())
}
