// src/observe/logger.rs

//! Pluggable logger abstraction.
//!
//! Lines, the manager and the supervisor report through a `Logger` instead
//! of calling `tracing` directly. Production code uses [`TracingLogger`];
//! tests can provide their own implementation that, for example, records
//! every event so the run can be inspected afterwards.

use tracing::{error, info, warn};

use super::PlantEvent;
use crate::types::RunResult;

/// Sink for plant observability records.
///
/// Called concurrently from many line tasks, so implementations must be
/// cheap and must not block for long.
pub trait Logger: Send + Sync {
    fn record(&self, event: &PlantEvent);
}

/// Logger used in production: forwards every event to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn record(&self, event: &PlantEvent) {
        match event {
            PlantEvent::LineStarted {
                line,
                iteration,
                delay,
            } => {
                info!(
                    line,
                    iteration,
                    delay_ms = delay.as_millis() as u64,
                    "line starting process"
                );
            }
            PlantEvent::LineSucceeded { line, iteration } => {
                info!(line, iteration, "line process completed successfully");
            }
            PlantEvent::LineFailed {
                line,
                iteration,
                message,
            } => {
                warn!(line, iteration, error = %message, "line process failed");
            }
            PlantEvent::HandleFaulted {
                line,
                iteration,
                message,
            } => {
                error!(line, iteration, error = %message, "line execution handle faulted");
            }
            PlantEvent::IterationCompleted {
                iteration,
                accumulated,
            } => {
                info!(iteration, accumulated, "iteration completed");
            }
            PlantEvent::RunFinished { summary } => {
                info!(
                    issued = summary.issued,
                    succeeded = summary.succeeded,
                    failed = summary.failed,
                    faulted = summary.faulted,
                    "run finished for all production lines"
                );
            }
            PlantEvent::Supervised { result, elapsed } => match result {
                RunResult::Completed => {
                    info!(elapsed_ms = elapsed.as_millis() as u64, "simulation completed");
                }
                RunResult::TimedOut => {
                    warn!(
                        elapsed_ms = elapsed.as_millis() as u64,
                        "simulation deadline exceeded; run continues unobserved"
                    );
                }
            },
        }
    }
}
