// src/plant/tasks.rs

//! Execution handles and the manager's accumulated task set.
//!
//! Every line-iteration runs in its own Tokio task. The handle kept by the
//! manager is a [`Shared`] future over that task's result, so the same
//! handle can be awaited by the per-iteration gate and again by the final
//! drain.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared, join_all, select_all};
use tokio::task::JoinError;
use tracing::debug;

use crate::observe::{Logger, PlantEvent};
use crate::plant::line::Line;
use crate::types::{Iteration, LineId, Outcome, RunSummary};

/// How one execution handle resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The line returned an outcome (success or contained failure).
    Resolved(Outcome),
    /// The handle itself faulted: the line task panicked or was aborted.
    Faulted(String),
}

/// In-flight or completed handle to one line-iteration execution.
pub struct ExecutionHandle {
    line: LineId,
    iteration: Iteration,
    completion: Shared<BoxFuture<'static, Resolution>>,
}

impl ExecutionHandle {
    /// Spawn `line.execute(iteration)` onto the runtime and attach a fault
    /// observer to it.
    ///
    /// The observer logs a [`PlantEvent::HandleFaulted`] when the execution
    /// panics or its task is aborted. Lines contain their own failures, so in
    /// normal operation it never fires.
    pub fn spawn(line: &Line, iteration: Iteration, logger: Arc<dyn Logger>) -> Self {
        let worker = line.clone();
        let line_id = line.id();

        let task_logger = Arc::clone(&logger);
        let join = tokio::spawn(async move {
            match AssertUnwindSafe(worker.execute(iteration)).catch_unwind().await {
                Ok(outcome) => Resolution::Resolved(outcome),
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    observe_fault(task_logger.as_ref(), line_id, iteration, &message);
                    Resolution::Faulted(message)
                }
            }
        });

        let completion = async move {
            match join.await {
                Ok(resolution) => resolution,
                Err(err) => {
                    let message = join_error_message(&err);
                    observe_fault(logger.as_ref(), line_id, iteration, &message);
                    Resolution::Faulted(message)
                }
            }
        }
        .boxed()
        .shared();

        Self {
            line: line_id,
            iteration,
            completion,
        }
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// The resolution, if this handle has already been observed to resolve.
    pub fn peek(&self) -> Option<&Resolution> {
        self.completion.peek()
    }

    /// A future that resolves together with this handle.
    pub fn completion(&self) -> Shared<BoxFuture<'static, Resolution>> {
        self.completion.clone()
    }
}

fn observe_fault(logger: &dyn Logger, line: LineId, iteration: Iteration, message: &str) {
    logger.record(&PlantEvent::HandleFaulted {
        line,
        iteration,
        message: message.to_string(),
    });
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("line execution panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("line execution panicked: {s}")
    } else {
        "line execution panicked".to_string()
    }
}

fn join_error_message(err: &JoinError) -> String {
    if err.is_cancelled() {
        "line execution was cancelled".to_string()
    } else {
        format!("line execution task failed: {err}")
    }
}

/// Every execution handle issued during one manager run.
///
/// Only grows. Handles are never removed, even after they resolve, so the
/// "first to resolve" gate looks at the whole run's history and the drain
/// awaits every handle ever issued.
#[derive(Default)]
pub struct AccumulatedTaskSet {
    handles: Vec<ExecutionHandle>,
}

impl AccumulatedTaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: ExecutionHandle) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionHandle> {
        self.handles.iter()
    }

    /// Wait until at least one handle in the set has resolved.
    ///
    /// Considers every handle accumulated so far, not only the most recent
    /// batch, so once any earlier handle has resolved this returns on the
    /// first poll. Returns `None` for an empty set.
    pub async fn first_resolved(&self) -> Option<(LineId, Iteration, Resolution)> {
        if self.handles.is_empty() {
            return None;
        }

        let (resolution, index, _rest) =
            select_all(self.handles.iter().map(ExecutionHandle::completion)).await;
        let handle = &self.handles[index];

        debug!(
            line = handle.line,
            iteration = handle.iteration,
            accumulated = self.handles.len(),
            "gate released by resolved handle"
        );

        Some((handle.line, handle.iteration, resolution))
    }

    /// Wait for every handle in the set and tally the results.
    pub async fn drain(&self) -> RunSummary {
        let resolutions = join_all(self.handles.iter().map(ExecutionHandle::completion)).await;

        let mut summary = RunSummary {
            issued: self.handles.len(),
            ..RunSummary::default()
        };
        for resolution in resolutions {
            match resolution {
                Resolution::Resolved(Outcome::Success) => summary.succeeded += 1,
                Resolution::Resolved(Outcome::Failure(_)) => summary.failed += 1,
                Resolution::Faulted(_) => summary.faulted += 1,
            }
        }
        summary
    }
}
