// src/observe/event.rs

use std::time::Duration;

use crate::types::{Iteration, LineId, RunResult, RunSummary};

/// Observability records emitted by lines, the manager and the supervisor.
///
/// Records from concurrently running lines interleave in no particular
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantEvent {
    /// A line started one iteration of work.
    LineStarted {
        line: LineId,
        iteration: Iteration,
        delay: Duration,
    },
    /// A line finished one iteration successfully.
    LineSucceeded { line: LineId, iteration: Iteration },
    /// A line observed and contained its own simulated failure.
    LineFailed {
        line: LineId,
        iteration: Iteration,
        message: String,
    },
    /// The execution handle of a line-iteration faulted (panic or abort)
    /// instead of resolving to an outcome.
    HandleFaulted {
        line: LineId,
        iteration: Iteration,
        message: String,
    },
    /// The manager passed the gate of one iteration.
    IterationCompleted {
        iteration: Iteration,
        /// Size of the accumulated task set at that point.
        accumulated: usize,
    },
    /// The manager drained every accumulated handle.
    RunFinished { summary: RunSummary },
    /// The supervisor's race resolved.
    Supervised { result: RunResult, elapsed: Duration },
}
