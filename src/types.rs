use std::fmt;

/// 1-based identity of a production line.
pub type LineId = u32;

/// 1-based index of an iteration within one run.
pub type Iteration = u32;

/// Result of one line executing one iteration.
///
/// Failures are data, not errors: a line reports its own failure and hands
/// back `Failure` instead of propagating anything to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// What the supervisor observed first: the whole run, or the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunResult {
    Completed,
    TimedOut,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunResult::Completed => f.write_str("completed"),
            RunResult::TimedOut => f.write_str("timed out"),
        }
    }
}

/// Counts gathered by the manager's final drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Line-iteration executions issued over the run.
    pub issued: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Handles that faulted instead of resolving to an `Outcome`.
    pub faulted: usize,
}

impl RunSummary {
    /// Number of handles the drain saw resolve, whatever the result.
    pub fn resolved(&self) -> usize {
        self.succeeded + self.failed + self.faulted
    }
}
