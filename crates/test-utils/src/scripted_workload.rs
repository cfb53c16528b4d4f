use std::collections::HashSet;
use std::time::Duration;

use plantsim::plant::Workload;
use plantsim::types::{Iteration, LineId};

type DelayFn = Box<dyn Fn(LineId, Iteration) -> Duration + Send + Sync>;
type FailFn = Box<dyn Fn(LineId, Iteration) -> bool + Send + Sync>;

/// Deterministic workload for tests.
///
/// - delays come from a closure of `(line, iteration)` (zero by default)
/// - failures come from a closure of `(line, iteration)` (never by default)
/// - selected `(line, iteration)` pairs panic instead of deciding, which
///   exercises the manager's fault observer.
pub struct ScriptedWorkload {
    delay: DelayFn,
    fail: FailFn,
    panics: HashSet<(LineId, Iteration)>,
}

impl ScriptedWorkload {
    pub fn new() -> Self {
        Self {
            delay: Box::new(|_, _| Duration::ZERO),
            fail: Box::new(|_, _| false),
            panics: HashSet::new(),
        }
    }

    /// Same delay for every execution.
    pub fn with_fixed_delay(self, delay: Duration) -> Self {
        self.with_delay(move |_, _| delay)
    }

    pub fn with_delay(
        mut self,
        delay: impl Fn(LineId, Iteration) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn failing_when(
        mut self,
        fail: impl Fn(LineId, Iteration) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.fail = Box::new(fail);
        self
    }

    pub fn panicking_at(mut self, line: LineId, iteration: Iteration) -> Self {
        self.panics.insert((line, iteration));
        self
    }
}

impl Default for ScriptedWorkload {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for ScriptedWorkload {
    fn delay(&self, line: LineId, iteration: Iteration) -> Duration {
        (self.delay)(line, iteration)
    }

    fn should_fail(&self, line: LineId, iteration: Iteration) -> bool {
        if self.panics.contains(&(line, iteration)) {
            panic!("scripted panic at line {line} iteration {iteration}");
        }
        (self.fail)(line, iteration)
    }
}
