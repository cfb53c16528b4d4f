use std::sync::{Arc, Mutex};

use plantsim::observe::{Logger, PlantEvent};
use plantsim::types::{Iteration, LineId};

/// A fake logger that:
/// - records every event in arrival order
/// - forwards nothing anywhere else.
///
/// Clones share the same record, so a test can hand one clone to the
/// manager and keep another for assertions.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    events: Arc<Mutex<Vec<PlantEvent>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<PlantEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&PlantEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| predicate(e)).count()
    }

    /// Position of the first event matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&PlantEvent) -> bool) -> Option<usize> {
        self.events.lock().unwrap().iter().position(predicate)
    }

    /// `(line, iteration)` of every `LineStarted` record, in arrival order.
    pub fn started(&self) -> Vec<(LineId, Iteration)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                PlantEvent::LineStarted {
                    line, iteration, ..
                } => Some((*line, *iteration)),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> usize {
        self.count(|e| matches!(e, PlantEvent::LineSucceeded { .. }))
    }

    pub fn failures(&self) -> usize {
        self.count(|e| matches!(e, PlantEvent::LineFailed { .. }))
    }

    pub fn faults(&self) -> usize {
        self.count(|e| matches!(e, PlantEvent::HandleFaulted { .. }))
    }

    pub fn run_finished(&self) -> bool {
        self.count(|e| matches!(e, PlantEvent::RunFinished { .. })) > 0
    }
}

impl Logger for RecordingLogger {
    fn record(&self, event: &PlantEvent) {
        tracing::debug!(?event, "recorded plant event");
        self.events.lock().unwrap().push(event.clone());
    }
}
