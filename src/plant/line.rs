// src/plant/line.rs

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::observe::{Logger, PlantEvent};
use crate::plant::workload::Workload;
use crate::types::{Iteration, LineId, Outcome};

/// Simulated failure raised inside a line's own execution scope.
///
/// Never leaves [`Line::execute`]: it is converted into
/// [`Outcome::Failure`] before control returns to the caller.
#[derive(Debug, Error)]
enum LineError {
    #[error("line {line} iteration {iteration}: process error")]
    ProcessFailed { line: LineId, iteration: Iteration },
}

/// One production line.
///
/// Holds nothing but its identity and handles to the shared workload and
/// logger, so cloning a line to move it into a spawned task is cheap.
#[derive(Clone)]
pub struct Line {
    id: LineId,
    workload: Arc<dyn Workload>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Line {
    pub fn new(id: LineId, workload: Arc<dyn Workload>, logger: Arc<dyn Logger>) -> Self {
        Self {
            id,
            workload,
            logger,
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    /// Run one unit of work for the given iteration.
    ///
    /// Always resolves to an [`Outcome`]; the simulated failure is observed
    /// and logged here and handed back as data.
    pub async fn execute(&self, iteration: Iteration) -> Outcome {
        match self.execute_inner(iteration).await {
            Ok(()) => {
                self.logger.record(&PlantEvent::LineSucceeded {
                    line: self.id,
                    iteration,
                });
                Outcome::Success
            }
            Err(err) => {
                let message = err.to_string();
                self.logger.record(&PlantEvent::LineFailed {
                    line: self.id,
                    iteration,
                    message: message.clone(),
                });
                Outcome::Failure(message)
            }
        }
    }

    async fn execute_inner(&self, iteration: Iteration) -> Result<(), LineError> {
        let delay = self.workload.delay(self.id, iteration);
        self.logger.record(&PlantEvent::LineStarted {
            line: self.id,
            iteration,
            delay,
        });

        tokio::time::sleep(delay).await;

        if self.workload.should_fail(self.id, iteration) {
            return Err(LineError::ProcessFailed {
                line: self.id,
                iteration,
            });
        }

        debug!(line = self.id, iteration, "line process passed failure check");
        Ok(())
    }
}
