// src/plant/supervisor.rs

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{error, info};

use crate::observe::{Logger, PlantEvent};
use crate::plant::manager::Manager;
use crate::types::RunResult;

/// Races a manager run against a wall-clock deadline.
///
/// The deadline only stops the supervisor from *waiting*. Nothing is
/// cancelled: the run keeps going in its own task until it finishes on its
/// own, whether or not anyone still observes it.
pub struct Supervisor {
    logger: Arc<dyn Logger>,
}

impl Supervisor {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    pub async fn supervise(&self, manager: Manager, deadline: Duration) -> RunResult {
        let started = Instant::now();
        info!(deadline_ms = deadline.as_millis() as u64, "supervising production run");

        let mut run = tokio::spawn(async move { manager.run().await });

        let result = tokio::select! {
            joined = &mut run => {
                if let Err(err) = joined {
                    error!(error = %err, "production run task failed");
                }
                RunResult::Completed
            }
            _ = tokio::time::sleep(deadline) => RunResult::TimedOut,
        };

        // Dropping the handle detaches the run; it is never aborted.
        drop(run);

        self.logger.record(&PlantEvent::Supervised {
            result,
            elapsed: started.elapsed(),
        });
        result
    }
}
