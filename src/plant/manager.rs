// src/plant/manager.rs

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::errors::Result;
use crate::observe::{Logger, PlantEvent};
use crate::plant::line::Line;
use crate::plant::tasks::{AccumulatedTaskSet, ExecutionHandle};
use crate::plant::workload::Workload;
use crate::types::{Iteration, LineId, RunSummary};

/// Owns the production lines and drives the iteration loop.
///
/// For every iteration the manager spawns one execution per line, appends
/// each handle to an [`AccumulatedTaskSet`] that is never pruned, then waits
/// until *any* handle in that whole set has resolved before moving on. Once
/// every iteration has been issued it drains the set.
///
/// Because the gate looks at the whole set, only the first iteration really
/// blocks; from the second iteration on some earlier handle has usually
/// resolved already and the gate passes immediately. Iterations therefore
/// overlap freely.
pub struct Manager {
    config: RunConfig,
    lines: Vec<Line>,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("config", &self.config)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl Manager {
    /// Build a manager and its lines.
    ///
    /// Fails with a configuration error for zero lines or zero iterations;
    /// nothing is spawned in that case.
    pub fn new(
        config: RunConfig,
        workload: Arc<dyn Workload>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self> {
        config.validate()?;

        let lines = (1..=config.number_of_lines)
            .map(|id: LineId| Line::new(id, Arc::clone(&workload), Arc::clone(&logger)))
            .collect();

        Ok(Self {
            config,
            lines,
            logger,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Run every iteration on every line and wait for all of it.
    ///
    /// Never fails: contained line failures and faulted handles are only
    /// counted in the returned summary.
    pub async fn run(&self) -> RunSummary {
        info!(
            lines = self.lines.len(),
            iterations = self.config.max_iterations,
            "production run starting"
        );

        let mut tasks = AccumulatedTaskSet::new();

        for iteration in 1..=self.config.max_iterations {
            self.fan_out(iteration, &mut tasks);

            if let Some((line, done_iteration, resolution)) = tasks.first_resolved().await {
                debug!(
                    iteration,
                    line,
                    done_iteration,
                    ?resolution,
                    "iteration gate passed"
                );
            }

            self.logger.record(&PlantEvent::IterationCompleted {
                iteration,
                accumulated: tasks.len(),
            });
        }

        let summary = tasks.drain().await;
        self.logger.record(&PlantEvent::RunFinished { summary });
        summary
    }

    fn fan_out(&self, iteration: Iteration, tasks: &mut AccumulatedTaskSet) {
        for line in &self.lines {
            tasks.push(ExecutionHandle::spawn(
                line,
                iteration,
                Arc::clone(&self.logger),
            ));
        }
        debug!(iteration, accumulated = tasks.len(), "iteration fanned out");
    }
}
