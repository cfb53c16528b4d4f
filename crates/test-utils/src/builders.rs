#![allow(dead_code)]

use std::time::Duration;

use plantsim::config::RunConfig;

/// Builder for `RunConfig` to simplify test setup.
///
/// Starts from one line, one iteration and a 5s deadline, and does not
/// validate, so tests can build rejected shapes on purpose.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig {
                number_of_lines: 1,
                max_iterations: 1,
                overall_deadline: Duration::from_secs(5),
            },
        }
    }

    pub fn lines(mut self, lines: u32) -> Self {
        self.config.number_of_lines = lines;
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.max_iterations = iterations;
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.config.overall_deadline = deadline;
        self
    }

    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
