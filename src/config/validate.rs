// src/config/validate.rs

use crate::config::model::{PlantConfig, RawPlantConfig, RunConfig, WorkProfile};
use crate::errors::{PlantError, Result};

impl TryFrom<RawPlantConfig> for PlantConfig {
    type Error = PlantError;

    fn try_from(raw: RawPlantConfig) -> std::result::Result<Self, Self::Error> {
        let run = RunConfig::from(&raw.run);
        let work = WorkProfile::from(&raw.work);
        run.validate()?;
        work.validate()?;
        Ok(PlantConfig::new_unchecked(run, work))
    }
}

impl RunConfig {
    /// Reject run shapes that cannot produce any work.
    ///
    /// The manager calls this before it builds any line, so a bad config
    /// never schedules a single task.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_lines == 0 {
            return Err(PlantError::ConfigError(
                "[run].lines must be >= 1 (got 0)".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(PlantError::ConfigError(
                "[run].iterations must be >= 1 (got 0)".to_string(),
            ));
        }
        if self.overall_deadline.is_zero() {
            return Err(PlantError::ConfigError(
                "[run].deadline_secs must be >= 1 (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}

impl WorkProfile {
    pub fn validate(&self) -> Result<()> {
        if self.min_delay > self.max_delay {
            return Err(PlantError::ConfigError(format!(
                "[work].min_delay_ms ({}) must not exceed max_delay_ms ({})",
                self.min_delay.as_millis(),
                self.max_delay.as_millis()
            )));
        }
        // NaN fails this check as well.
        if !(0.0..=1.0).contains(&self.failure_probability) {
            return Err(PlantError::ConfigError(format!(
                "[work].failure_probability must be within 0.0..=1.0 (got {})",
                self.failure_probability
            )));
        }
        Ok(())
    }
}
