// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [run]
/// lines = 4
/// iterations = 10
/// deadline_secs = 30
///
/// [work]
/// min_delay_ms = 500
/// max_delay_ms = 2000
/// failure_probability = 0.3
/// seed = 42
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unvalidated form; convert it into [`PlantConfig`] with `try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlantConfig {
    /// Shape of the run from `[run]`.
    #[serde(default)]
    pub run: RunSection,

    /// Simulated work parameters from `[work]`.
    #[serde(default)]
    pub work: WorkSection,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Number of parallel production lines.
    #[serde(default = "default_lines")]
    pub lines: u32,

    /// Number of iterations every line performs.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Wall-clock budget the supervisor waits for the whole run.
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u64,
}

fn default_lines() -> u32 {
    4
}

fn default_iterations() -> u32 {
    10
}

fn default_deadline_secs() -> u64 {
    30
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            lines: default_lines(),
            iterations: default_iterations(),
            deadline_secs: default_deadline_secs(),
        }
    }
}

/// `[work]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkSection {
    /// Lower bound (inclusive) of the simulated work delay.
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound (inclusive) of the simulated work delay.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Probability that one line-iteration fails.
    #[serde(default = "default_failure_probability")]
    pub failure_probability: f64,

    /// Seed for the shared random source. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min_delay_ms() -> u64 {
    500
}

fn default_max_delay_ms() -> u64 {
    2000
}

fn default_failure_probability() -> f64 {
    0.3
}

impl Default for WorkSection {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            failure_probability: default_failure_probability(),
            seed: None,
        }
    }
}

/// Shape of one manager run. Fixed for the life of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub number_of_lines: u32,
    pub max_iterations: u32,
    pub overall_deadline: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::from(&RunSection::default())
    }
}

impl From<&RunSection> for RunConfig {
    fn from(section: &RunSection) -> Self {
        Self {
            number_of_lines: section.lines,
            max_iterations: section.iterations,
            overall_deadline: Duration::from_secs(section.deadline_secs),
        }
    }
}

/// Parameters of the simulated unit of work a line performs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkProfile {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub failure_probability: f64,
    pub seed: Option<u64>,
}

impl Default for WorkProfile {
    fn default() -> Self {
        WorkProfile::from(&WorkSection::default())
    }
}

impl From<&WorkSection> for WorkProfile {
    fn from(section: &WorkSection) -> Self {
        Self {
            min_delay: Duration::from_millis(section.min_delay_ms),
            max_delay: Duration::from_millis(section.max_delay_ms),
            failure_probability: section.failure_probability,
            seed: section.seed,
        }
    }
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawPlantConfig>` (see `validate.rs`),
/// so holding one means every invariant was checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantConfig {
    run: RunConfig,
    work: WorkProfile,
}

impl PlantConfig {
    pub(crate) fn new_unchecked(run: RunConfig, work: WorkProfile) -> Self {
        Self { run, work }
    }

    pub fn run(&self) -> &RunConfig {
        &self.run
    }

    pub fn work(&self) -> &WorkProfile {
        &self.work
    }
}
