// src/plant/workload.rs

//! Source of the per-execution work decisions: how long a line-iteration
//! takes and whether it fails.
//!
//! The line asks the workload twice per execution: once for the delay before
//! it suspends, and once for the failure decision after it wakes up.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::WorkProfile;
use crate::errors::Result;
use crate::types::{Iteration, LineId};

/// Trait abstracting the random decisions a line makes.
///
/// Production code uses [`RandomWorkload`]; tests can provide a scripted
/// implementation with deterministic delays and failures.
pub trait Workload: Send + Sync {
    /// Simulated duration of the given line-iteration.
    fn delay(&self, line: LineId, iteration: Iteration) -> Duration;

    /// Whether the given line-iteration fails once its delay has elapsed.
    fn should_fail(&self, line: LineId, iteration: Iteration) -> bool;
}

/// Workload backed by one shared, synchronized random generator.
///
/// Every line task draws from the same `StdRng`. The lock is only held for
/// the duration of a single draw, never across an `.await`.
#[derive(Debug)]
pub struct RandomWorkload {
    profile: WorkProfile,
    rng: Mutex<StdRng>,
}

impl RandomWorkload {
    /// Build a workload for the given profile.
    ///
    /// Seeds from `profile.seed` when set (reproducible runs), otherwise from
    /// the operating system.
    pub fn new(profile: WorkProfile) -> Result<Self> {
        profile.validate()?;
        let rng = match profile.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            profile,
            rng: Mutex::new(rng),
        })
    }

    pub fn profile(&self) -> &WorkProfile {
        &self.profile
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned generator is still a valid generator.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Workload for RandomWorkload {
    fn delay(&self, _line: LineId, _iteration: Iteration) -> Duration {
        let min_ms = self.profile.min_delay.as_millis() as u64;
        let max_ms = self.profile.max_delay.as_millis() as u64;
        let ms = self.with_rng(|rng| rng.random_range(min_ms..=max_ms));
        Duration::from_millis(ms)
    }

    fn should_fail(&self, _line: LineId, _iteration: Iteration) -> bool {
        let p = self.profile.failure_probability;
        self.with_rng(|rng| rng.random_bool(p))
    }
}
