//! Injectable randomness for the simulated execution
//!
//! The runner never touches a RNG or the clock directly; it asks a
//! [`Simulation`] for each case's delay and outcome so tests can script
//! deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::models::SimulationSettings;

/// Terminal outcome of one simulated case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed,
}

/// Source of per-case delays and pass/fail draws
pub trait Simulation {
    /// Independent draw deciding how the next case resolves
    fn draw_outcome(&mut self) -> CaseOutcome;

    /// Simulated execution time for the next case
    fn case_delay(&mut self) -> Duration;
}

/// Production simulation: uniform delay within the configured bounds and an
/// independent pass draw per case
pub struct RandomSimulation {
    rng: StdRng,
    settings: SimulationSettings,
}

impl RandomSimulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            settings,
        }
    }

    /// Seeded variant for reproducible demo runs
    pub fn seeded(seed: u64, settings: SimulationSettings) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            settings,
        }
    }
}

impl Simulation for RandomSimulation {
    fn draw_outcome(&mut self) -> CaseOutcome {
        if self.rng.gen::<f64>() < self.settings.pass_probability {
            CaseOutcome::Passed
        } else {
            CaseOutcome::Failed
        }
    }

    fn case_delay(&mut self) -> Duration {
        let millis = self
            .rng
            .gen_range(self.settings.delay_min_ms..=self.settings.delay_max_ms);
        Duration::from_millis(millis)
    }
}
