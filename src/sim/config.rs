//! Simulation configuration.

/// Configuration for a batch of simulation runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs to perform
    pub num_runs: u64,

    /// Root random seed for reproducibility (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1_000,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Reproducible batch with an explicit seed.
    pub fn seeded(num_runs: u64, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
        }
    }

    /// Quick config for smoke-testing a catalog.
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }
}
