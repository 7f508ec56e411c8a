use serde::{Deserialize, Serialize};

/// Parameters of a single simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Upper bound on the number of rounds
    pub max_rounds: u64,
    /// Number of aliens to spawn from the name list
    pub alien_count: usize,
    /// Seed for the random source
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10_000,
            alien_count: 10,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_aliens(mut self, alien_count: usize) -> Self {
        self.alien_count = alien_count;
        self
    }
}
