//! What happened during a round, in the order it happened.

use serde::{Deserialize, Serialize};

use crate::registry::{Alien, AlienId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round has run yet
    NotStarted,
    /// Round 1: aliens land on random cities
    Placing,
    /// Rounds 2 and later: aliens walk along roads
    Moving,
    /// Fights are being settled for the current round
    Resolving,
    /// No aliens or no cities left
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    Placed {
        alien: AlienId,
        name: String,
        city: String,
    },
    Moved {
        alien: AlienId,
        name: String,
        from: String,
        to: String,
    },
    Stayed {
        alien: AlienId,
        name: String,
        city: String,
    },
    /// The alien's city has no roads left
    Trapped {
        alien: AlienId,
        name: String,
        city: String,
    },
    CityDestroyed {
        city: String,
        aliens: Vec<Alien>,
    },
}

/// Result of one call to [`crate::simulation::Simulation::step`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number
    pub round: u64,
    /// `Placing` or `Moving`
    pub phase: Phase,
    pub events: Vec<SimEvent>,
}

impl RoundOutcome {
    /// Cities destroyed this round, in the order they were settled
    pub fn destroyed_cities(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SimEvent::CityDestroyed { city, .. } => Some(city.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn casualties(&self) -> usize {
        self.events
            .iter()
            .map(|event| match event {
                SimEvent::CityDestroyed { aliens, .. } => aliens.len(),
                _ => 0,
            })
            .sum()
    }
}
