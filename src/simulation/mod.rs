//! # Round Engine
//!
//! Drives the invasion one round at a time:
//!
//! 1. **Placement** (round 1): every alien, in spawn order, lands on a city
//!    chosen uniformly from the live cities.
//! 2. **Movement** (round 2 onwards): every live alien, in spawn order,
//!    draws from `0..=d` where `d` is the number of roads leaving its city.
//!    A draw of `d` means it stays put; any other draw `k` sends it down the
//!    `k`-th road. An alien on a city with no roads is trapped and never
//!    draws.
//! 3. **Resolution**: every city holding two or more aliens is destroyed
//!    together with those aliens and every road touching it. The set of
//!    fights is taken from a snapshot before anything is removed.
//!
//! Before each round the engine checks whether any aliens and any cities
//! remain; if either count is zero the run is over.
//!
//! The random source is consulted exactly once per alien per round, always
//! in spawn order, so a seed and an input ordering fully determine a run.

pub mod config;
pub mod events;
pub mod random;
pub mod snapshot;

pub use config::SimConfig;
pub use events::{Phase, RoundOutcome, SimEvent};
pub use random::{RandomSource, ScriptedSource, SeededSource};
pub use snapshot::{AlienPosition, AlienSnapshot, CitySnapshot, WorldSnapshot};

use log::{debug, info};
use thiserror::Error;

use crate::registry::{AlienId, AlienRegistry, ConsistencyError};
use crate::world::{MapIntegrityError, WorldLayout, WorldMap};

/// Broken engine invariant. Seeing one of these is a bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error(transparent)]
    Registry(#[from] ConsistencyError),
    #[error(transparent)]
    Map(#[from] MapIntegrityError),
    #[error("alien {alien} stands in {city}, which is not a live city")]
    AlienOffMap { alien: AlienId, city: String },
}

pub struct Simulation<R = SeededSource> {
    map: WorldMap,
    registry: AlienRegistry,
    rng: R,
    /// Rounds completed so far
    round: u64,
    phase: Phase,
}

impl Simulation<SeededSource> {
    /// Builds the world from `layout`, spawns one alien per name and seeds
    /// the random source.
    pub fn initialize<S: AsRef<str>>(layout: &WorldLayout, alien_names: &[S], seed: u64) -> Self {
        Self::with_source(layout.build(), alien_names, SeededSource::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Starts a run on an already built map with any random source
    pub fn with_source<S: AsRef<str>>(map: WorldMap, alien_names: &[S], rng: R) -> Self {
        let mut registry = AlienRegistry::new();
        registry.spawn(alien_names.iter().map(|name| name.as_ref().to_string()));

        info!(
            "Simulation ready: {} cities, {} roads, {} aliens",
            map.city_count(),
            map.road_count(),
            registry.len()
        );

        Self {
            map,
            registry,
            rng,
            round: 0,
            phase: Phase::NotStarted,
        }
    }

    /// True when another round may run
    pub fn can_continue(&self) -> bool {
        !self.registry.is_empty() && !self.map.is_empty()
    }

    /// Runs one round, or returns `None` if the run is already over.
    pub fn step(&mut self) -> Option<RoundOutcome> {
        if !self.can_continue() {
            self.phase = Phase::Terminated;
            return None;
        }

        let round = self.round + 1;
        let mut events = Vec::new();

        let phase = if round == 1 {
            self.phase = Phase::Placing;
            self.place_aliens(&mut events);
            Phase::Placing
        } else {
            self.phase = Phase::Moving;
            self.move_aliens(&mut events);
            Phase::Moving
        };

        self.phase = Phase::Resolving;
        self.resolve_fights(&mut events);

        debug_assert_eq!(self.check_invariants(), Ok(()));

        self.round = round;
        self.phase = if self.can_continue() {
            Phase::Moving
        } else {
            Phase::Terminated
        };

        Some(RoundOutcome {
            round,
            phase,
            events,
        })
    }

    /// Runs at most `max_rounds` rounds.
    ///
    /// Returns `true` if the run stopped before using the whole budget
    /// because no aliens or no cities were left.
    pub fn run_rounds(&mut self, max_rounds: u64) -> bool {
        self.run_rounds_with(max_rounds, |_| {})
    }

    /// Like [`Simulation::run_rounds`], handing every round's outcome to
    /// `observer` as soon as the round ends.
    pub fn run_rounds_with<F>(&mut self, max_rounds: u64, mut observer: F) -> bool
    where
        F: FnMut(&RoundOutcome),
    {
        for _ in 0..max_rounds {
            match self.step() {
                Some(outcome) => observer(&outcome),
                None => {
                    info!("Invasion over after {} rounds", self.round);
                    return true;
                }
            }
        }

        if !self.can_continue() {
            self.phase = Phase::Terminated;
        }
        info!("Round budget of {} exhausted after round {}", max_rounds, self.round);
        false
    }

    fn place_aliens(&mut self, events: &mut Vec<SimEvent>) {
        let last = self.map.city_count() - 1;

        for id in self.registry.ids() {
            let index = self.rng.draw_inclusive(last);
            let Some(city) = self.map.city_at(index).map(str::to_string) else {
                continue;
            };
            self.registry.move_to(id, &city);

            let name = self.alien_name(id);
            debug!("Alien {} lands in {}", name, city);
            events.push(SimEvent::Placed {
                alien: id,
                name,
                city,
            });
        }
    }

    fn move_aliens(&mut self, events: &mut Vec<SimEvent>) {
        for id in self.registry.ids() {
            let Some(current) = self.registry.location_of(id).map(str::to_string) else {
                continue;
            };
            let name = self.alien_name(id);

            let degree = self.map.out_degree(&current);
            if degree == 0 {
                debug!("Alien {} is trapped in {}", name, current);
                events.push(SimEvent::Trapped {
                    alien: id,
                    name,
                    city: current,
                });
                continue;
            }

            let choice = self.rng.draw_inclusive(degree);
            if choice == degree {
                debug!("Alien {} stays in {}", name, current);
                events.push(SimEvent::Stayed {
                    alien: id,
                    name,
                    city: current,
                });
                continue;
            }

            let target = self.map.roads_from(&current)[choice].to.clone();
            self.registry.move_to(id, &target);
            debug!("Alien {} moves from {} to {}", name, current, target);
            events.push(SimEvent::Moved {
                alien: id,
                name,
                from: current,
                to: target,
            });
        }
    }

    fn resolve_fights(&mut self, events: &mut Vec<SimEvent>) {
        let fights: Vec<(String, Vec<AlienId>)> = self
            .map
            .cities()
            .iter()
            .filter_map(|city| {
                let occupants = self.registry.agents_at(city);
                (occupants.len() > 1).then(|| (city.clone(), occupants.to_vec()))
            })
            .collect();

        for (city, occupants) in fights {
            let dead = self.registry.kill_all(&occupants);
            let pruned = self.map.remove_city(&city).unwrap_or(0);

            let names: Vec<&str> = dead.iter().map(|alien| alien.name.as_str()).collect();
            info!(
                "{} has been destroyed by {} ({} roads cut)",
                city,
                names.join(" and "),
                pruned
            );
            events.push(SimEvent::CityDestroyed { city, aliens: dead });
        }
    }

    fn alien_name(&self, id: AlienId) -> String {
        self.registry
            .get(id)
            .map(|alien| alien.name.clone())
            .unwrap_or_default()
    }

    /// Checks both placement indices, the map, and that every alien stands
    /// on a live city.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.registry.check_consistency()?;
        self.map.check_integrity()?;
        for alien in self.registry.aliens() {
            if let Some(city) = self.registry.location_of(alien.id) {
                if !self.map.contains(city) {
                    return Err(InvariantViolation::AlienOffMap {
                        alien: alien.id,
                        city: city.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn world_snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(&self.map)
    }

    pub fn alien_snapshot(&self) -> AlienSnapshot {
        AlienSnapshot::capture(&self.registry)
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn registry(&self) -> &AlienRegistry {
        &self.registry
    }

    /// Rounds completed so far
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> &R {
        &self.rng
    }
}
