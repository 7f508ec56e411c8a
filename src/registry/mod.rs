//! # Alien Registry
//!
//! Tracks the live aliens and where each of them stands. Two indices are
//! kept in step:
//!
//! - **locations**: alien id -> city name
//! - **occupants**: city name -> aliens in that city, in arrival order
//!
//! An alien appears in `occupants[c]` exactly when `locations[alien] == c`.
//! Both indices are private and every mutation goes through one of the
//! registry's operations ([`AlienRegistry::spawn`], [`AlienRegistry::move_to`],
//! [`AlienRegistry::kill_all`]), each of which updates both sides before it
//! returns.
//!
//! ## Identity
//!
//! Names come from an input file and may repeat. Every alien gets a
//! synthetic [`AlienId`] at spawn time; the name is only a display label.
//! Ids are handed out in spawn order, so iterating the registry by id
//! yields aliens in the order their names were read.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of an alien, assigned in spawn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlienId(pub usize);

impl fmt::Display for AlienId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alien {
    pub id: AlienId,
    pub name: String,
}

/// Disagreement between the two placement indices
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("alien {0} has a location but is not alive")]
    DeadAlienPlaced(AlienId),
    #[error("alien {id} is recorded in {city} but occupants of {city} do not list it")]
    MissingOccupant { id: AlienId, city: String },
    #[error("occupants of {city} list alien {id}, which is located elsewhere")]
    StrayOccupant { id: AlienId, city: String },
    #[error("occupants of {city} list alien {id} more than once")]
    DuplicateOccupant { id: AlienId, city: String },
}

#[derive(Debug, Clone, Default)]
pub struct AlienRegistry {
    /// Live aliens keyed by id; id order is spawn order
    aliens: BTreeMap<AlienId, Alien>,
    locations: HashMap<AlienId, String>,
    occupants: HashMap<String, Vec<AlienId>>,
    next_id: usize,
}

impl AlienRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one alien per name, in order. Duplicate names are allowed.
    pub fn spawn<I, S>(&mut self, names: I) -> Vec<AlienId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| {
                let id = AlienId(self.next_id);
                self.next_id += 1;
                self.aliens.insert(
                    id,
                    Alien {
                        id,
                        name: name.into(),
                    },
                );
                id
            })
            .collect()
    }

    /// Puts a live alien in `city`, leaving its previous city if it had one.
    ///
    /// The alien is appended to the end of the city's occupant list. Moving
    /// an alien to the city it already occupies changes nothing. Returns
    /// `false` if the alien is not alive.
    pub fn move_to(&mut self, id: AlienId, city: &str) -> bool {
        if !self.aliens.contains_key(&id) {
            return false;
        }
        if self.locations.get(&id).is_some_and(|current| current == city) {
            return true;
        }

        self.vacate(id);
        self.locations.insert(id, city.to_string());
        self.occupants.entry(city.to_string()).or_default().push(id);
        true
    }

    /// Removes `id` from the occupant list of its current city
    fn vacate(&mut self, id: AlienId) -> Option<String> {
        let city = self.locations.remove(&id)?;
        if let Some(list) = self.occupants.get_mut(&city) {
            list.retain(|occupant| *occupant != id);
            if list.is_empty() {
                self.occupants.remove(&city);
            }
        }
        Some(city)
    }

    /// Kills every listed alien. Repeated or already-dead ids are ignored.
    ///
    /// Returns the aliens that were alive and are now dead, in the order
    /// they were first listed.
    pub fn kill_all(&mut self, ids: &[AlienId]) -> Vec<Alien> {
        let mut seen = HashSet::new();
        let mut killed = Vec::new();
        for id in ids {
            if !seen.insert(*id) {
                continue;
            }
            if let Some(alien) = self.aliens.remove(id) {
                self.vacate(*id);
                killed.push(alien);
            }
        }
        killed
    }

    /// Aliens currently in `city`, in arrival order
    pub fn agents_at(&self, city: &str) -> &[AlienId] {
        self.occupants.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the aliens currently in `city`, in arrival order
    pub fn names_at(&self, city: &str) -> Vec<&str> {
        self.agents_at(city)
            .iter()
            .filter_map(|id| self.aliens.get(id))
            .map(|alien| alien.name.as_str())
            .collect()
    }

    pub fn location_of(&self, id: AlienId) -> Option<&str> {
        self.locations.get(&id).map(String::as_str)
    }

    pub fn get(&self, id: AlienId) -> Option<&Alien> {
        self.aliens.get(&id)
    }

    pub fn is_alive(&self, id: AlienId) -> bool {
        self.aliens.contains_key(&id)
    }

    /// Live aliens in spawn order
    pub fn aliens(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.values()
    }

    /// Live alien ids in spawn order
    pub fn ids(&self) -> Vec<AlienId> {
        self.aliens.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// Every city holding at least one alien, with its occupants
    pub fn occupied(&self) -> impl Iterator<Item = (&str, &[AlienId])> {
        self.occupants
            .iter()
            .map(|(city, ids)| (city.as_str(), ids.as_slice()))
    }

    /// Verifies that the location and occupant indices agree
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for (id, city) in &self.locations {
            if !self.aliens.contains_key(id) {
                return Err(ConsistencyError::DeadAlienPlaced(*id));
            }
            if !self.agents_at(city).contains(id) {
                return Err(ConsistencyError::MissingOccupant {
                    id: *id,
                    city: city.clone(),
                });
            }
        }

        for (city, ids) in &self.occupants {
            let mut seen = HashSet::new();
            for id in ids {
                if !seen.insert(*id) {
                    return Err(ConsistencyError::DuplicateOccupant {
                        id: *id,
                        city: city.clone(),
                    });
                }
                if self.locations.get(id) != Some(city) {
                    return Err(ConsistencyError::StrayOccupant {
                        id: *id,
                        city: city.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
