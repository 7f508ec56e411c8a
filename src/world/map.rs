//! The world map: cities joined by directed, labeled roads.
//!
//! Roads are inserted in mirrored pairs when a road introduces a city for
//! the first time, so a map built from a well-formed world file is
//! symmetric. Besides the outgoing road lists the map keeps an index of
//! incoming roads, which lets [`WorldMap::remove_city`] prune every road
//! that points at a destroyed city in time proportional to its degree.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::direction::Direction;

/// A road leaving a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    /// Name of the city the road leads to
    pub to: String,
    pub direction: Direction,
}

impl Road {
    pub fn new(to: impl Into<String>, direction: Direction) -> Self {
        Self {
            to: to.into(),
            direction,
        }
    }
}

/// Structural problems found by [`WorldMap::check_integrity`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapIntegrityError {
    #[error("road {from} -> {to} points at a city that does not exist")]
    DanglingRoad { from: String, to: String },
    #[error("city {0} is listed but has no road table")]
    MissingRoadTable(String),
    #[error("road table for {0} exists but the city is not listed")]
    UnlistedCity(String),
    #[error("incoming index for {to} disagrees with the roads leaving {from}")]
    StaleIncomingIndex { from: String, to: String },
}

#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    /// Live cities in the order they were first referenced
    cities: Vec<String>,
    /// Outgoing roads per city, in insertion order
    roads: HashMap<String, Vec<Road>>,
    /// For each city, the cities holding a road that leads to it
    incoming: HashMap<String, HashSet<String>>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city with no roads. Returns `false` if it already existed.
    pub fn add_city(&mut self, name: &str) -> bool {
        if self.roads.contains_key(name) {
            return false;
        }
        self.roads.insert(name.to_string(), Vec::new());
        self.incoming.entry(name.to_string()).or_default();
        self.cities.push(name.to_string());
        true
    }

    /// Adds a road `from -> to` unless `from` already has a road to `to`.
    ///
    /// `from` is created if needed. When `to` is not yet a city it is created
    /// together with the reciprocal road `to -> from` labeled with the
    /// opposite direction. Calling this twice with the same arguments leaves
    /// the map unchanged the second time.
    pub fn add_road(&mut self, from: &str, to: &str, direction: Direction) {
        self.add_city(from);

        let exists = self
            .roads
            .get(from)
            .is_some_and(|roads| roads.iter().any(|road| road.to == to));
        if exists {
            return;
        }

        let reciprocal = direction.opposite();
        self.push_road(from, Road::new(to, direction));

        if self.add_city(to) {
            self.push_road(to, Road::new(from, reciprocal));
        }
    }

    fn push_road(&mut self, from: &str, road: Road) {
        self.incoming
            .entry(road.to.clone())
            .or_default()
            .insert(from.to_string());
        if let Some(roads) = self.roads.get_mut(from) {
            roads.push(road);
        }
    }

    /// Removes a city and every road touching it.
    ///
    /// Returns the number of roads removed from *other* cities' road lists,
    /// or `None` if the city did not exist.
    pub fn remove_city(&mut self, name: &str) -> Option<usize> {
        let outgoing = self.roads.remove(name)?;
        self.cities.retain(|city| city != name);

        for road in &outgoing {
            if let Some(sources) = self.incoming.get_mut(&road.to) {
                sources.remove(name);
            }
        }

        let mut pruned = 0;
        for source in self.incoming.remove(name).unwrap_or_default() {
            if source == name {
                continue;
            }
            if let Some(roads) = self.roads.get_mut(&source) {
                let before = roads.len();
                roads.retain(|road| road.to != name);
                pruned += before - roads.len();
            }
        }

        Some(pruned)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roads.contains_key(name)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Live cities in canonical order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn city_at(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    /// Roads leaving `name`, empty for unknown cities
    pub fn roads_from(&self, name: &str) -> &[Road] {
        self.roads.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, name: &str) -> usize {
        self.roads_from(name).len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.values().map(Vec::len).sum()
    }

    /// Verifies the map has no dangling roads and that its indices agree
    pub fn check_integrity(&self) -> Result<(), MapIntegrityError> {
        for city in &self.cities {
            if !self.roads.contains_key(city) {
                return Err(MapIntegrityError::MissingRoadTable(city.clone()));
            }
        }
        if self.roads.len() != self.cities.len() {
            let listed: HashSet<&String> = self.cities.iter().collect();
            if let Some(extra) = self.roads.keys().find(|name| !listed.contains(name)) {
                return Err(MapIntegrityError::UnlistedCity(extra.clone()));
            }
        }

        for (from, roads) in &self.roads {
            for road in roads {
                if !self.roads.contains_key(&road.to) {
                    return Err(MapIntegrityError::DanglingRoad {
                        from: from.clone(),
                        to: road.to.clone(),
                    });
                }
                let indexed = self
                    .incoming
                    .get(&road.to)
                    .is_some_and(|sources| sources.contains(from));
                if !indexed {
                    return Err(MapIntegrityError::StaleIncomingIndex {
                        from: from.clone(),
                        to: road.to.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Roads whose reciprocal is missing or carries the wrong label.
    ///
    /// A road labeled with a non-compass direction is satisfied by a
    /// reciprocal carrying [`Direction::Unlabeled`], and an unlabeled road
    /// by any road leading back.
    pub fn asymmetric_roads(&self) -> Vec<(String, Road)> {
        let mut found = Vec::new();
        for from in &self.cities {
            for road in self.roads_from(from) {
                let expected = road.direction.opposite();
                let mirrored = self.roads_from(&road.to).iter().any(|back| {
                    back.to == *from
                        && (road.direction == Direction::Unlabeled || back.direction == expected)
                });
                if !mirrored {
                    found.push((from.clone(), road.clone()));
                }
            }
        }
        found
    }
}
