//! Read-only copies of engine state handed to reporting code.

use serde::{Deserialize, Serialize};

use crate::registry::{AlienId, AlienRegistry};
use crate::world::{Road, WorldMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySnapshot {
    pub name: String,
    pub roads: Vec<Road>,
}

/// Live cities in canonical order with their outgoing roads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub cities: Vec<CitySnapshot>,
}

impl WorldSnapshot {
    pub fn capture(map: &WorldMap) -> Self {
        let cities = map
            .cities()
            .iter()
            .map(|name| CitySnapshot {
                name: name.clone(),
                roads: map.roads_from(name).to_vec(),
            })
            .collect();
        Self { cities }
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|city| city.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&CitySnapshot> {
        self.cities.iter().find(|city| city.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienPosition {
    pub id: AlienId,
    pub name: String,
    /// `None` until the alien has been placed
    pub city: Option<String>,
}

/// Live aliens in spawn order with their current city
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienSnapshot {
    pub aliens: Vec<AlienPosition>,
}

impl AlienSnapshot {
    pub fn capture(registry: &AlienRegistry) -> Self {
        let aliens = registry
            .aliens()
            .map(|alien| AlienPosition {
                id: alien.id,
                name: alien.name.clone(),
                city: registry.location_of(alien.id).map(str::to_string),
            })
            .collect();
        Self { aliens }
    }

    pub fn names(&self) -> Vec<&str> {
        self.aliens.iter().map(|alien| alien.name.as_str()).collect()
    }

    /// City of the first live alien with this name
    pub fn city_of(&self, name: &str) -> Option<&str> {
        self.aliens
            .iter()
            .find(|alien| alien.name == name)
            .and_then(|alien| alien.city.as_deref())
    }
}
