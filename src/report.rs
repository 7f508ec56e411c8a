//! Text and JSON views of a run. Nothing here touches engine state; every
//! function works on snapshots or events.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::simulation::{AlienSnapshot, SimEvent, WorldSnapshot};

/// Renders the world in the same format the world file uses.
///
/// One line per live city in canonical order, roads in insertion order.
/// Unlabeled roads render as `=Target`.
pub fn render_world(world: &WorldSnapshot) -> String {
    let mut out = String::new();
    for city in &world.cities {
        out.push_str(&city.name);
        for road in &city.roads {
            let _ = write!(out, " {}={}", road.direction, road.to);
        }
        out.push('\n');
    }
    out
}

/// Human-readable description of which cities connect where
pub fn describe_world(world: &WorldSnapshot) -> String {
    let mut out = String::new();
    for city in &world.cities {
        if city.roads.is_empty() {
            let _ = writeln!(out, "{} has no roads", city.name);
            continue;
        }
        let _ = writeln!(out, "{} is connected to:", city.name);
        for road in &city.roads {
            let _ = writeln!(out, "    {} lies {} of {}", road.to, road.direction, city.name);
        }
    }
    out
}

/// One line per live alien, with its city once placed
pub fn render_roster(aliens: &AlienSnapshot) -> String {
    let mut out = String::new();
    for (index, alien) in aliens.aliens.iter().enumerate() {
        match &alien.city {
            Some(city) => {
                let _ = writeln!(out, "alien {} is named {} and is in {}", index, alien.name, city);
            }
            None => {
                let _ = writeln!(out, "alien {} is named {}", index, alien.name);
            }
        }
    }
    out
}

/// Describes an event, or `None` for events not worth printing
pub fn render_event(event: &SimEvent) -> Option<String> {
    match event {
        SimEvent::CityDestroyed { city, aliens } => {
            let names: Vec<&str> = aliens.iter().map(|alien| alien.name.as_str()).collect();
            let by = match names.split_last() {
                Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
                _ => names.join(""),
            };
            Some(format!("{} has been destroyed by {}!", city, by))
        }
        SimEvent::Trapped { name, city, .. } => Some(format!("{} is trapped in {}", name, city)),
        _ => None,
    }
}

/// End-of-run summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub seed: u64,
    pub rounds: u64,
    pub terminated_early: bool,
    pub surviving_aliens: Vec<String>,
    pub surviving_cities: Vec<String>,
    pub destroyed_cities: Vec<String>,
}

impl Summary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
