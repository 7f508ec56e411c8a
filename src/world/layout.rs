//! Declarative description of a world, one entry per world-file line.
//!
//! Order matters: cities are numbered in the order they are first
//! mentioned, and placement draws index into that order. [`WorldLayout::build`]
//! replays the lines exactly as they were read, declaring each line's city
//! and then adding its roads, so a city first mentioned as a road target is
//! numbered before the city on the following line.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::map::WorldMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadDecl {
    pub direction: Direction,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutLine {
    pub city: String,
    pub roads: Vec<RoadDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub lines: Vec<LayoutLine>,
}

impl WorldLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line declaring `city` with `(direction, target)` roads
    ///
    /// # Examples
    /// ```
    /// use invasim::world::WorldLayout;
    ///
    /// let map = WorldLayout::new()
    ///     .line("Foo", &[("north", "Bar"), ("west", "Baz")])
    ///     .line("Bar", &[("south", "Foo")])
    ///     .build();
    /// assert_eq!(map.city_count(), 3);
    /// assert_eq!(map.out_degree("Foo"), 2);
    /// ```
    pub fn line(mut self, city: &str, roads: &[(&str, &str)]) -> Self {
        self.lines.push(LayoutLine {
            city: city.to_string(),
            roads: roads
                .iter()
                .map(|(direction, to)| RoadDecl {
                    direction: Direction::parse(direction),
                    to: to.to_string(),
                })
                .collect(),
        });
        self
    }

    /// Replays the lines against an empty map
    pub fn build(&self) -> WorldMap {
        let mut map = WorldMap::new();
        for line in &self.lines {
            map.add_city(&line.city);
            for road in &line.roads {
                map.add_road(&line.city, &road.to, road.direction.clone());
            }
        }
        map
    }

    pub fn declared_roads(&self) -> usize {
        self.lines.iter().map(|line| line.roads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
