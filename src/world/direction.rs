//! Compass directions used to label roads.
//!
//! The recognized vocabulary is the four-element group north/south/east/west.
//! A label outside it is kept verbatim as [`Direction::Other`] so the
//! simulation never fails on an unexpected token; the reciprocal of such a
//! road carries [`Direction::Unlabeled`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label carried by a road from one city to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    /// A label read from input that is not a compass point
    Other(String),
    /// Empty label, produced as the reciprocal of an unrecognized one
    Unlabeled,
}

impl Direction {
    /// Returns the direction a reciprocal road must carry
    ///
    /// # Examples
    /// ```
    /// use invasim::world::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::West.opposite(), Direction::East);
    /// assert_eq!(Direction::parse("up").opposite(), Direction::Unlabeled);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Other(_) | Self::Unlabeled => Self::Unlabeled,
        }
    }

    /// Parses a label case-insensitively, never failing
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_lowercase().as_str() {
            "north" => Self::North,
            "south" => Self::South,
            "east" => Self::East,
            "west" => Self::West,
            "" => Self::Unlabeled,
            _ => Self::Other(label.to_string()),
        }
    }

    /// True for the four compass points
    pub fn is_compass(&self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Other(label) => label,
            Self::Unlabeled => "",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in [Direction::North, Direction::South, Direction::East, Direction::West] {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Direction::parse("north"), Direction::North);
        assert_eq!(Direction::parse("EAST"), Direction::East);
        assert_eq!(Direction::parse("South"), Direction::South);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let up = Direction::parse("up");
        assert_eq!(up, Direction::Other("up".to_string()));
        assert!(!up.is_compass());
        assert_eq!(up.to_string(), "up");
        assert_eq!(up.opposite().to_string(), "");
        assert_eq!(Direction::parse(""), Direction::Unlabeled);
    }
}
