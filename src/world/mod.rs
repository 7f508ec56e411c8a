//! World module.
//!
//! This module contains the map the aliens roam: cities, the directed
//! roads between them, and the layout description a map is built from.

pub mod direction;
pub mod layout;
pub mod map;

// Re-export key types for easier access
pub use direction::Direction;
pub use layout::{LayoutLine, RoadDecl, WorldLayout};
pub use map::{MapIntegrityError, Road, WorldMap};
