//! # Invasim - seeded simulation of an alien invasion
//!
//! Aliens land on a map of cities joined by directed roads and wander it
//! one round at a time. Whenever two or more aliens end a round in the same
//! city they fight, and the city is destroyed along with them and every road
//! leading in or out of it.
//!
//! ## Architecture
//!
//! - `world`: the map (cities, labeled roads, layout replay)
//! - `registry`: live aliens and the city each one occupies
//! - `simulation`: the round engine, its random source and read-only snapshots
//! - `loader`: world-file and name-file parsing
//! - `report`: text and JSON rendering of snapshots and events
//! - `utils`: input validation and seed selection
//!
//! ## Example Usage
//!
//! ```rust
//! use invasim::simulation::Simulation;
//! use invasim::world::WorldLayout;
//!
//! let layout = WorldLayout::new()
//!     .line("Foo", &[("north", "Bar"), ("west", "Baz")])
//!     .line("Bar", &[("south", "Foo")]);
//!
//! let mut sim = Simulation::initialize(&layout, &["Zorg", "Kang"], 42);
//! let ended_early = sim.run_rounds(100);
//!
//! assert!(sim.round() <= 100);
//! if ended_early {
//!     assert!(sim.registry().is_empty() || sim.map().is_empty());
//! }
//! ```
//!
//! ## World File Format
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! ## Determinism
//!
//! A run is fully determined by the seed, the order of lines and roads in
//! the world file and the order of names in the name file.
//!
//! ## Error Handling
//!
//! Library errors are typed (`LoadError`, `ValidationError`,
//! `InvariantViolation`). The binary reports them through `color_eyre`.
//! The engine itself never fails on a well-formed map.

pub mod loader;
pub mod registry;
pub mod report;
pub mod simulation;
pub mod utils;
pub mod world;
