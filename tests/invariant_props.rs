//! Property tests for the map, the registry and the round engine.

use invasim::registry::AlienRegistry;
use invasim::simulation::Simulation;
use invasim::world::WorldLayout;
use proptest::prelude::*;

const CITIES: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn layout_strategy() -> impl Strategy<Value = WorldLayout> {
    let city = prop::sample::select(CITIES.to_vec());
    let direction = prop::sample::select(vec!["north", "south", "east", "west", "up"]);
    let line = (city.clone(), prop::collection::vec((direction, city), 0..4));

    prop::collection::vec(line, 1..8).prop_map(|lines| {
        lines
            .iter()
            .fold(WorldLayout::new(), |layout, (city, roads)| layout.line(city, roads))
    })
}

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("alien{}", i)).collect()
}

proptest! {
    #[test]
    fn rounds_keep_indices_and_map_consistent(
        layout in layout_strategy(),
        aliens in 0usize..12,
        seed in any::<u64>(),
        budget in 0u64..40,
    ) {
        let mut sim = Simulation::initialize(&layout, &names(aliens), seed);
        let mut asymmetric = sim.map().asymmetric_roads();

        for _ in 0..budget {
            let Some(outcome) = sim.step() else { break };
            prop_assert_eq!(sim.check_invariants(), Ok(()));

            for alien in sim.registry().aliens() {
                prop_assert!(sim.registry().location_of(alien.id).is_some());
                let holders = sim
                    .map()
                    .cities()
                    .iter()
                    .filter(|city| sim.registry().agents_at(city).contains(&alien.id))
                    .count();
                prop_assert_eq!(holders, 1);
            }

            // Removing cities never breaks a road pair that was intact
            let now = sim.map().asymmetric_roads();
            for road in &now {
                prop_assert!(asymmetric.contains(road));
            }
            asymmetric = now;

            for city in outcome.destroyed_cities() {
                prop_assert!(!sim.map().contains(city));
                for other in sim.map().cities() {
                    prop_assert!(sim.map().roads_from(other).iter().all(|road| road.to != city));
                }
            }
        }
    }

    #[test]
    fn run_rounds_respects_budget(
        layout in layout_strategy(),
        aliens in 0usize..12,
        seed in any::<u64>(),
        budget in 0u64..60,
    ) {
        let mut sim = Simulation::initialize(&layout, &names(aliens), seed);
        let early = sim.run_rounds(budget);

        prop_assert!(sim.round() <= budget);
        if early {
            prop_assert!(sim.registry().is_empty() || sim.map().is_empty());
        } else {
            prop_assert_eq!(sim.round(), budget);
        }
    }

    #[test]
    fn same_seed_same_history(
        layout in layout_strategy(),
        aliens in 0usize..12,
        seed in any::<u64>(),
    ) {
        let mut first = Simulation::initialize(&layout, &names(aliens), seed);
        let mut second = Simulation::initialize(&layout, &names(aliens), seed);

        for _ in 0..30 {
            prop_assert_eq!(first.step(), second.step());
            prop_assert_eq!(first.alien_snapshot(), second.alien_snapshot());
            prop_assert_eq!(first.world_snapshot(), second.world_snapshot());
        }
    }

    #[test]
    fn registry_operations_keep_indices_in_step(
        ops in prop::collection::vec((0usize..6, 0usize..4, any::<bool>()), 0..60),
    ) {
        let mut registry = AlienRegistry::new();
        let ids = registry.spawn(names(6));

        for (alien, city, kill) in ops {
            if kill {
                registry.kill_all(&[ids[alien]]);
            } else {
                registry.move_to(ids[alien], CITIES[city]);
            }
            prop_assert_eq!(registry.check_consistency(), Ok(()));
        }
    }
}
