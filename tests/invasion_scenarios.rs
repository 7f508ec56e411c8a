//! End-to-end scenarios: files on disk -> loader -> engine -> report.

use std::io::Write;

use invasim::loader::{load_alien_names, load_world};
use invasim::report::render_world;
use invasim::simulation::{Phase, ScriptedSource, SimEvent, Simulation};
use invasim::utils::validate_inputs;
use invasim::world::{Direction, WorldLayout, WorldMap};
use tempfile::NamedTempFile;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const WORLD_EXAMPLE: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
Baz east=Foo
Qu-ux north=Foo
Bee east=Bar
";

const NAMES: &str = "Alien0\nAlien1\nAlien2\nAlien3\nAlien4\nAlien5\n";

#[test]
fn test_world_file_round_trips_through_report() {
    let world = temp_file(WORLD_EXAMPLE);
    let layout = load_world(world.path()).unwrap();
    let map = layout.build();

    assert_eq!(map.city_count(), 5);
    assert!(map.asymmetric_roads().is_empty());

    let names: [&str; 0] = [];
    let sim = Simulation::initialize(&layout, &names, 0);
    assert_eq!(render_world(&sim.world_snapshot()), WORLD_EXAMPLE);
}

#[test]
fn test_foo_scenario_from_files() {
    // Foo is declared first, its targets are numbered in road order: Foo, Lee, Bar, Mee.
    let world = temp_file("Foo north=Lee south=Bar west=Mee\n");
    let names = temp_file(NAMES);

    let layout = load_world(world.path()).unwrap();
    let aliens = load_alien_names(names.path(), 4).unwrap();
    let mut sim = Simulation::with_source(layout.build(), &aliens, ScriptedSource::new([0, 2, 0, 1]));

    let outcome = sim.step().unwrap();
    assert_eq!(outcome.destroyed_cities(), vec!["Foo"]);

    let snapshot = sim.alien_snapshot();
    assert_eq!(snapshot.names(), vec!["Alien1", "Alien3"]);
    assert_eq!(snapshot.city_of("Alien1"), Some("Bar"));
    assert_eq!(snapshot.city_of("Alien3"), Some("Lee"));
    assert_eq!(sim.world_snapshot().city_names(), vec!["Lee", "Bar", "Mee"]);
    assert_eq!(render_world(&sim.world_snapshot()), "Lee\nBar\nMee\n");
}

#[test]
fn test_multiple_fights_in_one_round() {
    let layout = WorldLayout::new()
        .line("A", &[("north", "B")])
        .line("C", &[("north", "D")]);
    // A, B, C, D; two aliens land on A, two on C, one on D
    let aliens = ["a0", "a1", "a2", "a3", "a4"];
    let mut sim = Simulation::with_source(layout.build(), &aliens, ScriptedSource::new([0, 2, 0, 2, 3]));

    let outcome = sim.step().unwrap();
    assert_eq!(outcome.destroyed_cities(), vec!["A", "C"]);
    assert_eq!(outcome.casualties(), 4);
    assert_eq!(sim.alien_snapshot().names(), vec!["a4"]);
    assert_eq!(sim.world_snapshot().city_names(), vec!["B", "D"]);
    assert_eq!(sim.map().road_count(), 0);
}

#[test]
fn test_fight_snapshot_ignores_order_of_removal() {
    // Three aliens on one city, two on a neighbour: both cities go in the same round
    let layout = WorldLayout::new().line("X", &[("east", "Y")]);
    let aliens = ["x0", "x1", "x2", "y0", "y1"];
    let mut sim = Simulation::with_source(layout.build(), &aliens, ScriptedSource::new([0, 0, 0, 1, 1]));

    let outcome = sim.step().unwrap();
    assert_eq!(outcome.destroyed_cities(), vec!["X", "Y"]);
    assert!(sim.map().is_empty());
    assert!(sim.registry().is_empty());
    assert!(sim.step().is_none());
    assert_eq!(sim.phase(), Phase::Terminated);
}

#[test]
fn test_lonely_trapped_alien_does_not_end_the_run() {
    let mut map = WorldMap::new();
    map.add_city("Island");
    map.add_road("Foo", "Bar", Direction::North);
    // Zorg lands on Island and is trapped; Kang stays on Foo and Kodos walks in from Bar
    let aliens = ["Zorg", "Kang", "Kodos"];
    let mut sim = Simulation::with_source(map, &aliens, ScriptedSource::new([0, 1, 2, 1, 0]));

    let first = sim.step().unwrap();
    assert!(first.destroyed_cities().is_empty());

    let second = sim.step().unwrap();
    assert!(matches!(second.events[0], SimEvent::Trapped { .. }));
    assert_eq!(second.destroyed_cities(), vec!["Foo"]);

    assert!(!sim.run_rounds(30));
    assert_eq!(sim.round(), 32);
    assert_eq!(sim.alien_snapshot().city_of("Zorg"), Some("Island"));
}

#[test]
fn test_seeded_runs_are_reproducible_from_files() {
    let world = temp_file(WORLD_EXAMPLE);
    let names = temp_file(NAMES);
    validate_inputs(100, 6, names.path(), world.path()).unwrap();

    let layout = load_world(world.path()).unwrap();
    let aliens = load_alien_names(names.path(), 6).unwrap();

    let run = |seed| {
        let mut sim = Simulation::initialize(&layout, &aliens, seed);
        let mut log = Vec::new();
        let early = sim.run_rounds_with(100, |outcome| log.push(outcome.clone()));
        (early, log, sim.world_snapshot(), sim.alien_snapshot())
    };

    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_run_never_exceeds_budget() {
    let layout = load_world(temp_file(WORLD_EXAMPLE).path()).unwrap();
    for seed in 0..20 {
        let mut sim = Simulation::initialize(&layout, &["a", "b", "c"], seed);
        let early = sim.run_rounds(15);
        assert!(sim.round() <= 15);
        if early {
            assert!(sim.registry().is_empty() || sim.map().is_empty());
        } else {
            assert_eq!(sim.round(), 15);
        }
    }
}
