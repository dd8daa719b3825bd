use std::collections::BTreeSet;

use vrp_dispatch::distance::{distance, nearest};
use vrp_dispatch::domain::{Assignment, Driver, Load, Point};
use vrp_dispatch::fixtures::generate_random_loads;
use vrp_dispatch::setup::build_loads;
use vrp_dispatch::solver::greedy::{AssignmentEngine, Decision, LoadQueue};
use vrp_dispatch::DispatchConfig;

fn random_loads(count: usize, extent: f64, seed: u64) -> Vec<Load> {
    build_loads(generate_random_loads(count, extent, seed))
}

fn assign(config: DispatchConfig, loads: Vec<Load>) -> Vec<Driver> {
    AssignmentEngine::new(config)
        .assign(loads)
        .unwrap()
        .into_drivers()
        .unwrap()
}

#[test]
fn every_load_is_assigned_exactly_once() {
    for seed in 0..8 {
        let loads = random_loads(150, 200.0, seed);
        let drivers = assign(DispatchConfig::default(), loads);

        let mut seen = BTreeSet::new();
        for driver in &drivers {
            assert!(!driver.loads().is_empty());
            for id in driver.load_ids() {
                assert!(seen.insert(id), "load {id} assigned twice (seed {seed})");
            }
        }
        assert_eq!(seen, (1..=150).collect::<BTreeSet<_>>(), "seed {seed}");
    }
}

#[test]
fn reused_drivers_never_exceed_budget() {
    let config = DispatchConfig::default();
    let loads = random_loads(300, 150.0, 99);
    let engine = AssignmentEngine::new(config);

    let mut drivers: Vec<Driver> = Vec::new();
    for load in LoadQueue::new(config.depot, loads) {
        let before: Vec<f64> = drivers.iter().map(Driver::working_time).collect();
        let decision = engine.decide(&drivers, &load).unwrap();
        let ind = engine.commit(&mut drivers, load, decision);

        if let Decision::Reuse(candidate) = decision {
            let projected = before[ind]
                + candidate.dropoff_to_pickup
                + candidate.legs.pickup_to_dropoff
                + candidate.legs.depot_to_pickup;
            assert!(projected <= config.max_working_time);
            assert!(drivers[ind].working_time() <= config.max_working_time);
        }
        for (d, prev) in drivers.iter().zip(&before) {
            assert!(d.working_time() >= *prev);
        }
    }
}

#[test]
fn same_input_same_assignment() {
    let loads = random_loads(200, 300.0, 2024);
    let first = assign(DispatchConfig::default(), loads.clone());
    let second = assign(DispatchConfig::default(), loads.clone());
    let parallel = assign(
        DispatchConfig {
            parallel_evaluation: true,
            ..DispatchConfig::default()
        },
        loads,
    );

    let ids = |drivers: &[Driver]| drivers.iter().map(Driver::load_ids).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), ids(&parallel));
}

#[test]
fn one_point_load_one_driver() {
    let loads = vec![Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 4.0))];
    let drivers = assign(DispatchConfig::default(), loads);
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].load_ids(), vec![1]);
    assert_eq!(
        vrp_dispatch::evaluation::route_distance(drivers[0].loads(), Point::new(0.0, 0.0)),
        10.0
    );
}

#[test]
fn far_apart_loads_do_not_share_a_driver() {
    let loads = vec![
        Load::new(1, Point::new(600.0, 0.0), Point::new(600.0, 10.0)),
        Load::new(2, Point::new(-600.0, 0.0), Point::new(-600.0, -10.0)),
    ];
    let drivers = assign(DispatchConfig::default(), loads);
    assert_eq!(drivers.len(), 2);
    assert_eq!(drivers[0].load_ids(), vec![1]);
    assert_eq!(drivers[1].load_ids(), vec![2]);
}

#[test]
fn fixed_cost_decides_between_reuse_and_new_driver() {
    let loads = || {
        vec![
            Load::new(1, Point::new(600.0, 0.0), Point::new(700.0, 0.0)),
            Load::new(2, Point::new(0.0, -650.0), Point::new(0.0, -1300.0)),
        ]
    };
    // drop-off of 1 to pickup of 2 is ~955
    let generous = DispatchConfig {
        max_working_time: 5_000.0,
        ..DispatchConfig::default()
    };
    assert_eq!(assign(generous, loads()).len(), 1);

    let tight = DispatchConfig {
        fixed_driver_cost: 100.0,
        ..generous
    };
    assert_eq!(assign(tight, loads()).len(), 2);
}

#[test]
fn chained_pickup_reuses_driver() {
    let loads = vec![
        Load::new(1, Point::new(10.0, 10.0), Point::new(50.0, 40.0)),
        Load::new(2, Point::new(50.0, 40.0), Point::new(80.0, 80.0)),
    ];
    let drivers = assign(DispatchConfig::default(), loads);
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].load_ids(), vec![1, 2]);
    assert!(drivers[0].working_time() <= 720.0);
}

#[test]
fn zero_loads_is_not_an_empty_success() {
    let outcome = AssignmentEngine::new(DispatchConfig::default())
        .assign(Vec::new())
        .unwrap();
    assert_eq!(outcome, Assignment::NoLoadsToAssign);
    assert!(outcome.into_drivers().is_err());
}

#[test]
fn nearest_returns_member_of_set() {
    let records = generate_random_loads(40, 100.0, 5);
    let dropoffs: Vec<Point> = records.iter().map(|r| r.dropoff).collect();
    for r in &records {
        let picked = nearest(r.pickup, dropoffs.iter().copied()).unwrap();
        assert!(dropoffs.contains(&picked));
        assert!(dropoffs
            .iter()
            .all(|&d| distance(r.pickup, picked) <= distance(r.pickup, d)));
    }
}
