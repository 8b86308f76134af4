//! Property test: the bounds invariant.
//!
//! For any valid parameter combination, a full run must leave every robot
//! inside the floor and every tile holding a valid colour code.

use proptest::prelude::*;

use srpa::config::Params;
use srpa::simulation::Simulation;
use srpa::types::InitPattern;

fn arb_pattern() -> impl Strategy<Value = InitPattern> {
    prop_oneof![
        Just(InitPattern::RandomStripes),
        Just(InitPattern::Checkerboard),
        Just(InitPattern::AllMagenta),
    ]
}

proptest! {
    #[test]
    fn full_runs_preserve_the_bounds_invariant(
        rows in 12usize..=40,
        cols in 12usize..=40,
        robot_count in 1usize..=10,
        init_pattern in arb_pattern(),
        seed in 10u32..=32767,
        iterations in 5u32..=60,
        snapshot_interval in 1u32..=20,
    ) {
        let params = Params {
            rows,
            cols,
            robot_count,
            init_pattern,
            seed,
            iterations,
            snapshot_interval,
            output_path: "snapshots.txt".to_string(),
        };
        prop_assert!(params.validate().is_ok());

        let mut simulation = Simulation::new(&params).unwrap();
        let mut sink = Vec::new();
        simulation.run(&mut sink).unwrap();

        for (n, robot) in simulation.robots.robots.iter().enumerate() {
            prop_assert!(robot.x < rows, "robot {n} escaped on x: {}", robot.x);
            prop_assert!(robot.y < cols, "robot {n} escaped on y: {}", robot.y);
        }

        for i in 0..rows {
            for j in 0..cols {
                let code = simulation.floor.get_tile(i, j).code();
                prop_assert!((1..=6).contains(&code), "tile ({i},{j}) has code {code}");
            }
        }
    }
}
