use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::Params;
use crate::error::SimulationError;
use crate::floor::Floor;
use crate::robot::RobotSet;

/// Owns the floor and the robot set for the duration of one run and
/// drives the tick loop. Snapshot emission goes through the output sink
/// handed to `run`, never directly to the console.
pub struct Simulation {
    pub floor: Floor,
    pub robots: RobotSet,
    pub iterations: u32,
    pub snapshot_interval: u32,
}

impl Simulation {
    /// Builds the initial simulation state from validated parameters.
    ///
    /// The generator is reseeded with the configured seed at both call
    /// sites, once before the floor pattern and once before the robot set,
    /// so both phases draw from the start of the same sequence.
    pub fn new(params: &Params) -> Result<Self, SimulationError> {
        // Interval 0 would make the snapshot modulo divide by zero;
        // reject before any state exists
        if params.snapshot_interval == 0 {
            return Err(SimulationError::Configuration(
                "snapshot interval must be at least 1".to_string(),
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(params.seed));
        let floor = Floor::new(params.rows, params.cols, params.init_pattern, &mut rng)?;

        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(params.seed));
        let robots = RobotSet::initialize(params.robot_count, params.rows, params.cols, &mut rng);

        Ok(Self {
            floor,
            robots,
            iterations: params.iterations,
            snapshot_interval: params.snapshot_interval,
        })
    }

    /// Advances every robot through one tick, strictly in index order.
    /// A robot's burst may repaint tiles painted earlier in the same tick,
    /// so the order is load-bearing.
    pub fn tick(&mut self) {
        for robot in &mut self.robots.robots {
            robot.update(&mut self.floor);
        }
    }

    /// Writes one full-grid snapshot: a header line, then one line per row
    /// of space-terminated colour codes, top row first.
    pub fn write_snapshot(&self, tick: u32, out: &mut dyn Write) -> Result<(), SimulationError> {
        writeln!(out, "Iteration {tick}:")?;
        for i in 0..self.floor.rows {
            for j in 0..self.floor.cols {
                write!(out, "{} ", self.floor.get_tile(i, j).code())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Runs the full simulation: iterations + 1 ticks, a snapshot on every
    /// tick divisible by the interval, emitted before that tick's movement.
    /// The first snapshot (tick 0) therefore shows the untouched floor.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<(), SimulationError> {
        for tick in 0..=self.iterations {
            if tick % self.snapshot_interval == 0 {
                self.write_snapshot(tick, out)?;
            }
            self.tick();
        }
        Ok(())
    }
}
