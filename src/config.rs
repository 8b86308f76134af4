//! # Configuration Module
//!
//! This module implements the parameter contract between the simulation core and
//! the outside world. It provides the parameter structure, file loading, and the
//! range validation that guards every simulation run.
//!
//! ## Supported Formats
//!
//! Two on-disk formats are accepted:
//! - The legacy whitespace format: a single sequence of eight
//!   whitespace-separated fields,
//!   `rows cols robot_count init_pattern seed iterations snapshot_interval output_path`,
//!   with the initialisation pattern given by its numeric code (1-3)
//! - JSON, for any path ending in `.json`, deserialized directly into [`Params`]
//!
//! ## Validation
//!
//! Whatever the source, the values are range-checked before any simulation state
//! is created. A failure here is fatal: the binary reports the offending field
//! and exits without touching the floor or the robots.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::SimulationError;
use crate::types::{
    InitPattern, MAX_COLS, MAX_ITERATIONS, MAX_OUTPUT_PATH, MAX_ROBOTS, MAX_ROWS, MAX_SEED,
    MIN_COLS, MIN_ITERATIONS, MIN_ROBOTS, MIN_ROWS, MIN_SEED,
};

/// Complete, validated input contract of one simulation run.
///
/// The core consumes this struct as-is; it never parses configuration text
/// itself. Field order matters only for the legacy whitespace format,
/// which lists the fields in declaration order.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Params {
    /// Number of floor rows (12-100)
    pub rows: usize,
    /// Number of floor columns (12-100)
    pub cols: usize,
    /// Number of robots placed on the floor (1-10)
    pub robot_count: usize,
    /// Floor initialisation pattern
    pub init_pattern: InitPattern,
    /// Shared seed for floor stripes and robot placement (10-32767)
    pub seed: u32,
    /// Number of movement iterations to run (5-2000)
    pub iterations: u32,
    /// Emit a snapshot every this many ticks (>= 1)
    pub snapshot_interval: u32,
    /// Destination file for the snapshot stream (at most 49 characters)
    pub output_path: String,
}

impl Params {
    /// Loads and validates parameters from `path`.
    ///
    /// `.json` files are deserialized with serde_json; anything else is
    /// parsed as the legacy whitespace format.
    pub fn from_file(path: &str) -> Result<Params, SimulationError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SimulationError::Configuration(format!("could not open input file {path}: {e}"))
        })?;

        let params = if Path::new(path).extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents).map_err(|e| {
                SimulationError::Configuration(format!("corrupt JSON in input file {path}: {e}"))
            })?
        } else {
            Params::parse_legacy(&contents)?
        };

        params.validate()?;
        Ok(params)
    }

    /// Parses the eight-field whitespace layout of `robots_input.txt`.
    pub fn parse_legacy(contents: &str) -> Result<Params, SimulationError> {
        let mut fields = contents.split_whitespace();
        let mut next = |name: &str| {
            fields.next().map(str::to_string).ok_or_else(|| {
                SimulationError::Configuration(format!(
                    "corrupt or incomplete data in input file: missing {name}"
                ))
            })
        };

        let rows = parse_field(&next("rows")?, "rows")?;
        let cols = parse_field(&next("cols")?, "cols")?;
        let robot_count = parse_field(&next("robot count")?, "robot count")?;
        let pattern_code: u32 = parse_field(&next("init pattern")?, "init pattern")?;
        let seed = parse_field(&next("seed")?, "seed")?;
        let iterations = parse_field(&next("iterations")?, "iterations")?;
        let snapshot_interval = parse_field(&next("snapshot interval")?, "snapshot interval")?;
        let output_path = next("output path")?;

        let init_pattern = InitPattern::from_code(pattern_code).ok_or_else(|| {
            SimulationError::Configuration(format!(
                "init pattern code {pattern_code} is not one of 1 (stripes), 2 (checkerboard), 3 (magenta)"
            ))
        })?;

        Ok(Params {
            rows,
            cols,
            robot_count,
            init_pattern,
            seed,
            iterations,
            snapshot_interval,
            output_path,
        })
    }

    /// Range-checks every field against the simulation bounds.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_range("rows", self.rows, MIN_ROWS, MAX_ROWS)?;
        check_range("cols", self.cols, MIN_COLS, MAX_COLS)?;
        check_range("robot count", self.robot_count, MIN_ROBOTS, MAX_ROBOTS)?;
        check_range("seed", self.seed, MIN_SEED, MAX_SEED)?;
        check_range("iterations", self.iterations, MIN_ITERATIONS, MAX_ITERATIONS)?;

        if self.snapshot_interval < 1 {
            return Err(SimulationError::Configuration(
                "snapshot interval must be at least 1".to_string(),
            ));
        }

        if self.output_path.is_empty() || self.output_path.len() > MAX_OUTPUT_PATH {
            return Err(SimulationError::Configuration(format!(
                "output path must be 1 to {MAX_OUTPUT_PATH} characters, got {}",
                self.output_path.len()
            )));
        }

        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, SimulationError> {
    raw.parse().map_err(|_| {
        SimulationError::Configuration(format!(
            "corrupt or incomplete data in input file: bad {name} value '{raw}'"
        ))
    })
}

fn check_range<T: PartialOrd + std::fmt::Display>(
    name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), SimulationError> {
    if value < min || value > max {
        return Err(SimulationError::Configuration(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}
