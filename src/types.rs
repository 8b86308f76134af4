//! # SRPA Types Module
//!
//! This module defines all the core data types used throughout the SRPA (Simulation de
//! Robots Peintres Autonomes) system. These types represent the fundamental building
//! blocks of the painting robot simulation.
//!
//! ## Key Components
//!
//! - **Colour**: Represents the paint colours a floor tile can hold
//! - **Direction**: The four cardinal headings a robot can face
//! - **InitPattern**: The available floor initialisation patterns
//! - **Bounds constants**: Valid ranges for every simulation parameter
//!
//! All types are serializable for configuration loading and state export.

use serde::{Serialize, Deserialize};

/// NOTE - Enum for all possible tile colours on the floor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colour {
    Red,     // NOTE - Code 1, robot paint
    Green,   // NOTE - Code 2, robot paint
    Yellow,  // NOTE - Code 3, robot paint
    Blue,    // NOTE - Code 4, robot paint
    Magenta, // NOTE - Code 5, floor patterns only
    White,   // NOTE - Code 6, floor patterns only
}

impl Colour {
    /// NOTE - All six tile colours, indexed by code - 1
    pub const ALL: [Colour; 6] = [
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
        Colour::Magenta,
        Colour::White,
    ];

    /// NOTE - The four colours a robot can be assigned as paint
    pub const PAINTABLE: [Colour; 4] = [
        Colour::Red,
        Colour::Green,
        Colour::Yellow,
        Colour::Blue,
    ];

    /// Numeric code used in snapshots and configuration files (1-6)
    pub fn code(&self) -> u8 {
        match self {
            Colour::Red => 1,
            Colour::Green => 2,
            Colour::Yellow => 3,
            Colour::Blue => 4,
            Colour::Magenta => 5,
            Colour::White => 6,
        }
    }

    /// Inverse of `code`, for values read from configuration files
    pub fn from_code(code: u8) -> Option<Colour> {
        match code {
            1 => Some(Colour::Red),
            2 => Some(Colour::Green),
            3 => Some(Colour::Yellow),
            4 => Some(Colour::Blue),
            5 => Some(Colour::Magenta),
            6 => Some(Colour::White),
            _ => None,
        }
    }
}

/// NOTE - Enum for the four headings a robot can face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North, // NOTE - Index 0, decreasing row
    East,  // NOTE - Index 1, increasing column
    South, // NOTE - Index 2, increasing row
    West,  // NOTE - Index 3, decreasing column
}

impl Direction {
    /// NOTE - The four headings, indexed 0-3 in clockwise turn order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Numeric index of this heading (0-3)
    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Heading after `quarter_turns` clockwise quarter turns
    pub fn turned(&self, quarter_turns: usize) -> Direction {
        Direction::ALL[(self.index() + quarter_turns) % 4]
    }
}

/// NOTE - Enum for the floor initialisation patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitPattern {
    RandomStripes, // NOTE - Code 1, seeded vertical stripes
    Checkerboard,  // NOTE - Code 2, alternating 4x4 blocks
    AllMagenta,    // NOTE - Code 3, uniform magenta floor
}

impl InitPattern {
    /// Pattern selected by its configuration file code (1-3)
    pub fn from_code(code: u32) -> Option<InitPattern> {
        match code {
            1 => Some(InitPattern::RandomStripes),
            2 => Some(InitPattern::Checkerboard),
            3 => Some(InitPattern::AllMagenta),
            _ => None,
        }
    }
}

/// NOTE - Global constants bounding the simulation parameters
pub const MIN_ROWS: usize = 12;
pub const MAX_ROWS: usize = 100;
pub const MIN_COLS: usize = 12;
pub const MAX_COLS: usize = 100;
pub const MIN_ROBOTS: usize = 1;
pub const MAX_ROBOTS: usize = 10;
pub const MIN_SEED: u32 = 10;
pub const MAX_SEED: u32 = 32767;
pub const MIN_ITERATIONS: u32 = 5;
pub const MAX_ITERATIONS: u32 = 2000;
pub const MAX_OUTPUT_PATH: usize = 49;

/// NOTE - Number of single-cell steps a robot takes each tick
pub const BURST_STEPS: usize = 4;
