//! Fatal error kinds for a simulation run.
//!
//! Every variant is terminal: the run aborts, nothing is retried. The
//! binary prints the message and exits non-zero.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that abort a simulation run.
#[derive(Debug)]
pub enum SimulationError {
    /// Storage for the floor grid could not be obtained.
    Allocation(String),
    /// Missing, corrupt or out-of-range parameters, detected before any
    /// simulation state is created.
    Configuration(String),
    /// A snapshot could not be delivered to its output sink.
    Output(io::Error),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Allocation(detail) => {
                write!(f, "floor storage could not be allocated: {detail}")
            }
            SimulationError::Configuration(detail) => {
                write!(f, "invalid configuration: {detail}")
            }
            SimulationError::Output(source) => {
                write!(f, "snapshot output failed: {source}")
            }
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimulationError::Output(source) => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SimulationError {
    fn from(source: io::Error) -> Self {
        SimulationError::Output(source)
    }
}
