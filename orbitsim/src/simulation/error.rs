//! Error type shared by the simulation, configuration and scaling code.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share the same position, the pairwise term divides by zero
    CoincidentBodies { first: usize, second: usize },
    /// An operation that needs at least one body got none
    EmptySystem,
    BodyIndexOutOfRange { index: usize, len: usize },
    /// `dt` must be finite and strictly positive
    InvalidTimeStep(f64),
    InvalidParameter { name: &'static str, reason: String },
    /// Zero-width source range in a linear remap
    DegenerateRange { min: f64, max: f64 },
    Config(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { first, second } => {
                write!(f, "bodies {first} and {second} occupy the same position")
            }
            SimError::EmptySystem => write!(f, "body collection is empty"),
            SimError::BodyIndexOutOfRange { index, len } => {
                write!(f, "body index {index} out of range for {len} bodies")
            }
            SimError::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and positive, got {dt}")
            }
            SimError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            SimError::DegenerateRange { min, max } => {
                write!(f, "source range [{min}, {max}] has zero width")
            }
            SimError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for SimError {}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

/// Fail fast on a non-finite or non-positive step
pub fn check_time_step(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}
