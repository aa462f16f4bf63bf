//! Numerical and physical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size `dt` and number of steps,
//! - sampling stride for the trajectory history,
//! - gravitational constant and coincident-body policy

use crate::simulation::error::{check_time_step, SimError};
use crate::simulation::forces::{CoincidentPolicy, NewtonianGravity, G};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,              // step size, seconds
    pub total_steps: usize,   // run performs total_steps - 1 steps
    pub sample_stride: usize, // steps between history samples
    pub g: f64,               // gravitational constant
    pub coincident: CoincidentPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1000.0,
            total_steps: 10_000,
            sample_stride: 100,
            g: G,
            coincident: CoincidentPolicy::Error,
        }
    }
}

impl Parameters {
    /// Reject values the runner cannot work with
    pub fn validate(&self) -> Result<(), SimError> {
        check_time_step(self.dt)?;
        if self.total_steps == 0 {
            return Err(SimError::InvalidParameter {
                name: "total_steps",
                reason: "must be at least 1".into(),
            });
        }
        if self.sample_stride == 0 {
            return Err(SimError::InvalidParameter {
                name: "sample_stride",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.g.is_finite() && self.g > 0.0) {
            return Err(SimError::InvalidParameter {
                name: "G",
                reason: format!("must be finite and positive, got {}", self.g),
            });
        }
        Ok(())
    }

    pub fn gravity(&self) -> NewtonianGravity {
        NewtonianGravity::new(self.g, self.coincident)
    }
}
