//! Gravitational acceleration for the n-body engine
//!
//! Defines the [`GravityField`] trait and the direct-sum Newtonian
//! implementation. There is no softening: the pairwise term is the exact
//! gradient of the point-mass potential, so coincident bodies are handled
//! by an explicit [`CoincidentPolicy`].

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::states::{Body, NVec3};

/// Gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.67408e-11;

/// What to do when two bodies sit at exactly the same position
/// (`coincident: "error"` or `coincident: "skip"` in YAML)
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoincidentPolicy {
    #[serde(rename = "error")] // Report SimError::CoincidentBodies
    #[default]
    Error,

    #[serde(rename = "skip")] // Drop the zero-distance term from the sum
    Skip,
}

/// Source of the instantaneous acceleration on each body.
///
/// Implementations must be pure functions of the positions and masses in
/// `bodies`.
pub trait GravityField {
    /// Acceleration on `bodies[target]` due to every other body
    fn acceleration_of(&self, bodies: &[Body], target: usize) -> Result<NVec3, SimError>;

    /// Accelerations for every body, all evaluated against the same
    /// snapshot of `bodies`
    fn accelerations(&self, bodies: &[Body]) -> Result<Vec<NVec3>, SimError> {
        (0..bodies.len())
            .map(|i| self.acceleration_of(bodies, i))
            .collect()
    }
}

/// Direct O(n^2) Newtonian gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64,
    pub coincident: CoincidentPolicy,
}

impl NewtonianGravity {
    pub fn new(g: f64, coincident: CoincidentPolicy) -> Self {
        Self { g, coincident }
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(G, CoincidentPolicy::default())
    }
}

impl GravityField for NewtonianGravity {
    fn acceleration_of(&self, bodies: &[Body], target: usize) -> Result<NVec3, SimError> {
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        let Some(bt) = bodies.get(target) else {
            return Err(SimError::BodyIndexOutOfRange { index: target, len: bodies.len() });
        };
        let xt = bt.position;

        let mut acc = NVec3::zeros();
        for (j, bj) in bodies.iter().enumerate() {
            if j == target {
                continue;
            }

            // r points from the target to body j, so the pull is along +r
            let r = bj.position - xt;
            let dist = r.norm();

            if dist == 0.0 {
                match self.coincident {
                    CoincidentPolicy::Error => {
                        return Err(SimError::CoincidentBodies {
                            first: target.min(j),
                            second: target.max(j),
                        });
                    }
                    CoincidentPolicy::Skip => continue,
                }
            }

            // a += G * m_j * r / |r|^3
            acc += (self.g * bj.mass / (dist * dist * dist)) * r;
        }

        Ok(acc)
    }
}
