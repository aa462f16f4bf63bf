//! Core state types for the n-body simulation.
//!
//! - `NVec3` is the 3-component vector used for positions, velocities
//!   and accelerations (SI units throughout)
//! - `Body` is one point mass plus the presentation metadata that the
//!   physics never reads (`size`, `name`, `color`)
//! - `System` holds the ordered list of bodies and the elapsed time `t`

use nalgebra::Vector3;

use crate::simulation::error::SimError;
use crate::simulation::forces::GravityField;
use crate::simulation::integrator::semi_implicit_euler;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: NVec3, // m
    pub velocity: NVec3, // m/s
    pub mass: f64,       // kg, must stay > 0
    pub size: f64,       // display radius, never read by the physics
    pub name: String,
    pub color: String,   // opaque token handed to the renderer
}

impl Body {
    pub fn new(position: NVec3, velocity: NVec3, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
            size: 1.0,
            name: String::new(),
            color: String::from("white"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Linear momentum `m * v`
    pub fn momentum(&self) -> NVec3 {
        self.mass * self.velocity
    }
}

/// Ordered body collection plus simulated time.
///
/// The body count is fixed once the system is built; the order of `bodies`
/// is the indexing used by the force computation.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // seconds
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Index of the first body called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    /// Advance by one semi-implicit Euler step and move `t` forward by `dt`
    pub fn step<F: GravityField + ?Sized>(&mut self, gravity: &F, dt: f64) -> Result<(), SimError> {
        semi_implicit_euler(&mut self.bodies, gravity, dt)?;
        self.t += dt;
        Ok(())
    }
}
