//! Headless per-frame driver for interactive front ends.
//!
//! A renderer owns a [`FrameLoop`], draws `system.bodies` and `trail`, and
//! calls [`FrameLoop::advance`] once per frame with whatever mass input the
//! user gave. Window creation and input polling stay with the renderer.

use log::debug;

use crate::simulation::error::SimError;
use crate::simulation::forces::GravityField;
use crate::simulation::states::{Body, System};
use crate::visualization::scale::Viewport;
use crate::visualization::trail::Trail;

/// Multiplier applied by one [`MassAdjust`] event
pub const MASS_STEP: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassAdjust {
    Increase,
    Decrease,
}

/// Multiply (`Increase`) or divide (`Decrease`) the body's mass by `factor`
pub fn adjust_mass(body: &mut Body, adjust: MassAdjust, factor: f64) {
    match adjust {
        MassAdjust::Increase => body.mass *= factor,
        MassAdjust::Decrease => body.mass /= factor,
    }
}

pub struct FrameLoop<F: GravityField> {
    pub system: System,
    pub gravity: F,
    pub viewport: Viewport,
    pub trail: Trail,
    pub dt: f64,
    /// Index of the body whose mass reacts to input
    pub controlled: usize,
    pub mass_step: f64,
}

impl<F: GravityField> FrameLoop<F> {
    pub fn new(system: System, gravity: F, dt: f64, trail_capacity: usize) -> Self {
        Self {
            system,
            gravity,
            viewport: Viewport::default(),
            trail: Trail::new(trail_capacity),
            dt,
            controlled: 0,
            mass_step: MASS_STEP,
        }
    }

    pub fn with_controlled(mut self, index: usize) -> Self {
        self.controlled = index;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Apply `input`, record the displayed positions, then step once
    pub fn advance(&mut self, input: Option<MassAdjust>) -> Result<(), SimError> {
        if let Some(adjust) = input {
            let len = self.system.len();
            let body = self
                .system
                .bodies
                .get_mut(self.controlled)
                .ok_or(SimError::BodyIndexOutOfRange { index: self.controlled, len })?;
            adjust_mass(body, adjust, self.mass_step);
            debug!("{} mass now {:e} kg", body.name, body.mass);
        }

        for (i, b) in self.system.bodies.iter().enumerate() {
            self.trail.push(i, self.viewport.project(&b.position));
        }

        self.system.step(&self.gravity, self.dt)
    }

    /// Current display position of every body, in body order
    pub fn projected(&self) -> Vec<[f64; 2]> {
        self.system
            .bodies
            .iter()
            .map(|b| self.viewport.project(&b.position))
            .collect()
    }
}
