//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, step count, sampling stride and physical constants
//! - [`BodyConfig`]       – initial state and display metadata for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types (SI units):
//!
//! ```yaml
//! parameters:
//!   dt: 1000.0              # seconds per step
//!   total_steps: 10000      # the run performs total_steps - 1 steps
//!   sample_stride: 100      # steps between history samples
//!   G: 6.67408e-11          # optional, gravitational constant
//!   coincident: "error"     # optional, or "skip"
//!
//! bodies:
//!   - name: sun
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     mass: 2.0e30
//!     size: 30.0
//!     color: yellow
//!   - name: earth
//!     position: [0.0, 1.5e11, 0.0]
//!     velocity: [30000.0, 0.0, 0.0]
//!     mass: 6.0e24
//! ```
//!
//! Values are not checked here; `Scenario::build` validates them when it
//! maps this configuration into runtime types.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::forces::{CoincidentPolicy, G};

fn default_g() -> f64 {
    G
}

fn default_size() -> f64 {
    1.0
}

fn default_color() -> String {
    String::from("white")
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64,              // time step size in seconds
    pub total_steps: usize,   // step indices 1..total_steps are simulated
    pub sample_stride: usize, // record positions every `sample_stride` steps
    #[serde(rename = "G", default = "default_g")]
    pub g: f64,               // gravitational constant
    #[serde(default)]
    pub coincident: CoincidentPolicy, // what to do when two bodies share a position
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    pub position: [f64; 3], // initial position in metres
    pub velocity: [f64; 3], // initial velocity in metres per second
    pub mass: f64,          // kilograms
    #[serde(default = "default_size")]
    pub size: f64,          // display radius, ignored by the physics
    #[serde(default = "default_color")]
    pub color: String,      // display colour token, ignored by the physics
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // Initial state of the system, in index order
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
parameters:
  dt: 10.0
  total_steps: 5
  sample_stride: 1
bodies:
  - position: [1.0, 2.0, 3.0]
    velocity: [0.0, 0.0, 0.0]
    mass: 4.0
"#,
        )
        .unwrap();

        assert_eq!(cfg.parameters.g, G);
        assert_eq!(cfg.parameters.coincident, CoincidentPolicy::Error);
        assert_eq!(cfg.bodies.len(), 1);
        assert_eq!(cfg.bodies[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(cfg.bodies[0].size, 1.0);
        assert_eq!(cfg.bodies[0].color, "white");
        assert!(cfg.bodies[0].name.is_empty());
    }

    #[test]
    fn policy_and_constant_are_read() {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
parameters:
  dt: 1.0
  total_steps: 2
  sample_stride: 1
  G: 1.0
  coincident: skip
bodies: []
"#,
        )
        .unwrap();

        assert_eq!(cfg.parameters.g, 1.0);
        assert_eq!(cfg.parameters.coincident, CoincidentPolicy::Skip);
    }

    #[test]
    fn short_position_is_rejected() {
        let err = ScenarioConfig::from_yaml_str(
            r#"
parameters: { dt: 1.0, total_steps: 2, sample_stride: 1 }
bodies:
  - position: [1.0, 2.0]
    velocity: [0.0, 0.0, 0.0]
    mass: 1.0
"#,
        )
        .unwrap_err();

        assert!(matches!(err, SimError::Config(_)));
    }
}
