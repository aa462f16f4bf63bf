//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the gravity model (`NewtonianGravity`)
//!
//! Built-in initial conditions live in [`presets`].

use log::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::runner::{run_system, History};
use crate::simulation::states::{Body, NVec3, System};

/// Runtime bundle consumed by the runner, the frame loop and the CLI
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    /// Validate `cfg` and map it into runtime types
    pub fn build(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            total_steps: p_cfg.total_steps,
            sample_stride: p_cfg.sample_stride,
            g: p_cfg.g,
            coincident: p_cfg.coincident,
        };

        let bodies = cfg
            .bodies
            .into_iter()
            .enumerate()
            .map(|(i, bc)| body_from_config(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(parameters, bodies)
    }

    /// Bundle already-built bodies with `parameters`
    pub fn from_parts(parameters: Parameters, bodies: Vec<Body>) -> Result<Self, SimError> {
        parameters.validate()?;
        if bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        debug!("scenario: {} bodies, {:?}", bodies.len(), parameters);

        let gravity = parameters.gravity();
        Ok(Self {
            parameters,
            system: System::new(bodies),
            gravity,
        })
    }

    /// Run the configured number of steps; `system.t` follows every step,
    /// including on a run that stops early with an error
    pub fn run(&mut self) -> Result<History, SimError> {
        let p = &self.parameters;
        run_system(&mut self.system, &self.gravity, p.dt, p.total_steps, p.sample_stride)
    }
}

fn body_from_config(index: usize, bc: BodyConfig) -> Result<Body, SimError> {
    if !(bc.mass.is_finite() && bc.mass > 0.0) {
        return Err(SimError::InvalidParameter {
            name: "mass",
            reason: format!("body {index} has mass {}, must be positive", bc.mass),
        });
    }
    if bc.size < 0.0 {
        return Err(SimError::InvalidParameter {
            name: "size",
            reason: format!("body {index} has negative size {}", bc.size),
        });
    }

    Ok(Body::new(NVec3::from(bc.position), NVec3::from(bc.velocity), bc.mass)
        .with_name(bc.name)
        .with_size(bc.size)
        .with_color(bc.color))
}

/// Hard-coded planetary initial conditions (SI units)
pub mod presets {
    use crate::simulation::states::{Body, NVec3};

    // name, y distance from the sun (m), mass (kg), x speed (m/s)
    const PLANETS: [(&str, f64, f64, f64); 9] = [
        ("mercury", 5.7e10, 3.285e23, 47000.0),
        ("venus", 1.1e11, 4.8e24, 35000.0),
        ("earth", 1.5e11, 6e24, 30000.0),
        ("mars", 2.2e11, 2.4e24, 24000.0),
        ("jupiter", 7.7e11, 1e28, 13000.0),
        ("saturn", 1.4e12, 5.7e26, 9000.0),
        ("uranus", 2.8e12, 8.7e25, 6835.0),
        ("neptune", 4.5e12, 1e26, 5477.0),
        ("pluto", 3.7e12, 1.3e22, 4748.0),
    ];

    pub fn sun() -> Body {
        Body::new(NVec3::zeros(), NVec3::zeros(), 2e30)
            .with_name("sun")
            .with_size(30.0)
            .with_color("yellow")
    }

    /// A planet on the +y axis moving along +x; `None` for unknown names
    pub fn planet(name: &str) -> Option<Body> {
        let &(name, dist, mass, speed) = PLANETS.iter().find(|p| p.0 == name)?;
        let (size, color) = match name {
            "venus" => (5.0, "grey"),
            "earth" => (5.0, "blue"),
            "mars" => (3.0, "red"),
            _ => (1.0, "white"),
        };
        Some(
            Body::new(NVec3::new(0.0, dist, 0.0), NVec3::new(speed, 0.0, 0.0), mass)
                .with_name(name)
                .with_size(size)
                .with_color(color),
        )
    }

    /// Sun, Earth, Mars and Venus, in that order
    pub fn solar_system() -> Vec<Body> {
        let mut bodies = vec![sun()];
        bodies.extend(["earth", "mars", "venus"].into_iter().filter_map(planet));
        bodies
    }

    /// The sun followed by every planet, innermost first
    pub fn planets() -> Vec<Body> {
        let mut bodies = vec![sun()];
        bodies.extend(PLANETS.iter().filter_map(|p| planet(p.0)));
        bodies
    }
}
