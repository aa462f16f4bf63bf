pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::error::SimError;
pub use simulation::forces::{GravityField, NewtonianGravity, CoincidentPolicy, G};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::runner::{run, run_system, run_with, History, Track};
pub use simulation::params::Parameters;
pub use simulation::scenario::{presets, Scenario};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::scale::{linear_scale, LinearScale, Viewport};
pub use visualization::frame::{adjust_mass, FrameLoop, MassAdjust};

pub use benchmark::benchmark::{bench_gravity, bench_step};
