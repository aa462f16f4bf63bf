pub mod states;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod runner;
pub mod diagnostics;
pub mod scenario;
