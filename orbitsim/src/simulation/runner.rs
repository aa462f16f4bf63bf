//! Multi-step driver that records sampled trajectories.

use log::{debug, info, trace};

use super::error::{check_time_step, SimError};
use super::forces::GravityField;
use super::integrator::semi_implicit_euler;
use super::params::Parameters;
use super::states::{Body, NVec3, System};

/// Sampled positions of one body, in body order
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    pub positions: Vec<NVec3>,
}

/// Per-body position history produced by [`run`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    tracks: Vec<Track>,
}

impl History {
    fn for_bodies(bodies: &[Body]) -> Self {
        Self {
            tracks: bodies
                .iter()
                .map(|b| Track { name: b.name.clone(), positions: Vec::new() })
                .collect(),
        }
    }

    fn record(&mut self, bodies: &[Body]) {
        for (track, b) in self.tracks.iter_mut().zip(bodies) {
            track.positions.push(b.position);
        }
    }

    /// Track of the first body called `name`
    pub fn track(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Number of tracks (one per body)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of samples taken; identical for every track
    pub fn sample_count(&self) -> usize {
        self.tracks.first().map_or(0, |t| t.positions.len())
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

fn check_run(dt: f64, total_steps: usize, sample_stride: usize) -> Result<(), SimError> {
    check_time_step(dt)?;
    if total_steps == 0 {
        return Err(SimError::InvalidParameter {
            name: "total_steps",
            reason: "must be at least 1".into(),
        });
    }
    if sample_stride == 0 {
        return Err(SimError::InvalidParameter {
            name: "sample_stride",
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}

/// Drive `total_steps - 1` integrator steps, sampling every body after each
/// step whose index is a multiple of `sample_stride`.
///
/// Step indices run over `1..total_steps`, so `total_steps == 1` returns
/// empty tracks and leaves `bodies` untouched.
///
/// If a step fails (e.g. coincident bodies), the error is returned and the
/// samples taken so far are dropped. `bodies` keeps the state reached by the
/// last successful step; the failing step itself changes nothing.
pub fn run<F>(
    bodies: &mut [Body],
    gravity: &F,
    dt: f64,
    total_steps: usize,
    sample_stride: usize,
) -> Result<History, SimError>
where
    F: GravityField + ?Sized,
{
    check_run(dt, total_steps, sample_stride)?;
    info!(
        "run: {} bodies, dt = {dt} s, {} steps, sampling every {sample_stride}",
        bodies.len(),
        total_steps - 1
    );

    let mut history = History::for_bodies(bodies);
    for step in 1..total_steps {
        semi_implicit_euler(bodies, gravity, dt)?;

        if step % sample_stride == 0 {
            history.record(bodies);
            trace!("sampled step {step}");
        }
    }

    debug!("run: recorded {} samples per body", history.sample_count());
    info!("run: finished after {} simulated seconds", dt * (total_steps - 1) as f64);
    Ok(history)
}

/// [`run`] over a [`System`], moving `system.t` forward with every step.
///
/// On error `system.t` and the bodies both reflect the last successful
/// step, so they never drift apart.
pub fn run_system<F>(
    system: &mut System,
    gravity: &F,
    dt: f64,
    total_steps: usize,
    sample_stride: usize,
) -> Result<History, SimError>
where
    F: GravityField + ?Sized,
{
    check_run(dt, total_steps, sample_stride)?;
    info!(
        "run: {} bodies from t = {} s, dt = {dt} s, {} steps, sampling every {sample_stride}",
        system.len(),
        system.t,
        total_steps - 1
    );

    let mut history = History::for_bodies(&system.bodies);
    for step in 1..total_steps {
        system.step(gravity, dt)?;

        if step % sample_stride == 0 {
            history.record(&system.bodies);
            trace!("sampled step {step} at t = {}", system.t);
        }
    }

    debug!("run: recorded {} samples per body", history.sample_count());
    info!("run: finished at t = {} s", system.t);
    Ok(history)
}

/// [`run`] with every setting taken from `params`
pub fn run_with(bodies: &mut [Body], params: &Parameters) -> Result<History, SimError> {
    params.validate()?;
    run(bodies, &params.gravity(), params.dt, params.total_steps, params.sample_stride)
}
