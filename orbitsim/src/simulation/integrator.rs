//! Fixed-step time integration for the n-body system
//!
//! Only the semi-implicit (symplectic) Euler scheme is provided:
//! every velocity is kicked from the pre-step positions, then every
//! position drifts with the new velocities.

use log::trace;

use super::error::{check_time_step, SimError};
use super::forces::GravityField;
use super::states::Body;

/// Advance `bodies` by one step of size `dt`
///
/// All accelerations are gathered before anything is mutated, so an error
/// (bad `dt`, coincident bodies) leaves `bodies` exactly as it was.
pub fn semi_implicit_euler<F>(bodies: &mut [Body], gravity: &F, dt: f64) -> Result<(), SimError>
where
    F: GravityField + ?Sized,
{
    check_time_step(dt)?;
    if bodies.is_empty() { // nothing to move
        return Ok(());
    }

    // a_n from x_n, one snapshot for the whole sweep
    let acc = gravity.accelerations(bodies)?;

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in bodies.iter_mut().zip(acc.iter()) {
        b.velocity += dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.position += dt * b.velocity;
    }

    trace!("stepped {} bodies by dt = {dt}", bodies.len());
    Ok(())
}
