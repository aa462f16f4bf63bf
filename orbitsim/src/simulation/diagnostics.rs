//! Conserved-quantity diagnostics over a body collection.

use crate::simulation::states::{Body, NVec3};

/// Sum of `m_i * v_i`
pub fn total_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().map(Body::momentum).sum()
}

/// Mass-weighted mean position; zero if the total mass is not positive
pub fn center_of_mass(bodies: &[Body]) -> NVec3 {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass <= 0.0 {
        return NVec3::zeros();
    }
    bodies.iter().map(|b| b.mass * b.position).sum::<NVec3>() / total_mass
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.norm_squared())
        .sum()
}

/// Pairwise potential `-G m_i m_j / r_ij`; coincident pairs are left out
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let n = bodies.len();
    let mut u = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (bodies[j].position - bodies[i].position).norm();
            if r > 0.0 {
                u -= g * bodies[i].mass * bodies[j].mass / r;
            }
        }
    }
    u
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}
