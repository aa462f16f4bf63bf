use std::hint::black_box;
use std::time::Instant;

use crate::simulation::error::SimError;
use crate::simulation::forces::{GravityField, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::states::{Body, NVec3};

/// Helper to build a deterministic system of size `n`
/// Bodies sit on a distorted sphere of ~1 AU so no two coincide
fn make_bodies(n: usize) -> Vec<Body> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec3::new(
                (i_f * 0.37).sin() * 1.5e11,
                (i_f * 0.13).cos() * 1.5e11,
                (i_f * 0.07).sin() * 1.5e11 + i_f,
            );
            Body::new(x, NVec3::zeros(), 6e24)
        })
        .collect()
}

/// Time one full direct acceleration sweep for growing n
/// Paste output directly into a spreadsheet to graph
pub fn bench_gravity() -> Result<(), SimError> {
    let gravity = NewtonianGravity::default();

    println!("N,sweep_ms");
    for n in [100, 200, 400, 800, 1600] {
        let bodies = make_bodies(n);

        // Warm up
        black_box(gravity.accelerations(black_box(&bodies))?);

        let t0 = Instant::now();
        black_box(gravity.accelerations(black_box(&bodies))?);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{n},{ms:.6}");
    }
    Ok(())
}

/// Time the semi-implicit Euler step, averaging more steps for small n
pub fn bench_step() -> Result<(), SimError> {
    let gravity = NewtonianGravity::default();

    println!("N,step_ms");
    for n in (100..=1600).step_by(100) {
        let steps = if n <= 400 { 10 } else { 2 };
        let mut bodies = make_bodies(n);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(black_box(&mut bodies), &gravity, 60.0)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
    Ok(())
}
