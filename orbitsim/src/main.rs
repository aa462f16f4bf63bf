use orbitsim::simulation::diagnostics::{total_energy, total_momentum};
use orbitsim::{bench_gravity, bench_step};
use orbitsim::{presets, Parameters, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Preset {
    /// Sun, Earth, Mars and Venus
    Solar,
    /// Sun and all nine classical planets
    Planets,
}

#[derive(Parser, Debug)]
#[command(about = "Newtonian n-body orbit simulation")]
struct Args {
    /// Scenario YAML; relative names are looked up in the crate's scenarios/ directory
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Built-in initial conditions used when no file is given
    #[arg(long, value_enum, default_value = "solar")]
    preset: Preset,

    /// Override the step size in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Override the step count
    #[arg(long)]
    steps: Option<usize>,

    /// Override the sampling stride
    #[arg(long)]
    stride: Option<usize>,

    /// Run the benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let Some(file) = &args.file else {
        let bodies = match args.preset {
            Preset::Solar => presets::solar_system(),
            Preset::Planets => presets::planets(),
        };
        let mut params = Parameters::default();
        override_params(&mut params, args);
        return Ok(Scenario::from_parts(params, bodies)?);
    };

    let config_path = if file.is_absolute() || file.exists() {
        file.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file)
    };
    let mut cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    let p = &mut cfg.parameters;
    p.dt = args.dt.unwrap_or(p.dt);
    p.total_steps = args.steps.unwrap_or(p.total_steps);
    p.sample_stride = args.stride.unwrap_or(p.sample_stride);

    Ok(Scenario::build(cfg)?)
}

fn override_params(params: &mut Parameters, args: &Args) {
    params.dt = args.dt.unwrap_or(params.dt);
    params.total_steps = args.steps.unwrap_or(params.total_steps);
    params.sample_stride = args.stride.unwrap_or(params.sample_stride);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_gravity()?;
        bench_step()?;
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;
    let g = scenario.parameters.g;
    let e0 = total_energy(&scenario.system.bodies, g);
    let p0 = total_momentum(&scenario.system.bodies);

    let history = scenario.run().context("simulation failed")?;

    for (track, body) in history.iter().zip(&scenario.system.bodies) {
        let x = body.position;
        info!(
            "{:>8}: {} samples, final position [{:.4e}, {:.4e}, {:.4e}] m",
            track.name,
            track.positions.len(),
            x.x,
            x.y,
            x.z
        );
    }

    let e1 = total_energy(&scenario.system.bodies, g);
    let p1 = total_momentum(&scenario.system.bodies);
    info!("t = {:.4e} s", scenario.system.t);
    info!("relative energy drift {:.3e}", ((e1 - e0) / e0).abs());
    info!("momentum change {:.3e} kg m/s", (p1 - p0).norm());

    Ok(())
}
