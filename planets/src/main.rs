use planets::bench_step;
use planets::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

/// Headless runner: load a scenario and step it, logging summaries
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML, looked up in `scenarios/` when not found as given
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of steps to run
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Log a summary every N steps
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Override the scenario's time speed
    #[arg(long)]
    time_speed: Option<f64>,

    /// Override the scenario's trail length
    #[arg(long)]
    tail_length: Option<usize>,

    /// Delete bodies leaving the world instead of reflecting them
    #[arg(long)]
    open_borders: bool,

    /// Run the step benchmark instead
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file: Option<PathBuf>) -> Result<ScenarioConfig> {
    let Some(file) = file else {
        return ScenarioConfig::builtin().context("built-in scenario is invalid");
    };

    let config_path = if file.exists() {
        file
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file)
    };

    ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if let Some(time_speed) = args.time_speed {
        scenario.set_time_speed(time_speed)?;
    }
    if let Some(tail_length) = args.tail_length {
        scenario.set_tail_length(tail_length)?;
    }
    if args.open_borders {
        scenario.set_solid_borders(false);
    }

    let (mut merges, mut escaped, mut bounces) = (0, 0, 0);
    for step in 1..=args.steps {
        let report = scenario.step();
        merges += report.collisions.merges.len();
        bounces += report.collisions.bounces;
        escaped += report.escaped;

        if args.report_every > 0 && step % args.report_every == 0 {
            let sys = &scenario.system;
            let p = sys.total_momentum();
            log::info!(
                "step {step}: {} bodies, total mass {:.4e}, momentum ({:.4e}, {:.4e})",
                sys.len(),
                sys.total_mass(),
                p.x,
                p.y
            );
        }
        if scenario.system.is_empty() {
            log::info!("no bodies left after step {step}");
            break;
        }
    }

    log::info!("done: {bounces} bounces, {merges} merges, {escaped} escaped");
    for body in scenario.bodies() {
        log::info!(
            "{:?} {} mass {:.3e} radius {:.1} at ({:.0}, {:.0}){}",
            body.id(),
            body.color,
            body.mass(),
            body.radius(),
            body.position.x,
            body.position.y,
            if body.is_black_hole() { " [black hole]" } else { "" }
        );
    }

    Ok(())
}
