// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod observe;
pub mod plant;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{PlantConfig, RawPlantConfig};
use crate::observe::{Logger, TracingLogger};
use crate::plant::{Manager, RandomWorkload, Supervisor};
use crate::types::RunResult;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, then CLI overrides)
/// - the shared random workload
/// - manager + supervisor
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let result = simulate(&cfg, Arc::new(TracingLogger)).await?;
    match result {
        RunResult::Completed => println!("Simulation completed successfully."),
        RunResult::TimedOut => println!("Simulation stopped: deadline exceeded."),
    }
    Ok(())
}

/// Build the effective configuration: defaults, then the optional config
/// file, then any CLI overrides, validated as a whole.
pub fn resolve_config(args: &CliArgs) -> errors::Result<PlantConfig> {
    let mut raw = match args.config {
        Some(ref path) => {
            info!(path = %path.display(), "loading config file");
            config::load_from_path(path)?
        }
        None => RawPlantConfig::default(),
    };

    apply_overrides(&mut raw, args);
    PlantConfig::try_from(raw)
}

fn apply_overrides(raw: &mut RawPlantConfig, args: &CliArgs) {
    if let Some(lines) = args.lines {
        raw.run.lines = lines;
    }
    if let Some(iterations) = args.iterations {
        raw.run.iterations = iterations;
    }
    if let Some(secs) = args.deadline_secs {
        raw.run.deadline_secs = secs;
    }
    if let Some(ms) = args.min_delay_ms {
        raw.work.min_delay_ms = ms;
    }
    if let Some(ms) = args.max_delay_ms {
        raw.work.max_delay_ms = ms;
    }
    if let Some(p) = args.failure_probability {
        raw.work.failure_probability = p;
    }
    if args.seed.is_some() {
        raw.work.seed = args.seed;
    }
}

/// Run one supervised simulation with the given configuration.
///
/// Only configuration problems are errors; a run that outlives its deadline
/// is reported as [`RunResult::TimedOut`].
pub async fn simulate(cfg: &PlantConfig, logger: Arc<dyn Logger>) -> errors::Result<RunResult> {
    let workload = Arc::new(RandomWorkload::new(*cfg.work())?);
    let manager = Manager::new(*cfg.run(), workload, Arc::clone(&logger))?;
    let supervisor = Supervisor::new(logger);

    Ok(supervisor.supervise(manager, cfg.run().overall_deadline).await)
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &PlantConfig) {
    let run = cfg.run();
    let work = cfg.work();

    println!("plantsim dry-run");
    println!("  run.lines = {}", run.number_of_lines);
    println!("  run.iterations = {}", run.max_iterations);
    println!("  run.deadline = {:?}", run.overall_deadline);
    println!(
        "  work.delay = {:?}..={:?}",
        work.min_delay, work.max_delay
    );
    println!("  work.failure_probability = {}", work.failure_probability);
    match work.seed {
        Some(seed) => println!("  work.seed = {seed}"),
        None => println!("  work.seed = (from OS)"),
    }
    println!(
        "  executions = {}",
        u64::from(run.number_of_lines) * u64::from(run.max_iterations)
    );

    debug!("dry-run complete (no execution)");
}
