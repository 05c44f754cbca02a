// scripts/scenarios.rs
//! Runs the bundled comparison suite and logs each price with its timing.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use sde_pricer::config::SimulationSuite;
use sde_pricer::mc::McMediator;
use sde_pricer::SdeResult;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SCENARIOS: &str = include_str!("scenarios.toml");

fn run() -> SdeResult<()> {
    let suite = SimulationSuite::from_toml_str(SCENARIOS)?;
    info!(count = suite.simulations.len(), "loaded scenarios");

    for spec in suite.simulations {
        let name = spec.name.clone().unwrap_or_else(|| "unnamed".to_string());
        let mut mediator = McMediator::new(spec.into_builder())?;
        let run = mediator.run_timed()?;

        info!(
            scenario = %name,
            price = run.estimate.price,
            std_error = run.estimate.std_error(),
            seconds = run.elapsed_secs,
            "priced"
        );
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        error!(error = %e, "scenario run failed");
        std::process::exit(1);
    }
}
