//! Engine binary for the affiliation network simulation.
//!
//! Loads configuration, runs the evolution engine once with a seeded
//! generator, logs a summary of every snapshot, and writes the run report
//! as JSON to stdout for the rendering collaborator. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (first argument, else `affiliation-config.yaml`,
//!    else defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the generator from `network.seed`
//! 4. Validate parameters and run the simulation
//! 5. Log per-snapshot link counts
//! 6. Emit the report

mod error;
mod report;

use std::path::{Path, PathBuf};

use affiliation_core::AffiliationNetwork;
use affiliation_core::config::{LogFormat, LoggingConfig, SimulationConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report::RunReport;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "affiliation-config.yaml";

/// Where the configuration came from.
enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the report cannot be
/// written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, source) = load_config(explicit)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("affiliation-engine starting");
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Configuration loaded"),
        ConfigSource::Defaults => info!("Config file not found, using defaults"),
    }

    // 3. Seed the generator.
    let seed = config.network.seed;
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        seed,
        people = config.network.number_of_people,
        foci = config.network.number_of_foci,
        steps = config.network.number_of_simulation_steps,
        "Generator seeded"
    );

    // 4. Run.
    let network = AffiliationNetwork::generate(&config.network, &mut rng)
        .map_err(EngineError::from)?;

    // 5. Summarize.
    for (index, stats) in network.history().stats().iter().enumerate() {
        info!(
            index,
            present = stats.present,
            absent = stats.absent,
            triadic = stats.tentative_triadic,
            focal = stats.tentative_focal,
            membership = stats.tentative_membership,
            generic = stats.tentative_generic,
            "Snapshot"
        );
    }

    // 6. Emit.
    if config.output.emit_history {
        let report = RunReport {
            seed,
            network: &network,
        };
        report.write_to(std::io::stdout().lock(), config.output.pretty)?;
    }

    info!(snapshots = network.history().len(), "affiliation-engine done");
    Ok(())
}

/// Load configuration from `explicit`, or from [`DEFAULT_CONFIG_PATH`] if
/// it exists, or fall back to defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<(SimulationConfig, ConfigSource), EngineError> {
    if let Some(path) = explicit {
        let config = SimulationConfig::from_file(&path)?;
        return Ok((config, ConfigSource::File(path)));
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        let config = SimulationConfig::from_file(default_path)?;
        Ok((config, ConfigSource::File(default_path.to_path_buf())))
    } else {
        let mut config = SimulationConfig::default();
        config.network.apply_env_overrides();
        Ok((config, ConfigSource::Defaults))
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `logging.level`.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
