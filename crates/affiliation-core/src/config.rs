//! Configuration loading and validation for the affiliation network engine.
//!
//! The canonical configuration lives in `affiliation-config.yaml`. The raw
//! [`SimulationConfig`] mirrors the YAML and defaults every field; the
//! engine only ever runs on [`NetworkParameters`], which are produced by
//! validating the raw values before any node or link is created.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::lattice;
use crate::probability::Probability;

/// Environment variable that overrides `network.seed`.
pub const SEED_ENV_VAR: &str = "AFFILIATION_SEED";

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A node or step count was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeCount {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A node or step count does not fit in 32 bits.
    #[error("{field} is too large (got {value})")]
    CountTooLarge {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A probability was outside `[0, 1]` or NaN.
    #[error("{field} must lie in [0, 1] (got {value})")]
    ProbabilityOutOfRange {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The link lattice for these counts cannot be addressed.
    #[error("lattice for {people} people and {foci} foci is too large")]
    LatticeTooLarge {
        /// Validated person count.
        people: u32,
        /// Validated focus count.
        foci: u32,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `affiliation-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Network size, step count, seed, and probabilities.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How the finished history is handed to the renderer.
    #[serde(default)]
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `AFFILIATION_SEED` overrides `network.seed` when set to a valid
    /// unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.network.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Raw network options as written in the configuration file.
///
/// Counts are signed so that negative values reach validation and are
/// reported as [`ConfigError::NegativeCount`] instead of a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkConfig {
    /// Seed for the run's random generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Count of person nodes.
    #[serde(default = "default_number_of_people")]
    pub number_of_people: i64,

    /// Count of focus nodes.
    #[serde(default = "default_number_of_foci")]
    pub number_of_foci: i64,

    /// Number of evolution steps; the history holds this many plus two.
    #[serde(default = "default_number_of_simulation_steps")]
    pub number_of_simulation_steps: i64,

    /// Initial probability of a person-person tie.
    #[serde(default = "default_social_probability")]
    pub social_probability: f64,

    /// Initial probability of a person-focus tie.
    #[serde(default = "default_focal_probability")]
    pub focal_probability: f64,

    /// Per-candidate probability of triadic closure.
    #[serde(default = "default_closure_probability")]
    pub triadic_closure_probability: f64,

    /// Per-candidate probability of focal closure.
    #[serde(default = "default_closure_probability")]
    pub focal_closure_probability: f64,

    /// Per-candidate probability of membership closure.
    #[serde(default = "default_closure_probability")]
    pub membership_closure_probability: f64,

    /// Per-link, per-step probability of a random new tie.
    #[serde(default)]
    pub random_connection_probability: f64,
}

impl NetworkConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SEED_ENV_VAR) {
            match val.trim().parse::<u64>() {
                Ok(seed) => self.seed = seed,
                Err(e) => warn!(value = %val, error = %e, "Ignoring invalid seed override"),
            }
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            number_of_people: default_number_of_people(),
            number_of_foci: default_number_of_foci(),
            number_of_simulation_steps: default_number_of_simulation_steps(),
            social_probability: default_social_probability(),
            focal_probability: default_focal_probability(),
            triadic_closure_probability: default_closure_probability(),
            focal_closure_probability: default_closure_probability(),
            membership_closure_probability: default_closure_probability(),
            random_connection_probability: 0.0,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output configuration for the finished run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Write the run report (nodes and history) as JSON to stdout.
    #[serde(default = "default_true")]
    pub emit_history: bool,

    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            emit_history: true,
            pretty: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Validated parameters
// ---------------------------------------------------------------------------

/// Thresholds for sampling the initial network, by link category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialProbabilities {
    /// Person-person links.
    pub social: Probability,
    /// Person-focus links.
    pub focal: Probability,
}

/// Thresholds for the per-step formation mechanisms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationProbabilities {
    /// Triadic closure, per qualifying shared person.
    pub triadic: Probability,
    /// Focal closure, per qualifying shared focus.
    pub focal: Probability,
    /// Membership closure, per qualifying shared person.
    pub membership: Probability,
    /// Baseline random formation, once per candidate link.
    pub random: Probability,
}

impl FormationProbabilities {
    /// No mechanism ever fires.
    pub const NONE: Self = Self {
        triadic: Probability::ZERO,
        focal: Probability::ZERO,
        membership: Probability::ZERO,
        random: Probability::ZERO,
    };
}

/// Validated engine parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkParameters {
    /// Count of person nodes.
    pub people: u32,
    /// Count of focus nodes.
    pub foci: u32,
    /// Number of evolution steps.
    pub steps: u32,
    /// Initial sampling thresholds.
    pub initial: InitialProbabilities,
    /// Formation thresholds applied every step.
    pub formation: FormationProbabilities,
}

impl NetworkParameters {
    /// Validate raw options.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a negative or oversized count, a
    /// probability outside `[0, 1]`, or a lattice too large to address.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ConfigError> {
        let people = count("number_of_people", config.number_of_people)?;
        let foci = count("number_of_foci", config.number_of_foci)?;
        let steps = count(
            "number_of_simulation_steps",
            config.number_of_simulation_steps,
        )?;

        let initial = InitialProbabilities {
            social: probability("social_probability", config.social_probability)?,
            focal: probability("focal_probability", config.focal_probability)?,
        };
        let formation = FormationProbabilities {
            triadic: probability(
                "triadic_closure_probability",
                config.triadic_closure_probability,
            )?,
            focal: probability(
                "focal_closure_probability",
                config.focal_closure_probability,
            )?,
            membership: probability(
                "membership_closure_probability",
                config.membership_closure_probability,
            )?,
            random: probability(
                "random_connection_probability",
                config.random_connection_probability,
            )?,
        };

        let fits = lattice::lattice_size(people, foci)
            .is_some_and(|size| usize::try_from(size).is_ok());
        if !fits {
            return Err(ConfigError::LatticeTooLarge { people, foci });
        }

        Ok(Self {
            people,
            foci,
            steps,
            initial,
            formation,
        })
    }
}

impl TryFrom<&NetworkConfig> for NetworkParameters {
    type Error = ConfigError;

    fn try_from(config: &NetworkConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

fn count(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_overflow| ConfigError::CountTooLarge { field, value })
}

fn probability(field: &'static str, value: f64) -> Result<Probability, ConfigError> {
    Probability::new(value).ok_or(ConfigError::ProbabilityOutOfRange { field, value })
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_seed() -> u64 {
    42
}

const fn default_number_of_people() -> i64 {
    7
}

const fn default_number_of_foci() -> i64 {
    3
}

const fn default_number_of_simulation_steps() -> i64 {
    10
}

const fn default_social_probability() -> f64 {
    0.25
}

const fn default_focal_probability() -> f64 {
    0.3
}

const fn default_closure_probability() -> f64 {
    0.25
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}
