//! Network evolution engine for socio-affiliation networks.
//!
//! A run creates a fixed population of people and foci, enumerates every
//! admissible tie as a link lattice, samples an initial network, and then
//! derives one snapshot per step by solidifying last step's proposals and
//! probing the remaining absent links for triadic, focal, and membership
//! closure and random formation. The result is an ordered history of
//! snapshots for a renderer to consume.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `affiliation-config.yaml` and
//!   validation into [`NetworkParameters`].
//! - [`probability`] -- Validated probabilities and Bernoulli trials.
//! - [`nodes`] -- Node factory.
//! - [`lattice`] -- Link lattice builder.
//! - [`sampler`] -- Initial state sampler.
//! - [`snapshot`] -- Snapshot values, adjacency lookup, and state counts.
//! - [`evolution`] -- Solidify and the evolution step.
//! - [`history`] -- The ordered snapshot sequence.
//! - [`network`] -- [`AffiliationNetwork`], which runs all of the above.
//!
//! [`NetworkParameters`]: config::NetworkParameters
//! [`AffiliationNetwork`]: network::AffiliationNetwork

pub mod config;
pub mod evolution;
pub mod history;
pub mod lattice;
pub mod network;
pub mod nodes;
pub mod probability;
pub mod sampler;
pub mod snapshot;

pub use config::{ConfigError, NetworkConfig, NetworkParameters, SimulationConfig};
pub use history::SimulationHistory;
pub use network::AffiliationNetwork;
pub use snapshot::{Snapshot, SnapshotStats};
