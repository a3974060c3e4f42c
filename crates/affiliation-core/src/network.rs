//! Orchestration of one run: nodes, lattice, initial sample, evolution.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use affiliation_types::Node;

use crate::config::{ConfigError, NetworkConfig, NetworkParameters};
use crate::evolution;
use crate::history::SimulationHistory;
use crate::lattice;
use crate::nodes::Population;
use crate::sampler;
use crate::snapshot::Snapshot;

/// A fully simulated socio-affiliation network.
///
/// Holds the nodes and the complete history. Nothing here changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliationNetwork {
    #[serde(flatten)]
    population: Population,
    history: SimulationHistory,
}

impl AffiliationNetwork {
    /// Validate `config` and run the simulation.
    ///
    /// Validation happens before any node or link exists, so a rejected
    /// configuration leaves nothing behind.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a count is negative or too large, a
    /// probability lies outside `[0, 1]`, or the lattice is too large.
    pub fn generate<R: Rng + ?Sized>(
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let params = NetworkParameters::from_config(config)?;
        Ok(Self::simulate(&params, rng))
    }

    /// Run the simulation on already validated parameters.
    ///
    /// All randomness comes from `rng`, in a fixed order: initial sampling,
    /// then each evolution step. The same seed gives the same history.
    pub fn simulate<R: Rng + ?Sized>(params: &NetworkParameters, rng: &mut R) -> Self {
        let population = Population::generate(params.people, params.foci);
        let lattice = lattice::build_lattice(&population);
        info!(
            people = params.people,
            foci = params.foci,
            links = lattice.len(),
            steps = params.steps,
            "Link lattice built"
        );

        let mut history = SimulationHistory::default();
        let mut current = sampler::sample_initial(&lattice, &params.initial, rng);

        for step in 1..=params.steps {
            let next = evolution::evolve(&current, &population, &params.formation, rng);
            debug!(step, tentative = next.stats().tentative(), "Step complete");
            history.push(core::mem::replace(&mut current, next));
        }

        let last = evolution::solidify(&current);
        history.push(current);
        history.push(last);

        let final_present = history.last().map_or(0, |s| s.stats().present);
        info!(
            snapshots = history.len(),
            final_present,
            "Simulation complete"
        );

        Self {
            population,
            history,
        }
    }

    /// Person nodes.
    pub fn people(&self) -> &[Node] {
        self.population.people()
    }

    /// Focus nodes.
    pub fn foci(&self) -> &[Node] {
        self.population.foci()
    }

    /// All nodes.
    pub const fn population(&self) -> &Population {
        &self.population
    }

    /// The full history.
    pub const fn history(&self) -> &SimulationHistory {
        &self.history
    }

    /// The snapshot at `index`, `0..=steps + 1`.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.history.get(index)
    }
}
