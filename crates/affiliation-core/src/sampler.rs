//! Initial state sampler.

use rand::Rng;
use tracing::debug;

use affiliation_types::LinkState;

use crate::config::InitialProbabilities;
use crate::snapshot::Snapshot;

/// Sample the initial network from `lattice`.
///
/// Each link gets one independent trial, in lattice order: person-focus
/// links against `focal`, person-person links against `social`. Winners
/// become [`LinkState::Present`], the rest [`LinkState::Absent`].
pub fn sample_initial<R: Rng + ?Sized>(
    lattice: &Snapshot,
    probabilities: &InitialProbabilities,
    rng: &mut R,
) -> Snapshot {
    let sampled = lattice.map_states(|link| {
        let threshold = if link.id.is_affiliation() {
            probabilities.focal
        } else {
            probabilities.social
        };
        if threshold.trial(rng) {
            LinkState::Present
        } else {
            LinkState::Absent
        }
    });

    debug!(
        links = sampled.len(),
        present = sampled.stats().present,
        "Initial network sampled"
    );
    sampled
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::lattice::build_lattice;
    use crate::nodes::Population;
    use crate::probability::Probability;

    fn lattice() -> Snapshot {
        build_lattice(&Population::generate(6, 3))
    }

    #[test]
    fn certain_probabilities_activate_everything() {
        let mut rng = SmallRng::seed_from_u64(42);
        let probabilities = InitialProbabilities {
            social: Probability::ONE,
            focal: Probability::ONE,
        };
        let sampled = sample_initial(&lattice(), &probabilities, &mut rng);
        assert!(sampled.iter().all(|l| l.state == LinkState::Present));
    }

    #[test]
    fn zero_probabilities_activate_nothing() {
        let mut rng = SmallRng::seed_from_u64(42);
        let probabilities = InitialProbabilities {
            social: Probability::ZERO,
            focal: Probability::ZERO,
        };
        let sampled = sample_initial(&lattice(), &probabilities, &mut rng);
        assert!(sampled.iter().all(|l| l.state == LinkState::Absent));
    }

    #[test]
    fn threshold_follows_link_category() {
        let mut rng = SmallRng::seed_from_u64(42);
        let probabilities = InitialProbabilities {
            social: Probability::ZERO,
            focal: Probability::ONE,
        };
        let sampled = sample_initial(&lattice(), &probabilities, &mut rng);
        for link in sampled.iter() {
            assert_eq!(link.state.is_present(), link.id.is_affiliation(), "{}", link.id);
        }
    }

    #[test]
    fn consumes_one_draw_per_link() {
        let lattice = lattice();
        let probabilities = InitialProbabilities {
            social: Probability::ONE,
            focal: Probability::ZERO,
        };
        let mut a = SmallRng::seed_from_u64(9);
        let mut b = SmallRng::seed_from_u64(9);
        let _ = sample_initial(&lattice, &probabilities, &mut a);
        for _ in 0..lattice.len() {
            let _: f64 = b.random();
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn key_set_is_unchanged() {
        let lattice = lattice();
        let mut rng = SmallRng::seed_from_u64(1);
        let probabilities = InitialProbabilities {
            social: Probability::new(0.5).unwrap_or(Probability::ZERO),
            focal: Probability::new(0.5).unwrap_or(Probability::ZERO),
        };
        let sampled = sample_initial(&lattice, &probabilities, &mut rng);
        assert!(sampled.same_keys(&lattice));
    }
}
