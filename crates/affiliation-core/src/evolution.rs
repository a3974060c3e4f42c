//! The evolution step: derive the next snapshot from the previous one.
//!
//! A step first solidifies the previous snapshot, turning last step's
//! tentative ties into present ones. Every link still absent is then a
//! candidate, and is probed in a fixed order:
//!
//! 1. triadic closure, once per person tied to both endpoints;
//! 2. focal closure, once per focus `F<k>` tied to both endpoints, for every
//!    person index `k` (foci beyond the person count are never probed);
//! 3. membership closure, once per person tied to both endpoints;
//! 4. random formation, once.
//!
//! Each successful trial overwrites the tag left by earlier ones, so when
//! several mechanisms fire on one link the precedence is random >
//! membership > focal > triadic. All probes read the post-solidify
//! snapshot only; no candidate sees another candidate's result.

use rand::Rng;
use tracing::{debug, trace};

use affiliation_types::{Link, LinkState, NodeId};

use crate::config::FormationProbabilities;
use crate::nodes::Population;
use crate::probability::Probability;
use crate::snapshot::{Adjacency, Snapshot};

/// Turn every non-absent link of `snapshot` present.
pub fn solidify(snapshot: &Snapshot) -> Snapshot {
    snapshot.solidified()
}

/// Produce the snapshot following `previous`.
///
/// Random draws happen link by link in key order, and within a link in
/// probe order. A trial is only drawn when its closure condition holds.
pub fn evolve<R: Rng + ?Sized>(
    previous: &Snapshot,
    population: &Population,
    formation: &FormationProbabilities,
    rng: &mut R,
) -> Snapshot {
    let solid = previous.solidified();
    let adjacency = solid.adjacency();

    let next = solid.map_states(|link| {
        if link.state.is_present() {
            return LinkState::Present;
        }
        let proposal = propose(link, &adjacency, population, formation, rng);
        if let Some(state) = proposal {
            trace!(link = %link.id, ?state, "Tie proposed");
        }
        proposal.unwrap_or(LinkState::Absent)
    });

    let stats = next.stats();
    debug!(
        present = stats.present,
        triadic = stats.tentative_triadic,
        focal = stats.tentative_focal,
        membership = stats.tentative_membership,
        generic = stats.tentative_generic,
        "Evolution step derived"
    );
    next
}

/// Run every formation probe on one candidate link.
fn propose<R: Rng + ?Sized>(
    link: &Link,
    adjacency: &Adjacency,
    population: &Population,
    formation: &FormationProbabilities,
    rng: &mut R,
) -> Option<LinkState> {
    let mut proposal = None;

    // Triadic closure: a person tied to both endpoints.
    if closes(link, adjacency, population.person_ids(), formation.triadic, rng) {
        proposal = Some(LinkState::TentativeTriadic);
    }

    // Focal closure: focus F<k> tied to both endpoints, k over person
    // indices. F<k> outside the population reads as absent.
    let foci = population.person_ids().map(|p| NodeId::focus(p.index()));
    if closes(link, adjacency, foci, formation.focal, rng) {
        proposal = Some(LinkState::TentativeFocal);
    }

    // Membership closure probes the same shared-person condition as
    // triadic closure.
    if closes(link, adjacency, population.person_ids(), formation.membership, rng) {
        proposal = Some(LinkState::TentativeMembership);
    }

    if formation.random.trial(rng) {
        proposal = Some(LinkState::TentativeGeneric);
    }

    proposal
}

/// Probe every intermediary in `via` and report whether any trial succeeded.
///
/// Each qualifying intermediary rolls independently; all rolls are drawn
/// even after a success.
fn closes<R, I>(
    link: &Link,
    adjacency: &Adjacency,
    via: I,
    probability: Probability,
    rng: &mut R,
) -> bool
where
    R: Rng + ?Sized,
    I: Iterator<Item = NodeId>,
{
    let mut closed = false;
    for intermediary in via {
        if adjacency.shares_neighbour(intermediary, link.source, link.target)
            && probability.trial(rng)
        {
            closed = true;
        }
    }
    closed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use affiliation_types::LinkKey;

    use super::*;
    use crate::lattice::build_lattice;

    fn key(a: NodeId, b: NodeId) -> LinkKey {
        LinkKey::new(a, b).unwrap()
    }

    fn p(i: u32) -> NodeId {
        NodeId::person(i)
    }

    fn f(i: u32) -> NodeId {
        NodeId::focus(i)
    }

    /// P1-P2 is absent; P0 is tied to both and F0 hosts both.
    fn closure_scenario(population: &Population) -> Snapshot {
        build_lattice(population)
            .with_state(key(p(0), p(1)), LinkState::Present)
            .with_state(key(p(0), p(2)), LinkState::Present)
            .with_state(key(p(1), f(0)), LinkState::Present)
            .with_state(key(p(2), f(0)), LinkState::Present)
    }

    fn formation(triadic: bool, focal: bool, membership: bool, random: bool) -> FormationProbabilities {
        let pick = |on: bool| if on { Probability::ONE } else { Probability::ZERO };
        FormationProbabilities {
            triadic: pick(triadic),
            focal: pick(focal),
            membership: pick(membership),
            random: pick(random),
        }
    }

    fn evolved_state(formation: &FormationProbabilities) -> LinkState {
        let population = Population::generate(3, 1);
        let mut rng = SmallRng::seed_from_u64(42);
        let next = evolve(&closure_scenario(&population), &population, formation, &mut rng);
        next.state_of(key(p(1), p(2)))
    }

    #[test]
    fn random_formation_wins_over_everything() {
        assert_eq!(
            evolved_state(&formation(true, true, true, true)),
            LinkState::TentativeGeneric
        );
    }

    #[test]
    fn membership_wins_without_random() {
        assert_eq!(
            evolved_state(&formation(true, true, true, false)),
            LinkState::TentativeMembership
        );
    }

    #[test]
    fn focal_wins_over_triadic() {
        assert_eq!(
            evolved_state(&formation(true, true, false, false)),
            LinkState::TentativeFocal
        );
    }

    #[test]
    fn triadic_alone() {
        assert_eq!(
            evolved_state(&formation(true, false, false, false)),
            LinkState::TentativeTriadic
        );
    }

    #[test]
    fn nothing_fires_without_probability() {
        assert_eq!(
            evolved_state(&FormationProbabilities::NONE),
            LinkState::Absent
        );
    }

    #[test]
    fn closure_needs_both_endpoints_tied() {
        let population = Population::generate(3, 1);
        // P0 knows P1 only, so P1-P2 has no shared neighbour.
        let snapshot = build_lattice(&population).with_state(key(p(0), p(1)), LinkState::Present);
        let mut rng = SmallRng::seed_from_u64(42);
        let next = evolve(&snapshot, &population, &formation(true, true, true, false), &mut rng);
        assert_eq!(next.state_of(key(p(1), p(2))), LinkState::Absent);
    }

    #[test]
    fn affiliation_link_closes_through_a_shared_person() {
        let population = Population::generate(2, 1);
        // P1 knows P0 and belongs to F0: P0-F0 closes triadically.
        let snapshot = build_lattice(&population)
            .with_state(key(p(0), p(1)), LinkState::Present)
            .with_state(key(p(1), f(0)), LinkState::Present);
        let mut rng = SmallRng::seed_from_u64(42);
        let next = evolve(&snapshot, &population, &formation(true, true, false, false), &mut rng);
        assert_eq!(next.state_of(key(p(0), f(0))), LinkState::TentativeTriadic);
    }

    #[test]
    fn step_solidifies_previous_proposals() {
        let population = Population::generate(3, 1);
        let snapshot = build_lattice(&population)
            .with_state(key(p(0), p(1)), LinkState::TentativeTriadic)
            .with_state(key(p(2), f(0)), LinkState::TentativeGeneric);
        let mut rng = SmallRng::seed_from_u64(42);
        let next = evolve(&snapshot, &population, &FormationProbabilities::NONE, &mut rng);
        assert_eq!(next.state_of(key(p(0), p(1))), LinkState::Present);
        assert_eq!(next.state_of(key(p(2), f(0))), LinkState::Present);
        assert_eq!(next.stats().tentative(), 0);
    }

    #[test]
    fn present_links_are_never_probed() {
        let population = Population::generate(3, 1);
        let all_present = build_lattice(&population).map_states(|_| LinkState::Present);
        let mut rng = SmallRng::seed_from_u64(5);
        let mut untouched = SmallRng::seed_from_u64(5);
        let next = evolve(&all_present, &population, &formation(true, true, true, true), &mut rng);
        assert_eq!(next, all_present);
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn proposals_do_not_feed_other_candidates() {
        let population = Population::generate(3, 0);
        // Nothing is present, so only random formation can fire, and a
        // random proposal on one link must not enable closure on another.
        let lattice = build_lattice(&population);
        let mut rng = SmallRng::seed_from_u64(3);
        let next = evolve(&lattice, &population, &formation(true, false, true, true), &mut rng);
        assert!(next.iter().all(|l| l.state == LinkState::TentativeGeneric));
    }

    #[test]
    fn focal_closure_only_reaches_foci_indexed_by_people() {
        let population = Population::generate(2, 3);
        // F2 hosts both people, but only F0 and F1 are probed.
        let snapshot = build_lattice(&population)
            .with_state(key(p(0), f(2)), LinkState::Present)
            .with_state(key(p(1), f(2)), LinkState::Present);
        let mut rng = SmallRng::seed_from_u64(42);
        let next = evolve(&snapshot, &population, &formation(false, true, false, false), &mut rng);
        assert_eq!(next.state_of(key(p(0), p(1))), LinkState::Absent);

        let reachable = build_lattice(&population)
            .with_state(key(p(0), f(1)), LinkState::Present)
            .with_state(key(p(1), f(1)), LinkState::Present);
        let next = evolve(&reachable, &population, &formation(false, true, false, false), &mut rng);
        assert_eq!(next.state_of(key(p(0), p(1))), LinkState::TentativeFocal);
    }

    #[test]
    fn every_qualifying_intermediary_rolls() {
        let population = Population::generate(4, 0);
        // P0 and P1 are both tied to P2 and P3.
        let snapshot = build_lattice(&population)
            .with_state(key(p(0), p(2)), LinkState::Present)
            .with_state(key(p(0), p(3)), LinkState::Present)
            .with_state(key(p(1), p(2)), LinkState::Present)
            .with_state(key(p(1), p(3)), LinkState::Present);
        let adjacency = snapshot.adjacency();
        let candidate = *snapshot.get(key(p(2), p(3))).unwrap();

        for probability in [Probability::ONE, Probability::ZERO] {
            let mut rng = SmallRng::seed_from_u64(17);
            let mut expected = SmallRng::seed_from_u64(17);
            let closed = closes(
                &candidate,
                &adjacency,
                population.person_ids(),
                probability,
                &mut rng,
            );
            assert_eq!(closed, probability == Probability::ONE);
            // One draw for P0, one for P1; P2 and P3 do not qualify.
            let _: f64 = expected.random();
            let _: f64 = expected.random();
            assert_eq!(rng.random::<u64>(), expected.random::<u64>());
        }
    }

    #[test]
    fn key_set_is_preserved() {
        let population = Population::generate(4, 2);
        let snapshot = closure_scenario(&population);
        let mut rng = SmallRng::seed_from_u64(11);
        let next = evolve(&snapshot, &population, &formation(true, true, true, true), &mut rng);
        assert!(next.same_keys(&snapshot));
    }

    #[test]
    fn solidify_matches_snapshot_method() {
        let population = Population::generate(3, 1);
        let snapshot = closure_scenario(&population)
            .with_state(key(p(1), p(2)), LinkState::TentativeMembership);
        assert_eq!(solidify(&snapshot), snapshot.solidified());
        assert_eq!(solidify(&solidify(&snapshot)), solidify(&snapshot));
    }
}
