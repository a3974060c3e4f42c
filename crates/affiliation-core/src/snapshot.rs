//! Snapshots: one complete labeled state of every link.
//!
//! A [`Snapshot`] always holds the whole lattice. Inactive links stay in the
//! map as [`LinkState::Absent`], so all snapshots of one run share the same
//! key set and differ only in states. Snapshots are values: every operation
//! that changes states returns a new snapshot.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use affiliation_types::{Link, LinkKey, LinkState, NodeId};

/// The state of every link at one point in simulated time.
///
/// Iteration follows [`LinkKey`] order, which equals the lattice
/// enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    links: BTreeMap<LinkKey, Link>,
}

impl Snapshot {
    pub(crate) const fn from_links(links: BTreeMap<LinkKey, Link>) -> Self {
        Self { links }
    }

    /// Number of links, active or not.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the lattice is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The link stored under `key`.
    pub fn get(&self, key: LinkKey) -> Option<&Link> {
        self.links.get(&key)
    }

    /// The link between `a` and `b`, in either order.
    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<&Link> {
        LinkKey::new(a, b).and_then(|key| self.get(key))
    }

    /// The state of `key`; unknown keys read as absent.
    pub fn state_of(&self, key: LinkKey) -> LinkState {
        self.get(key).map_or(LinkState::Absent, |link| link.state)
    }

    /// All links in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// All keys in order.
    pub fn keys(&self) -> impl Iterator<Item = LinkKey> + '_ {
        self.links.keys().copied()
    }

    /// Links currently in `state`, for renderers that style by state.
    pub fn links_in_state(&self, state: LinkState) -> impl Iterator<Item = &Link> {
        self.iter().filter(move |link| link.state == state)
    }

    /// Whether `other` covers exactly the same links.
    pub fn same_keys(&self, other: &Self) -> bool {
        self.links.len() == other.links.len() && self.links.keys().eq(other.links.keys())
    }

    /// This snapshot with `key` set to `state`.
    ///
    /// Keys outside the lattice are ignored; the key set never changes.
    #[must_use]
    pub fn with_state(mut self, key: LinkKey, state: LinkState) -> Self {
        self.set_state(key, state);
        self
    }

    /// A copy with every non-absent link turned present.
    ///
    /// Idempotent: solidifying twice equals solidifying once.
    #[must_use]
    pub fn solidified(&self) -> Self {
        self.map_states(|link| link.state.solidified())
    }

    /// Lookup table of the links that are present right now.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency {
            present: self
                .links_in_state(LinkState::Present)
                .map(|link| link.id)
                .collect(),
        }
    }

    /// Count links by state.
    pub fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats::default();
        for link in self.iter() {
            stats.record(link.state);
        }
        stats
    }

    /// Rewrite states in key order, keeping the key set.
    pub(crate) fn map_states<F>(&self, mut state_for: F) -> Self
    where
        F: FnMut(&Link) -> LinkState,
    {
        let links = self
            .links
            .iter()
            .map(|(key, link)| (*key, link.with_state(state_for(link))))
            .collect();
        Self { links }
    }

    pub(crate) fn set_state(&mut self, key: LinkKey, state: LinkState) {
        if let Some(link) = self.links.get_mut(&key) {
            link.state = state;
        }
    }
}

/// Present-tie lookup built once per snapshot.
///
/// Lookups are orientation-free. A pair with no link in the lattice (a node
/// with itself, two foci) is simply not present.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    present: HashSet<LinkKey>,
}

impl Adjacency {
    /// Whether `a` and `b` are tied.
    pub fn is_present(&self, a: NodeId, b: NodeId) -> bool {
        LinkKey::new(a, b).is_some_and(|key| self.present.contains(&key))
    }

    /// Whether `via` is tied to both `a` and `b`.
    pub fn shares_neighbour(&self, via: NodeId, a: NodeId, b: NodeId) -> bool {
        self.is_present(via, a) && self.is_present(via, b)
    }

    /// Number of present ties.
    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Whether there are no present ties.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }
}

/// Link counts by state for one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    /// Links with no tie.
    pub absent: usize,
    /// Realized ties.
    pub present: usize,
    /// Ties proposed by random formation.
    pub tentative_generic: usize,
    /// Ties proposed by triadic closure.
    pub tentative_triadic: usize,
    /// Ties proposed by focal closure.
    pub tentative_focal: usize,
    /// Ties proposed by membership closure.
    pub tentative_membership: usize,
}

impl SnapshotStats {
    fn record(&mut self, state: LinkState) {
        let slot = match state {
            LinkState::Absent => &mut self.absent,
            LinkState::Present => &mut self.present,
            LinkState::TentativeGeneric => &mut self.tentative_generic,
            LinkState::TentativeTriadic => &mut self.tentative_triadic,
            LinkState::TentativeFocal => &mut self.tentative_focal,
            LinkState::TentativeMembership => &mut self.tentative_membership,
        };
        *slot = slot.saturating_add(1);
    }

    /// Ties proposed this step, over all mechanisms.
    pub const fn tentative(&self) -> usize {
        self.tentative_generic
            .saturating_add(self.tentative_triadic)
            .saturating_add(self.tentative_focal)
            .saturating_add(self.tentative_membership)
    }

    /// Every link counted.
    pub const fn total(&self) -> usize {
        self.absent
            .saturating_add(self.present)
            .saturating_add(self.tentative())
    }
}
