//! Link lattice builder: every admissible node pair, exactly once.

use std::collections::BTreeMap;

use affiliation_types::{Link, LinkKey};

use crate::nodes::Population;
use crate::snapshot::Snapshot;

/// Build the lattice of all links for `population`, every link absent.
///
/// Pairs `(i, j)` with `i < j` in emission order are enumerated; pairs of
/// two foci are skipped.
pub fn build_lattice(population: &Population) -> Snapshot {
    let nodes: Vec<_> = population.nodes().map(|n| n.id).collect();
    let mut links = BTreeMap::new();

    let mut rest = nodes.as_slice();
    while let Some((source, tail)) = rest.split_first() {
        for target in tail {
            if let Some(key) = LinkKey::new(*source, *target) {
                links.insert(key, Link::absent(key));
            }
        }
        rest = tail;
    }

    Snapshot::from_links(links)
}

/// Number of links in the lattice: `C(people, 2) + people * foci`.
///
/// Returns `None` on overflow.
pub fn lattice_size(people: u32, foci: u32) -> Option<u64> {
    let p = u64::from(people);
    let f = u64::from(foci);
    let pairs = p.checked_mul(p.saturating_sub(1))?.checked_div(2)?;
    pairs.checked_add(p.checked_mul(f)?)
}
