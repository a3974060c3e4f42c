//! The ordered sequence of snapshots produced by one run.

use serde::Serialize;

use crate::snapshot::{Snapshot, SnapshotStats};

/// Every snapshot of a run, in simulated-time order.
///
/// Index 0 is the sampled initial network, indices `1..=N` are the evolved
/// snapshots, and index `N + 1` is the final fully solidified network.
/// Append-only while the run is built and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SimulationHistory {
    snapshots: Vec<Snapshot>,
}

impl SimulationHistory {
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The sampled initial network.
    pub fn initial(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }

    /// The final, fully solidified network.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Highest valid index, for bounding a time-scrubbing control.
    pub fn last_index(&self) -> Option<usize> {
        self.snapshots.len().checked_sub(1)
    }

    /// Snapshots in order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Per-snapshot link counts, in order.
    pub fn stats(&self) -> Vec<SnapshotStats> {
        self.snapshots.iter().map(Snapshot::stats).collect()
    }
}

impl<'a> IntoIterator for &'a SimulationHistory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
