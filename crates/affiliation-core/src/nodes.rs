//! Node factory: the fixed sets of person and focus identities.

use serde::Serialize;

use affiliation_types::{Node, NodeId};

/// The people and foci of one run.
///
/// Created once and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Population {
    people: Vec<Node>,
    foci: Vec<Node>,
}

impl Population {
    /// Create `people` persons `P0..` and `foci` foci `F0..`.
    pub fn generate(people: u32, foci: u32) -> Self {
        Self {
            people: (0..people).map(Node::person).collect(),
            foci: (0..foci).map(Node::focus).collect(),
        }
    }

    /// Person nodes in index order.
    pub fn people(&self) -> &[Node] {
        &self.people
    }

    /// Focus nodes in index order.
    pub fn foci(&self) -> &[Node] {
        &self.foci
    }

    /// Every node in emission order: all people, then all foci.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.people.iter().chain(&self.foci)
    }

    /// Ids of the person nodes.
    pub fn person_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.people.iter().map(|n| n.id)
    }

    /// Ids of the focus nodes.
    pub fn focus_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.foci.iter().map(|n| n.id)
    }
}

#[cfg(test)]
mod tests {
    use affiliation_types::NodeCategory;

    use super::*;

    #[test]
    fn generates_prefixed_ids_from_zero() {
        let population = Population::generate(3, 2);
        let ids: Vec<String> = population.nodes().map(|n| n.id.to_string()).collect();
        assert_eq!(ids, ["P0", "P1", "P2", "F0", "F1"]);
    }

    #[test]
    fn categories_match_lists() {
        let population = Population::generate(4, 3);
        assert!(population.people().iter().all(|n| n.category == NodeCategory::Person));
        assert!(population.foci().iter().all(|n| n.category == NodeCategory::Focus));
        assert_eq!(population.person_ids().count(), 4);
        assert_eq!(population.focus_ids().count(), 3);
    }

    #[test]
    fn empty_population() {
        let population = Population::generate(0, 0);
        assert_eq!(population.nodes().count(), 0);
    }
}
