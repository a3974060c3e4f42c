//! Node and link records shared between the engine and its consumers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{LinkState, NodeCategory};
use crate::ids::{LinkKey, NodeId};

/// A person or focus node.
///
/// Identity is fixed at creation. The `category` always agrees with the
/// id prefix because nodes are only built through [`Node::person`] and
/// [`Node::focus`] or from an id via [`Node::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Node {
    /// Textual id, `P<index>` or `F<index>`.
    #[ts(type = "string")]
    pub id: NodeId,
    /// Whether this node is a person or a focus.
    pub category: NodeCategory,
}

impl Node {
    /// Build the node for an existing id.
    pub const fn from_id(id: NodeId) -> Self {
        Self {
            id,
            category: id.category(),
        }
    }

    /// Person number `index`.
    pub const fn person(index: u32) -> Self {
        Self::from_id(NodeId::person(index))
    }

    /// Focus number `index`.
    pub const fn focus(index: u32) -> Self {
        Self::from_id(NodeId::focus(index))
    }
}

/// One potential or realized tie in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Link {
    /// Concatenated endpoint ids, e.g. `P0F1`.
    #[ts(type = "string")]
    pub id: LinkKey,
    /// Lower endpoint; always a person.
    #[ts(type = "string")]
    pub source: NodeId,
    /// Higher endpoint; a person or a focus.
    #[ts(type = "string")]
    pub target: NodeId,
    /// State of the tie in the snapshot holding this record.
    pub state: LinkState,
}

impl Link {
    /// An inactive link for `key`.
    pub const fn absent(key: LinkKey) -> Self {
        Self {
            id: key,
            source: key.source(),
            target: key.target(),
            state: LinkState::Absent,
        }
    }

    /// This link with a different state.
    #[must_use]
    pub const fn with_state(self, state: LinkState) -> Self {
        Self { state, ..self }
    }
}
