//! Enumeration types for the affiliation network.
//!
//! Node categories and the lifecycle states a link passes through while the
//! network evolves.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Node categories
// ---------------------------------------------------------------------------

/// The kind of node in a socio-affiliation network.
///
/// Variant order matters: people sort before foci, which matches the order
/// the node factory emits them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum NodeCategory {
    /// An individual who forms social ties.
    Person,
    /// A shared context (group, venue, activity) people can belong to.
    Focus,
}

impl NodeCategory {
    /// The single-letter prefix used in textual node ids.
    pub const fn prefix(self) -> char {
        match self {
            Self::Person => 'P',
            Self::Focus => 'F',
        }
    }

    /// Resolve a textual id prefix back to its category.
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'P' => Some(Self::Person),
            'F' => Some(Self::Focus),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Link states
// ---------------------------------------------------------------------------

/// The state of one link in one snapshot.
///
/// `Tentative*` states mark a tie proposed during an evolution step, tagged
/// with the mechanism that proposed it. The next solidify pass turns every
/// tentative tie into [`LinkState::Present`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum LinkState {
    /// No tie between the endpoints.
    Absent,
    /// A realized tie.
    Present,
    /// Proposed by baseline random formation.
    TentativeGeneric,
    /// Proposed because both endpoints share a person neighbour.
    TentativeTriadic,
    /// Proposed because both endpoints share a focus.
    TentativeFocal,
    /// Proposed by membership closure.
    TentativeMembership,
}

impl LinkState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Absent,
        Self::Present,
        Self::TentativeGeneric,
        Self::TentativeTriadic,
        Self::TentativeFocal,
        Self::TentativeMembership,
    ];

    /// Whether this is a realized tie.
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    /// Whether this link carries no tie at all.
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this link was proposed during the last evolution step.
    pub const fn is_tentative(self) -> bool {
        matches!(
            self,
            Self::TentativeGeneric
                | Self::TentativeTriadic
                | Self::TentativeFocal
                | Self::TentativeMembership
        )
    }

    /// The state after solidifying: anything not absent becomes present.
    pub const fn solidified(self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            _ => Self::Present,
        }
    }
}
