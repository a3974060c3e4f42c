//! Typed identifiers for nodes and links.
//!
//! Node ids are a category plus an index and render as `P<index>` for people
//! and `F<index>` for foci. A link is keyed by the ordered pair of its
//! endpoints and renders as the concatenation of both ids, e.g. `P0F1`.
//!
//! Ordering is derived field-by-field, so people sort before foci and lower
//! indices sort first. That is exactly the order the node factory emits
//! nodes in, which makes the canonical orientation of a [`LinkKey`] the same
//! orientation the lattice builder assigns.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::NodeCategory;
use crate::error::IdParseError;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Identifier of a person or focus node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    category: NodeCategory,
    index: u32,
}

impl NodeId {
    /// Create an id from its parts.
    pub const fn new(category: NodeCategory, index: u32) -> Self {
        Self { category, index }
    }

    /// The id of person `index` (`P<index>`).
    pub const fn person(index: u32) -> Self {
        Self::new(NodeCategory::Person, index)
    }

    /// The id of focus `index` (`F<index>`).
    pub const fn focus(index: u32) -> Self {
        Self::new(NodeCategory::Focus, index)
    }

    /// The category this id belongs to.
    pub const fn category(self) -> NodeCategory {
        self.category
    }

    /// The zero-based index within the category.
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category.prefix(), self.index)
    }
}

impl FromStr for NodeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let prefix = chars.next().ok_or(IdParseError::Empty)?;
        let category = NodeCategory::from_prefix(prefix)
            .ok_or_else(|| IdParseError::UnknownPrefix(s.to_owned()))?;
        let digits = chars.as_str();

        // Only canonical decimal: no sign, no padding.
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits.len() == 1 || !digits.starts_with('0'));
        if !canonical {
            return Err(IdParseError::InvalidIndex(s.to_owned()));
        }
        let index = digits
            .parse::<u32>()
            .map_err(|_parse| IdParseError::InvalidIndex(s.to_owned()))?;
        Ok(Self::new(category, index))
    }
}

impl TryFrom<String> for NodeId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

// ---------------------------------------------------------------------------
// LinkKey
// ---------------------------------------------------------------------------

/// Composite key of a link: the ordered pair of its endpoint ids.
///
/// Only admissible pairs can be represented. Person-person and
/// person-focus pairs are admissible; focus-focus pairs and self-pairs are
/// not, so [`LinkKey::new`] returns `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkKey {
    source: NodeId,
    target: NodeId,
}

impl LinkKey {
    /// Key for the tie between `a` and `b`, in canonical orientation.
    ///
    /// Argument order does not matter: `new(a, b) == new(b, a)`.
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        let (source, target) = match a.cmp(&b) {
            core::cmp::Ordering::Less => (a, b),
            core::cmp::Ordering::Greater => (b, a),
            core::cmp::Ordering::Equal => return None,
        };
        // The lower endpoint is a focus only when both are.
        if source.category() == NodeCategory::Focus {
            return None;
        }
        Some(Self { source, target })
    }

    /// The lower endpoint; always a person.
    pub const fn source(self) -> NodeId {
        self.source
    }

    /// The higher endpoint; a person or a focus.
    pub const fn target(self) -> NodeId {
        self.target
    }

    /// Whether this key links a person to a focus.
    pub fn is_affiliation(self) -> bool {
        self.target.category() == NodeCategory::Focus
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)
    }
}

impl FromStr for LinkKey {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdParseError::Empty);
        }
        // The target starts at the second prefix letter.
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| NodeCategory::from_prefix(*c).is_some())
            .map(|(i, _)| i)
            .ok_or_else(|| IdParseError::MissingTarget(s.to_owned()))?;
        let (source, target) = s.split_at(split);
        let source: NodeId = source.parse()?;
        let target: NodeId = target.parse()?;

        match Self::new(source, target) {
            Some(key) if key.source == source => Ok(key),
            _ => Err(IdParseError::Inadmissible(s.to_owned())),
        }
    }
}

impl TryFrom<String> for LinkKey {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LinkKey> for String {
    fn from(key: LinkKey) -> Self {
        key.to_string()
    }
}
