//! Error types for the `affiliation-types` crate.

/// Errors produced when parsing a textual node id or link key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    /// The input was empty.
    #[error("identifier is empty")]
    Empty,

    /// The input did not start with a known node prefix.
    #[error("unknown node prefix in {0:?}")]
    UnknownPrefix(String),

    /// The numeric part was missing, non-decimal, zero-padded, or too large.
    #[error("invalid node index in {0:?}")]
    InvalidIndex(String),

    /// A link key named fewer than two nodes.
    #[error("link key {0:?} does not name two nodes")]
    MissingTarget(String),

    /// A link key named a pair the lattice never contains, or named it in
    /// non-canonical orientation.
    #[error("link key {0:?} is not an admissible pair")]
    Inadmissible(String),
}
