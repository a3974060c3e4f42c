//! Shared type definitions for the affiliation network engine.
//!
//! This crate holds the data model every other crate and the rendering
//! collaborator agree on. Types flow to `TypeScript` via `ts-rs` so the
//! front end can consume snapshots without hand-written mirrors.
//!
//! # Modules
//!
//! - [`ids`] -- Typed node ids and composite link keys
//! - [`enums`] -- Node categories and link states
//! - [`structs`] -- Node and link records
//! - [`error`] -- Id parsing errors

pub mod enums;
pub mod error;
pub mod ids;
pub mod structs;

pub use enums::{LinkState, NodeCategory};
pub use error::IdParseError;
pub use ids::{LinkKey, NodeId};
pub use structs::{Link, Node};
