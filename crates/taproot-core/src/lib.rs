//! Taproot Core - Property graph model
//!
//! This crate provides the graph value types shared by the Taproot
//! traversal bridge: nodes, relationships, paths and directions. It is
//! pure data and performs no I/O of its own.

pub mod node;
pub mod path;
pub mod relationship;

pub use node::{Node, NodeId};
pub use path::Path;
pub use relationship::{Direction, Relationship, RelationshipId, RelationshipType};
