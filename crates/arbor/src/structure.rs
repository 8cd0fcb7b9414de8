//! Hierarchy structure built from flat records.
//!
//! [`Forest`] is the id-indexed arena every layout stage reads from. Parent
//! and child links are node ids resolved through the arena's map, never
//! references.

mod forest;

pub use forest::{DanglingParent, Edge, Forest, ForestNode};
