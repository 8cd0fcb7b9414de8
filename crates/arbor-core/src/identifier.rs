//! Node identifiers for the merged domain/sub-domain id space.
//!
//! Domains and sub-domains come from two independent numbering schemes.
//! Domain ids are used as-is, sub-domain ids are folded into the negative
//! half of the space so the two can never collide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the layout forest.
///
/// # Examples
///
/// ```
/// use arbor_core::identifier::NodeId;
///
/// let domain = NodeId::new(7);
/// let sub_domain = NodeId::from_sub_domain(7);
///
/// assert_ne!(domain, sub_domain);
/// assert!(sub_domain.is_sub_domain());
/// assert_eq!(sub_domain.get(), -8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i64);

impl NodeId {
    /// Creates a `NodeId` from a raw id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Creates a `NodeId` for a sub-domain by remapping its raw id into the
    /// strictly negative range (`-1 - |raw|`).
    pub const fn from_sub_domain(raw: i64) -> Self {
        Self((-1i64).saturating_sub(raw.saturating_abs()))
    }

    /// Returns the raw id.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns `true` if the id lives in the remapped sub-domain range.
    pub const fn is_sub_domain(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for NodeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
