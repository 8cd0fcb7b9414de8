//! Flat input records for the layout engine.

use serde::{Deserialize, Serialize};

use crate::identifier::NodeId;

/// A single domain or sub-domain, flattened with an optional parent reference.
///
/// Records are supplied by the data-fetch layer. `unique_id` is expected to
/// be unique across domains and sub-domains (see [`NodeId::from_sub_domain`]).
///
/// # Examples
///
/// ```
/// use arbor_core::{identifier::NodeId, record::DomainRecord};
///
/// let record = DomainRecord::new(NodeId::new(3), "Payments")
///     .with_parent(NodeId::new(1))
///     .with_code("PAY");
///
/// assert_eq!(record.parent_id, Some(NodeId::new(1)));
/// assert_eq!(record.code.as_deref(), Some("PAY"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub unique_id: NodeId,

    #[serde(default)]
    pub parent_id: Option<NodeId>,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Number of children the source reported, if known. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count_hint: Option<u32>,
}

impl DomainRecord {
    /// Creates a parentless record with the given id and label.
    pub fn new(unique_id: NodeId, label: impl Into<String>) -> Self {
        Self {
            unique_id,
            parent_id: None,
            label: label.into(),
            code: None,
            child_count_hint: None,
        }
    }

    /// Sets the parent reference.
    pub fn with_parent(mut self, parent_id: NodeId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the reported child count.
    pub fn with_child_count_hint(mut self, count: u32) -> Self {
        self.child_count_hint = Some(count);
        self
    }
}
