//! Forest construction from flat domain records.
//!
//! # Architecture
//!
//! Construction runs in two passes over the input:
//! 1. Every record becomes a [`ForestNode`] with no children, keyed by id.
//!    A repeated id overwrites the earlier node (last write wins) but keeps
//!    the slot of its first appearance.
//! 2. Every node whose parent resolves to another node is appended to that
//!    parent's children. All other nodes are roots.
//!
//! Both passes are linear in the number of records. Malformed input never
//! fails construction; it is recorded in [`Forest::dangling`] and
//! [`Forest::duplicates`] for the caller to report.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use arbor_core::{identifier::NodeId, record::DomainRecord};

use crate::error::ArborError;

/// A node of the forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestNode {
    id: NodeId,
    parent_id: Option<NodeId>,
    label: String,
    code: Option<String>,
    children: Vec<NodeId>,
}

impl ForestNode {
    fn from_record(record: &DomainRecord) -> Self {
        Self {
            id: record.unique_id,
            parent_id: record.parent_id,
            label: record.label.clone(),
            code: record.code.clone(),
            children: Vec::new(),
        }
    }

    /// Returns the node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the parent id as given in the record, resolved or not.
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the short code, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the ids of this node's children in input order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node whose parent id does not resolve to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingParent {
    child: NodeId,
    parent: NodeId,
}

impl DanglingParent {
    /// Returns the node that was promoted to a root.
    pub fn child(self) -> NodeId {
        self.child
    }

    /// Returns the parent id that failed to resolve.
    pub fn parent(self) -> NodeId {
        self.parent
    }
}

/// A parent to child link, used for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Creates an edge from `source` (parent) to `target` (child).
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the parent end.
    pub fn source(self) -> NodeId {
        self.source
    }

    /// Returns the child end.
    pub fn target(self) -> NodeId {
        self.target
    }
}

/// Id-indexed forest of domain nodes.
///
/// # Examples
///
/// ```
/// use arbor::structure::Forest;
/// use arbor_core::{identifier::NodeId, record::DomainRecord};
///
/// let records = vec![
///     DomainRecord::new(NodeId::new(1), "Finance"),
///     DomainRecord::new(NodeId::from_sub_domain(1), "Ledger").with_parent(NodeId::new(1)),
/// ];
///
/// let forest = Forest::from_records(&records);
///
/// assert_eq!(forest.roots(), &[NodeId::new(1)]);
/// assert_eq!(forest.children(NodeId::new(1)), &[NodeId::new(-2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: IndexMap<NodeId, ForestNode>,
    roots: Vec<NodeId>,
    dangling: Vec<DanglingParent>,
    duplicates: Vec<NodeId>,
}

impl Forest {
    /// Builds the forest from flat records.
    ///
    /// A node is a root when its parent id is absent, does not match any
    /// record, or names the node itself. Never fails; see the module
    /// documentation for how malformed input is handled.
    pub fn from_records(records: &[DomainRecord]) -> Self {
        let mut nodes: IndexMap<NodeId, ForestNode> = IndexMap::with_capacity(records.len());
        let mut seen_twice = HashSet::new();
        let mut duplicates = Vec::new();

        for record in records {
            let previous = nodes.insert(record.unique_id, ForestNode::from_record(record));
            if previous.is_some() && seen_twice.insert(record.unique_id) {
                duplicates.push(record.unique_id);
            }
        }

        let mut roots = Vec::new();
        let mut dangling = Vec::new();
        let mut links = Vec::new();

        for node in nodes.values() {
            match node.parent_id {
                Some(parent) if parent != node.id && nodes.contains_key(&parent) => {
                    links.push((parent, node.id));
                }
                Some(parent) => {
                    dangling.push(DanglingParent {
                        child: node.id,
                        parent,
                    });
                    roots.push(node.id);
                }
                None => roots.push(node.id),
            }
        }

        for (parent, child) in links {
            if let Some(parent_node) = nodes.get_mut(&parent) {
                parent_node.children.push(child);
            }
        }

        Self {
            nodes,
            roots,
            dangling,
            duplicates,
        }
    }

    /// Returns the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&ForestNode> {
        self.nodes.get(&id)
    }

    /// Returns an iterator over all nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &ForestNode> {
        self.nodes.values()
    }

    /// Returns the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks if a node with the given id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns root ids in input order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the children of `id`, or an empty slice for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(ForestNode::children)
            .unwrap_or_default()
    }

    /// Returns the label of `id`, or an empty string for unknown ids.
    pub fn label(&self, id: NodeId) -> &str {
        self.nodes.get(&id).map(ForestNode::label).unwrap_or_default()
    }

    /// Returns nodes that were promoted to roots because their parent did not resolve.
    pub fn dangling(&self) -> &[DanglingParent] {
        &self.dangling
    }

    /// Returns ids that appeared more than once in the input.
    pub fn duplicates(&self) -> &[NodeId] {
        &self.duplicates
    }

    /// Returns one edge per parent to child link, parents in input order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.values().flat_map(|node| {
            node.children
                .iter()
                .map(move |&child| Edge::new(node.id, child))
        })
    }

    /// Fails if any node had an unresolved parent id.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Integrity`] listing every offending node.
    pub fn ensure_resolved(&self) -> Result<(), ArborError> {
        if self.dangling.is_empty() {
            return Ok(());
        }

        let details = self
            .dangling
            .iter()
            .map(|d| format!("{} -> {}", d.child, d.parent))
            .collect::<Vec<_>>()
            .join(", ");

        Err(ArborError::Integrity(format!(
            "{} node(s) reference a parent that does not exist: {details}",
            self.dangling.len()
        )))
    }
}
