//! Hierarchy layout.
//!
//! The [`Engine`] sequences the layout stages over a [`Forest`]:
//!
//! - [`levels`] assigns breadth-first levels,
//! - [`positioner`] places each level and centers parents over children,
//! - [`stacker`] merges independent root subtrees into one coordinate space.
//!
//! Two root placement modes exist. *Stacked* mode (the default) lays out
//! every root subtree separately and stacks them along the primary axis in
//! label order. *Shared-level* mode seeds all roots into one breadth-first
//! frontier so same-depth nodes of different trees share a row.

pub mod levels;
pub mod positioner;
pub mod stacker;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use arbor_core::{
    geometry::{Bounds, Point},
    identifier::NodeId,
};

use crate::{
    config::LayoutConfig,
    error::ArborError,
    structure::{Edge, Forest},
};

use levels::{assign_levels, assign_levels_from};
use positioner::Positioner;
use stacker::{ForestStacker, sort_roots};

/// Node positions and parent to child edges of a laid-out forest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    positions: IndexMap<NodeId, Point>,
    edges: Vec<Edge>,
}

impl Layout {
    /// Creates a layout from positions and edges.
    pub fn new(positions: IndexMap<NodeId, Point>, edges: Vec<Edge>) -> Self {
        Self { positions, edges }
    }

    /// Returns every node position.
    pub fn positions(&self) -> &IndexMap<NodeId, Point> {
        &self.positions
    }

    /// Returns the position of `id`, if it was laid out.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Returns every edge.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of positioned nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no node was positioned.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the box enclosing every node position, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.positions.values().copied())
    }

    /// Encodes the layout as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Encode`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ArborError> {
        serde_json::to_string_pretty(self).map_err(ArborError::Encode)
    }
}

/// Runs the layout stages with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    positioner: Positioner,
    stacker: ForestStacker,
    stack_roots_vertically: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl Engine {
    /// Create an engine from a layout configuration
    pub fn new(config: &LayoutConfig) -> Self {
        let spacing = config.spacing();

        let mut positioner = Positioner::new(config.direction());
        positioner
            .set_level_gap(spacing.level_gap())
            .set_sibling_gap(spacing.sibling_gap());

        let mut stacker = ForestStacker::new(config.direction());
        stacker.set_group_gap(spacing.group_gap());

        Self {
            positioner,
            stacker,
            stack_roots_vertically: config.stack_roots_vertically(),
        }
    }

    /// Calculate the layout for a forest
    pub fn calculate(&self, forest: &Forest) -> Layout {
        let positions = if self.stack_roots_vertically {
            self.stacked_positions(forest)
        } else {
            self.shared_level_positions(forest)
        };

        Layout::new(positions, forest.edges().collect())
    }

    fn stacked_positions(&self, forest: &Forest) -> IndexMap<NodeId, Point> {
        let subtrees = forest
            .roots()
            .iter()
            .map(|&root| {
                let levels = assign_levels(root, forest);
                let subtree = self.positioner.position(&levels, forest);
                trace!(
                    root = root.get(),
                    levels = levels.len(),
                    used_height = subtree.used_height();
                    "Subtree positioned",
                );
                (root, subtree)
            })
            .collect();

        self.stacker.stack(forest, subtrees)
    }

    fn shared_level_positions(&self, forest: &Forest) -> IndexMap<NodeId, Point> {
        let roots = sort_roots(forest, forest.roots());
        let levels = assign_levels_from(&roots, forest);
        debug!(levels = levels.len(); "Shared levels assigned");

        // Trees are disjoint, so one deepest-first pass over the shared levels
        // centers every root's subtree exactly as a per-root pass would.
        self.positioner.position(&levels, forest).into_positions()
    }
}
