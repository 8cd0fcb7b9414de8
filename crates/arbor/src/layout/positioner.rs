//! Level placement and subtree centering.
//!
//! Positioning runs in two steps over a set of [`Levels`]:
//!
//! 1. **Placement**: level `k` sits at `k * level_gap` on the primary axis.
//!    Its `m` nodes are spread `sibling_gap` apart on the secondary axis,
//!    centered on 0.
//! 2. **Centering**: every node with children moves, on the secondary axis
//!    only, to the mean of its children. Levels are walked deepest first so
//!    children are always final before their parent reads them.
//!
//! Centering is a mean of children, not a tidy-tree contour merge. Sibling
//! subtrees of very different width can overlap on the secondary axis.

use indexmap::IndexMap;

use arbor_core::{direction::Direction, geometry::Point, identifier::NodeId};

use crate::{
    config::{DEFAULT_LEVEL_GAP, DEFAULT_SIBLING_GAP},
    layout::levels::Levels,
    structure::Forest,
};

/// Positions of one subtree plus its extent along the primary axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtreeLayout {
    positions: IndexMap<NodeId, Point>,
    used_height: f64,
}

impl SubtreeLayout {
    /// Returns the node positions in level order.
    pub fn positions(&self) -> &IndexMap<NodeId, Point> {
        &self.positions
    }

    /// Returns the primary-axis distance from the first to the last level.
    pub fn used_height(&self) -> f64 {
        self.used_height
    }

    /// Consumes the layout, returning the positions.
    pub fn into_positions(self) -> IndexMap<NodeId, Point> {
        self.positions
    }
}

/// Places and centers the nodes of a set of levels.
#[derive(Debug, Clone)]
pub struct Positioner {
    direction: Direction,
    level_gap: f64,
    sibling_gap: f64,
}

impl Default for Positioner {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl Positioner {
    /// Create a positioner with default gaps
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            level_gap: DEFAULT_LEVEL_GAP,
            sibling_gap: DEFAULT_SIBLING_GAP,
        }
    }

    /// Set the distance between adjacent levels
    pub fn set_level_gap(&mut self, gap: f64) -> &mut Self {
        self.level_gap = gap;
        self
    }

    /// Set the distance between same-level siblings
    pub fn set_sibling_gap(&mut self, gap: f64) -> &mut Self {
        self.sibling_gap = gap;
        self
    }

    /// Returns the layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the primary-axis extent of `level_count` levels.
    pub fn used_height(&self, level_count: usize) -> f64 {
        level_count.saturating_sub(1) as f64 * self.level_gap
    }

    /// Places and centers every node in `levels`.
    pub fn position(&self, levels: &Levels, forest: &Forest) -> SubtreeLayout {
        let mut positions = self.place_levels(levels);
        self.center(levels, forest, &mut positions);

        SubtreeLayout {
            positions,
            used_height: self.used_height(levels.len()),
        }
    }

    /// Initial placement: evenly spread each level around 0.
    pub fn place_levels(&self, levels: &Levels) -> IndexMap<NodeId, Point> {
        let mut positions = IndexMap::with_capacity(levels.iter().map(Vec::len).sum());

        for (level_idx, level) in levels.iter().enumerate() {
            let primary = level_idx as f64 * self.level_gap;
            // Offset of the level's center from its first slot, in slots.
            let center = level.len().saturating_sub(1) as f64 / 2.0;

            for (i, &node) in level.iter().enumerate() {
                let secondary = (i as f64 - center) * self.sibling_gap;
                positions.insert(node, self.direction.point(primary, secondary));
            }
        }

        positions
    }

    /// Moves every parent in `levels` to the mean secondary coordinate of its children.
    ///
    /// Children missing from `positions` are ignored; a parent with none
    /// left keeps its placement.
    pub fn center(
        &self,
        levels: &Levels,
        forest: &Forest,
        positions: &mut IndexMap<NodeId, Point>,
    ) {
        for level in levels.iter().rev() {
            for &node in level {
                let Some(mean) = self.children_mean(node, forest, positions) else {
                    continue;
                };

                if let Some(point) = positions.get_mut(&node) {
                    *point = self.direction.with_secondary(*point, mean);
                }
            }
        }
    }

    fn children_mean(
        &self,
        node: NodeId,
        forest: &Forest,
        positions: &IndexMap<NodeId, Point>,
    ) -> Option<f64> {
        let (sum, count) = forest
            .children(node)
            .iter()
            .filter_map(|child| positions.get(child))
            .fold((0.0, 0usize), |(sum, count), &point| {
                (sum + self.direction.secondary(point), count + 1)
            });

        (count > 0).then(|| sum / count as f64)
    }
}
