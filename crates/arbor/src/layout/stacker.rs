//! Stacking of independent root subtrees.
//!
//! Each root subtree is laid out on its own around the origin. The stacker
//! orders the roots by label and slides each subtree along the primary axis
//! so consecutive subtrees are `group_gap` apart and never overlap.

use indexmap::IndexMap;

use arbor_core::{direction::Direction, geometry::Point, identifier::NodeId};

use crate::{config::DEFAULT_GROUP_GAP, layout::positioner::SubtreeLayout, structure::Forest};

/// Orders root ids by label, case-insensitively, then by id.
///
/// # Examples
///
/// ```
/// use arbor::{layout::stacker::sort_roots, structure::Forest};
/// use arbor_core::{identifier::NodeId, record::DomainRecord};
///
/// let forest = Forest::from_records(&[
///     DomainRecord::new(NodeId::new(1), "zeta"),
///     DomainRecord::new(NodeId::new(2), "Alpha"),
/// ]);
///
/// assert_eq!(sort_roots(&forest, forest.roots()), vec![NodeId::new(2), NodeId::new(1)]);
/// ```
pub fn sort_roots(forest: &Forest, roots: &[NodeId]) -> Vec<NodeId> {
    let mut sorted = roots.to_vec();
    sorted.sort_by_cached_key(|&id| root_key(forest, id));
    sorted
}

fn root_key(forest: &Forest, id: NodeId) -> (String, NodeId) {
    (forest.label(id).to_lowercase(), id)
}

/// Merges per-root subtree layouts into one coordinate space.
#[derive(Debug, Clone)]
pub struct ForestStacker {
    direction: Direction,
    group_gap: f64,
}

impl Default for ForestStacker {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl ForestStacker {
    /// Create a stacker with the default group gap
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            group_gap: DEFAULT_GROUP_GAP,
        }
    }

    /// Set the distance between consecutive subtrees
    pub fn set_group_gap(&mut self, gap: f64) -> &mut Self {
        self.group_gap = gap;
        self
    }

    /// Stacks `subtrees` along the primary axis in label order.
    ///
    /// Secondary coordinates are left untouched. The returned map lists
    /// subtrees in stacking order.
    pub fn stack(
        &self,
        forest: &Forest,
        mut subtrees: Vec<(NodeId, SubtreeLayout)>,
    ) -> IndexMap<NodeId, Point> {
        subtrees.sort_by_cached_key(|(id, _)| root_key(forest, *id));

        let capacity = subtrees.iter().map(|(_, s)| s.positions().len()).sum();
        let mut merged = IndexMap::with_capacity(capacity);
        let mut offset = 0.0;

        for (_, subtree) in subtrees {
            let used_height = subtree.used_height();

            for (node, point) in subtree.into_positions() {
                let primary = self.direction.primary(point) + offset;
                merged.insert(node, self.direction.with_primary(point, primary));
            }

            offset += used_height + self.group_gap;
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use arbor_core::record::DomainRecord;

    use super::*;
    use crate::layout::{levels::assign_levels, positioner::Positioner};

    fn forest(records: &[(i64, Option<i64>, &str)]) -> Forest {
        let records: Vec<DomainRecord> = records
            .iter()
            .map(|&(id, parent, label)| {
                let record = DomainRecord::new(NodeId::new(id), label);
                match parent {
                    Some(parent) => record.with_parent(NodeId::new(parent)),
                    None => record,
                }
            })
            .collect();
        Forest::from_records(&records)
    }

    fn subtrees(forest: &Forest, direction: Direction) -> Vec<(NodeId, SubtreeLayout)> {
        let mut positioner = Positioner::new(direction);
        positioner.set_level_gap(150.0);

        forest
            .roots()
            .iter()
            .map(|&root| {
                let levels = assign_levels(root, forest);
                (root, positioner.position(&levels, forest))
            })
            .collect()
    }

    fn stacker(direction: Direction) -> ForestStacker {
        let mut stacker = ForestStacker::new(direction);
        stacker.set_group_gap(180.0);
        stacker
    }

    #[test]
    fn test_sort_roots_is_case_insensitive() {
        let forest = forest(&[(1, None, "beta"), (2, None, "Alpha"), (3, None, "CHARLIE")]);

        let sorted = sort_roots(&forest, forest.roots());

        assert_eq!(sorted, vec![NodeId::new(2), NodeId::new(1), NodeId::new(3)]);
    }

    #[test]
    fn test_sort_roots_ties_broken_by_id() {
        let forest = forest(&[(9, None, "Same"), (4, None, "same"), (6, None, "SAME")]);

        let sorted = sort_roots(&forest, forest.roots());

        assert_eq!(sorted, vec![NodeId::new(4), NodeId::new(6), NodeId::new(9)]);
    }

    #[test]
    fn test_stacks_in_label_order() {
        let forest = forest(&[
            (1, None, "Zeta"),
            (2, None, "Alpha"),
            (3, Some(1), "Zeta-Child"),
        ]);

        let positions =
            stacker(Direction::TopToBottom).stack(&forest, subtrees(&forest, Direction::TopToBottom));

        assert_eq!(positions[&NodeId::new(2)], Point::new(0.0, 0.0));
        assert_eq!(positions[&NodeId::new(1)], Point::new(0.0, 180.0));
        assert_eq!(positions[&NodeId::new(3)], Point::new(0.0, 330.0));

        let order: Vec<i64> = positions.keys().map(|id| id.get()).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_offset_accumulates_used_height() {
        let forest = forest(&[
            (1, None, "A"),
            (2, Some(1), "A1"),
            (3, Some(2), "A2"),
            (4, None, "B"),
            (5, None, "C"),
            (6, Some(5), "C1"),
        ]);

        let positions =
            stacker(Direction::TopToBottom).stack(&forest, subtrees(&forest, Direction::TopToBottom));

        // A spans 300, so B starts at 300 + 180.
        assert_approx_eq!(f64, positions[&NodeId::new(1)].y(), 0.0);
        assert_approx_eq!(f64, positions[&NodeId::new(3)].y(), 300.0);
        assert_approx_eq!(f64, positions[&NodeId::new(4)].y(), 480.0);
        // B spans 0, so C starts at 480 + 180.
        assert_approx_eq!(f64, positions[&NodeId::new(5)].y(), 660.0);
        assert_approx_eq!(f64, positions[&NodeId::new(6)].y(), 810.0);
    }

    #[test]
    fn test_left_to_right_offsets_x() {
        let forest = forest(&[(1, None, "B"), (2, None, "A"), (3, Some(2), "A1")]);

        let positions = stacker(Direction::LeftToRight)
            .stack(&forest, subtrees(&forest, Direction::LeftToRight));

        assert_eq!(positions[&NodeId::new(2)], Point::new(0.0, 0.0));
        assert_eq!(positions[&NodeId::new(3)], Point::new(150.0, 0.0));
        assert_eq!(positions[&NodeId::new(1)], Point::new(330.0, 0.0));
    }

    #[test]
    fn test_secondary_coordinates_untouched() {
        let forest = forest(&[
            (1, None, "B"),
            (2, Some(1), "B1"),
            (3, Some(1), "B2"),
            (4, None, "A"),
        ]);
        let subtrees = subtrees(&forest, Direction::TopToBottom);
        let before: Vec<(NodeId, f64)> = subtrees
            .iter()
            .flat_map(|(_, s)| s.positions().iter().map(|(id, p)| (*id, p.x())))
            .collect();

        let positions = stacker(Direction::TopToBottom).stack(&forest, subtrees);

        for (id, x) in before {
            assert_eq!(positions[&id].x(), x);
        }
    }

    #[test]
    fn test_empty() {
        let forest = forest(&[]);
        let positions = stacker(Direction::TopToBottom).stack(&forest, Vec::new());
        assert!(positions.is_empty());
    }
}
