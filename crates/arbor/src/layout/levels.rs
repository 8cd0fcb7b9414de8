//! Breadth-first level assignment.
//!
//! A level is the breadth-first distance from a root. `levels[k]` lists the
//! nodes at distance `k` in the order the traversal reached them, which is
//! the order siblings are spread along the secondary axis.

use std::collections::{HashSet, VecDeque};

use arbor_core::identifier::NodeId;

use crate::structure::Forest;

/// Nodes grouped by breadth-first distance from the seed roots.
pub type Levels = Vec<Vec<NodeId>>;

/// Assigns levels to the subtree rooted at `root`.
///
/// Returns no levels when `root` is not part of the forest.
pub fn assign_levels(root: NodeId, forest: &Forest) -> Levels {
    assign_levels_from(&[root], forest)
}

/// Assigns levels with every id in `roots` seeded at level 0.
///
/// Used for shared-level layouts, where same-depth nodes of different trees
/// end up on the same row.
pub fn assign_levels_from(roots: &[NodeId], forest: &Forest) -> Levels {
    let mut levels: Levels = Vec::new();
    let mut visited = HashSet::new();

    let mut queue: VecDeque<(NodeId, usize)> = roots
        .iter()
        .filter(|&&root| forest.contains(root))
        .map(|&root| (root, 0))
        .collect();

    while let Some((node, level)) = queue.pop_front() {
        // Guards against malformed cyclic input.
        if !visited.insert(node) {
            continue;
        }

        while levels.len() <= level {
            levels.push(Vec::new());
        }
        levels[level].push(node);

        for &child in forest.children(node) {
            if !visited.contains(&child) {
                queue.push_back((child, level + 1));
            }
        }
    }

    levels
}
