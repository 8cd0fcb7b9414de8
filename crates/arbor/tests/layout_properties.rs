//! Property tests for the layout pipeline over randomly shaped forests.

use std::collections::HashSet;

use proptest::{prelude::*, sample::Index};

use arbor::{
    LayoutBuilder,
    config::{AppConfig, LayoutConfig, SpacingConfig},
    direction::Direction,
    identifier::NodeId,
    layout::{Layout, stacker::sort_roots},
    record::DomainRecord,
    structure::Forest,
};

const LEVEL_GAP: f64 = 150.0;
const SIBLING_GAP: f64 = 200.0;
const GROUP_GAP: f64 = 180.0;
const EPSILON: f64 = 1e-9;

/// Ids at or above this value never name a record.
const MISSING_PARENT_BASE: i64 = 10_000;

/// Records with ids `1..=n`. Each parent is absent, missing from the input,
/// or an earlier record, so the input is always acyclic.
fn records_strategy() -> impl Strategy<Value = Vec<DomainRecord>> {
    prop::collection::vec((0u8..6, any::<Index>(), "[a-zA-Z]{0,4}"), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, parent, label))| {
                let id = NodeId::new(i as i64 + 1);
                let record = DomainRecord::new(id, label);
                match kind {
                    0 => record,
                    1 => record.with_parent(NodeId::new(MISSING_PARENT_BASE + i as i64)),
                    _ if i == 0 => record,
                    _ => record.with_parent(NodeId::new(parent.index(i) as i64 + 1)),
                }
            })
            .collect()
    })
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::TopToBottom), Just(Direction::LeftToRight)]
}

fn builder(direction: Direction, stacked: bool) -> LayoutBuilder {
    let config = LayoutConfig::default()
        .with_direction(direction)
        .with_stack_roots_vertically(stacked)
        .with_spacing(SpacingConfig::new(LEVEL_GAP, SIBLING_GAP, GROUP_GAP));
    LayoutBuilder::new(AppConfig::new(config))
}

fn subtree_members(forest: &Forest, root: NodeId) -> Vec<NodeId> {
    let mut members = vec![root];
    let mut i = 0;
    while i < members.len() {
        members.extend_from_slice(forest.children(members[i]));
        i += 1;
    }
    members
}

/// Every input id has exactly one position.
fn check_every_node_positioned(
    records: &[DomainRecord],
    layout: &Layout,
) -> Result<(), TestCaseError> {
    let ids: HashSet<NodeId> = records.iter().map(|r| r.unique_id).collect();

    prop_assert_eq!(layout.len(), ids.len());
    for id in ids {
        prop_assert!(layout.position(id).is_some(), "node {} has no position", id);
    }

    Ok(())
}

/// A node is a root iff its parent is absent or does not resolve.
fn check_root_classification(
    records: &[DomainRecord],
    forest: &Forest,
) -> Result<(), TestCaseError> {
    let ids: HashSet<NodeId> = records.iter().map(|r| r.unique_id).collect();
    let expected: HashSet<NodeId> = records
        .iter()
        .filter(|r| r.parent_id.is_none_or(|parent| !ids.contains(&parent)))
        .map(|r| r.unique_id)
        .collect();
    let actual: HashSet<NodeId> = forest.roots().iter().copied().collect();

    prop_assert_eq!(actual, expected);

    Ok(())
}

/// Every child sits exactly one level gap further along the primary axis.
fn check_level_spacing(layout: &Layout, direction: Direction) -> Result<(), TestCaseError> {
    for edge in layout.edges() {
        let parent = direction.primary(layout.position(edge.source()).unwrap());
        let child = direction.primary(layout.position(edge.target()).unwrap());

        prop_assert!(
            ((child - parent) - LEVEL_GAP).abs() < EPSILON,
            "edge {} -> {} spans {}",
            edge.source(),
            edge.target(),
            child - parent
        );
    }

    Ok(())
}

/// Every internal node sits at the mean secondary coordinate of its children.
fn check_parent_centered(
    forest: &Forest,
    layout: &Layout,
    direction: Direction,
) -> Result<(), TestCaseError> {
    for node in forest.nodes().filter(|n| !n.is_leaf()) {
        let children = node.children();
        let mean = children
            .iter()
            .map(|&c| direction.secondary(layout.position(c).unwrap()))
            .sum::<f64>()
            / children.len() as f64;
        let actual = direction.secondary(layout.position(node.id()).unwrap());

        prop_assert!(
            (actual - mean).abs() < EPSILON,
            "node {} at {} but children mean is {}",
            node.id(),
            actual,
            mean
        );
    }

    Ok(())
}

/// Consecutive stacked subtrees are at least one group gap apart.
fn check_subtrees_separated(
    forest: &Forest,
    layout: &Layout,
    direction: Direction,
) -> Result<(), TestCaseError> {
    let mut previous_end: Option<f64> = None;

    for root in sort_roots(forest, forest.roots()) {
        let primaries: Vec<f64> = subtree_members(forest, root)
            .into_iter()
            .map(|id| direction.primary(layout.position(id).unwrap()))
            .collect();
        let start = primaries.iter().copied().fold(f64::INFINITY, f64::min);
        let end = primaries.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if let Some(previous_end) = previous_end {
            prop_assert!(
                start - previous_end >= GROUP_GAP - EPSILON,
                "subtree {} starts at {}, previous ended at {}",
                root,
                start,
                previous_end
            );
        }
        previous_end = Some(end);
    }

    Ok(())
}

/// Identical input yields bit-identical output.
fn check_deterministic(
    records: &[DomainRecord],
    direction: Direction,
    stacked: bool,
) -> Result<(), TestCaseError> {
    let first = builder(direction, stacked).compute(records);
    let second = builder(direction, stacked).compute(records);

    prop_assert_eq!(first.edges(), second.edges());
    prop_assert_eq!(first.len(), second.len());
    for ((id_a, a), (id_b, b)) in first.positions().iter().zip(second.positions()) {
        prop_assert_eq!(id_a, id_b);
        prop_assert_eq!(a.x().to_bits(), b.x().to_bits());
        prop_assert_eq!(a.y().to_bits(), b.y().to_bits());
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_every_node_positioned(
        records in records_strategy(),
        direction in direction_strategy(),
        stacked in any::<bool>(),
    ) {
        let layout = builder(direction, stacked).compute(&records);
        check_every_node_positioned(&records, &layout)?;
    }

    #[test]
    fn prop_root_classification(records in records_strategy()) {
        let forest = Forest::from_records(&records);
        check_root_classification(&records, &forest)?;
    }

    #[test]
    fn prop_level_spacing(
        records in records_strategy(),
        direction in direction_strategy(),
        stacked in any::<bool>(),
    ) {
        let layout = builder(direction, stacked).compute(&records);
        check_level_spacing(&layout, direction)?;
    }

    #[test]
    fn prop_parent_centered(
        records in records_strategy(),
        direction in direction_strategy(),
        stacked in any::<bool>(),
    ) {
        let forest = Forest::from_records(&records);
        let layout = builder(direction, stacked).compute_forest(&forest);
        check_parent_centered(&forest, &layout, direction)?;
    }

    #[test]
    fn prop_stacked_subtrees_separated(
        records in records_strategy(),
        direction in direction_strategy(),
    ) {
        let forest = Forest::from_records(&records);
        let layout = builder(direction, true).compute_forest(&forest);
        check_subtrees_separated(&forest, &layout, direction)?;
    }

    #[test]
    fn prop_deterministic(
        records in records_strategy(),
        direction in direction_strategy(),
        stacked in any::<bool>(),
    ) {
        check_deterministic(&records, direction, stacked)?;
    }
}
