//! Test-only whole-tree validation of the red-black invariants.

use std::fmt::Debug;

use crate::{Color, NodeId, Tree};

/// Panics unless the tree satisfies, in full:
/// - binary-search order (left < node < right, strictly),
/// - the root is black,
/// - no red node has a red child,
/// - every root-to-nil path crosses the same number of black nodes,
/// - every child's parent link points back at its parent,
/// - `len()` equals the number of nodes reachable from the root.
pub(crate) fn assert_valid<K: Ord + Debug, V>(tree: &Tree<K, V>) {
    if let Some(root) = tree.root {
        assert!(tree.node(root).is_black(), "the root must be black");
        assert_eq!(
            None,
            tree.node(root).parent,
            "the root must not have a parent"
        );
    }
    let (_, count) = walk(tree, tree.root, None, None);
    assert_eq!(tree.len(), count, "len() must count the reachable nodes");
}

/// An absent child counts as black.
fn is_red<K, V>(tree: &Tree<K, V>, node: Option<NodeId>) -> bool {
    node.is_some_and(|id| tree.node(id).is_red())
}

/// Returns (black height, node count) of the subtree, panicking on any
/// violation. Bounds are exclusive.
fn walk<K: Ord + Debug, V>(
    tree: &Tree<K, V>,
    node: Option<NodeId>,
    min: Option<&K>,
    max: Option<&K>,
) -> (usize, usize) {
    let Some(id) = node else {
        // A nil leaf is black.
        return (1, 0);
    };
    let n = tree.node(id);

    if let Some(min) = min {
        assert!(*min < n.key, "order violated: {:?} !< {:?}", min, n.key);
    }
    if let Some(max) = max {
        assert!(n.key < *max, "order violated: {:?} !< {:?}", n.key, max);
    }
    if n.is_red() {
        assert!(
            !is_red(tree, n.left) && !is_red(tree, n.right),
            "red node {:?} has a red child",
            n.key
        );
    }
    for child in [n.left, n.right].into_iter().flatten() {
        assert_eq!(
            Some(id),
            tree.node(child).parent,
            "stale parent link under {:?}",
            n.key
        );
    }

    let (left_height, left_count) = walk(tree, n.left, min, Some(&n.key));
    let (right_height, right_count) = walk(tree, n.right, Some(&n.key), max);
    assert_eq!(
        left_height, right_height,
        "black height differs under {:?}",
        n.key
    );
    (
        left_height + n.is_black() as usize,
        left_count + right_count + 1,
    )
}

/// Number of nodes on the longest root-to-leaf path; 0 when empty.
pub(crate) fn height<K, V>(tree: &Tree<K, V>) -> usize {
    fn depth<K, V>(tree: &Tree<K, V>, node: Option<NodeId>) -> usize {
        let Some(id) = node else { return 0 };
        let n = tree.node(id);
        1 + depth(tree, n.left).max(depth(tree, n.right))
    }
    depth(tree, tree.root)
}

/// Pre-order (depth, color, key) dump; two trees with equal fingerprints
/// have identical shape and coloring.
pub(crate) fn fingerprint<K: Clone, V>(tree: &Tree<K, V>) -> Vec<(usize, Color, K)> {
    fn visit<K: Clone, V>(
        tree: &Tree<K, V>,
        node: Option<NodeId>,
        depth: usize,
        out: &mut Vec<(usize, Color, K)>,
    ) {
        let Some(id) = node else { return };
        let n = tree.node(id);
        out.push((depth, n.color, n.key.clone()));
        visit(tree, n.left, depth + 1, out);
        visit(tree, n.right, depth + 1, out);
    }
    let mut out = Vec::new();
    visit(tree, tree.root, 0, &mut out);
    out
}
