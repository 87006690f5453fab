//! Explicit-stack depth-first flattening.
//!
//! The traversal keeps its own LIFO stack instead of recursing, so deep reply
//! chains cannot exhaust the call stack. The resulting order is part of the
//! rendering contract:
//!
//! - roots appear in their original order;
//! - each node is followed immediately by its whole subtree;
//! - replies are visited **last to first**, because a node's replies are
//!   pushed in order and popped in reverse.
//!
//! ```text
//! A                 (0, A)
//! ├── B     ==>     (1, C)
//! │   └── D         (1, B)
//! └── C             (2, D)
//! ```
//!
//! Consumers rely on this order. Switching to natural left-to-right reply
//! order is a visible behavior change.
//!
//! # Preconditions
//!
//! The forest must be finite and acyclic. Owned trees such as
//! [`CommentNode`](super::CommentNode) are acyclic by construction, but a
//! hand-written [`Threaded`] impl can hand back a node that is its own
//! ancestor. Debug builds track visited node addresses and panic on a
//! revisit; release builds do not check. Zero-sized node types share
//! addresses and are never checked.

use super::{FlattenedEntry, Threaded};

#[cfg(debug_assertions)]
use std::collections::HashSet;

/// Flatten a forest into `(depth, node)` entries in stack order.
///
/// Every node appears exactly once and `result.len() == node_count(roots)`.
///
/// # Panics
///
/// In debug builds, panics if a node is reached twice (a cycle in a custom
/// [`Threaded`] impl).
#[must_use]
pub fn flatten<N: Threaded>(roots: &[N]) -> Vec<FlattenedEntry<'_, N>> {
    // Seed in reverse so the first root is on top of the stack.
    let mut stack: Vec<(usize, &N)> = roots.iter().rev().map(|root| (0, root)).collect();
    let mut entries = Vec::with_capacity(stack.len());

    #[cfg(debug_assertions)]
    let mut visited: HashSet<*const N> = HashSet::new();

    while let Some((depth, node)) = stack.pop() {
        #[cfg(debug_assertions)]
        if std::mem::size_of::<N>() != 0 {
            assert!(
                visited.insert(std::ptr::from_ref(node)),
                "cycle detected while flattening: node revisited at depth {depth}"
            );
        }

        entries.push(FlattenedEntry { depth, node });
        stack.extend(node.replies().iter().map(|reply| (depth + 1, reply)));
    }

    tracing::trace!(
        roots = roots.len(),
        entries = entries.len(),
        "flattened comment forest"
    );
    entries
}

/// Total number of nodes in the forest, descendants included.
#[must_use]
pub fn node_count<N: Threaded>(roots: &[N]) -> usize {
    let mut pending: Vec<&N> = roots.iter().collect();
    let mut count = 0;
    while let Some(node) = pending.pop() {
        count += 1;
        pending.extend(node.replies());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::CommentNode;

    fn leaf(name: &'static str) -> CommentNode<&'static str> {
        CommentNode::leaf(name)
    }

    fn order<'a>(entries: &[FlattenedEntry<'a, CommentNode<&'static str>>]) -> Vec<(usize, &'a str)> {
        entries.iter().map(|e| (e.depth, e.node.payload)).collect()
    }

    #[test]
    fn later_reply_is_visited_first() {
        let roots = vec![CommentNode::new("A", vec![leaf("B"), leaf("C")])];
        let entries = flatten(&roots);
        assert_eq!(order(&entries), vec![(0, "A"), (1, "C"), (1, "B")]);
    }

    #[test]
    fn subtree_follows_its_node() {
        let roots = vec![CommentNode::new(
            "A",
            vec![CommentNode::new("B", vec![leaf("D")]), leaf("C")],
        )];
        assert_eq!(
            order(&flatten(&roots)),
            vec![(0, "A"), (1, "C"), (1, "B"), (2, "D")]
        );
    }

    #[test]
    fn last_reply_subtree_is_fully_descended_first() {
        let roots = vec![CommentNode::new(
            "A",
            vec![
                leaf("B"),
                CommentNode::new("C", vec![leaf("E"), CommentNode::new("F", vec![leaf("G")])]),
            ],
        )];
        assert_eq!(
            order(&flatten(&roots)),
            vec![(0, "A"), (1, "C"), (2, "F"), (3, "G"), (2, "E"), (1, "B")]
        );
    }

    #[test]
    fn flat_forest_keeps_root_order() {
        let roots = vec![leaf("x"), leaf("y"), leaf("z")];
        assert_eq!(
            order(&flatten(&roots)),
            vec![(0, "x"), (0, "y"), (0, "z")]
        );
    }

    #[test]
    fn each_root_is_followed_by_its_subtree() {
        let roots = vec![
            CommentNode::new("R1", vec![leaf("a"), leaf("b")]),
            CommentNode::new("R2", vec![leaf("c")]),
        ];
        assert_eq!(
            order(&flatten(&roots)),
            vec![(0, "R1"), (1, "b"), (1, "a"), (0, "R2"), (1, "c")]
        );
    }

    #[test]
    fn empty_forest() {
        let roots: Vec<CommentNode<&str>> = Vec::new();
        assert!(flatten(&roots).is_empty());
        assert_eq!(node_count(&roots), 0);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut node = leaf("bottom");
        for _ in 0..50_000 {
            node = CommentNode::new("link", vec![node]);
        }
        let roots = vec![node];
        let entries = flatten(&roots);
        assert_eq!(entries.len(), 50_001);
        assert_eq!(entries.last().map(|e| e.depth), Some(50_000));
        assert_eq!(entries.last().map(|e| e.node.payload), Some("bottom"));
        // Dropping the chain recurses; unwind it by hand.
        let mut pending = roots;
        while let Some(mut n) = pending.pop() {
            pending.append(&mut n.children);
        }
    }

    #[test]
    fn node_count_matches_entries() {
        let roots = vec![
            CommentNode::new("A", vec![CommentNode::new("B", vec![leaf("C")])]),
            leaf("D"),
        ];
        assert_eq!(node_count(&roots), 4);
        assert_eq!(flatten(&roots).len(), 4);
    }

    #[test]
    fn entries_borrow_original_nodes() {
        let roots = vec![CommentNode::new("A", vec![leaf("B")])];
        let entries = flatten(&roots);
        assert!(std::ptr::eq(entries[0].node, &roots[0]));
        assert!(std::ptr::eq(entries[1].node, &roots[0].children[0]));
    }

    #[allow(dead_code)]
    struct SelfLoop(u8);

    impl Threaded for SelfLoop {
        fn replies(&self) -> &[Self] {
            std::slice::from_ref(self)
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cycle detected")]
    fn cycle_panics_in_debug_builds() {
        let roots = [SelfLoop(1)];
        let _ = flatten(&roots);
    }

    #[derive(Clone, Copy)]
    struct Marker;

    impl Threaded for Marker {
        fn replies(&self) -> &[Self] {
            &[]
        }
    }

    #[test]
    fn zero_sized_siblings_are_not_mistaken_for_cycles() {
        let roots = [Marker, Marker, Marker];
        assert_eq!(flatten(&roots).len(), 3);
    }
}
