#![allow(dead_code)]

use edbox_core::thread::CommentNode;
use proptest::prelude::*;

/// A single comment tree with up to a few levels of replies.
pub fn arb_node() -> impl Strategy<Value = CommentNode<u32>> {
    let leaf = any::<u32>().prop_map(CommentNode::leaf);
    leaf.prop_recursive(5, 96, 6, |inner| {
        (any::<u32>(), prop::collection::vec(inner, 0..6))
            .prop_map(|(payload, children)| CommentNode::new(payload, children))
    })
}

/// An ordered forest of comment trees, possibly empty.
pub fn arb_forest() -> impl Strategy<Value = Vec<CommentNode<u32>>> {
    prop::collection::vec(arb_node(), 0..8)
}

/// A forest where no node has replies.
pub fn arb_flat_forest() -> impl Strategy<Value = Vec<CommentNode<u32>>> {
    prop::collection::vec(any::<u32>().prop_map(CommentNode::leaf), 0..32)
}

/// Identifier text, including non-ASCII and astral characters.
pub fn arb_id_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,12}",
        "-?[0-9]{1,19}",
        "[a-z0-9-]{0,24}",
        any::<String>(),
    ]
}
