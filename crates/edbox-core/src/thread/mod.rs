//! Comment forests and their linear rendering order.
//!
//! A thread's discussion is a forest: top-level comments, each carrying an
//! ordered list of replies. Renderers want a flat list of `(depth, node)`
//! pairs instead, with depth driving indentation. [`flatten`] produces that
//! list; [`Threaded`] is the seam that lets any record shape with a
//! children collection be flattened in place.
//!
//! ## Submodules
//!
//! - [`flatten`]: explicit-stack traversal and node counting.

pub mod flatten;

use serde::{Deserialize, Serialize};

pub use flatten::{flatten, node_count};

/// A record that owns an ordered list of replies of its own type.
pub trait Threaded: Sized {
    /// Direct replies, in their original order.
    fn replies(&self) -> &[Self];
}

/// One comment with an opaque payload and its replies.
///
/// Serialized with the payload's fields inline and replies under
/// `comments`, matching the archive layout:
///
/// ```json
/// { "id": 7, "content": "...", "comments": [ { "id": 8, "comments": [] } ] }
/// ```
///
/// Ownership makes a `CommentNode` forest acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode<T> {
    /// Data carried through flattening unchanged.
    #[serde(flatten)]
    pub payload: T,
    /// Replies, in display order.
    #[serde(default = "Vec::new", rename = "comments")]
    pub children: Vec<CommentNode<T>>,
}

impl<T> CommentNode<T> {
    /// A node with no replies.
    pub const fn leaf(payload: T) -> Self {
        Self {
            payload,
            children: Vec::new(),
        }
    }

    /// A node with the given replies.
    pub const fn new(payload: T, children: Vec<Self>) -> Self {
        Self { payload, children }
    }

    /// Append a reply and return `self`, for building fixtures inline.
    #[must_use]
    pub fn with_reply(mut self, reply: Self) -> Self {
        self.children.push(reply);
        self
    }
}

impl<T> Threaded for CommentNode<T> {
    fn replies(&self) -> &[Self] {
        &self.children
    }
}

/// A node paired with its distance from the root of its tree.
#[derive(Debug, Serialize)]
pub struct FlattenedEntry<'a, N> {
    /// 0 for roots, parent depth + 1 otherwise.
    pub depth: usize,
    /// The borrowed node.
    pub node: &'a N,
}

impl<N> Clone for FlattenedEntry<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for FlattenedEntry<'_, N> {}

impl<N> PartialEq for FlattenedEntry<'_, N> {
    /// Entries are equal when they have the same depth and point at the
    /// same node instance.
    fn eq(&self, other: &Self) -> bool {
        self.depth == other.depth && std::ptr::eq(self.node, other.node)
    }
}

impl<N> Eq for FlattenedEntry<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Payload with no `Default` impl; replies must still be optional.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Post {
        id: u32,
        body: String,
    }

    #[test]
    fn deserializes_payload_without_default() {
        let json = r#"{ "id": 1, "body": "root", "comments": [ { "id": 2, "body": "leaf" } ] }"#;
        let node: CommentNode<Post> = serde_json::from_str(json).expect("parse");
        assert_eq!(node.payload.id, 1);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].payload.body, "leaf");
        assert!(node.children[0].children.is_empty());
    }

    #[test]
    fn replies_serialize_under_comments() {
        let node = CommentNode::leaf(Post {
            id: 3,
            body: "x".into(),
        })
        .with_reply(CommentNode::leaf(Post {
            id: 4,
            body: "y".into(),
        }));
        let value = serde_json::to_value(&node).expect("serialize");
        assert_eq!(value["id"], 3);
        assert_eq!(value["comments"][0]["id"], 4);
        assert!(value.get("children").is_none());
    }
}
