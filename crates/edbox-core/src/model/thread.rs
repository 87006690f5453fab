//! Archived threads and their nested comments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::Identifier;
use crate::thread::{FlattenedEntry, Threaded, flatten, node_count};

/// One archived thread as written to `posts.json`.
///
/// Only the fields edbox reads are typed; everything else survives in
/// `extra` so re-serializing a thread does not lose data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub thread_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub anonymous_id: Option<Identifier>,
    #[serde(default)]
    pub created_at: String,
    /// Answers to a question thread. Empty for posts and announcements.
    #[serde(default)]
    pub answers: Vec<Comment>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Thread {
    /// Top-level replies in display order: answers first, then comments.
    pub fn roots(&self) -> impl Iterator<Item = &Comment> {
        self.answers.iter().chain(self.comments.iter())
    }

    /// Flatten answers and comments as one forest.
    ///
    /// Roots keep their order and each root is followed by its whole
    /// subtree, so flattening the two lists back to back is the same as
    /// flattening their concatenation.
    #[must_use]
    pub fn flatten_replies(&self) -> Vec<FlattenedEntry<'_, Comment>> {
        let mut entries = flatten(&self.answers);
        entries.extend(flatten(&self.comments));
        entries
    }

    /// Number of answers and comments at every depth.
    #[must_use]
    pub fn reply_count(&self) -> usize {
        node_count(&self.answers) + node_count(&self.comments)
    }
}

/// A comment or answer, with its replies nested under `comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub anonymous_id: Option<Identifier>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Threaded for Comment {
    fn replies(&self) -> &[Self] {
        &self.comments
    }
}
