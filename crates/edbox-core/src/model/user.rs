//! Course members as written to `users.json`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Short user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Lookup of users by id.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    by_id: HashMap<u64, User>,
}

impl UserDirectory {
    /// Build a directory. Later duplicates replace earlier ones.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        let by_id = users.into_iter().map(|u| (u.id, u)).collect();
        Self { by_id }
    }

    /// The user with `id`, if listed.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.by_id.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
