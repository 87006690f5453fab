//! Course metadata as written to `info.json`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Course record.
///
/// `year` is kept as text; archives written by different API versions
/// store it either as `"2024"` or `2024`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub session: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub year: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Course {
    /// `CODE SESSION YEAR (ID)`, the heading used for the whole archive.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} {} ({})", self.code, self.session, self.year, self.id)
    }

    /// Directory name the archiver files this course under.
    ///
    /// Slashes become spaces, anything that is not alphanumeric or a space
    /// is dropped, and the result is lowercased, trimmed and hyphenated.
    /// `CS/ECE 374 Fall 2024 (99)` becomes `cs-ece-374-fall-2024-99`.
    #[must_use]
    pub fn archive_slug(&self) -> String {
        self.display_name()
            .replace('/', " ")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .to_lowercase()
            .trim()
            .replace(' ', "-")
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(n) => n.to_string(),
        Raw::Missing(()) => String::new(),
    })
}
