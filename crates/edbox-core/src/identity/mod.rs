//! Stable anonymous identities.
//!
//! Anonymous forum participants are shown as `Anonymous <Animal>` with an
//! avatar color, both derived from their numeric anonymous id. The mapping
//! is a pure function of the id:
//!
//! ```text
//! canonical = decimal(id) | text(id)
//! h         = djb2(canonical)
//! name      = "Anonymous " + NAMES[h % NAMES.len()]
//! color     = PALETTE[h % 10]      (same index for both palettes)
//! ```
//!
//! Collisions are expected: the name table is small compared to the id
//! space. What matters is that the same id always renders the same way,
//! across calls, processes and machines.
//!
//! The tables live in [`tables`] and are versioned by [`TABLE_VERSION`].

#![allow(clippy::module_name_repetitions)]

pub mod hash;
pub mod tables;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ErrorCode;

pub use hash::djb2;
pub use tables::TABLE_VERSION;

/// Prefix prepended to every pseudonym.
pub const ANONYMOUS_PREFIX: &str = "Anonymous ";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised at the identity boundary.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The value cannot stand in for a participant id.
    #[error("unsupported identifier: expected integer or string, got {found}")]
    UnsupportedIdentifier {
        /// JSON type (or a short rendering) of the rejected value.
        found: String,
    },

    /// A color variant name that is neither `primary` nor `secondary`.
    #[error("unknown color variant '{0}' (expected primary or secondary)")]
    UnknownVariant(String),
}

impl IdentityError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedIdentifier { .. } => ErrorCode::UnsupportedIdentifier,
            Self::UnknownVariant(_) => ErrorCode::UnknownColorVariant,
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// A participant identifier, restricted to the representations the forum
/// actually emits.
///
/// Hashing always goes through [`Identifier::canonical`]: integers become
/// their decimal text (`-7`, `0`, `1234`), strings are used verbatim. No
/// trimming or case folding is applied, so `Text("7")` and `Integer(7)`
/// intentionally share a pseudonym while `Text(" 7")` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric id. Wide enough for every `i64` and `u64` value.
    Integer(i128),
    /// Opaque textual id.
    Text(String),
}

impl Identifier {
    /// Canonical string form fed to the hash.
    #[must_use]
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// djb2 hash of the canonical form.
    #[must_use]
    pub fn hash(&self) -> u32 {
        djb2(&self.canonical())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

macro_rules! identifier_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Identifier {
                fn from(value: $t) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

identifier_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Identifier {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Self::Integer(value as i128)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&Identifier> for Identifier {
    fn from(value: &Identifier) -> Self {
        value.clone()
    }
}

impl TryFrom<&serde_json::Value> for Identifier {
    type Error = IdentityError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let found = match value {
            Value::String(s) => return Ok(Self::Text(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Self::from(i));
                }
                if let Some(u) = n.as_u64() {
                    return Ok(Self::from(u));
                }
                format!("float {n}")
            }
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("bool {b}"),
            Value::Array(_) => "array".to_string(),
            Value::Object(_) => "object".to_string(),
        };

        tracing::debug!(%found, "rejected identifier");
        Err(IdentityError::UnsupportedIdentifier { found })
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => {
                if let Ok(i) = i64::try_from(*n) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(*n) {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_str(&n.to_string())
                }
            }
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentifierVisitor;

        impl Visitor<'_> for IdentifierVisitor {
            type Value = Identifier;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string identifier")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Identifier, E> {
                Ok(Identifier::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Identifier, E> {
                Ok(Identifier::from(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Identifier, E> {
                Ok(Identifier::from(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Identifier, E> {
                Ok(Identifier::from(v))
            }
        }

        deserializer.deserialize_any(IdentifierVisitor)
    }
}

// ---------------------------------------------------------------------------
// Color variant
// ---------------------------------------------------------------------------

/// Which of the two index-aligned palettes to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVariant {
    /// Base avatar color.
    #[default]
    Primary,
    /// Darker companion of the primary color at the same index.
    Secondary,
}

impl ColorVariant {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorVariant {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(IdentityError::UnknownVariant(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Pseudonym and both avatar colors for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// `Anonymous <Animal>`.
    pub name: String,
    /// Entry of the primary palette.
    pub primary_color: &'static str,
    /// Entry of the secondary palette at the same index.
    pub secondary_color: &'static str,
}

/// The name table, in assignment order.
#[must_use]
pub fn name_table() -> &'static [&'static str] {
    &tables::NAMES
}

/// The palette selected by `variant`.
#[must_use]
pub fn palette(variant: ColorVariant) -> &'static [&'static str] {
    match variant {
        ColorVariant::Primary => &tables::PRIMARY_COLORS,
        ColorVariant::Secondary => &tables::SECONDARY_COLORS,
    }
}

fn name_index(hash: u32) -> usize {
    hash as usize % tables::NAMES.len()
}

/// Palette index for a hash. Shared by both variants so the pair stays aligned.
fn color_index(hash: u32) -> usize {
    hash as usize % tables::PALETTE_LEN
}

/// Stable pseudonym for `id`.
#[must_use]
pub fn assign_name(id: impl Into<Identifier>) -> String {
    let id = id.into();
    let index = name_index(id.hash());
    tracing::trace!(%id, index, "assigned pseudonym");
    format!("{ANONYMOUS_PREFIX}{}", tables::NAMES[index])
}

/// Stable avatar color for `id` from the palette chosen by `variant`.
#[must_use]
pub fn assign_color(id: impl Into<Identifier>, variant: ColorVariant) -> &'static str {
    let id = id.into();
    let index = color_index(id.hash());
    tracing::trace!(%id, index, %variant, "assigned color");
    palette(variant)[index]
}

/// Pseudonym plus both colors, from a single hash of `id`.
#[must_use]
pub fn identify(id: impl Into<Identifier>) -> Identity {
    let id = id.into();
    let hash = id.hash();
    let color = color_index(hash);
    Identity {
        name: format!("{ANONYMOUS_PREFIX}{}", tables::NAMES[name_index(hash)]),
        primary_color: tables::PRIMARY_COLORS[color],
        secondary_color: tables::SECONDARY_COLORS[color],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
