//! Typed view of an archived course.
//!
//! The archiver writes `info.json` (course metadata), `posts.json` (threads
//! with nested answers and comments) and `users.json` (short user records).
//! This module parses them, loads a whole archive directory at once (see
//! [`archive`]), and resolves who wrote each post: a directory name for
//! named authors, a stable pseudonym for anonymous ones.

pub mod archive;
pub mod course;
pub mod thread;
pub mod user;

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ErrorCode;
use crate::identity::{self, ColorVariant, Identifier};

pub use archive::{CourseArchive, EXPECTED_PATHS, read_course_archive, validate_archive_dir};
pub use course::Course;
pub use thread::{Comment, Thread};
pub use user::{User, UserDirectory};

/// Label used when an author is neither anonymous nor in the directory.
pub const UNKNOWN_USER: &str = "Unknown user";

/// Label used for anonymous posts that carry no anonymous id.
pub const BARE_ANONYMOUS: &str = "Anonymous";

/// Errors from reading and parsing archive files.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse {what}: {source}")]
    Parse {
        /// Which document was being parsed (`info`, `posts`, `users`).
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An archive directory, or one of its expected entries, is missing.
    #[error("path not found: {}", path.display())]
    MissingPath { path: PathBuf },

    /// An archive file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Machine-readable code for CLI and agent output.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { .. } => ErrorCode::ArchiveParseError,
            Self::MissingPath { .. } => ErrorCode::ArchivePathNotFound,
            Self::Read { .. } => ErrorCode::ArchiveReadError,
        }
    }
}

/// Parse the contents of `posts.json`.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the JSON is malformed or a thread lacks
/// an integer `id`.
pub fn parse_posts(json: &str) -> Result<Vec<Thread>, ModelError> {
    let threads: Vec<Thread> =
        serde_json::from_str(json).map_err(|source| ModelError::Parse {
            what: "posts",
            source,
        })?;
    tracing::debug!(threads = threads.len(), "parsed posts");
    Ok(threads)
}

/// Parse the contents of `info.json`.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the JSON is malformed or the course
/// lacks an integer `id`.
pub fn parse_info(json: &str) -> Result<Course, ModelError> {
    serde_json::from_str(json).map_err(|source| ModelError::Parse {
        what: "info",
        source,
    })
}

/// Parse the contents of `users.json`.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] if the JSON is malformed.
pub fn parse_users(json: &str) -> Result<Vec<User>, ModelError> {
    let users: Vec<User> = serde_json::from_str(json).map_err(|source| ModelError::Parse {
        what: "users",
        source,
    })?;
    tracing::debug!(users = users.len(), "parsed users");
    Ok(users)
}

/// Anything with an author: threads and comments.
pub trait Authored {
    /// Id of the real author. Never shown for anonymous posts.
    fn user_id(&self) -> u64;
    /// Whether the post was made anonymously.
    fn is_anonymous(&self) -> bool;
    /// Per-course anonymous id, the key for the pseudonym and its color.
    fn anonymous_id(&self) -> Option<&Identifier>;
}

impl Authored for Thread {
    fn user_id(&self) -> u64 {
        self.user_id
    }

    fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    fn anonymous_id(&self) -> Option<&Identifier> {
        self.anonymous_id.as_ref()
    }
}

impl Authored for Comment {
    fn user_id(&self) -> u64 {
        self.user_id
    }

    fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    fn anonymous_id(&self) -> Option<&Identifier> {
        self.anonymous_id.as_ref()
    }
}

/// How an author is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Pseudonym, directory name, or a fallback label.
    pub label: String,
    /// Primary-palette avatar color.
    pub color: &'static str,
    /// True when `label` is a pseudonym (or bare `Anonymous`).
    pub anonymous: bool,
}

/// Resolve the display label and avatar color of a post's author.
///
/// Anonymous posts never consult the directory, so the real author is not
/// leaked even when `users.json` lists them. Colors come from the primary
/// palette, keyed by the anonymous id for anonymous posts and by the user
/// id otherwise.
#[must_use]
pub fn author_of(post: &impl Authored, users: &UserDirectory) -> Author {
    if post.is_anonymous() {
        return match post.anonymous_id() {
            Some(anon) => Author {
                label: identity::assign_name(anon),
                color: identity::assign_color(anon, ColorVariant::Primary),
                anonymous: true,
            },
            None => Author {
                label: BARE_ANONYMOUS.to_string(),
                color: identity::assign_color("", ColorVariant::Primary),
                anonymous: true,
            },
        };
    }

    let label = users
        .get(post.user_id())
        .map(|u| u.name.trim())
        .filter(|name| !name.is_empty())
        .map_or_else(|| UNKNOWN_USER.to_string(), str::to_string);

    Author {
        label,
        color: identity::assign_color(post.user_id(), ColorVariant::Primary),
        anonymous: false,
    }
}
