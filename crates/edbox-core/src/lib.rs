//! edbox-core library.
//!
//! Pure building blocks for browsing an archived course offline:
//!
//! - [`identity`]: stable `Anonymous <Animal>` pseudonyms and avatar
//!   colors derived from anonymous participant ids.
//! - [`thread`]: flattening nested comment forests into `(depth, node)`
//!   rows for linear rendering.
//! - [`model`]: serde types for the archive's `info.json`, `posts.json`
//!   and `users.json`, archive directory loading, and author resolution.
//! - [`config`]: user config and output-mode resolution.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums with a machine-readable
//!   [`error::ErrorCode`]; `anyhow::Result` at application edges.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod identity;
pub mod model;
pub mod thread;

pub use identity::{ColorVariant, Identifier, Identity, assign_color, assign_name, djb2, identify};
pub use thread::{CommentNode, FlattenedEntry, Threaded, flatten, node_count};
