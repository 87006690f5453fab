//! Loading a whole course archive directory.
//!
//! The archiver lays a course out as:
//!
//! ```text
//! <dir>/
//!   avatars/      user avatars
//!   files/        attachments referenced from posts
//!   info.json     course metadata
//!   users.json    short user records
//!   posts.json    threads with nested answers and comments
//! ```
//!
//! Every entry must exist before anything is parsed, so a half-written
//! archive fails fast with the first missing path.

use std::path::{Path, PathBuf};

use super::{Course, ModelError, Thread, User, parse_info, parse_posts, parse_users};

pub const AVATARS_DIR: &str = "avatars";
pub const FILES_DIR: &str = "files";
pub const INFO_FILE: &str = "info.json";
pub const USERS_FILE: &str = "users.json";
pub const POSTS_FILE: &str = "posts.json";

/// Entries every archive directory must contain, checked in this order.
pub const EXPECTED_PATHS: [&str; 5] = [AVATARS_DIR, FILES_DIR, INFO_FILE, USERS_FILE, POSTS_FILE];

/// A parsed course archive.
#[derive(Debug, Clone)]
pub struct CourseArchive {
    /// Directory the archive was read from.
    pub base_dir: PathBuf,
    pub info: Course,
    pub posts: Vec<Thread>,
    pub users: Vec<User>,
}

/// Check that `base_dir` is a directory holding every [`EXPECTED_PATHS`] entry.
///
/// # Errors
///
/// Returns [`ModelError::MissingPath`] naming the directory itself, or the
/// first expected entry that does not exist.
pub fn validate_archive_dir(base_dir: &Path) -> Result<(), ModelError> {
    if !base_dir.is_dir() {
        return Err(ModelError::MissingPath {
            path: base_dir.to_path_buf(),
        });
    }
    for entry in EXPECTED_PATHS {
        let path = base_dir.join(entry);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "archive entry missing");
            return Err(ModelError::MissingPath { path });
        }
    }
    Ok(())
}

/// Validate and parse the archive in `base_dir`.
///
/// # Errors
///
/// Returns [`ModelError::MissingPath`] for an incomplete archive,
/// [`ModelError::Read`] if a file cannot be read, and [`ModelError::Parse`]
/// if one of the JSON files is malformed.
pub fn read_course_archive(base_dir: &Path) -> Result<CourseArchive, ModelError> {
    validate_archive_dir(base_dir)?;

    let info = parse_info(&read_file(&base_dir.join(INFO_FILE))?)?;
    let users = parse_users(&read_file(&base_dir.join(USERS_FILE))?)?;
    let posts = parse_posts(&read_file(&base_dir.join(POSTS_FILE))?)?;

    tracing::debug!(
        course = %info,
        threads = posts.len(),
        users = users.len(),
        "loaded course archive"
    );

    Ok(CourseArchive {
        base_dir: base_dir.to_path_buf(),
        info,
        posts,
        users,
    })
}

fn read_file(path: &Path) -> Result<String, ModelError> {
    std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    fn write_archive(dir: &Path) {
        std::fs::create_dir(dir.join(AVATARS_DIR)).expect("avatars");
        std::fs::create_dir(dir.join(FILES_DIR)).expect("files");
        std::fs::write(
            dir.join(INFO_FILE),
            r#"{ "id": 7, "code": "MATH 2", "session": "Spring", "year": 2023 }"#,
        )
        .expect("info");
        std::fs::write(dir.join(USERS_FILE), r#"[{ "id": 1, "name": "Emmy" }]"#).expect("users");
        std::fs::write(
            dir.join(POSTS_FILE),
            r#"[{ "id": 10, "title": "Rings", "user_id": 1,
                  "comments": [ { "id": 11, "user_id": 1 } ] }]"#,
        )
        .expect("posts");
    }

    #[test]
    fn reads_complete_archive() {
        let dir = TempDir::new().expect("tempdir");
        write_archive(dir.path());

        let archive = read_course_archive(dir.path()).expect("load");
        assert_eq!(archive.base_dir, dir.path());
        assert_eq!(archive.info.display_name(), "MATH 2 Spring 2023 (7)");
        assert_eq!(archive.users.len(), 1);
        assert_eq!(archive.posts[0].reply_count(), 1);
    }

    #[test]
    fn each_expected_path_is_required() {
        for missing in EXPECTED_PATHS {
            let dir = TempDir::new().expect("tempdir");
            write_archive(dir.path());
            let path = dir.path().join(missing);
            if path.is_dir() {
                std::fs::remove_dir(&path).expect("remove dir");
            } else {
                std::fs::remove_file(&path).expect("remove file");
            }

            let err = read_course_archive(dir.path()).expect_err("incomplete archive");
            assert_eq!(err.code(), ErrorCode::ArchivePathNotFound);
            assert!(
                matches!(&err, ModelError::MissingPath { path: p } if *p == path),
                "{missing}: {err}"
            );
        }
    }

    #[test]
    fn base_dir_must_be_a_directory() {
        let dir = TempDir::new().expect("tempdir");
        let file = dir.path().join("posts.json");
        std::fs::write(&file, "[]").expect("write");

        let err = validate_archive_dir(&file).expect_err("not a dir");
        assert_eq!(err.code(), ErrorCode::ArchivePathNotFound);
        assert!(err.to_string().contains("posts.json"));
    }

    #[test]
    fn malformed_info_reports_parse_code() {
        let dir = TempDir::new().expect("tempdir");
        write_archive(dir.path());
        std::fs::write(dir.path().join(INFO_FILE), "{}").expect("info");

        let err = read_course_archive(dir.path()).expect_err("no id");
        assert_eq!(err.code(), ErrorCode::ArchiveParseError);
        assert!(err.to_string().contains("info"));
    }
}
