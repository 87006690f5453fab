//! `edbox thread`: flatten archived threads into indented reply rows.
//!
//! Reads `posts.json` as written by the archiver (and optionally
//! `users.json`), or a whole archive directory with `--archive`, flattens
//! each thread's answers and comments, and prints one row per reply with its
//! depth and author.

use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};
use anyhow::{Context, Result};
use clap::Args;
use edbox_core::config::MAX_INDENT;
use edbox_core::error::ErrorCode;
use edbox_core::model::{self, Author, Course, ModelError, Thread, UserDirectory};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ThreadArgs {
    /// Path to posts.json, or `-` to read from stdin.
    #[arg(required_unless_present = "archive")]
    pub posts: Option<PathBuf>,

    /// Path to users.json, used to name authors of non-anonymous posts.
    #[arg(long, conflicts_with = "archive")]
    pub users: Option<PathBuf>,

    /// Course archive directory (avatars/, files/, info.json, users.json, posts.json).
    #[arg(long, value_name = "DIR", conflicts_with = "posts")]
    pub archive: Option<PathBuf>,

    /// Only show the thread with this id.
    #[arg(long = "thread", value_name = "ID")]
    pub thread_id: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ThreadView {
    id: u64,
    title: String,
    author: Author,
    replies: Vec<ReplyRow>,
}

#[derive(Debug, Serialize)]
struct ReplyRow {
    depth: usize,
    id: u64,
    author: String,
    color: &'static str,
    anonymous: bool,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn build_view(thread: &Thread, users: &UserDirectory) -> ThreadView {
    let replies = thread
        .flatten_replies()
        .into_iter()
        .map(|entry| {
            let author = model::author_of(entry.node, users);
            ReplyRow {
                depth: entry.depth,
                id: entry.node.id,
                author: author.label,
                color: author.color,
                anonymous: author.anonymous,
            }
        })
        .collect();

    ThreadView {
        id: thread.id,
        title: thread.title.clone(),
        author: model::author_of(thread, users),
        replies,
    }
}

fn render_text(views: &[ThreadView], w: &mut dyn Write) -> std::io::Result<()> {
    for view in views {
        for row in &view.replies {
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                view.id, row.depth, row.id, row.author, row.color
            )?;
        }
    }
    Ok(())
}

fn render_pretty(views: &[ThreadView], indent: usize, w: &mut dyn Write) -> std::io::Result<()> {
    let step = indent.min(MAX_INDENT);
    for (i, view) in views.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        pretty_section(w, &format!("#{} {}", view.id, view.title))?;
        pretty_kv(w, "author", &view.author.label)?;
        pretty_kv(w, "replies", view.replies.len().to_string())?;
        for row in &view.replies {
            let pad = " ".repeat(step.saturating_mul(row.depth.saturating_add(1)));
            writeln!(w, "{pad}{} (#{})", row.author, row.id)?;
        }
    }
    Ok(())
}

/// Threads and users from whichever source the arguments name.
struct Loaded {
    course: Option<Course>,
    threads: Vec<Thread>,
    users: UserDirectory,
}

fn fail<T>(output: OutputMode, err: ModelError, origin: &Path) -> Result<T> {
    render_error(output, &CliError::from_code(err.code(), err.to_string()))?;
    Err(err).with_context(|| format!("in {}", origin.display()))
}

fn load(args: &ThreadArgs, output: OutputMode) -> Result<Loaded> {
    if let Some(dir) = &args.archive {
        return match model::read_course_archive(dir) {
            Ok(archive) => Ok(Loaded {
                course: Some(archive.info),
                threads: archive.posts,
                users: UserDirectory::new(archive.users),
            }),
            Err(e) => fail(output, e, dir),
        };
    }

    let Some(posts_path) = &args.posts else {
        anyhow::bail!("either a posts file or --archive is required");
    };
    let threads = match model::parse_posts(&read_input(posts_path)?) {
        Ok(threads) => threads,
        Err(e) => return fail(output, e, posts_path),
    };

    let users = match &args.users {
        Some(path) => match model::parse_users(&read_input(path)?) {
            Ok(users) => UserDirectory::new(users),
            Err(e) => return fail(output, e, path),
        },
        None => UserDirectory::default(),
    };

    Ok(Loaded {
        course: None,
        threads,
        users,
    })
}

pub fn run_thread(args: &ThreadArgs, output: OutputMode, indent: usize) -> Result<()> {
    let Loaded {
        course,
        threads,
        users,
    } = load(args, output)?;

    let selected: Vec<&Thread> = match args.thread_id {
        Some(id) => {
            let Some(thread) = threads.iter().find(|t| t.id == id) else {
                render_error(
                    output,
                    &CliError::from_code(ErrorCode::ThreadNotFound, format!("thread {id} not found")),
                )?;
                anyhow::bail!("thread {id} not found");
            };
            vec![thread]
        }
        None => threads.iter().collect(),
    };

    let views: Vec<ThreadView> = selected.iter().map(|t| build_view(t, &users)).collect();
    tracing::debug!(
        threads = views.len(),
        rows = views.iter().map(|v| v.replies.len()).sum::<usize>(),
        "rendering threads"
    );

    render_mode(
        output,
        &views,
        |v, w| render_text(v, w),
        |v, w| {
            if let Some(course) = &course {
                writeln!(w, "{course}")?;
                writeln!(w)?;
            }
            render_pretty(v, indent, w)
        },
    )
}
