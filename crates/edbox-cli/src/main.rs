#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use edbox_core::config;
use edbox_core::error::ErrorCode;
use output::OutputMode;
use std::env;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "edbox: browse archived course forums offline",
    long_about = None
)]
struct Cli {
    /// Enable debug logging on stderr (overrides `EDBOX_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Identity",
        about = "Print the pseudonym for an anonymous id",
        after_help = "EXAMPLES:\n    # Pseudonym for anonymous id 0\n    edbox name 0\n\n    # Emit machine-readable output\n    edbox name 0 --json"
    )]
    Name(cmd::identity::IdArgs),

    #[command(
        next_help_heading = "Identity",
        about = "Print the avatar color for an anonymous id",
        after_help = "EXAMPLES:\n    # Primary color\n    edbox color 42\n\n    # Darker companion color\n    edbox color 42 --variant secondary"
    )]
    Color(cmd::identity::ColorArgs),

    #[command(
        next_help_heading = "Identity",
        about = "Print pseudonym and both colors for an anonymous id"
    )]
    Identify(cmd::identity::IdArgs),

    #[command(
        next_help_heading = "Archive",
        about = "Flatten archived threads into indented reply rows",
        long_about = "Read posts.json (or an archive directory), flatten every thread's answers and comments, and print one row per reply.",
        after_help = "EXAMPLES:\n    # All threads, authors resolved from users.json\n    edbox thread archive/cs101/posts.json --users archive/cs101/users.json\n\n    # One thread as JSON\n    edbox thread posts.json --thread 1234 --json\n\n    # A whole archive directory\n    edbox thread --archive archive/cs101\n\n    # From stdin\n    cat posts.json | edbox thread -"
    )]
    Thread(cmd::thread::ThreadArgs),

    #[command(
        next_help_heading = "Setup",
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash completions\n    edbox completions bash > ~/.local/share/bash-completion/completions/edbox"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

const DEBUG_FILTER: &str = "edbox=debug,edbox_core=debug,info";
const DEFAULT_FILTER: &str = "edbox=info,warn";

fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(DEBUG_FILTER);
    }
    EnvFilter::try_from_env("EDBOX_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            DEBUG_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

fn init_tracing(verbose: bool) {
    let filter = log_filter(verbose);

    let format = env::var("EDBOX_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        debug!("verbose logging enabled");
    }

    let effective = match config::resolve_config(cli.json) {
        Ok(effective) => effective,
        Err(e) => {
            let mode = if cli.json { OutputMode::Json } else { OutputMode::Text };
            output::render_error(
                mode,
                &output::CliError::from_code(ErrorCode::ConfigParseError, format!("{e:#}")),
            )?;
            return Err(e);
        }
    };
    let output = OutputMode::from_resolved(&effective.resolved_output);

    match cli.command {
        Commands::Name(ref args) => cmd::identity::run_name(args, output),
        Commands::Color(ref args) => cmd::identity::run_color(args, output),
        Commands::Identify(ref args) => cmd::identity::run_identify(args, output),
        Commands::Thread(ref args) => {
            cmd::thread::run_thread(args, output, effective.user.indent)
        }
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
