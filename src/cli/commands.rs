use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigOverrides, LOG_ENV, ShellConfig};
use crate::repl;

#[derive(Parser)]
#[command(name = "ai-shell")]
#[command(version = "0.1.0")]
#[command(about = "Interactive shell with AI-assisted commands", long_about = None)]
pub struct Cli {
    /// Gemini model identifier (default: gemini-2.5-flash, or $AI_SHELL_MODEL)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// History file (default: ~/.ai_shell_history, or $AI_SHELL_HISTORY)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ShellConfig::resolve(ConfigOverrides {
        model: cli.model,
        history_file: cli.history_file,
    })?;
    tracing::debug!(?config, "resolved configuration");

    repl::run(&config)
}

/// Install the stderr subscriber; `$AI_SHELL_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
