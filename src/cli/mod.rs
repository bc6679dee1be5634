//! cli
//!
//! Command-line interface layer for sdt.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which load the store, call into [`crate::core`] and render
//! the outcome through [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::paths::SdtPaths;
use crate::ui::output::{self, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Color forced off from the command line.
    pub no_color: bool,
}

impl Context {
    /// The directory commands operate on, as an absolute path.
    pub fn root(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(match &self.cwd {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd,
        })
    }

    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Whether to colorize output, given the loaded config.
    pub fn color(&self, config: &Config) -> bool {
        !self.no_color && config.color() && output::stdout_is_terminal()
    }
}

/// Everything a command needs to find its state.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub paths: SdtPaths,
    pub config: Config,
}

impl Workspace {
    /// Resolve the root and load configuration.
    pub fn load(ctx: &Context) -> Result<Self> {
        let root = ctx.root()?;
        let config = Config::load(&SdtPaths::new(root.clone()))
            .context("Failed to load configuration")?;
        let paths = SdtPaths::new(root).with_state_file(config.state_file());
        Ok(Self { paths, config })
    }
}

/// Install the tracing subscriber.
///
/// Logs go to stderr. `RUST_LOG` takes precedence; otherwise only warnings
/// are shown, or everything down to debug with `--debug`.
pub fn init_logging(debug: bool) {
    let default = if debug { "sdt=debug" } else { "sdt=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second install (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    commands::dispatch(cli.command, &ctx)
}
