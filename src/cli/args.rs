//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--no-color`: Never colorize output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sdt - Track which documentation goes stale as the code changes
#[derive(Parser, Debug)]
#[command(name = "sdt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if sdt was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never colorize output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty sdt.json in this repository
    #[command(
        name = "init",
        long_about = "Create an empty sdt.json in this repository.\n\n\
            Must be run in the root of a git repository. Fails if the state \
            file already exists."
    )]
    Init,

    /// Add an entry
    #[command(
        name = "add",
        long_about = "Associate a path with a piece of documentation.\n\n\
            The entry id is the document name lower-cased with all whitespace \
            removed. Adding to an existing id appends the path, as long as it \
            neither repeats nor overlaps a path the entry already tracks.",
        after_help = "\
EXAMPLES:
    # Track a directory
    sdt add \"API Reference\" src/api

    # Track a second path for the same document (id: apireference)
    sdt add \"API Reference\" src/routes.rs"
    )]
    Add {
        /// Name of the piece of documentation
        document_name: String,

        /// Path to the file or directory you want to associate with the documentation
        path: PathBuf,
    },

    /// List entries
    #[command(name = "ls")]
    Ls,

    /// Remove an entry
    #[command(
        name = "rm",
        long_about = "Remove a path from an entry, or an entry without paths.\n\n\
            An entry can only be removed once all of its paths are gone. \
            Paths are matched exactly as they are listed by `sdt ls`.",
        after_help = "\
EXAMPLES:
    sdt rm apireference --path src/api
    sdt rm apireference"
    )]
    Rm {
        /// id for entry
        id: String,

        /// Path to remove from the entry
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Check your entries against your repo's git log
    #[command(
        name = "check",
        long_about = "Check your entries against your repo's git log.\n\n\
            For every entry, counts the commits touching its paths since it \
            was last updated, up to 10."
    )]
    Check,

    /// Set the updated date for an entry to now
    #[command(name = "update")]
    Update {
        /// id for entry
        id: String,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from(["sdt", "add", "Doc Name", "file.txt"]).unwrap();
        match cli.command {
            Command::Add {
                document_name,
                path,
            } => {
                assert_eq!(document_name, "Doc Name");
                assert_eq!(path, PathBuf::from("file.txt"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_rm_with_path() {
        let cli = Cli::try_parse_from(["sdt", "rm", "docname", "--path", "file.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Rm { ref id, path: Some(_) } if id == "docname"
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sdt", "ls", "--cwd", "/tmp", "-q"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
        assert!(cli.quiet);
    }
}
