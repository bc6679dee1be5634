//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves the workspace (root, config, state file)
//! 2. Loads the store and calls into [`crate::core`]
//! 3. Saves the store if it changed
//! 4. Formats and displays output
//!
//! Errors from the core are returned unchanged so their messages reach the
//! user as written.

mod add;
mod check;
mod completion;
mod init;
mod ls;
mod rm;
mod update;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use check::check;
pub use completion::completion;
pub use init::init;
pub use ls::ls;
pub use rm::rm;
pub use update::update;

use crate::cli::args::Command;
use crate::cli::{Context, Workspace};
use crate::ui::output;
use crate::ui::panel::panel;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init => init::init(ctx),
        Command::Add {
            document_name,
            path,
        } => add::add(ctx, &document_name, &path),
        Command::Ls => ls::ls(ctx),
        Command::Rm { id, path } => rm::rm(ctx, &id, path.as_deref()),
        Command::Check => check::check(ctx),
        Command::Update { id } => update::update(ctx, &id),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Print a titled result panel (respects quiet mode).
fn show(ctx: &Context, workspace: &Workspace, title: &str, body: &str) {
    let color = ctx.color(&workspace.config);
    output::print(panel(title, body, color), ctx.verbosity());
}
