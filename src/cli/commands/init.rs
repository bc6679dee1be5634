//! init command - Create an empty store in this repository

use crate::cli::{Context, Workspace};
use crate::core::store::Store;
use anyhow::Result;

/// Create an empty state file.
///
/// Fails if the state file already exists or the root is not a git
/// repository. Nothing is written on failure.
pub fn init(ctx: &Context) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    Store::initialize(&workspace.paths)?;

    super::show(
        ctx,
        &workspace,
        "🎉",
        &format!("{} generated", workspace.paths.state_file_name),
    );
    Ok(())
}
