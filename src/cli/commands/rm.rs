//! rm command - Remove a path from an entry, or an empty entry

use std::path::Path;

use crate::cli::{Context, Workspace};
use crate::core::paths::display_form;
use crate::core::store::{RemoveOutcome, Store};
use crate::core::types::EntryId;
use anyhow::Result;

/// Remove a path from an entry, or the entry itself.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `id` - Entry id, exactly as shown by `ls`
/// * `path` - Path to remove; when omitted the entry is removed, which
///   requires it to have no paths left
///
/// The path does not need to exist on disk any more. It is normalized the
/// same way `add` normalizes paths and then compared as a string.
pub fn rm(ctx: &Context, id: &str, path: Option<&Path>) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    let mut store = Store::load(&workspace.paths)?;

    let id = EntryId::new(id);
    let path = path.map(display_form);
    let outcome = store.remove(&id, path.as_deref())?;
    store.save()?;

    match outcome {
        RemoveOutcome::PathDeleted { id, path } => super::show(
            ctx,
            &workspace,
            "Path deleted",
            &format!("{} deleted from {}", path, id),
        ),
        RemoveOutcome::EntryDeleted { id } => {
            super::show(ctx, &workspace, "Entry deleted", &format!("{} deleted", id))
        }
    }
    Ok(())
}
