//! add command - Associate a path with a piece of documentation

use std::path::Path;

use crate::cli::{Context, Workspace};
use crate::core::paths::display_form;
use crate::core::store::{AddOutcome, Store};
use crate::ui::render::entries_table;
use anyhow::{bail, Result};

/// Add `path` to the entry for `document_name`.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `document_name` - Name of the documentation; its id is derived from it
/// * `path` - Existing file or directory, relative to the root
pub fn add(ctx: &Context, document_name: &str, path: &Path) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    let mut store = Store::load(&workspace.paths)?;

    if !workspace.paths.root.join(path).exists() {
        bail!("Path '{}' does not exist", path.display());
    }
    let path = display_form(path);

    let outcome = store.add(document_name, &path)?;
    store.save()?;

    match outcome {
        AddOutcome::EntryCreated { id } => {
            let color = ctx.color(&workspace.config);
            let table = entries_table(store.get(&id).map(|entry| (&id, entry)));
            super::show(ctx, &workspace, "Entry made", &table.render(color));
        }
        AddOutcome::PathAdded { id, path } => {
            super::show(
                ctx,
                &workspace,
                "Path added to entry",
                &format!("{} added to {}", path, id),
            );
        }
    }
    Ok(())
}
