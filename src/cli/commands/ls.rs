//! ls command - List entries

use crate::cli::{Context, Workspace};
use crate::core::store::Store;
use crate::ui::render::entries_table;
use anyhow::Result;

/// List every entry. An empty store is reported as an error.
pub fn ls(ctx: &Context) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    let store = Store::load(&workspace.paths)?;

    let entries = store.list()?;
    let table = entries_table(entries);
    super::show(
        ctx,
        &workspace,
        "Entries",
        &table.render(ctx.color(&workspace.config)),
    );
    Ok(())
}
