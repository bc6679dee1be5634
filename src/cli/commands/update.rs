//! update command - Mark an entry's documentation as current

use crate::cli::{Context, Workspace};
use crate::core::store::Store;
use crate::core::types::EntryId;
use anyhow::Result;

/// Set the entry's updated time to now.
pub fn update(ctx: &Context, id: &str) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    let mut store = Store::load(&workspace.paths)?;

    let id = EntryId::new(id);
    store.update(&id)?;
    store.save()?;

    super::show(ctx, &workspace, "Entries", &format!("{} updated", id));
    Ok(())
}
