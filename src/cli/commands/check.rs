//! check command - Report commits since each entry was last updated

use crate::cli::{Context, Workspace};
use crate::core::check;
use crate::core::store::Store;
use crate::git::Git;
use crate::ui::render::report_table;
use anyhow::{Context as _, Result};

/// Print the staleness report. Read-only.
pub fn check(ctx: &Context) -> Result<()> {
    let workspace = Workspace::load(ctx)?;
    let store = Store::load(&workspace.paths)?;
    let git = Git::open(&workspace.paths.root).context("Failed to open repository")?;

    let report = check::check(&store, &git)?;

    let table = report_table(&report);
    super::show(
        ctx,
        &workspace,
        "Entries",
        &table.render(ctx.color(&workspace.config)),
    );
    Ok(())
}
