//! ui::render
//!
//! Entries and staleness reports as tables.

use crate::core::check::{Severity, StalenessReport};
use crate::core::store::Entry;
use crate::core::types::EntryId;

use super::table::{Cell, Table, Tone};

const ENTRY_HEADERS: [&str; 4] = ["ID", "Document", "Paths", "Updated Date"];

/// Color for a severity tier.
pub fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::High => Tone::Magenta,
        Severity::Medium => Tone::Yellow,
        Severity::Low => Tone::Green,
    }
}

fn entry_cells(id: &EntryId, document_name: &str, paths: &[String], updated: String) -> Vec<Cell> {
    vec![
        Cell::new(id.as_str()),
        Cell::toned(document_name, Tone::Green),
        Cell::toned(paths.join("\n"), Tone::Cyan),
        Cell::new(updated),
    ]
}

/// One row per entry.
pub fn entries_table<'a>(entries: impl IntoIterator<Item = (&'a EntryId, &'a Entry)>) -> Table {
    let mut table = Table::new(ENTRY_HEADERS);
    table.show_lines = true;
    for (id, entry) in entries {
        table.add_row(entry_cells(
            id,
            &entry.document_name,
            &entry.paths,
            entry.updated.to_string(),
        ));
    }
    table
}

/// One row per entry with its commit count, colored by severity.
pub fn report_table(report: &StalenessReport) -> Table {
    let headers = ENTRY_HEADERS
        .iter()
        .copied()
        .chain(["Commits since last updated"]);
    let mut table = Table::new(headers);
    table.show_lines = true;
    for row in &report.rows {
        let mut cells = entry_cells(
            &row.id,
            &row.document_name,
            &row.paths,
            row.updated.to_string(),
        );
        cells.push(Cell::toned(
            row.commits.to_string(),
            severity_tone(row.severity),
        ));
        table.add_row(cells);
    }
    table
}
