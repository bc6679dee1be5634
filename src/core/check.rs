//! core::check
//!
//! Staleness report: how many commits touched each entry's paths since its
//! documentation was last marked current.
//!
//! # Severity
//!
//! Commit counts are capped at [`MAX_COMMITS`] and bucketed:
//! - `count == MAX_COMMITS` - [`Severity::High`]
//! - `MEDIUM_THRESHOLD <= count < MAX_COMMITS` - [`Severity::Medium`]
//! - `count < MEDIUM_THRESHOLD` - [`Severity::Low`]
//!
//! # Entries Without Paths
//!
//! An entry with no paths aborts the whole report with
//! [`StoreError::EntryWithoutPaths`]. Entries are visited in id order, so
//! entries after it are never queried.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::store::{Store, StoreError};
use super::types::{EntryId, UtcTimestamp};
use crate::git::{CommitHistory, GitError};

/// Commit counts stop at this value.
pub const MAX_COMMITS: usize = 10;

/// Lowest count reported as [`Severity::Medium`].
pub const MEDIUM_THRESHOLD: usize = 5;

/// Errors from building a staleness report.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Git(#[from] GitError),
}

/// How urgently an entry's documentation needs a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Bucket a (capped) commit count.
    ///
    /// # Example
    ///
    /// ```
    /// use sdt::core::check::Severity;
    ///
    /// assert_eq!(Severity::classify(0), Severity::Low);
    /// assert_eq!(Severity::classify(5), Severity::Medium);
    /// assert_eq!(Severity::classify(10), Severity::High);
    /// ```
    pub fn classify(count: usize) -> Self {
        if count >= MAX_COMMITS {
            Severity::High
        } else if count >= MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the staleness report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalenessRow {
    pub id: EntryId,
    pub document_name: String,
    pub paths: Vec<String>,
    pub updated: UtcTimestamp,
    /// Commits since `updated`, capped at [`MAX_COMMITS`].
    pub commits: usize,
    pub severity: Severity,
}

/// The full staleness report, one row per entry in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StalenessReport {
    pub rows: Vec<StalenessRow>,
}

impl StalenessReport {
    /// Highest severity in the report, if any rows exist.
    pub fn worst(&self) -> Option<Severity> {
        self.rows.iter().map(|row| row.severity).max()
    }
}

/// Build the staleness report for every entry in the store.
///
/// Read-only: the store is not modified or saved.
///
/// # Errors
///
/// - [`StoreError::EmptyStore`] if the store has no entries
/// - [`StoreError::EntryWithoutPaths`] for the first entry with no paths
/// - [`GitError`] if the history query fails
pub fn check(store: &Store, history: &dyn CommitHistory) -> Result<StalenessReport, CheckError> {
    let entries = store.list()?;
    let mut rows = Vec::with_capacity(entries.len());

    for (id, entry) in entries {
        if entry.paths.is_empty() {
            return Err(StoreError::EntryWithoutPaths { id: id.clone() }.into());
        }

        let absolute: Vec<PathBuf> = entry
            .paths
            .iter()
            .map(|p| store.paths().absolute(p))
            .collect();
        let commits = history.commit_count(&absolute, &entry.updated, MAX_COMMITS)?;
        debug!(%id, commits, since = %entry.updated, "counted commits");

        rows.push(StalenessRow {
            id: id.clone(),
            document_name: entry.document_name.clone(),
            paths: entry.paths.clone(),
            updated: entry.updated,
            commits,
            severity: Severity::classify(commits),
        });
    }

    Ok(StalenessReport { rows })
}
