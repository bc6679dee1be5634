//! core::store
//!
//! The entry store: every documentation entry, keyed by [`EntryId`].
//!
//! # Lifecycle
//!
//! The store is loaded wholesale from the state file at the start of a
//! command, mutated in memory, and written back wholesale with
//! [`Store::save`] after a successful mutation. Every operation validates
//! before it mutates, so a failed command never leaves a partial change
//! behind.
//!
//! # Invariants
//!
//! - Ids are unique (they are the map keys)
//! - Within one entry no two paths resolve to the same location, and no
//!   path lies inside another
//! - `updated` is set at creation and only changed by [`Store::update`]
//!
//! # Example
//!
//! ```no_run
//! use sdt::core::paths::SdtPaths;
//! use sdt::core::store::Store;
//! use std::path::PathBuf;
//!
//! let paths = SdtPaths::new(PathBuf::from("."));
//! let mut store = Store::load(&paths)?;
//! store.add("API Reference", "src/api")?;
//! store.save()?;
//! # Ok::<(), sdt::core::store::StoreError>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::paths::{self, PathRelation, SdtPaths};
use super::types::{EntryId, TypeError, UtcTimestamp};
use crate::git::Git;

/// Errors from entry store operations.
///
/// Every variant is terminal for the command that hit it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `init` outside a git repository.
    #[error("Parent directory is not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// `init` when the state file is already there.
    #[error("{file} already exists")]
    AlreadyInitialized { file: String },

    /// Any command other than `init` before `init`.
    #[error("{file} file not found, please generate one using `sdt init`")]
    StoreNotFound { file: String },

    /// The store holds no entries.
    #[error("No entries found, add some with `sdt add`")]
    EmptyStore,

    /// An entry without paths was reached while checking.
    ///
    /// This aborts the whole check rather than skipping the entry.
    #[error("No paths found for entry {id}, add some with `sdt add` or remove it with `sdt rm {id}`")]
    EntryWithoutPaths { id: EntryId },

    /// The path is already tracked by the entry.
    #[error("Entry already made: {path} is already tracked by {id}")]
    DuplicateEntry { id: EntryId, path: String },

    /// The path contains, or is contained by, a path of the entry.
    #[error("Path overlaps with an existing path for this document: {path} overlaps {existing}")]
    OverlappingPath {
        id: EntryId,
        path: String,
        existing: String,
    },

    /// No entry has the given id.
    #[error("Entry {id} not present in {file}")]
    EntryNotFound { id: EntryId, file: String },

    /// `rm --path` with a path the entry does not track.
    #[error("Path not in entry, the following paths are:\n\n{}", paths.join("\n"))]
    PathNotInEntry {
        id: EntryId,
        path: String,
        paths: Vec<String>,
    },

    /// `rm --path` on an entry that has no paths left.
    #[error("No paths for {id}, please run rm without the --path flag")]
    NoPathsToRemove { id: EntryId },

    /// `rm` without `--path` on an entry that still has paths.
    #[error(
        "Cannot remove a document with paths. The following paths are present in this entry:\n\n{}\n\nPlease run rm with the --path flag.",
        paths.join("\n")
    )]
    EntryHasPaths { id: EntryId, paths: Vec<String> },

    /// Invalid document name.
    #[error(transparent)]
    InvalidDocumentName(#[from] TypeError),

    /// The state file exists but does not hold a valid store.
    #[error("{} is corrupt: {message}", path.display())]
    CorruptState { path: PathBuf, message: String },

    /// Failed to serialize the store.
    #[error("failed to serialize store: {0}")]
    SerializeError(String),

    /// Reading or writing the state file failed.
    #[error("failed to access '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// A documentation entry.
///
/// Field order matches the sorted key order of the state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name, trimmed.
    pub document_name: String,
    /// Tracked paths in display form, in insertion order.
    pub paths: Vec<String>,
    /// When the documentation was last marked current.
    pub updated: UtcTimestamp,
}

/// Result of a successful [`Store::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was created with the path as its only path.
    EntryCreated { id: EntryId },
    /// The path was appended to an existing entry.
    PathAdded { id: EntryId, path: String },
}

/// Result of a successful [`Store::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// A single path was removed from the entry.
    PathDeleted { id: EntryId, path: String },
    /// The entry itself was removed.
    EntryDeleted { id: EntryId },
}

/// The in-memory entry store, bound to its state file.
#[derive(Debug, Clone)]
pub struct Store {
    paths: SdtPaths,
    entries: BTreeMap<EntryId, Entry>,
}

impl Store {
    /// Create the state file with an empty store.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AlreadyInitialized`] if the state file exists
    /// - [`StoreError::NotARepository`] if the root holds no git metadata
    pub fn initialize(paths: &SdtPaths) -> Result<Self, StoreError> {
        if paths.state_file().exists() {
            return Err(StoreError::AlreadyInitialized {
                file: paths.state_file_name.clone(),
            });
        }

        if !Git::is_repository(&paths.root) {
            return Err(StoreError::NotARepository {
                path: paths.root.clone(),
            });
        }

        let store = Self {
            paths: paths.clone(),
            entries: BTreeMap::new(),
        };
        store.save()?;
        debug!(file = %paths.state_file().display(), "initialized empty store");
        Ok(store)
    }

    /// Load the store from its state file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::StoreNotFound`] if the state file does not exist
    /// - [`StoreError::CorruptState`] if it cannot be parsed or validated
    pub fn load(paths: &SdtPaths) -> Result<Self, StoreError> {
        let file = paths.state_file();
        let contents = match fs::read_to_string(&file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::StoreNotFound {
                    file: paths.state_file_name.clone(),
                });
            }
            Err(e) => return Err(StoreError::Io { path: file, source: e }),
        };

        let entries: BTreeMap<EntryId, Entry> =
            serde_json::from_str(&contents).map_err(|e| StoreError::CorruptState {
                path: file.clone(),
                message: e.to_string(),
            })?;

        for (id, entry) in &entries {
            validate_entry(id, entry).map_err(|message| StoreError::CorruptState {
                path: file.clone(),
                message,
            })?;
        }

        debug!(file = %file.display(), entries = entries.len(), "loaded store");
        Ok(Self {
            paths: paths.clone(),
            entries,
        })
    }

    /// Write the whole store back to its state file.
    ///
    /// Output is indented with four spaces and keys are sorted, so the
    /// file diffs cleanly. The write goes through a temp file and a
    /// rename.
    pub fn save(&self) -> Result<(), StoreError> {
        let path = self.paths.state_file();
        let contents = self.to_json()?;
        write_atomic(&path, contents.as_bytes()).map_err(|(path, source)| StoreError::Io {
            path,
            source,
        })?;
        debug!(file = %path.display(), entries = self.entries.len(), "saved store");
        Ok(())
    }

    /// Serialize the store the way it is written to disk.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries
            .serialize(&mut serializer)
            .map_err(|e| StoreError::SerializeError(e.to_string()))?;
        buf.push(b'\n');
        String::from_utf8(buf).map_err(|e| StoreError::SerializeError(e.to_string()))
    }

    /// Get the path routing this store was loaded with.
    pub fn paths(&self) -> &SdtPaths {
        &self.paths
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry.
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Iterate entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntryId, &Entry)> {
        self.entries.iter()
    }

    /// Add a path to the entry for `document_name`, creating the entry if
    /// needed.
    ///
    /// `path` is stored as given; callers pass it in display form and
    /// relative to the root. The existence of `path` is the caller's
    /// responsibility.
    ///
    /// Appending to an existing entry does not touch its `updated` time.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidDocumentName`] if the name is blank
    /// - [`StoreError::DuplicateEntry`] if the entry already tracks the
    ///   same location
    /// - [`StoreError::OverlappingPath`] if the path is inside, or
    ///   contains, a tracked path
    pub fn add(&mut self, document_name: &str, path: &str) -> Result<AddOutcome, StoreError> {
        let id = EntryId::from_document_name(document_name)?;

        let Some(entry) = self.entries.get(&id) else {
            debug!(%id, path, "creating entry");
            self.entries.insert(
                id.clone(),
                Entry {
                    document_name: document_name.trim().to_string(),
                    paths: vec![path.to_string()],
                    updated: UtcTimestamp::now(),
                },
            );
            return Ok(AddOutcome::EntryCreated { id });
        };

        let resolved = self.resolve(path)?;
        for existing in &entry.paths {
            let other = self.resolve(existing)?;
            match paths::relation(&resolved, &other) {
                PathRelation::Same => {
                    return Err(StoreError::DuplicateEntry {
                        id,
                        path: path.to_string(),
                    });
                }
                PathRelation::Overlapping => {
                    return Err(StoreError::OverlappingPath {
                        id,
                        path: path.to_string(),
                        existing: existing.clone(),
                    });
                }
                PathRelation::Disjoint => {}
            }
        }

        debug!(%id, path, "appending path");
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.paths.push(path.to_string());
        }
        Ok(AddOutcome::PathAdded {
            id,
            path: path.to_string(),
        })
    }

    /// List every entry.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyStore`] if there is nothing to list.
    pub fn list(&self) -> Result<Vec<(&EntryId, &Entry)>, StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        Ok(self.entries.iter().collect())
    }

    /// Remove one path from an entry, or the entry itself.
    ///
    /// With `path`, the path is matched by exact string comparison against
    /// the stored display forms. Without it, the entry is removed, which
    /// is only allowed once it has no paths left.
    pub fn remove(&mut self, id: &EntryId, path: Option<&str>) -> Result<RemoveOutcome, StoreError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| StoreError::EntryNotFound {
                id: id.clone(),
                file: self.paths.state_file_name.clone(),
            })?;

        match path {
            Some(path) => {
                if let Some(pos) = entry.paths.iter().position(|p| p == path) {
                    entry.paths.remove(pos);
                    debug!(%id, path, "removed path");
                    Ok(RemoveOutcome::PathDeleted {
                        id: id.clone(),
                        path: path.to_string(),
                    })
                } else if entry.paths.is_empty() {
                    Err(StoreError::NoPathsToRemove { id: id.clone() })
                } else {
                    Err(StoreError::PathNotInEntry {
                        id: id.clone(),
                        path: path.to_string(),
                        paths: entry.paths.clone(),
                    })
                }
            }
            None => {
                if !entry.paths.is_empty() {
                    return Err(StoreError::EntryHasPaths {
                        id: id.clone(),
                        paths: entry.paths.clone(),
                    });
                }
                self.entries.remove(id);
                debug!(%id, "removed entry");
                Ok(RemoveOutcome::EntryDeleted { id: id.clone() })
            }
        }
    }

    /// Mark an entry's documentation as current.
    pub fn update(&mut self, id: &EntryId) -> Result<&Entry, StoreError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| StoreError::EntryNotFound {
                id: id.clone(),
                file: self.paths.state_file_name.clone(),
            })?;
        entry.updated = UtcTimestamp::now();
        debug!(%id, updated = %entry.updated, "refreshed entry");
        Ok(entry)
    }

    fn resolve(&self, tracked: &str) -> Result<PathBuf, StoreError> {
        let absolute = self.paths.absolute(tracked);
        paths::resolve(&absolute).map_err(|source| StoreError::Io {
            path: absolute,
            source,
        })
    }
}

/// Check a loaded record. Returns the problem on failure.
fn validate_entry(id: &EntryId, entry: &Entry) -> Result<(), String> {
    if id.as_str().is_empty() {
        return Err("entry with an empty id".to_string());
    }
    if entry.document_name.trim().is_empty() {
        return Err(format!("entry {} has an empty document_name", id));
    }
    if EntryId::from_document_name(&entry.document_name).ok().as_ref() != Some(id) {
        warn!(%id, document_name = %entry.document_name, "id does not match document name");
    }
    Ok(())
}

/// Write a file atomically (temp file in the same directory, then rename).
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), (PathBuf, io::Error)> {
    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| (temp_path.clone(), e))?;
    file.write_all(contents).map_err(|e| (temp_path.clone(), e))?;
    file.sync_all().map_err(|e| (temp_path.clone(), e))?;
    fs::rename(&temp_path, path).map_err(|e| (path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A root directory with `file.txt`, `file2.txt` and `sub_dir/file.txt`.
    fn fixture() -> (TempDir, Store) {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub_dir")).unwrap();
        std::fs::write(temp.path().join("file.txt"), "Test Content").unwrap();
        std::fs::write(temp.path().join("file2.txt"), "Test Content").unwrap();
        std::fs::write(temp.path().join("sub_dir/file.txt"), "Sub Dir").unwrap();

        let store = Store {
            paths: SdtPaths::new(temp.path().to_path_buf()),
            entries: BTreeMap::new(),
        };
        (temp, store)
    }

    fn docname() -> EntryId {
        EntryId::new("docname")
    }

    mod add {
        use super::*;

        #[test]
        fn creates_entry() {
            let (_temp, mut store) = fixture();
            let outcome = store.add("  Doc Name  ", "file.txt").unwrap();

            assert_eq!(outcome, AddOutcome::EntryCreated { id: docname() });
            let entry = store.get(&docname()).unwrap();
            assert_eq!(entry.document_name, "Doc Name");
            assert_eq!(entry.paths, vec!["file.txt"]);
        }

        #[test]
        fn appends_without_touching_updated() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "file.txt").unwrap();
            let before = store.get(&docname()).unwrap().updated;

            let outcome = store.add("doc name", "file2.txt").unwrap();

            assert_eq!(
                outcome,
                AddOutcome::PathAdded {
                    id: docname(),
                    path: "file2.txt".to_string()
                }
            );
            let entry = store.get(&docname()).unwrap();
            assert_eq!(entry.paths, vec!["file.txt", "file2.txt"]);
            assert_eq!(entry.updated, before);
            assert_eq!(entry.document_name, "Doc Name");
        }

        #[test]
        fn duplicate_rejected() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "file.txt").unwrap();

            let err = store.add("Doc Name", "file.txt").unwrap_err();
            assert!(matches!(err, StoreError::DuplicateEntry { .. }));
            assert_eq!(store.get(&docname()).unwrap().paths.len(), 1);
        }

        #[test]
        fn duplicate_detected_through_different_spelling() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "sub_dir/file.txt").unwrap();

            let err = store.add("Doc Name", "sub_dir/../sub_dir/file.txt").unwrap_err();
            assert!(matches!(err, StoreError::DuplicateEntry { .. }));
        }

        #[test]
        fn descendant_overlap_rejected() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "sub_dir").unwrap();

            let err = store.add("Doc Name", "sub_dir/file.txt").unwrap_err();
            assert!(matches!(err, StoreError::OverlappingPath { .. }));
            assert!(err
                .to_string()
                .contains("Path overlaps with an existing path for this document"));
        }

        #[test]
        fn ancestor_overlap_rejected() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "sub_dir/file.txt").unwrap();

            let err = store.add("Doc Name", "sub_dir").unwrap_err();
            assert!(matches!(err, StoreError::OverlappingPath { .. }));
        }

        #[test]
        fn overlap_is_per_entry() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "sub_dir").unwrap();

            assert!(store.add("Other Doc", "sub_dir/file.txt").is_ok());
            assert_eq!(store.len(), 2);
        }

        #[test]
        fn blank_name_rejected() {
            let (_temp, mut store) = fixture();
            let err = store.add("   ", "file.txt").unwrap_err();
            assert!(matches!(err, StoreError::InvalidDocumentName(_)));
            assert!(store.is_empty());
        }
    }

    mod list {
        use super::*;

        #[test]
        fn empty_store_is_an_error() {
            let (_temp, store) = fixture();
            assert!(matches!(store.list(), Err(StoreError::EmptyStore)));
        }

        #[test]
        fn entries_in_id_order() {
            let (_temp, mut store) = fixture();
            store.add("Zeta", "file.txt").unwrap();
            store.add("Alpha", "file2.txt").unwrap();

            let ids: Vec<_> = store.list().unwrap().into_iter().map(|(id, _)| id.as_str()).collect();
            assert_eq!(ids, vec!["alpha", "zeta"]);
        }
    }

    mod remove {
        use super::*;

        fn two_paths() -> (TempDir, Store) {
            let (temp, mut store) = fixture();
            store.add("Doc Name", "file.txt").unwrap();
            store.add("Doc Name", "file2.txt").unwrap();
            (temp, store)
        }

        #[test]
        fn unknown_id() {
            let (_temp, mut store) = two_paths();
            let err = store.remove(&EntryId::new("nope"), None).unwrap_err();
            assert!(matches!(err, StoreError::EntryNotFound { .. }));
            assert!(err.to_string().contains("not present in sdt.json"));
        }

        #[test]
        fn removes_only_the_given_path() {
            let (_temp, mut store) = two_paths();
            let outcome = store.remove(&docname(), Some("file.txt")).unwrap();

            assert_eq!(
                outcome,
                RemoveOutcome::PathDeleted {
                    id: docname(),
                    path: "file.txt".to_string()
                }
            );
            assert_eq!(store.get(&docname()).unwrap().paths, vec!["file2.txt"]);
        }

        #[test]
        fn path_match_is_exact_string() {
            let (_temp, mut store) = two_paths();
            let err = store.remove(&docname(), Some("sub_dir/../file.txt")).unwrap_err();

            match err {
                StoreError::PathNotInEntry { paths, .. } => {
                    assert_eq!(paths, vec!["file.txt", "file2.txt"]);
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn entry_with_paths_cannot_be_removed() {
            let (_temp, mut store) = two_paths();
            let err = store.remove(&docname(), None).unwrap_err();

            let message = err.to_string();
            assert!(message.contains("Cannot remove a document with paths"));
            assert!(message.contains("file.txt"));
            assert!(message.contains("file2.txt"));
            assert!(message.contains("Please run rm with the --path flag"));
            assert!(store.get(&docname()).is_some());
        }

        #[test]
        fn empty_entry_rejects_path_removal() {
            let (_temp, mut store) = two_paths();
            store.remove(&docname(), Some("file.txt")).unwrap();
            store.remove(&docname(), Some("file2.txt")).unwrap();

            let err = store.remove(&docname(), Some("file.txt")).unwrap_err();
            assert!(matches!(err, StoreError::NoPathsToRemove { .. }));
        }

        #[test]
        fn empty_entry_can_be_removed() {
            let (_temp, mut store) = two_paths();
            store.remove(&docname(), Some("file.txt")).unwrap();
            store.remove(&docname(), Some("file2.txt")).unwrap();

            let outcome = store.remove(&docname(), None).unwrap();
            assert_eq!(outcome, RemoveOutcome::EntryDeleted { id: docname() });
            assert!(store.is_empty());
        }
    }

    mod update {
        use super::*;

        #[test]
        fn refreshes_only_updated() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "file.txt").unwrap();
            let old = UtcTimestamp::parse("2020-01-01T00:00:00Z").unwrap();
            store.entries.get_mut(&docname()).unwrap().updated = old;

            let entry = store.update(&docname()).unwrap().clone();

            assert!(entry.updated > old);
            assert_eq!(entry.document_name, "Doc Name");
            assert_eq!(entry.paths, vec!["file.txt"]);
        }

        #[test]
        fn unknown_id() {
            let (_temp, mut store) = fixture();
            let err = store.update(&EntryId::new("does-not-exist")).unwrap_err();
            assert!(matches!(err, StoreError::EntryNotFound { .. }));
        }
    }

    mod persistence {
        use super::*;

        #[test]
        fn initialize_requires_repository() {
            let temp = TempDir::new().unwrap();
            let paths = SdtPaths::new(temp.path().to_path_buf());

            let err = Store::initialize(&paths).unwrap_err();
            assert!(err.to_string().contains("not a git repository"));
            assert!(!paths.state_file().exists());
        }

        #[test]
        fn initialize_refuses_existing_file() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());
            std::fs::write(paths.state_file(), "{}").unwrap();

            let err = Store::initialize(&paths).unwrap_err();
            assert_eq!(err.to_string(), "sdt.json already exists");
        }

        #[test]
        fn load_before_init() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());

            let err = Store::load(&paths).unwrap_err();
            assert!(matches!(err, StoreError::StoreNotFound { .. }));
        }

        #[test]
        fn save_then_load_is_lossless() {
            let (_temp, mut store) = fixture();
            store.add("Doc Name", "file.txt").unwrap();
            store.add("Doc Name", "sub_dir").unwrap();
            store.add("Other", "file2.txt").unwrap();
            store.save().unwrap();

            let loaded = Store::load(store.paths()).unwrap();
            assert_eq!(loaded.entries, store.entries);
        }

        #[test]
        fn file_is_sorted_and_indented() {
            let (_temp, mut store) = fixture();
            store.add("Zeta", "file.txt").unwrap();
            store.add("Alpha", "file2.txt").unwrap();

            let json = store.to_json().unwrap();
            assert!(json.starts_with("{\n    \"alpha\": {\n        \"document_name\""));
            assert!(json.find("\"alpha\"").unwrap() < json.find("\"zeta\"").unwrap());
            assert!(json.ends_with("}\n"));
        }

        #[test]
        fn empty_store_file() {
            let (_temp, store) = fixture();
            assert_eq!(store.to_json().unwrap(), "{}\n");
        }

        #[test]
        fn legacy_timestamps_load() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());
            std::fs::write(
                paths.state_file(),
                r#"{
    "docname": {
        "document_name": "Doc Name",
        "paths": ["file.txt"],
        "updated": "2024-05-01 10:11:12.131415"
    }
}"#,
            )
            .unwrap();

            let store = Store::load(&paths).unwrap();
            assert_eq!(store.get(&docname()).unwrap().paths, vec!["file.txt"]);
        }

        #[test]
        fn missing_field_is_corrupt() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());
            std::fs::write(
                paths.state_file(),
                r#"{"docname": {"document_name": "Doc Name", "paths": []}}"#,
            )
            .unwrap();

            let err = Store::load(&paths).unwrap_err();
            assert!(matches!(err, StoreError::CorruptState { .. }));
        }

        #[test]
        fn blank_document_name_is_corrupt() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());
            std::fs::write(
                paths.state_file(),
                r#"{"x": {"document_name": " ", "paths": [], "updated": "2024-01-01T00:00:00Z"}}"#,
            )
            .unwrap();

            let err = Store::load(&paths).unwrap_err();
            assert!(err.to_string().contains("empty document_name"));
        }

        #[test]
        fn malformed_json_is_corrupt() {
            let (temp, _store) = fixture();
            let paths = SdtPaths::new(temp.path().to_path_buf());
            std::fs::write(paths.state_file(), "not json").unwrap();

            assert!(matches!(
                Store::load(&paths),
                Err(StoreError::CorruptState { .. })
            ));
        }
    }
}
