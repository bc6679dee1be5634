//! core::paths
//!
//! Centralized path routing and path comparison for sdt.
//!
//! # Storage Layout
//!
//! sdt keeps its state next to the code it describes:
//! - `<root>/sdt.json` - The entry store (file name configurable)
//! - `<root>/.git/sdt/config.toml` - Repository configuration
//!
//! **Hard rule:** No code outside this module should compute these
//! locations by hand. All paths go through [`SdtPaths`].
//!
//! # Path Forms
//!
//! Tracked paths exist in two forms:
//! - The *display form* ([`display_form`]) is what gets stored and what
//!   `rm --path` compares against, by plain string equality.
//! - The *resolved form* ([`resolve`]) is an absolute, symlink-free path
//!   used only for overlap detection when adding.
//!
//! # Example
//!
//! ```
//! use sdt::core::paths::SdtPaths;
//! use std::path::PathBuf;
//!
//! let paths = SdtPaths::new(PathBuf::from("/repo"));
//! assert_eq!(paths.state_file(), PathBuf::from("/repo/sdt.json"));
//! assert_eq!(
//!     paths.repo_config_path(),
//!     PathBuf::from("/repo/.git/sdt/config.toml")
//! );
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

/// Default file name of the entry store.
pub const DEFAULT_STATE_FILE: &str = "sdt.json";

/// Centralized path routing for sdt storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdtPaths {
    /// Directory the commands operate on. Tracked paths are relative to it.
    pub root: PathBuf,

    /// File name of the entry store inside `root`.
    pub state_file_name: String,
}

impl SdtPaths {
    /// Create paths for `root` with the default state file name.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            state_file_name: DEFAULT_STATE_FILE.to_string(),
        }
    }

    /// Override the state file name.
    pub fn with_state_file(mut self, name: impl Into<String>) -> Self {
        self.state_file_name = name.into();
        self
    }

    /// Get the path to the entry store.
    pub fn state_file(&self) -> PathBuf {
        self.root.join(&self.state_file_name)
    }

    /// Get the path to the repository configuration file.
    ///
    /// This is `<root>/.git/sdt/config.toml`.
    pub fn repo_config_path(&self) -> PathBuf {
        self.root.join(".git").join("sdt").join("config.toml")
    }

    /// Resolve a tracked path against the root.
    pub fn absolute(&self, tracked: &str) -> PathBuf {
        self.root.join(tracked)
    }
}

/// How two resolved paths relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRelation {
    /// Both refer to the same filesystem location.
    Same,
    /// One lies inside the other.
    Overlapping,
    /// Neither contains the other.
    Disjoint,
}

/// Compare two resolved paths.
///
/// # Example
///
/// ```
/// use sdt::core::paths::{relation, PathRelation};
/// use std::path::Path;
///
/// assert_eq!(relation(Path::new("/r/a"), Path::new("/r/a")), PathRelation::Same);
/// assert_eq!(relation(Path::new("/r/a"), Path::new("/r/a/b")), PathRelation::Overlapping);
/// assert_eq!(relation(Path::new("/r/a/b"), Path::new("/r/a")), PathRelation::Overlapping);
/// assert_eq!(relation(Path::new("/r/a"), Path::new("/r/ab")), PathRelation::Disjoint);
/// ```
pub fn relation(a: &Path, b: &Path) -> PathRelation {
    if a == b {
        PathRelation::Same
    } else if a.starts_with(b) || b.starts_with(a) {
        PathRelation::Overlapping
    } else {
        PathRelation::Disjoint
    }
}

/// Normalize a user-supplied path into the form that gets stored.
///
/// Drops `.` components and redundant separators and joins the rest with
/// `/`. `..` components are kept as typed; a path made only of `.` becomes
/// `"."`.
///
/// # Example
///
/// ```
/// use sdt::core::paths::display_form;
/// use std::path::Path;
///
/// assert_eq!(display_form(Path::new("./docs//guide/")), "docs/guide");
/// assert_eq!(display_form(Path::new(".")), ".");
/// ```
pub fn display_form(path: &Path) -> String {
    let mut parts = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::RootDir => absolute = true,
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Resolve a path to an absolute form with symlinks and `..` removed.
///
/// Paths that no longer exist are resolved as far as the filesystem
/// allows: the deepest existing ancestor is canonicalized and the missing
/// tail is appended lexically.
///
/// `path` must be absolute; join it onto the root first. Relative paths
/// are rejected with [`io::ErrorKind::InvalidInput`] rather than resolved
/// against the process working directory.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    if !path.is_absolute() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected an absolute path, got '{}'", path.display()),
        ));
    }

    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }

    let absolute = lexical_normalize(path);

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    let base = loop {
        if let Ok(canonical) = existing.canonicalize() {
            break canonical;
        }
        match (existing.file_name(), existing.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break PathBuf::new(),
        }
    };

    let mut resolved = base;
    for part in missing.iter().rev() {
        resolved.push(part);
    }
    Ok(resolved)
}

/// Fold `.` and `..` components without touching the filesystem.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
