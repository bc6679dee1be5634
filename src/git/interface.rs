//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations in sdt.
//! No other module should import `git2` directly. Failures are normalized
//! into [`GitError`].
//!
//! # Example
//!
//! ```ignore
//! use sdt::core::types::UtcTimestamp;
//! use sdt::git::{CommitHistory, Git};
//! use std::path::{Path, PathBuf};
//!
//! let git = Git::open(Path::new("."))?;
//! let since = UtcTimestamp::parse("2024-01-01T00:00:00Z")?;
//! let count = git.commit_count(&[PathBuf::from("src")], &since, 10)?;
//! ```

use std::collections::{BinaryHeap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::paths;
use crate::core::types::UtcTimestamp;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {}", path.display())]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// A tracked path lies outside the repository's working directory.
    #[error("path is outside the repository: {}", path.display())]
    OutsideWorkdir {
        /// The offending path
        path: PathBuf,
    },

    /// Permission or filesystem error.
    #[error("repository access error: {message}")]
    AccessError {
        /// Description of the error
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::Locked => GitError::AccessError {
                message: format!("repository is locked: {}", err.message()),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Read access to a repository's commit history.
///
/// [`Git`] is the real implementation; tests can substitute canned counts.
pub trait CommitHistory {
    /// Count commits made strictly after `since` that touch any of `paths`.
    ///
    /// `paths` are absolute filesystem paths. Counting stops at
    /// `max_count`, so the result never exceeds it.
    fn commit_count(
        &self,
        paths: &[PathBuf],
        since: &UtcTimestamp,
        max_count: usize,
    ) -> Result<usize, GitError>;
}

/// The Git interface.
///
/// This is the **single point of interaction** with Git.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Check whether `dir` itself holds git metadata.
    ///
    /// Unlike [`Git::open`] this does not search parent directories.
    pub fn is_repository(dir: &Path) -> bool {
        git2::Repository::open(dir).is_ok()
    }

    /// Get the working directory of the repository.
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    /// Turn absolute paths into repository-relative pathspecs.
    ///
    /// Returns `None` when one of the paths is the working directory
    /// itself, meaning every change matches.
    fn pathspecs(&self, paths: &[PathBuf]) -> Result<Option<Vec<String>>, GitError> {
        let work_dir =
            paths::resolve(self.work_dir()?).map_err(|e| GitError::AccessError {
                message: e.to_string(),
            })?;

        let mut specs = Vec::with_capacity(paths.len());
        for path in paths {
            let resolved = paths::resolve(path).map_err(|e| GitError::AccessError {
                message: format!("{}: {}", path.display(), e),
            })?;
            let relative = resolved
                .strip_prefix(&work_dir)
                .map_err(|_| GitError::OutsideWorkdir { path: path.clone() })?;

            if relative.as_os_str().is_empty() {
                return Ok(None);
            }
            specs.push(paths::display_form(relative));
        }

        Ok(Some(specs))
    }

    /// Decide whether a commit counts and which parents the walk follows.
    ///
    /// This is git's default history simplification. A commit that is
    /// TREESAME to a parent for `specs` is not counted and only that parent
    /// is followed, so history reachable only through the other parents of
    /// a merge is never visited. A commit that differs from every parent
    /// counts and all its parents are followed. Root commits are compared
    /// with the empty tree.
    fn simplify<'r>(
        &self,
        commit: &git2::Commit<'r>,
        specs: Option<&[String]>,
    ) -> Result<(bool, Vec<git2::Commit<'r>>), GitError> {
        let tree = commit
            .tree()
            .map_err(|e| GitError::from_git2(e, "read commit tree"))?;

        if commit.parent_count() == 0 {
            return Ok((self.tree_differs(None, &tree, specs)?, Vec::new()));
        }

        let parents: Vec<git2::Commit<'r>> = commit.parents().collect();
        for parent in &parents {
            let parent_tree = parent
                .tree()
                .map_err(|e| GitError::from_git2(e, "read parent tree"))?;
            if !self.tree_differs(Some(&parent_tree), &tree, specs)? {
                return Ok((false, vec![parent.clone()]));
            }
        }
        Ok((true, parents))
    }

    fn tree_differs(
        &self,
        old: Option<&git2::Tree<'_>>,
        new: &git2::Tree<'_>,
        specs: Option<&[String]>,
    ) -> Result<bool, GitError> {
        let mut opts = git2::DiffOptions::new();
        if let Some(specs) = specs {
            for spec in specs {
                opts.pathspec(spec);
            }
        }

        let diff = self
            .repo
            .diff_tree_to_tree(old, Some(new), Some(&mut opts))
            .map_err(|e| GitError::from_git2(e, "diff trees"))?;
        Ok(diff.deltas().len() > 0)
    }
}

impl CommitHistory for Git {
    fn commit_count(
        &self,
        paths: &[PathBuf],
        since: &UtcTimestamp,
        max_count: usize,
    ) -> Result<usize, GitError> {
        if max_count == 0 {
            return Ok(0);
        }

        // Unborn HEAD: nothing has been committed yet.
        let Ok(head) = self.repo.head() else {
            return Ok(0);
        };
        let head = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        let specs = self.pathspecs(paths)?;
        let since_secs = since.as_datetime().timestamp();

        // Newest commit first, like `git rev-list` without ordering flags.
        let mut queue = BinaryHeap::new();
        let mut seen = HashSet::new();
        seen.insert(head.id());
        queue.push((head.time().seconds(), head.id()));

        let mut count = 0;
        while let Some((time, oid)) = queue.pop() {
            // Everything left in the queue is at least this old.
            if time <= since_secs {
                break;
            }

            let commit = self
                .repo
                .find_commit(oid)
                .map_err(|e| GitError::from_git2(e, &oid.to_string()))?;
            let (changed, parents) = self.simplify(&commit, specs.as_deref())?;

            if changed {
                count += 1;
                if count >= max_count {
                    break;
                }
            }

            for parent in parents {
                if seen.insert(parent.id()) {
                    queue.push((parent.time().seconds(), parent.id()));
                }
            }
        }

        Ok(count)
    }
}
