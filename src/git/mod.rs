//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module should import
//! `git2`, and sdt never shells out to the git CLI.
//!
//! # Responsibilities
//!
//! - Detecting whether a directory is a repository
//! - Counting commits that touch a set of paths since a point in time
//!
//! # Invariants
//!
//! - Access is read-only; sdt never writes to the repository
//! - Commit counts never exceed the requested cap

mod interface;

pub use interface::{CommitHistory, Git, GitError};
