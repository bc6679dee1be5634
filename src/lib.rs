//! sdt - Track which documentation goes stale as the code changes
//!
//! sdt associates named pieces of documentation with files and directories
//! of a git repository, then reports how many commits touched those paths
//! since each piece of documentation was last marked current.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Entry store, invariants, staleness report and config
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Tables, panels and verbosity-aware output
//!
//! # Correctness Invariants
//!
//! sdt maintains the following invariants:
//!
//! 1. Entry ids are unique and derived from document names
//! 2. No two paths of one entry are the same or nested in each other
//! 3. A failed command never writes the state file

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
