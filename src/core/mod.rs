//! core
//!
//! Core domain types, the entry store and the staleness report.
//!
//! # Modules
//!
//! - [`types`] - Strong types: EntryId, UtcTimestamp
//! - [`paths`] - Centralized path routing and path comparison
//! - [`store`] - The entry store and its invariants
//! - [`check`] - Staleness report over the commit history
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Every mutation is validated before anything changes
//! - The core never renders output; it returns data for the CLI layer
//! - No operation depends on the process working directory

pub mod check;
pub mod config;
pub mod paths;
pub mod store;
pub mod types;
