//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing
//! - [`table`] - Plain-text tables
//! - [`panel`] - Titled boxes around results
//! - [`render`] - Entries and reports as tables
//!
//! # Design
//!
//! Everything here is presentation. The core hands over plain data and
//! never depends on this module.

pub mod output;
pub mod panel;
pub mod render;
pub mod table;
