//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`EntryId`] - Normalized key derived from a document name
//! - [`UtcTimestamp`] - RFC3339 timestamp for the `updated` field
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use sdt::core::types::EntryId;
//!
//! let id = EntryId::from_document_name("  API Reference ").unwrap();
//! assert_eq!(id.as_str(), "apireference");
//!
//! assert!(EntryId::from_document_name("   ").is_err());
//! ```

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid document name: {0}")]
    InvalidDocumentName(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// The key of an entry in the store.
///
/// Ids are derived from document names by lower-casing and removing all
/// whitespace. The mapping is lossy: `"Doc Name"` and `"docname"` share
/// the id `docname`, so adding either one lands in the same entry.
///
/// Ids typed by the user (for `rm` and `update`) are looked up verbatim,
/// see [`EntryId::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an id exactly as given, without normalization.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id for a document name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDocumentName` if the name contains nothing
    /// but whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use sdt::core::types::EntryId;
    ///
    /// let id = EntryId::from_document_name("Doc Name").unwrap();
    /// assert_eq!(id.as_str(), "docname");
    /// ```
    pub fn from_document_name(document_name: &str) -> Result<Self, TypeError> {
        let id: String = document_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if id.is_empty() {
            return Err(TypeError::InvalidDocumentName(
                "document name cannot be empty".into(),
            ));
        }

        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Naive format written by the first releases of the tool.
const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A UTC timestamp serialized as RFC3339.
///
/// Deserialization also accepts the naive `YYYY-MM-DD HH:MM:SS[.ffffff]`
/// form, interpreted in local time, so older state files still load.
///
/// # Example
///
/// ```
/// use sdt::core::types::UtcTimestamp;
///
/// let ts = UtcTimestamp::parse("2024-03-01T09:30:00Z").unwrap();
/// assert_eq!(ts.to_string(), "2024-03-01T09:30:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcTimestamp(DateTime<Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse an RFC3339 or legacy naive timestamp.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        let naive = NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT)
            .map_err(|_| TypeError::InvalidTimestamp(raw.to_string()))?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .ok_or_else(|| TypeError::InvalidTimestamp(raw.to_string()))
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl TryFrom<String> for UtcTimestamp {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UtcTimestamp> for String {
    fn from(ts: UtcTimestamp) -> Self {
        ts.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod entry_id {
        use super::*;

        #[test]
        fn lowercases_and_strips_spaces() {
            let id = EntryId::from_document_name("Doc Name").unwrap();
            assert_eq!(id.as_str(), "docname");
        }

        #[test]
        fn strips_all_whitespace() {
            let id = EntryId::from_document_name("  Doc\tName\n  Two ").unwrap();
            assert_eq!(id.as_str(), "docnametwo");
        }

        #[test]
        fn distinct_names_may_collide() {
            let a = EntryId::from_document_name("Doc Name").unwrap();
            let b = EntryId::from_document_name("docname").unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn blank_rejected() {
            assert!(EntryId::from_document_name("").is_err());
            assert!(EntryId::from_document_name(" \t ").is_err());
        }

        #[test]
        fn new_is_verbatim() {
            assert_eq!(EntryId::new("Doc Name").as_str(), "Doc Name");
        }

        #[test]
        fn serializes_as_plain_string() {
            let id = EntryId::new("docname");
            assert_eq!(serde_json::to_string(&id).unwrap(), "\"docname\"");
        }
    }

    mod utc_timestamp {
        use super::*;

        #[test]
        fn display_is_rfc3339() {
            let ts = UtcTimestamp::now();
            assert!(ts.to_string().contains('T'));
            assert!(ts.to_string().ends_with('Z'));
        }

        #[test]
        fn serde_roundtrip() {
            let ts = UtcTimestamp::now();
            let json = serde_json::to_string(&ts).unwrap();
            let parsed: UtcTimestamp = serde_json::from_str(&json).unwrap();
            assert_eq!(ts, parsed);
        }

        #[test]
        fn parses_offset_timestamps() {
            let ts = UtcTimestamp::parse("2024-03-01T10:30:00+01:00").unwrap();
            assert_eq!(ts.to_string(), "2024-03-01T09:30:00Z");
        }

        #[test]
        fn parses_legacy_naive_format() {
            assert!(UtcTimestamp::parse("2024-03-01 09:30:00.123456").is_ok());
            assert!(UtcTimestamp::parse("2024-03-01 09:30:00").is_ok());
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!(
                UtcTimestamp::parse("yesterday"),
                Err(TypeError::InvalidTimestamp("yesterday".to_string()))
            );
        }

        #[test]
        fn ordering_follows_time() {
            let earlier = UtcTimestamp::parse("2024-03-01T09:30:00Z").unwrap();
            let later = UtcTimestamp::parse("2024-03-01T09:30:01Z").unwrap();
            assert!(earlier < later);
        }
    }
}
