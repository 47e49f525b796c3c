//! Rider record shapes as supplied by result and roster feeds.

use serde::{Deserialize, Serialize};

/// A rider name record as it arrives from result and roster feeds.
///
/// Field names mirror the upstream feed shape (`name`, `firstName`,
/// `lastName`). Any of the three may be absent or blank; the normalizer
/// decides which fields are usable. The record derives `Hash`/`Eq` so it can
/// key the display-name cache by value.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct NameRecord {
    /// The combined name string, in whichever convention the feed uses.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,
    /// Separately-supplied given name, when the feed provides one.
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Separately-supplied family name, when the feed provides one.
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl NameRecord {
    /// Builds a record carrying only the combined feed string.
    ///
    /// # Example
    /// ```
    /// use rider_names::NameRecord;
    ///
    /// let record = NameRecord::from_raw("SAGAN Peter");
    /// assert_eq!(record.raw_name.as_deref(), Some("SAGAN Peter"));
    /// assert!(record.first_name.is_none());
    /// ```
    pub fn from_raw(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: Some(raw_name.into()),
            first_name: None,
            last_name: None,
        }
    }

    /// Builds a record carrying explicit given/family fields and no raw string.
    ///
    /// # Example
    /// ```
    /// use rider_names::NameRecord;
    ///
    /// let record = NameRecord::from_fields("Demi", "Vollering");
    /// assert_eq!(record.first_name.as_deref(), Some("Demi"));
    /// assert_eq!(record.last_name.as_deref(), Some("Vollering"));
    /// ```
    pub fn from_fields(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            raw_name: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}
