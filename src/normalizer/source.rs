//! Field resolution: decide which name data on a record is usable.

use crate::error::NameError;
use crate::records::NameRecord;

/// Where the name data for a record comes from.
///
/// Feeds are inconsistent about whether the split given/family fields can be
/// trusted, so the choice is modeled as an explicit tagged value instead of
/// nullable-field checks scattered across the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// Both explicit fields were present and non-blank; use them directly.
    /// Either side may itself be multi-word (e.g. a "VAN DER POEL" family
    /// field).
    ExplicitFields { given: String, family: String },
    /// The explicit fields were unusable; parse the raw feed string.
    ParsedFromRaw(String),
}

/// Decides whether a record's explicit fields are usable or its raw string
/// must be parsed.
///
/// Explicit fields win only when both are non-blank after trimming. A record
/// with neither usable fields nor a non-blank raw string has no name data at
/// all and fails with [`NameError::MissingName`].
///
/// # Examples
/// ```
/// use rider_names::{NameRecord, NameSource};
/// use rider_names::normalizer::resolve_name_source;
///
/// let record = NameRecord::from_fields("Mathieu", "VAN DER POEL");
/// assert_eq!(
///     resolve_name_source(&record).unwrap(),
///     NameSource::ExplicitFields {
///         given: "Mathieu".to_string(),
///         family: "VAN DER POEL".to_string(),
///     }
/// );
///
/// // A blank family field invalidates the pair; fall back to the raw string.
/// let record = NameRecord {
///     raw_name: Some("PIDCOCK Thomas".to_string()),
///     first_name: Some("Thomas".to_string()),
///     last_name: Some("   ".to_string()),
/// };
/// assert_eq!(
///     resolve_name_source(&record).unwrap(),
///     NameSource::ParsedFromRaw("PIDCOCK Thomas".to_string())
/// );
/// ```
pub fn resolve_name_source(record: &NameRecord) -> Result<NameSource, NameError> {
    let given = trimmed_non_blank(record.first_name.as_deref());
    let family = trimmed_non_blank(record.last_name.as_deref());

    if let (Some(given), Some(family)) = (given, family) {
        return Ok(NameSource::ExplicitFields {
            given: given.to_string(),
            family: family.to_string(),
        });
    }

    match trimmed_non_blank(record.raw_name.as_deref()) {
        Some(raw) => Ok(NameSource::ParsedFromRaw(raw.to_string())),
        None => Err(NameError::MissingName),
    }
}

fn trimmed_non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
