//! Ordering heuristics that split feed tokens into given-name and family-name
//! groups, plus the public normalization entry points.

use std::num::NonZeroUsize;

use tracing::warn;

use crate::constants::UNKNOWN_RIDER;
use crate::error::NameError;
use crate::records::NameRecord;

use super::capitalize::capitalize_word;
use super::source::{NameSource, resolve_name_source};
use super::tokens::{leading_upper_run, tokenize};

/// Split policy for names where every token is uppercase.
///
/// With no lowercase anchor ("GARCIA LOPEZ MARIA FERNANDA") the boundary
/// between family and given names is genuinely ambiguous, so the choice is a
/// named parameter of the resolver rather than a buried branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllUpperSplit {
    /// The final token alone is the given name. Matches the dominant
    /// "FAMILY GIVEN" convention in result feeds.
    #[default]
    TrailingToken,
    /// The final `n` tokens are the given name, for feeds known to carry
    /// multi-word given names. Clamped so at least one family token remains.
    TrailingTokens(NonZeroUsize),
}

impl AllUpperSplit {
    fn given_len(self, token_count: usize) -> usize {
        match self {
            AllUpperSplit::TrailingToken => 1,
            AllUpperSplit::TrailingTokens(n) => n.get().min(token_count - 1),
        }
    }
}

/// Token groups produced by the resolver, before capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub given: Vec<String>,
    pub family: Vec<String>,
}

impl NameParts {
    /// Renders "Given Family", capitalizing every word in both groups. When
    /// the family group is empty the given name is returned alone.
    pub fn display_name(&self) -> String {
        self.given
            .iter()
            .chain(self.family.iter())
            .map(|word| capitalize_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits raw-string tokens into given/family groups.
///
/// The heuristics apply in precedence order:
/// 1. a single token is a given name with no family name;
/// 2. a leading run of upper tokens followed by at least one mixed token is
///    the family name, the remainder the given name ("SURNAME Given",
///    multi-word surnames included);
/// 3. when every token is upper there is no anchor to split on, and `policy`
///    decides how many trailing tokens form the given name;
/// 4. with no upper tokens the input is already in natural order: first token
///    given, remainder family.
///
/// # Examples
/// ```
/// use rider_names::AllUpperSplit;
/// use rider_names::normalizer::split_raw_tokens;
///
/// let parts = split_raw_tokens(&["VAN", "DER", "POEL", "Mathieu"], AllUpperSplit::default());
/// assert_eq!(parts.given, vec!["Mathieu"]);
/// assert_eq!(parts.family, vec!["VAN", "DER", "POEL"]);
/// ```
pub fn split_raw_tokens(tokens: &[&str], policy: AllUpperSplit) -> NameParts {
    if tokens.len() <= 1 {
        return NameParts {
            given: to_owned(tokens),
            family: Vec::new(),
        };
    }

    let run = leading_upper_run(tokens);

    if run >= 1 && run < tokens.len() {
        // "SURNAME Given" feed convention; the upper run is the surname.
        return NameParts {
            given: to_owned(&tokens[run..]),
            family: to_owned(&tokens[..run]),
        };
    }

    if run == tokens.len() {
        let family_len = tokens.len() - policy.given_len(tokens.len());
        return NameParts {
            given: to_owned(&tokens[family_len..]),
            family: to_owned(&tokens[..family_len]),
        };
    }

    // No upper tokens: the input is already in natural order.
    NameParts {
        given: to_owned(&tokens[..1]),
        family: to_owned(&tokens[1..]),
    }
}

fn to_owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Derives the "Given Family" display form for a rider record using the
/// default all-uppercase split policy.
///
/// This is the single public contract of the crate: deterministic, pure, and
/// safe to call concurrently. The only failure is a record with no usable
/// name data at all.
///
/// # Examples
/// ```
/// use rider_names::{NameRecord, normalize_rider_display_name};
///
/// let record = NameRecord::from_raw("GARCIA LOPEZ Maria Fernanda");
/// assert_eq!(
///     normalize_rider_display_name(&record)?,
///     "Maria Fernanda Garcia Lopez"
/// );
///
/// let record = NameRecord::from_raw("Loana lecomte");
/// assert_eq!(normalize_rider_display_name(&record)?, "Loana Lecomte");
/// # Ok::<(), rider_names::NameError>(())
/// ```
pub fn normalize_rider_display_name(record: &NameRecord) -> Result<String, NameError> {
    normalize_with_policy(record, AllUpperSplit::default())
}

/// Derives the display form with an explicit all-uppercase split policy.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use rider_names::{AllUpperSplit, NameRecord, normalize_with_policy};
///
/// let record = NameRecord::from_raw("GARCIA LOPEZ MARIA FERNANDA");
///
/// // Default policy: only the trailing token is the given name.
/// let policy = AllUpperSplit::TrailingToken;
/// assert_eq!(
///     normalize_with_policy(&record, policy)?,
///     "Fernanda Garcia Lopez Maria"
/// );
///
/// // A feed known to carry two-word given names can say so.
/// let policy = AllUpperSplit::TrailingTokens(NonZeroUsize::new(2).unwrap());
/// assert_eq!(
///     normalize_with_policy(&record, policy)?,
///     "Maria Fernanda Garcia Lopez"
/// );
/// # Ok::<(), rider_names::NameError>(())
/// ```
pub fn normalize_with_policy(
    record: &NameRecord,
    policy: AllUpperSplit,
) -> Result<String, NameError> {
    let parts = match resolve_name_source(record)? {
        NameSource::ExplicitFields { given, family } => NameParts {
            given: to_owned(&tokenize(&given)),
            family: to_owned(&tokenize(&family)),
        },
        NameSource::ParsedFromRaw(raw) => split_raw_tokens(&tokenize(&raw), policy),
    };
    Ok(parts.display_name())
}

/// Normalizes a record, substituting the [`UNKNOWN_RIDER`] label when the
/// record carries no usable name data.
///
/// Display layers use this directly so a single bad record never fails a
/// whole roster or result page.
///
/// # Examples
/// ```
/// use rider_names::{NameRecord, display_name_or_unknown};
///
/// let record = NameRecord {
///     raw_name: Some("".to_string()),
///     first_name: None,
///     last_name: None,
/// };
/// assert_eq!(display_name_or_unknown(&record), "Unknown Rider");
/// ```
pub fn display_name_or_unknown(record: &NameRecord) -> String {
    match normalize_rider_display_name(record) {
        Ok(display_name) => display_name,
        Err(NameError::MissingName) => {
            warn!("record has no usable name data, substituting {UNKNOWN_RIDER:?}");
            UNKNOWN_RIDER.to_string()
        }
    }
}
