//! Rider Display-Name Normalization Library
//!
//! This library derives a single, correctly-capitalized "Given Family" display
//! form from the inconsistent rider name conventions found in race-result and
//! roster feeds: "GIVEN Family", "FAMILY Given", fully upper-cased strings,
//! naturally cased strings, and records that additionally carry separate
//! given/family fields of varying reliability.
//!
//! # Examples
//!
//! ```rust
//! use rider_names::{NameRecord, normalize_rider_display_name};
//!
//! // Result feeds commonly lead with an upper-cased surname.
//! let record = NameRecord::from_raw("VAN DER POEL Mathieu");
//! assert_eq!(
//!     normalize_rider_display_name(&record)?,
//!     "Mathieu Van Der Poel"
//! );
//!
//! // Explicit fields, when both are usable, win over the raw string.
//! let record = NameRecord::from_fields("Demi", "VOLLERING");
//! assert_eq!(normalize_rider_display_name(&record)?, "Demi Vollering");
//! # Ok::<(), rider_names::NameError>(())
//! ```

pub mod cache;
pub mod constants;
pub mod error;
pub mod normalizer;
pub mod records;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use error::NameError;
pub use normalizer::{
    AllUpperSplit, NameParts, NameSource, TokenCase, display_name_or_unknown,
    normalize_rider_display_name, normalize_with_policy,
};
pub use records::NameRecord;

// Re-export cache monitoring functions for external tools
pub use cache::{CacheStats, clear_display_name_cache, display_name_cache_stats, normalize_cached};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
