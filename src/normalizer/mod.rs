//! Rider name normalization pipeline.
//!
//! This module derives the "Given Family" display form from a feed record in
//! four stages composed in sequence:
//! - `source`: decides whether explicit given/family fields are usable or the
//!   raw feed string must be parsed
//! - `tokens`: whitespace tokenization and per-token case classification
//! - `resolver`: ordering heuristics that split tokens into given-name and
//!   family-name groups
//! - `capitalize`: per-word display capitalization
//!
//! The pipeline is a pure function of the record: no I/O, no shared state, and
//! the same input always produces the same output.

// Submodules
mod capitalize;
mod resolver;
mod source;
mod tokens;

// Re-export public items from source
pub use source::{NameSource, resolve_name_source};

// Re-export public items from tokens
pub use tokens::{TokenCase, leading_upper_run, tokenize};

// Re-export public items from capitalize
pub use capitalize::capitalize_word;

// Re-export public items from resolver
pub use resolver::{
    AllUpperSplit, NameParts, display_name_or_unknown, normalize_rider_display_name,
    normalize_with_policy, split_raw_tokens,
};
