//! Crate-wide constants and configuration values
//!
//! This module centralizes the magic values shared by the normalizer, the
//! memoization cache, and the display layers that consume them.

/// Fallback label substituted when a record carries no usable name data.
/// Display layers show this instead of failing the whole roster or result set.
pub const UNKNOWN_RIDER: &str = "Unknown Rider";

/// Capacity of the global display-name memoization cache. Sized for a full
/// season of rosters; LRU eviction handles anything beyond that.
pub const DISPLAY_NAME_CACHE_SIZE: usize = 1024;
