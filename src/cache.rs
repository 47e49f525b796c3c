//! Display-name memoization with LRU caching.
//!
//! Normalization is referentially transparent, so results can be memoized by
//! record value: a cached entry never goes stale. Rendering layers that
//! re-display the same rosters every refresh go through [`normalize_cached`]
//! instead of re-running the resolver.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::constants::DISPLAY_NAME_CACHE_SIZE;
use crate::error::NameError;
use crate::normalizer::normalize_rider_display_name;
use crate::records::NameRecord;

// LRU cache keyed by the full record value. Using LRU ensures that when we
// need to evict entries, we remove the least recently used ones.
static DISPLAY_NAME_CACHE: LazyLock<Mutex<LruCache<NameRecord, String>>> = LazyLock::new(|| {
    Mutex::new(LruCache::new(
        NonZeroUsize::new(DISPLAY_NAME_CACHE_SIZE).unwrap(),
    ))
});

fn lock_cache() -> MutexGuard<'static, LruCache<NameRecord, String>> {
    // The cached values are plain strings; a poisoned lock holds nothing
    // worth discarding.
    DISPLAY_NAME_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Point-in-time view of the display-name cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of entries currently cached.
    pub size: usize,
    /// Maximum number of entries the cache holds before evicting.
    pub capacity: usize,
}

/// Normalizes a record through the cache, computing and storing the display
/// name on a miss. Failures are returned to the caller and never cached.
///
/// # Examples
/// ```
/// use rider_names::{NameRecord, normalize_cached};
///
/// let record = NameRecord::from_raw("EVENEPOEL Remco");
/// assert_eq!(normalize_cached(&record)?, "Remco Evenepoel");
/// // Second call is served from the cache.
/// assert_eq!(normalize_cached(&record)?, "Remco Evenepoel");
/// # Ok::<(), rider_names::NameError>(())
/// ```
pub fn normalize_cached(record: &NameRecord) -> Result<String, NameError> {
    if let Some(display_name) = get_cached_display_name(record) {
        return Ok(display_name);
    }

    let display_name = normalize_rider_display_name(record)?;
    cache_display_name(record.clone(), display_name.clone());
    Ok(display_name)
}

/// Retrieves a cached display name for a record, if present. This operation
/// updates the LRU order, making the entry the most recently used.
pub fn get_cached_display_name(record: &NameRecord) -> Option<String> {
    let mut cache = lock_cache();
    match cache.get(record) {
        Some(display_name) => {
            debug!("display name cache hit: {display_name}");
            Some(display_name.clone())
        }
        None => {
            debug!("display name cache miss");
            None
        }
    }
}

/// Stores a display name for a record, replacing any existing entry. This
/// operation makes the entry the most recently used.
pub fn cache_display_name(record: NameRecord, display_name: String) {
    let mut cache = lock_cache();
    cache.put(record, display_name);
}

/// Empties the display-name cache. Intended for tests and long-lived
/// processes that want a known-cold state.
pub fn clear_display_name_cache() {
    let mut cache = lock_cache();
    cache.clear();
    debug!("display name cache cleared");
}

/// Reports current cache occupancy and capacity.
///
/// # Examples
/// ```
/// use rider_names::display_name_cache_stats;
///
/// let stats = display_name_cache_stats();
/// assert!(stats.size <= stats.capacity);
/// ```
pub fn display_name_cache_stats() -> CacheStats {
    let cache = lock_cache();
    CacheStats {
        size: cache.len(),
        capacity: cache.cap().get(),
    }
}
