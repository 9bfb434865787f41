//! Operation counters for ordered maps

use std::sync::atomic::{AtomicU64, Ordering};

/// Ordered map statistics for performance monitoring
///
/// Counters use relaxed atomics so a map with statistics enabled stays `Sync`
/// for shared read access.
#[derive(Debug, Default)]
pub struct MapStats {
    inserts: AtomicU64,
    overwrites: AtomicU64,
    deletes: AtomicU64,
    delete_misses: AtomicU64,
    find_hits: AtomicU64,
    find_misses: AtomicU64,
    rotations: AtomicU64,
    color_flips: AtomicU64,
}

impl MapStats {
    /// Create new statistics instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of inserts that created a new entry
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Number of inserts that replaced an existing value
    pub fn overwrites(&self) -> u64 {
        self.overwrites.load(Ordering::Relaxed)
    }

    /// Number of deletes that removed an entry
    pub fn deletes(&self) -> u64 {
        self.deletes.load(Ordering::Relaxed)
    }

    /// Number of deletes for keys that were not present
    pub fn delete_misses(&self) -> u64 {
        self.delete_misses.load(Ordering::Relaxed)
    }

    /// Number of lookups that found their key
    ///
    /// Counts `find`, `find_mut`, `get_key_value` and `contains_key`.
    pub fn find_hits(&self) -> u64 {
        self.find_hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that did not find their key
    pub fn find_misses(&self) -> u64 {
        self.find_misses.load(Ordering::Relaxed)
    }

    /// Number of left and right rotations performed
    pub fn rotations(&self) -> u64 {
        self.rotations.load(Ordering::Relaxed)
    }

    /// Number of color flips performed
    pub fn color_flips(&self) -> u64 {
        self.color_flips.load(Ordering::Relaxed)
    }

    /// Get lookup hit ratio (0.0 when nothing was looked up)
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.find_hits() as f64;
        let total = hits + self.find_misses() as f64;
        if total > 0.0 { hits / total } else { 0.0 }
    }

    /// Reset every counter to zero
    pub fn reset(&self) {
        for counter in [
            &self.inserts,
            &self.overwrites,
            &self.deletes,
            &self.delete_misses,
            &self.find_hits,
            &self.find_misses,
            &self.rotations,
            &self.color_flips,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_insert(&self, inserted: bool) {
        if inserted {
            self.inserts.fetch_add(1, Ordering::Relaxed);
        } else {
            self.overwrites.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_delete(&self, deleted: bool) {
        if deleted {
            self.deletes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.delete_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_find(&self, found: bool) {
        if found {
            self.find_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.find_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_rotation(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_color_flip(&self) {
        self.color_flips.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = MapStats::new();
        stats.record_insert(true);
        stats.record_insert(true);
        stats.record_insert(false);
        stats.record_delete(true);
        stats.record_delete(false);
        stats.record_rotation();
        stats.record_color_flip();

        assert_eq!(stats.inserts(), 2);
        assert_eq!(stats.overwrites(), 1);
        assert_eq!(stats.deletes(), 1);
        assert_eq!(stats.delete_misses(), 1);
        assert_eq!(stats.rotations(), 1);
        assert_eq!(stats.color_flips(), 1);
    }

    #[test]
    fn test_hit_ratio() {
        let stats = MapStats::new();
        assert_eq!(stats.hit_ratio(), 0.0);

        stats.record_find(true);
        stats.record_find(true);
        stats.record_find(true);
        stats.record_find(false);
        assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let stats = MapStats::new();
        stats.record_insert(true);
        stats.record_find(false);
        stats.record_rotation();
        stats.reset();

        assert_eq!(stats.inserts(), 0);
        assert_eq!(stats.find_misses(), 0);
        assert_eq!(stats.rotations(), 0);
    }
}
