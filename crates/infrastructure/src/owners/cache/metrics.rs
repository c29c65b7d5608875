use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct OwnerCacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub fetches: AtomicU64,
    pub positive_inserts: AtomicU64,
    pub negative_inserts: AtomicU64,
    pub lookup_failures: AtomicU64,
}

impl OwnerCacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        let total = hits + self.misses.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerCacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub fetches: u64,
    pub positive_inserts: u64,
    pub negative_inserts: u64,
    pub lookup_failures: u64,
    pub evictions: u64,
    pub ghost_hits: u64,
    pub target_recent: usize,
    pub hit_rate: f64,
}
