//! Least Recently Used (LRU) Replacement Policy.
//!
//! Each line records the value of the cache's global access counter at its
//! last touch. The victim is the line with the smallest stamp; ties keep the
//! lowest way, so way 0 is the default victim and way 1 replaces it only when
//! its stamp is strictly smaller.
//!
//! # Performance
//!
//! - `update()`: O(1)
//! - `get_victim()`: O(W) where W is the associativity

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Recency stamps, indexed `set * ways + way`.
    last: Vec<u64>,
    ways: usize,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with all stamps zero.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            last: vec![0; sets * ways],
            ways,
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn update(&mut self, set: usize, way: usize, stamp: u64) {
        self.last[set * self.ways + way] = stamp;
    }

    fn get_victim(&self, set: usize) -> usize {
        let base = set * self.ways;
        let mut victim = 0;
        for way in 1..self.ways {
            if self.last[base + way] < self.last[base + victim] {
                victim = way;
            }
        }
        victim
    }

    fn stamp(&self, set: usize, way: usize) -> u64 {
        self.last[set * self.ways + way]
    }
}
