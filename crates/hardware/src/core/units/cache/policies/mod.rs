//! Cache Replacement Policies.
//!
//! Implements the algorithm for selecting victim lines in a full set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by global access-counter stamps.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
/// The cache only consults the policy when every way of a set is valid.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Updates the policy state when a line is hit or installed.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way that was touched.
    /// * `stamp` - The global access counter value for this access.
    fn update(&mut self, set: usize, way: usize, stamp: u64);

    /// Selects the way to evict from a full set.
    fn get_victim(&self, set: usize) -> usize;

    /// Recency stamp recorded for a line.
    fn stamp(&self, set: usize, way: usize) -> u64;
}
