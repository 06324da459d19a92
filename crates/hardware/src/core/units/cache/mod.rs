//! Set-Associative Cache Simulator.
//!
//! This module implements the data cache model consulted by every load, store,
//! and storage compare. It tracks tag, valid, and recency bookkeeping only; no
//! data is held, so the model never affects the values programs observe.
//!
//! The address split is:
//!
//! ```text
//!   tag = addr >> (offset_bits + index_bits)
//!   set = (addr >> offset_bits) & (sets - 1)
//! ```
//!
//! With the default 16 sets and 3 offset bits this is `set = addr[6:3]` and
//! `tag = addr >> 7`.

/// Cache replacement policy implementations.
pub mod policies;

use tracing::trace;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::config::{CacheConfig, ReplacementPolicy as PolicyType};

/// Logical right shift that yields zero once every bit is shifted out.
const fn shr(addr: u32, bits: u32) -> u32 {
    if bits >= u32::BITS { 0 } else { addr >> bits }
}

/// Cache line entry containing tag and validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CacheLine {
    tag: u32,
    valid: bool,
}

/// Outcome of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheAccess {
    /// Whether the tag was already resident.
    pub hit: bool,
    /// Set selected by the address.
    pub set: usize,
    /// Way that was hit, or that received the new line.
    pub way: usize,
    /// Tag derived from the address.
    pub tag: u32,
    /// Whether a valid line was replaced.
    pub evicted: bool,
}

/// Cache simulator implementing a set-associative cache with recency-based replacement.
#[derive(Debug)]
pub struct CacheSim {
    /// When false, accesses bypass the model and touch no state.
    pub enabled: bool,
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    offset_bits: u32,
    index_bits: u32,
    accesses: u64,
    policy: Box<dyn ReplacementPolicy>,
}

impl CacheSim {
    /// Creates a new cache simulator with the specified configuration.
    ///
    /// A zero way count is raised to one and a set count that is not a power
    /// of two is rounded up to the next one. [`CacheConfig::validate`] reports
    /// these cases as errors for configurations read from JSON.
    pub fn new(config: &CacheConfig) -> Self {
        let ways = config.ways.max(1);
        let num_sets = config.sets.max(1).next_power_of_two();
        let index_bits = num_sets.trailing_zeros();

        let policy: Box<dyn ReplacementPolicy> = match config.policy {
            PolicyType::Lru => Box::new(LruPolicy::new(num_sets, ways)),
        };

        Self {
            enabled: config.enabled,
            lines: vec![CacheLine::default(); num_sets * ways],
            num_sets,
            ways,
            offset_bits: config.offset_bits,
            index_bits,
            accesses: 0,
            policy,
        }
    }

    /// Set index for an address.
    #[inline]
    pub const fn set_index(&self, addr: u32) -> usize {
        (shr(addr, self.offset_bits) as usize) & (self.num_sets - 1)
    }

    /// Tag for an address.
    #[inline]
    pub const fn tag(&self, addr: u32) -> u32 {
        shr(addr, self.offset_bits.saturating_add(self.index_bits))
    }

    /// Number of accesses made so far; also the most recent recency stamp.
    pub const fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Checks if the cache holds the line for `addr`, without touching any state.
    pub fn contains(&self, addr: u32) -> bool {
        self.find(self.set_index(addr), self.tag(addr)).is_some()
    }

    /// Tag held by a way, or `None` if the way is invalid.
    pub fn line_tag(&self, set: usize, way: usize) -> Option<u32> {
        let line = self.lines[set * self.ways + way];
        line.valid.then_some(line.tag)
    }

    /// Recency stamp of a way.
    pub fn recency(&self, set: usize, way: usize) -> u64 {
        self.policy.stamp(set, way)
    }

    fn find(&self, set: usize, tag: u32) -> Option<usize> {
        let base = set * self.ways;
        (0..self.ways).find(|&way| {
            let line = self.lines[base + way];
            line.valid && line.tag == tag
        })
    }

    /// Picks the way for a new line: the lowest invalid way, else the policy's victim.
    fn choose_way(&self, set: usize) -> (usize, bool) {
        let base = set * self.ways;
        match (0..self.ways).find(|&way| !self.lines[base + way].valid) {
            Some(way) => (way, false),
            None => (self.policy.get_victim(set), true),
        }
    }

    /// Accesses the cache for the specified address.
    ///
    /// Increments the global access counter first, then looks the tag up in
    /// the addressed set. A hit refreshes that way's stamp; a miss installs
    /// the tag in the chosen way with the current stamp.
    ///
    /// # Returns
    ///
    /// `None` when the cache is disabled, otherwise the access outcome.
    pub fn access(&mut self, addr: u32) -> Option<CacheAccess> {
        if !self.enabled {
            return None;
        }

        self.accesses += 1;
        let stamp = self.accesses;
        let set = self.set_index(addr);
        let tag = self.tag(addr);

        let outcome = if let Some(way) = self.find(set, tag) {
            self.policy.update(set, way, stamp);
            CacheAccess {
                hit: true,
                set,
                way,
                tag,
                evicted: false,
            }
        } else {
            let (way, evicted) = self.choose_way(set);
            self.lines[set * self.ways + way] = CacheLine { tag, valid: true };
            self.policy.update(set, way, stamp);
            CacheAccess {
                hit: false,
                set,
                way,
                tag,
                evicted,
            }
        };

        trace!(
            addr,
            set,
            tag,
            way = outcome.way,
            hit = outcome.hit,
            evicted = outcome.evicted,
            "cache access"
        );
        Some(outcome)
    }
}
