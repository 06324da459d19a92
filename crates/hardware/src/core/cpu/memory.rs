//! Data Memory Access Path.
//!
//! This module provides the interface between the instruction handlers and the
//! memory subsystem. It performs the following:
//! 1. **Cache Simulation:** Consults the data cache and tallies hits and misses.
//! 2. **Word Access:** Big-endian word loads and stores with wrapping addresses.
//!
//! The read and write tallies are kept by the handlers, since ST counts one
//! write even in the form that stores a single byte.

use tracing::trace;

use super::Cpu;
use crate::common::AccessType;

impl Cpu {
    /// Simulates a data access through the cache and records the outcome.
    ///
    /// Nothing is counted when the cache is disabled.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address presented to the cache, before any wrapping.
    /// * `access` - Whether the access reads or writes; used for logging only.
    pub fn simulate_memory_access(&mut self, addr: u32, access: AccessType) {
        let Some(outcome) = self.dcache.access(addr) else {
            return;
        };

        if outcome.hit {
            self.stats.cache_hits += 1;
        } else {
            self.stats.cache_misses += 1;
        }
        trace!(?access, addr, hit = outcome.hit, "data access");
    }

    /// Loads the big-endian word at `addr` as a signed value.
    pub fn load_word(&self, addr: u32) -> i32 {
        self.memory.read_u32_be(addr) as i32
    }

    /// Stores `val` most-significant byte first at `addr`.
    pub fn store_word(&mut self, addr: u32, val: i32) {
        self.memory.write_u32_be(addr, val as u32);
    }

    /// Stores the low byte of `val` at `addr`.
    pub fn store_byte(&mut self, addr: u32, val: i32) {
        self.memory.write_u8(addr, val as u8);
    }
}
