//! Flat Main Memory.
//!
//! This module implements the 4096-byte store read by instruction fetch and by
//! the load/store handlers. It provides:
//! 1. **Storage:** A fixed-length byte array allocated once and never resized.
//! 2. **Wrapping Access:** Every address is reduced modulo the memory size, byte by byte.
//! 3. **Word Access:** Big-endian 32-bit reads and writes as used by L, C, and ST.

use std::ops::Range;

use crate::common::constants::{MEMORY_MASK, MEMORY_SIZE, WORD_BYTES};

/// Main memory: 4096 unsigned bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Maps an arbitrary address onto a cell offset.
    #[inline(always)]
    pub const fn offset(addr: u32) -> usize {
        (addr & MEMORY_MASK) as usize
    }

    /// Reads a single byte.
    #[inline(always)]
    pub const fn read_u8(&self, addr: u32) -> u8 {
        self.cells[Self::offset(addr)]
    }

    /// Writes a single byte.
    #[inline(always)]
    pub const fn write_u8(&mut self, addr: u32, val: u8) {
        self.cells[Self::offset(addr)] = val;
    }

    /// Reads the big-endian word at `addr..addr+3`.
    pub fn read_u32_be(&self, addr: u32) -> u32 {
        let mut bytes = [0u8; WORD_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = self.read_u8(addr.wrapping_add(i as u32));
        }
        u32::from_be_bytes(bytes)
    }

    /// Writes `val` most-significant byte first at `addr..addr+3`.
    pub fn write_u32_be(&mut self, addr: u32, val: u32) {
        for (i, byte) in val.to_be_bytes().into_iter().enumerate() {
            self.write_u8(addr.wrapping_add(i as u32), byte);
        }
    }

    /// Copies `data` into memory starting at offset 0.
    ///
    /// The caller guarantees `data` fits; the loader checks this before calling.
    pub fn load(&mut self, data: &[u8]) {
        let len = data.len().min(MEMORY_SIZE);
        self.cells[..len].copy_from_slice(&data[..len]);
    }

    /// Sets every cell in `range` (clamped to memory) to zero.
    pub fn zero(&mut self, range: Range<usize>) {
        let end = range.end.min(MEMORY_SIZE);
        if range.start < end {
            self.cells[range.start..end].fill(0);
        }
    }

    /// Returns the whole memory as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells[..]
    }
}
