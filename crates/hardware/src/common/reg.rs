//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the sixteen 32-bit registers.
//! It provides:
//! 1. **Storage:** Sixteen independent signed registers with wrapping arithmetic.
//! 2. **Masked Indexing:** Register indices are taken from 4-bit fields, so every index is valid.
//! 3. **Observability:** Formatting of the register state in four groups of four.

use std::fmt;

use super::constants::NUM_REGS;

/// Mask applied to a register index so a raw nibble always selects a register.
const REG_INDEX_MASK: usize = NUM_REGS - 1;

/// Sixteen general-purpose registers. There is no hardwired zero register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low four bits are used.
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx & REG_INDEX_MASK]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low four bits are used.
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx & REG_INDEX_MASK] = val;
    }

    /// Returns a copy of all register values.
    pub const fn values(&self) -> [i32; NUM_REGS] {
        self.regs
    }
}

impl fmt::Display for RegisterFile {
    /// Writes the registers as four lines, each holding R(i), R(i+4), R(i+8), R(i+12).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "R{:X} = {:08x}, R{:X} = {:08x}, R{:X} = {:08x}, R{:X} = {:08x}",
                row,
                self.regs[row],
                row + 4,
                self.regs[row + 4],
                row + 8,
                self.regs[row + 8],
                row + 12,
                self.regs[row + 12]
            )?;
        }
        Ok(())
    }
}
