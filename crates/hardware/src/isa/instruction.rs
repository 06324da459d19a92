//! Instruction encoding and decoding utilities.
//!
//! Provides nibble extraction for instruction bytes and the transient
//! `Decoded` record produced by the decoder.

use crate::common::constants::{
    RR_INST_ADDR_DELTA, RX_DISP_SENTINEL, RX_INST_ADDR_DELTA,
};

/// Bit mask for a 4-bit field.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Bit shift for the high nibble of a byte.
pub const NIBBLE_SHIFT: u32 = 4;

/// High-nibble value of opcodes that halt.
pub const HALT_CLASS: u8 = 0x0;

/// High-nibble value of register-to-register opcodes.
pub const RR_CLASS: u8 = 0x1;

/// Encoded length of an RR instruction in bytes.
pub const RR_LEN: u16 = 2;

/// Encoded length of an RX instruction in bytes.
pub const RX_LEN: u16 = 4;

/// Encoded length of the halt form in bytes.
pub const HALT_LEN: u16 = 1;

/// Trait for extracting 4-bit fields from instruction bytes.
pub trait InstructionBits {
    /// Extracts bits 7-4.
    fn high_nibble(&self) -> u8;

    /// Extracts bits 3-0.
    fn low_nibble(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn high_nibble(&self) -> u8 {
        (self >> NIBBLE_SHIFT) & NIBBLE_MASK
    }

    #[inline(always)]
    fn low_nibble(&self) -> u8 {
        self & NIBBLE_MASK
    }
}

/// Instruction format together with its raw operand fields.
///
/// Fields are raw nibble values, not register contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Opcode high nibble 0: no operand bytes follow.
    Halt,
    /// Register-to-register, 2 bytes.
    Rr {
        /// First operand register.
        r1: u8,
        /// Second operand register.
        r2: u8,
    },
    /// Register-to-indexed-storage, 4 bytes.
    Rx {
        /// First operand register, or the condition mask for BC.
        r1: u8,
        /// Index field.
        x2: u8,
        /// Base field.
        b2: u8,
        /// 12-bit displacement.
        disp: u16,
    },
}

/// Decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Opcode byte.
    pub opcode: u8,
    /// Format and operand fields.
    pub format: Format,
    /// Effective address: the R2 field for RR, `X2 + B2 + disp` over the raw
    /// fields for RX, zero for the halt form.
    pub eff_addr: u32,
}

impl Decoded {
    /// Number of bytes the instruction occupies.
    pub const fn encoded_len(&self) -> u16 {
        match self.format {
            Format::Halt => HALT_LEN,
            Format::Rr { .. } => RR_LEN,
            Format::Rx { .. } => RX_LEN,
        }
    }

    /// Whether the instruction is the halt form.
    pub const fn is_halt(&self) -> bool {
        matches!(self.format, Format::Halt)
    }

    /// Amount the decoder adds to the instruction-address counter.
    ///
    /// RR adds 2. RX adds 4, except that a displacement of 0xFFF adds the
    /// displacement itself. The halt form adds nothing at decode time.
    pub const fn inst_addr_delta(&self) -> u32 {
        match self.format {
            Format::Halt => 0,
            Format::Rr { .. } => RR_INST_ADDR_DELTA,
            Format::Rx { disp, .. } => {
                if disp >= RX_DISP_SENTINEL {
                    disp as u32
                } else {
                    RX_INST_ADDR_DELTA
                }
            }
        }
    }

    /// First operand field (R1, or the BC mask). Zero for the halt form.
    pub const fn r1(&self) -> u8 {
        match self.format {
            Format::Halt => 0,
            Format::Rr { r1, .. } | Format::Rx { r1, .. } => r1,
        }
    }

    /// Second register field of an RR instruction, zero otherwise.
    pub const fn r2(&self) -> u8 {
        match self.format {
            Format::Rr { r2, .. } => r2,
            _ => 0,
        }
    }

    /// Index field of an RX instruction, zero otherwise.
    pub const fn x2(&self) -> u8 {
        match self.format {
            Format::Rx { x2, .. } => x2,
            _ => 0,
        }
    }

    /// Base field of an RX instruction, zero otherwise.
    pub const fn b2(&self) -> u8 {
        match self.format {
            Format::Rx { b2, .. } => b2,
            _ => 0,
        }
    }

    /// Displacement field of an RX instruction, zero otherwise.
    pub const fn disp(&self) -> u16 {
        match self.format {
            Format::Rx { disp, .. } => disp,
            _ => 0,
        }
    }
}
