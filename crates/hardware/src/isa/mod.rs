//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the decoded-instruction record, the decoder,
//! and a disassembler for the ten-opcode subset.
//!
//! # Formats
//!
//! * Halt: opcode high nibble `0x0`, one byte.
//! * RR: opcode high nibble `0x1`, two bytes.
//! * RX: every other opcode, four bytes.

/// Instruction decoding logic for the halt, RR, and RX formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and nibble extraction utilities.
pub mod instruction;

/// Opcode bytes and the `Opcode` enumeration.
pub mod opcodes;

pub use instruction::{Decoded, Format};
pub use opcodes::Opcode;
