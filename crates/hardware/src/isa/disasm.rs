//! Instruction Disassembler.
//!
//! Converts a decoded instruction into assembler-style text for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use s360_core::isa::decode::decode;
//! use s360_core::isa::disasm::disassemble;
//! use s360_core::soc::memory::Memory;
//!
//! let mut mem = Memory::new();
//! mem.load(&[0x58, 0x20, 0x00, 0x24]);
//! assert_eq!(disassemble(&decode(&mem, 0)), "L R2, 0x024(R0, R0)");
//! ```

use crate::isa::instruction::{Decoded, Format};
use crate::isa::opcodes::Opcode;

/// Disassembles a decoded instruction.
///
/// Unknown opcodes are shown as a `.byte` directive followed by their raw fields.
pub fn disassemble(inst: &Decoded) -> String {
    match (Opcode::from_byte(inst.opcode), inst.format) {
        (_, Format::Halt) => format!("HALT (0x{:02x})", inst.opcode),
        (None, Format::Rr { r1, r2 }) => format!(".byte 0x{:02x} ; R{r1:X}, R{r2:X}", inst.opcode),
        (None, Format::Rx { r1, x2, b2, disp }) => format!(
            ".byte 0x{:02x} ; R{r1:X}, 0x{disp:03x}(R{x2:X}, R{b2:X})",
            inst.opcode
        ),
        (Some(op), Format::Rr { r1, r2 }) => format!("{} R{r1:X}, R{r2:X}", op.mnemonic()),
        (Some(Opcode::Bc), Format::Rx { r1, x2, b2, disp }) => {
            format!("BC 0x{r1:x}, 0x{disp:03x}(R{x2:X}, R{b2:X})")
        }
        (Some(op), Format::Rx { r1, x2, b2, disp }) => {
            format!("{} R{r1:X}, 0x{disp:03x}(R{x2:X}, R{b2:X})", op.mnemonic())
        }
    }
}
