//! Instruction Decoder.
//!
//! This module reads one instruction from memory at a given program counter and
//! classifies it by the high nibble of its opcode:
//!
//! - `0x0_`: halt form, no operand bytes.
//! - `0x1_`: RR, one operand byte `R1 | R2`.
//! - anything else: RX, three operand bytes `R1 | X2`, `B2 | D2[11:8]`, `D2[7:0]`.
//!
//! The RX effective address is `X2 + B2 + D2` computed from the raw field
//! values, not from register contents. Handlers that need register-relative
//! addressing (ST) compute it themselves.

use crate::isa::instruction::{
    Decoded, Format, HALT_CLASS, InstructionBits, RR_CLASS,
};
use crate::soc::memory::Memory;

/// Bit shift placing the displacement high nibble above the low byte.
const DISP_HIGH_SHIFT: u32 = 8;

/// Decodes the instruction at `pc`.
///
/// Memory reads wrap at the end of memory, like every other access.
/// Advancing the program counter and the bookkeeping counters is left to the
/// caller, using [`Decoded::encoded_len`] and [`Decoded::inst_addr_delta`].
///
/// # Arguments
///
/// * `mem` - Memory to fetch from.
/// * `pc` - Address of the opcode byte.
pub fn decode(mem: &Memory, pc: u32) -> Decoded {
    let opcode = mem.read_u8(pc);

    match opcode.high_nibble() {
        HALT_CLASS => Decoded {
            opcode,
            format: Format::Halt,
            eff_addr: 0,
        },
        RR_CLASS => decode_rr(mem, pc, opcode),
        _ => decode_rx(mem, pc, opcode),
    }
}

/// Decodes an RR instruction: `opcode | R1 R2`.
fn decode_rr(mem: &Memory, pc: u32, opcode: u8) -> Decoded {
    let regs = mem.read_u8(pc.wrapping_add(1));
    let r1 = regs.high_nibble();
    let r2 = regs.low_nibble();

    Decoded {
        opcode,
        format: Format::Rr { r1, r2 },
        eff_addr: u32::from(r2),
    }
}

/// Decodes an RX instruction: `opcode | R1 X2 | B2 D2 | D2`.
fn decode_rx(mem: &Memory, pc: u32, opcode: u8) -> Decoded {
    let byte1 = mem.read_u8(pc.wrapping_add(1));
    let byte2 = mem.read_u8(pc.wrapping_add(2));
    let byte3 = mem.read_u8(pc.wrapping_add(3));

    let r1 = byte1.high_nibble();
    let x2 = byte1.low_nibble();
    let b2 = byte2.high_nibble();
    let disp = (u16::from(byte2.low_nibble()) << DISP_HIGH_SHIFT) | u16::from(byte3);

    Decoded {
        opcode,
        format: Format::Rx { r1, x2, b2, disp },
        eff_addr: u32::from(x2) + u32::from(b2) + u32::from(disp),
    }
}
