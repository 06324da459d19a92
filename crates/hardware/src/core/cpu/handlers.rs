//! Instruction Handlers.
//!
//! One function per opcode, all sharing the [`Handler`] signature so the run
//! loop can dispatch through a table indexed by [`Opcode::index`]. Handlers
//! update registers, memory, the condition code, the cache, and the
//! instruction-specific tallies. The per-opcode execution count is recorded
//! by the caller once a handler returns successfully.
//!
//! Register operands are raw 4-bit fields, so every register reference is
//! valid. Memory addresses wrap modulo the memory size; the cache is shown
//! the address before wrapping.

use tracing::{debug, info};

use super::Cpu;
use crate::common::constants::{BC_REPORT_BIAS, DISPLAY_PC_THRESHOLD, MAX_INST_ADDR, MEMORY_MASK};
use crate::common::{AccessType, Trap};
use crate::core::arch::ConditionCode;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Decoded, Opcode};
use crate::trace::{ExecEvent, Operand2, TraceSink};

/// Signature shared by every instruction handler.
pub type Handler = fn(&mut Cpu, &Decoded, &mut dyn TraceSink) -> Result<(), Trap>;

/// Handlers in [`Opcode::ALL`] order.
pub const HANDLERS: [Handler; Opcode::COUNT] = [lr, cr, ar, sr, la, bct, bc, st, l, c];

impl Cpu {
    /// Transfers control: the program counter takes the wrapped target and the
    /// instruction-address counter takes it unwrapped.
    pub fn branch_to(&mut self, target: u32) {
        debug!(from = self.pc, target, "branch taken");
        self.pc = target & MEMORY_MASK;
        self.inst_addr = target;
    }

    fn reg(&self, field: u8) -> i32 {
        self.regs.read(usize::from(field))
    }

    fn set_reg(&mut self, field: u8, val: i32) {
        self.regs.write(usize::from(field), val);
    }
}

fn emit(sink: &mut dyn TraceSink, opcode: Opcode, inst: &Decoded, operand2: Operand2) {
    sink.on_execute(&ExecEvent {
        opcode,
        r1: inst.r1(),
        operand2,
    });
}

/// LR: R1 takes the value of R2.
pub fn lr(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    let val = cpu.reg(inst.r2());
    cpu.set_reg(inst.r1(), val);
    emit(sink, Opcode::Lr, inst, Operand2::Register(inst.r2()));
    Ok(())
}

/// CR: signed comparison of R1 against R2.
pub fn cr(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    cpu.cc = ConditionCode::compare(cpu.reg(inst.r1()), cpu.reg(inst.r2()));
    emit(sink, Opcode::Cr, inst, Operand2::Register(inst.r2()));
    Ok(())
}

fn arithmetic(cpu: &mut Cpu, op: AluOp, inst: &Decoded) {
    let (result, cc) = Alu::execute(op, cpu.reg(inst.r1()), cpu.reg(inst.r2()));
    cpu.set_reg(inst.r1(), result);
    cpu.cc = cc;
}

/// AR: R1 += R2, condition code from the sign of the result.
pub fn ar(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    arithmetic(cpu, AluOp::Add, inst);
    emit(sink, Opcode::Ar, inst, Operand2::Register(inst.r2()));
    Ok(())
}

/// SR: R1 -= R2, condition code from the sign of the result.
pub fn sr(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    arithmetic(cpu, AluOp::Sub, inst);
    emit(sink, Opcode::Sr, inst, Operand2::Register(inst.r2()));
    Ok(())
}

/// LA: R1 takes the displacement. X2 and B2 do not contribute.
pub fn la(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    let disp = inst.disp();
    cpu.set_reg(inst.r1(), i32::from(disp));
    emit(sink, Opcode::La, inst, Operand2::Address(u32::from(disp)));
    Ok(())
}

/// BCT: decrement R1 and branch to the effective address unless it reached zero.
pub fn bct(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    emit(sink, Opcode::Bct, inst, Operand2::BranchTarget(inst.eff_addr));

    let count = cpu.reg(inst.r1()).wrapping_sub(1);
    cpu.set_reg(inst.r1(), count);
    if count != 0 {
        cpu.branch_to(inst.eff_addr);
        cpu.stats.bct_taken += 1;
    }
    Ok(())
}

/// BC: branch to the effective address when the mask selects the condition code.
///
/// # Errors
///
/// Returns [`Trap::InstructionAddressOutOfRange`] when the instruction-address
/// counter is already past 4095, whatever the mask.
pub fn bc(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    let shown_target = if cpu.inst_addr >= DISPLAY_PC_THRESHOLD {
        cpu.inst_addr.wrapping_sub(BC_REPORT_BIAS)
    } else {
        inst.eff_addr
    };
    emit(sink, Opcode::Bc, inst, Operand2::BranchTarget(shown_target));

    if cpu.inst_addr > MAX_INST_ADDR {
        info!(inst_addr = cpu.inst_addr, "branch with instruction address out of range");
        return Err(Trap::InstructionAddressOutOfRange {
            inst_addr: cpu.inst_addr,
        });
    }

    let mask = inst.r1();
    if mask & cpu.cc.bits() != 0 {
        cpu.branch_to(inst.eff_addr);
        cpu.stats.bc_taken += 1;
    }
    Ok(())
}

/// ST: store R1, in one of three forms selected by the B2 and X2 fields.
///
/// * B2 nonzero: the cache sees `R[B2] + D2` when X2 is zero and the raw
///   field sum `B2 + X2 + D2` otherwise; the word goes to `R[B2]` either way.
/// * B2 and X2 zero: the cache sees the decoded effective address and the
///   word goes to `D2`.
/// * B2 zero, X2 nonzero: the low byte of `R[X2]` is written at `R[X2]`,
///   which is also the cache address. R1 is not stored.
///
/// Every form counts one memory write.
pub fn st(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    let (x2, b2) = (inst.x2(), inst.b2());
    let disp = u32::from(inst.disp());
    let val = cpu.reg(inst.r1());

    let shown = if b2 != 0 {
        let base = cpu.reg(b2) as u32;
        let addr = if x2 == 0 {
            base.wrapping_add(disp)
        } else {
            u32::from(b2) + u32::from(x2) + disp
        };
        cpu.simulate_memory_access(addr, AccessType::Write);
        cpu.store_word(base, val);
        addr
    } else if x2 == 0 {
        cpu.simulate_memory_access(inst.eff_addr, AccessType::Write);
        cpu.store_word(disp, val);
        inst.eff_addr
    } else {
        let index = cpu.reg(x2);
        let addr = index as u32;
        cpu.store_byte(addr, index);
        cpu.simulate_memory_access(addr, AccessType::Write);
        debug!(addr, "byte store through index register");
        addr
    };

    emit(sink, Opcode::St, inst, Operand2::Address(shown));
    cpu.stats.mem_writes += 1;
    Ok(())
}

/// L: R1 takes the big-endian word at the effective address.
pub fn l(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    cpu.simulate_memory_access(inst.eff_addr, AccessType::Read);
    emit(sink, Opcode::L, inst, Operand2::Address(inst.eff_addr));
    let word = cpu.load_word(inst.eff_addr);
    cpu.set_reg(inst.r1(), word);
    cpu.stats.mem_reads += 1;
    Ok(())
}

/// C: signed comparison of R1 against the word at the effective address.
pub fn c(cpu: &mut Cpu, inst: &Decoded, sink: &mut dyn TraceSink) -> Result<(), Trap> {
    let word = cpu.load_word(inst.eff_addr);
    cpu.cc = ConditionCode::compare(cpu.reg(inst.r1()), word);
    emit(sink, Opcode::C, inst, Operand2::Address(inst.eff_addr));
    cpu.simulate_memory_access(inst.eff_addr, AccessType::Read);
    cpu.stats.mem_reads += 1;
    Ok(())
}
