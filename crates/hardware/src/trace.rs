//! Execution trace events.
//!
//! The core reports what it executes through a [`TraceSink`] rather than
//! printing. The binary renders the verbose listing from these events; tests
//! record them. Every method has a no-op default, so a sink implements only
//! the callbacks it needs.

use std::fmt;

use crate::common::RegisterFile;
use crate::core::arch::ConditionCode;
use crate::isa::Opcode;

/// Second operand of an executed instruction, as shown in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand2 {
    /// RR forms: the second register number.
    Register(u8),
    /// LA, ST, L, C: a data address.
    Address(u32),
    /// BCT, BC: the branch target.
    BranchTarget(u32),
}

/// One executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecEvent {
    /// Which instruction ran.
    pub opcode: Opcode,
    /// First operand: a register number, or the mask for BC.
    pub r1: u8,
    /// Second operand.
    pub operand2: Operand2,
}

/// Architectural state visible after a cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchSnapshot {
    /// Displayed instruction address: the program counter once the
    /// instruction-address counter has passed 1000, the counter otherwise.
    pub address: u32,
    /// Condition code.
    pub cc: ConditionCode,
    /// All sixteen registers.
    pub regs: RegisterFile,
}

impl fmt::Display for ArchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "instruction address = {:06x}, condition code = {}",
            self.address, self.cc
        )?;
        write!(f, "{}", self.regs)
    }
}

/// Receiver of trace events from the run loop.
pub trait TraceSink {
    /// Called once per executed instruction, before the next fetch.
    fn on_execute(&mut self, _event: &ExecEvent) {}

    /// Called after every cycle that did not halt, including cycles whose
    /// opcode was not recognized.
    fn on_retire(&mut self, _state: &ArchSnapshot) {}

    /// Called once when a halt executes.
    fn on_halt(&mut self, _state: &ArchSnapshot) {}
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {}
