//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter, the
//!    instruction-address counter, and the condition code.
//! 2. **Memory:** Owns the 4096-byte main memory and the data cache model.
//! 3. **Observability:** Accumulates the execution statistics and produces
//!    the snapshots handed to trace sinks.

/// Fetch, dispatch, and the run loop.
pub mod execution;

/// Instruction handlers.
pub mod handlers;

/// Data memory access path (cache consult plus tallies).
pub mod memory;

use crate::common::RegisterFile;
use crate::common::constants::DISPLAY_PC_THRESHOLD;
use crate::config::Config;
use crate::core::arch::ConditionCode;
use crate::core::units::cache::CacheSim;
use crate::soc::memory::Memory;
use crate::stats::SimStats;
use crate::trace::ArchSnapshot;

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers.
    pub regs: RegisterFile,
    /// Program counter, always a valid memory offset.
    pub pc: u32,
    /// Instruction-address counter.
    ///
    /// Tracks the program counter on ordinary code but is advanced by the
    /// decoder's own rules and is never reduced modulo the memory size. It
    /// feeds the trace display and the BC range check.
    pub inst_addr: u32,
    /// Condition code.
    pub cc: ConditionCode,
    /// Main memory.
    pub memory: Memory,
    /// Data cache model.
    pub dcache: CacheSim,
    /// Performance statistics.
    pub stats: SimStats,
    /// Set once a halt has executed.
    pub halted: bool,
}

impl Cpu {
    /// Creates a CPU over an already loaded memory.
    ///
    /// Registers, program counter, instruction-address counter, and condition
    /// code all start at zero.
    ///
    /// # Arguments
    ///
    /// * `memory` - Main memory holding the program.
    /// * `config` - Simulator configuration; only the cache section is used here.
    pub fn new(memory: Memory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            inst_addr: 0,
            cc: ConditionCode::default(),
            memory,
            dcache: CacheSim::new(&config.cache),
            stats: SimStats::default(),
            halted: false,
        }
    }

    /// Address shown in register dumps.
    ///
    /// Once the instruction-address counter exceeds 1000 the program counter
    /// is shown instead.
    pub const fn display_address(&self) -> u32 {
        if self.inst_addr > DISPLAY_PC_THRESHOLD {
            self.pc
        } else {
            self.inst_addr
        }
    }

    /// Captures the state a trace sink sees after a cycle.
    pub fn snapshot(&self) -> ArchSnapshot {
        ArchSnapshot {
            address: self.display_address(),
            cc: self.cc,
            regs: self.regs.clone(),
        }
    }
}
