//! Global System Constants.
//!
//! This module defines the fixed machine dimensions used across the simulator. It includes:
//! 1. **Memory Constants:** Memory size, offset mask, and the load-time zero-fill window.
//! 2. **Register Constants:** Register count and word width.
//! 3. **Bookkeeping Constants:** Limits and deltas applied to the instruction-address counter.

/// Size of main memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to an address to obtain a memory cell offset.
pub const MEMORY_MASK: u32 = (MEMORY_SIZE as u32) - 1;

/// Number of cells at the bottom of memory that are zeroed after loading.
pub const ZERO_FILL_LEN: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 16;

/// Width of a memory word in bytes.
pub const WORD_BYTES: usize = 4;

/// Largest legal value of the instruction-address counter when a BC executes.
pub const MAX_INST_ADDR: u32 = 4095;

/// Above this instruction-address value the trace shows the program counter instead.
pub const DISPLAY_PC_THRESHOLD: u32 = 1000;

/// Offset subtracted from the instruction-address counter when BC reports it.
pub const BC_REPORT_BIAS: u32 = 3;

/// Displacement value that replaces the usual RX bookkeeping delta.
pub const RX_DISP_SENTINEL: u16 = 0xFFF;

/// Instruction-address delta for an RR instruction.
pub const RR_INST_ADDR_DELTA: u32 = 2;

/// Instruction-address delta for an RX instruction.
pub const RX_INST_ADDR_DELTA: u32 = 4;

/// Instruction-address delta applied when a halt executes.
pub const HALT_INST_ADDR_DELTA: u32 = 2;
