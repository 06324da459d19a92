//! S/360 subset behavioral simulator library.
//!
//! This crate implements an instruction-level simulator for a ten-opcode
//! subset of the System/360 with the following:
//! 1. **Core:** Sixteen 32-bit registers, a condition code, and a
//!    fetch/decode/execute loop over RR and RX instructions.
//! 2. **Memory:** A 4096-byte flat memory with wrapping addresses.
//! 3. **Cache:** A 2-way, 16-set data cache model with LRU replacement that
//!    counts hits and misses without holding data.
//! 4. **ISA:** Opcode table, decoder, and disassembler.
//! 5. **Simulation:** Hex loader, configuration, trace events, and statistics.
//!
//! # Example
//!
//! ```
//! use s360_core::{Config, Simulator};
//! use s360_core::trace::NullSink;
//!
//! // LA R1,0x010 ; halt
//! let mut sim = Simulator::from_image(&[0x41, 0x10, 0x00, 0x10, 0x00], &Config::default()).unwrap();
//! sim.run(&mut NullSink).unwrap();
//! assert_eq!(sim.cpu.regs.read(1), 0x10);
//! ```

/// Common types and constants (memory geometry, registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults, cache geometry, JSON loading).
pub mod config;
/// CPU core (architectural state, execution, handlers, ALU, cache).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator wrapper.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Trace event sink interface.
pub mod trace;

/// Root configuration type; use `Config::default()` or [`Config::from_json`].
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, cache, and stats.
pub use crate::core::Cpu;
/// Loaded machine ready to run.
pub use crate::sim::Simulator;
