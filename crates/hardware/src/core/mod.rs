//! Core processor implementation.
//!
//! This module contains the CPU aggregate and its run loop, the architectural
//! condition code, and the functional units (ALU and data cache model).

/// Architecture-specific state (condition code).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Functional units (ALU, cache).
pub mod units;

pub use self::cpu::Cpu;
