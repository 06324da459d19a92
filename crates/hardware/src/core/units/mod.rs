//! Functional Units.
//!
//! This module contains the execution resources used by the instruction handlers:
//! 1. **ALU:** Wrapping add and subtract with condition-code derivation.
//! 2. **Cache:** The set-associative data cache model and its replacement policy.

/// Arithmetic Logic Unit.
pub mod alu;

/// Data cache simulation.
pub mod cache;
