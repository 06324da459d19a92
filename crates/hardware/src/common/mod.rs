//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine dimensions and bookkeeping limits.
//! 2. **Memory Access:** Definitions for categorizing data accesses (Read/Write).
//! 3. **Error Handling:** Load errors, configuration errors, and run-time traps.
//! 4. **Register Management:** The sixteen general-purpose registers.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_MASK, MEMORY_SIZE, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, LoadError, Trap};
pub use reg::RegisterFile;
