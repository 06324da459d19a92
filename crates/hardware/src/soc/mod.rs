//! Machine Memory.
//!
//! The simulated machine has no bus or devices; its only system component is
//! the flat main memory.

/// Flat 4096-byte main memory.
pub mod memory;

pub use memory::Memory;
