//! Simulation utilities and program loading.
//!
//! Provides the hex program loader and the [`Simulator`] wrapper that owns a
//! loaded machine.

/// Hex program parsing and placement in memory.
pub mod loader;

/// Loaded machine plus run entry point.
pub mod simulator;

pub use simulator::Simulator;
