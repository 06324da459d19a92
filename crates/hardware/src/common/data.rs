//! Memory Access Types.
//!
//! This module defines the classification of data memory accesses. These types are used for:
//! 1. **Statistics Tracking:** Routing an access to the read or write tally.
//! 2. **Observability:** Tagging cache events in log output.

/// Type of data memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Data read access (L, C).
    Read,

    /// Data write access (ST).
    Write,
}
