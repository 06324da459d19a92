//! Architecture-specific components.
//!
//! The register file lives in [`crate::common::reg`]; this module holds the
//! remaining architectural state types.

/// Condition code definition and the comparison rules that set it.
pub mod condition;

pub use condition::ConditionCode;
