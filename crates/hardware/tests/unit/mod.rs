//! # Unit Components
//!
//! Tests grouped by the crate module they exercise, plus whole-program runs
//! under `sim`.
