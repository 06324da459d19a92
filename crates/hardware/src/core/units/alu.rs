//! Arithmetic Logic Unit (ALU).
//!
//! Implements the two arithmetic operations of the subset. Both use 32-bit
//! wrapping arithmetic and report the condition code implied by the sign of
//! the result.

use crate::core::arch::ConditionCode;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition (AR).
    Add,
    /// Wrapping subtraction (SR).
    Sub,
}

/// Integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Returns
    ///
    /// The wrapped result and the condition code derived from its sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use s360_core::core::arch::ConditionCode;
    /// use s360_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), (i32::MIN, ConditionCode::Less));
    /// assert_eq!(Alu::execute(AluOp::Sub, 5, 5), (0, ConditionCode::Equal));
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> (i32, ConditionCode) {
        let result = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
        };
        (result, ConditionCode::from_result(result))
    }
}
