//! Condition Code.
//!
//! The three-valued status set by CR, C, AR, and SR and tested by BC's mask.

use std::fmt;

/// Condition code values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConditionCode {
    /// Operands equal, or result zero.
    #[default]
    Equal = 0,
    /// First operand low, or result negative.
    Less = 1,
    /// First operand high, or result positive.
    Greater = 2,
}

impl ConditionCode {
    /// Three-way signed comparison of `a` against `b`.
    pub const fn compare(a: i32, b: i32) -> Self {
        if a == b {
            Self::Equal
        } else if a < b {
            Self::Less
        } else {
            Self::Greater
        }
    }

    /// Sign of an arithmetic result.
    pub const fn from_result(val: i32) -> Self {
        Self::compare(val, 0)
    }

    /// Numeric value, as tested against the BC mask.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
