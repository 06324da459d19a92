//! Error and Trap definitions.
//!
//! This module defines the error handling mechanisms for the simulator. It provides:
//! 1. **Load Errors:** Failures while reading the hex program image into memory.
//! 2. **Configuration Errors:** JSON parse failures and invalid cache geometry.
//! 3. **Traps:** Fatal conditions raised from inside the run loop.
//!
//! Unknown opcodes are not errors: the run loop simply moves on to the next fetch.

use thiserror::Error;

use super::constants::BC_REPORT_BIAS;

/// Failure while loading a program image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// More bytes were supplied than memory can hold.
    #[error("program file overflows available memory")]
    MemoryOverflow {
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// A token could not be parsed as hexadecimal.
    #[error("invalid hex byte {token:?} at input position {position}")]
    InvalidToken {
        /// Index of the byte being loaded when the token was found.
        position: usize,
        /// The offending text.
        token: String,
    },

    /// The byte source could not be read.
    #[error("could not read program input: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid or unparsable simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document did not match the configuration schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Set count is zero or not a power of two.
    #[error("cache set count must be a non-zero power of two, got {0}")]
    InvalidSets(usize),

    /// Associativity is zero.
    #[error("cache must have at least one way")]
    ZeroWays,

    /// Offset plus index bits do not fit in a 32-bit address.
    #[error("cache address split of {0} bits exceeds the address width")]
    AddressSplit(u32),
}

/// Fatal conditions that stop the run loop.
///
/// The core never exits the process on its own; the trap is returned to the
/// caller, which decides how to report it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// A BC instruction ran while the instruction-address counter was past the end of memory.
    ///
    /// The associated value is the raw counter; the message reports it with the
    /// same bias the register dump uses.
    #[error("out of range instruction address {:x}", biased(.inst_addr))]
    InstructionAddressOutOfRange {
        /// Instruction-address counter at the time of the fault.
        inst_addr: u32,
    },
}

const fn biased(inst_addr: &u32) -> u32 {
    inst_addr.wrapping_sub(BC_REPORT_BIAS)
}

impl Trap {
    /// Instruction address as shown in the fatal register dump.
    pub const fn reported_address(&self) -> u32 {
        match self {
            Self::InstructionAddressOutOfRange { inst_addr } => biased(inst_addr),
        }
    }
}
