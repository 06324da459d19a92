//! Error and trap message tests.

use s360_core::common::{ConfigError, LoadError, MEMORY_SIZE, Trap};

#[test]
fn overflow_message_matches_load_failure_text() {
    let err = LoadError::MemoryOverflow {
        capacity: MEMORY_SIZE,
    };
    assert_eq!(err.to_string(), "program file overflows available memory");
}

#[test]
fn invalid_token_names_token_and_position() {
    let err = LoadError::InvalidToken {
        position: 7,
        token: "g1".into(),
    };
    assert_eq!(err.to_string(), "invalid hex byte \"g1\" at input position 7");
}

#[test]
fn trap_reports_biased_address() {
    let trap = Trap::InstructionAddressOutOfRange { inst_addr: 0x1003 };
    assert_eq!(trap.reported_address(), 0x1000);
    assert_eq!(trap.to_string(), "out of range instruction address 1000");
}

#[test]
fn config_errors_describe_geometry() {
    assert_eq!(
        ConfigError::InvalidSets(12).to_string(),
        "cache set count must be a non-zero power of two, got 12"
    );
    assert_eq!(ConfigError::ZeroWays.to_string(), "cache must have at least one way");
}
