//! Program Loader.
//!
//! This module turns the textual program image into memory contents. It performs:
//! 1. **Parsing:** Reads hexadecimal byte tokens of at most two digits,
//!    separated by any amount of whitespace. Longer digit runs split into
//!    consecutive two-digit bytes.
//! 2. **Capacity check:** Rejects images larger than main memory.
//! 3. **Placement:** Copies the bytes to address 0 and clears the rest of the
//!    first 256 bytes.

use std::io::Read;

use tracing::{debug, info};

use crate::common::LoadError;
use crate::common::constants::{MEMORY_SIZE, ZERO_FILL_LEN};
use crate::soc::memory::Memory;

/// Most hex digits consumed for one byte.
const MAX_TOKEN_DIGITS: usize = 2;

/// Radix of the program text.
const HEX_RADIX: u32 = 16;

/// Parses hexadecimal program text into bytes.
///
/// # Errors
///
/// Returns [`LoadError::MemoryOverflow`] as soon as a byte would land past
/// the end of memory, and [`LoadError::InvalidToken`] for any character that
/// is neither whitespace nor a hex digit.
///
/// # Examples
///
/// ```
/// use s360_core::sim::loader::parse_hex;
///
/// assert_eq!(parse_hex("41 10 0 10\n00").unwrap(), vec![0x41, 0x10, 0x00, 0x10, 0x00]);
/// assert_eq!(parse_hex("5820").unwrap(), vec![0x58, 0x20]);
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            let _ = chars.next();
            continue;
        }

        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < MAX_TOKEN_DIGITS {
            let Some(&(_, ch)) = chars.peek() else { break };
            let Some(digit) = ch.to_digit(HEX_RADIX) else { break };
            value = value * HEX_RADIX + digit;
            digits += 1;
            let _ = chars.next();
        }

        if digits == 0 {
            let token: String = text[start..]
                .chars()
                .take_while(|c| !c.is_whitespace())
                .collect();
            return Err(LoadError::InvalidToken {
                position: bytes.len(),
                token,
            });
        }

        if bytes.len() >= MEMORY_SIZE {
            return Err(LoadError::MemoryOverflow {
                capacity: MEMORY_SIZE,
            });
        }
        bytes.push(value as u8);
    }

    Ok(bytes)
}

/// Reads and parses a whole program image from `reader`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the source cannot be read as text, otherwise
/// any error from [`parse_hex`].
pub fn read_program<R: Read>(mut reader: R) -> Result<Vec<u8>, LoadError> {
    let mut text = String::new();
    let _ = reader.read_to_string(&mut text)?;
    parse_hex(&text)
}

/// Places an image at address 0 and zeroes the remainder of the first 256 bytes.
///
/// # Returns
///
/// The number of bytes loaded, which bounds the final memory dump.
///
/// # Errors
///
/// Returns [`LoadError::MemoryOverflow`] if `image` is larger than memory.
pub fn load_image(mem: &mut Memory, image: &[u8]) -> Result<usize, LoadError> {
    if image.len() > MEMORY_SIZE {
        return Err(LoadError::MemoryOverflow {
            capacity: MEMORY_SIZE,
        });
    }

    mem.load(image);
    mem.zero(image.len()..ZERO_FILL_LEN);

    info!(bytes = image.len(), "program loaded");
    debug!(zeroed = ZERO_FILL_LEN.saturating_sub(image.len()), "low memory cleared");
    Ok(image.len())
}
