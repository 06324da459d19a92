//! Simulator: a loaded machine ready to run.
//!
//! Wraps the CPU together with the size of the loaded image, which bounds the
//! final memory dump.

use std::io::Read;

use crate::common::constants::WORD_BYTES;
use crate::common::{LoadError, Trap};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::memory::Memory;
use crate::stats::SimStats;
use crate::trace::TraceSink;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state, memory, cache, and stats.
    pub cpu: Cpu,
    /// Number of bytes in the loaded program image.
    pub loaded_len: usize,
}

impl Simulator {
    /// Builds a simulator from program bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MemoryOverflow`] if the image does not fit.
    pub fn from_image(image: &[u8], config: &Config) -> Result<Self, LoadError> {
        let mut memory = Memory::new();
        let loaded_len = loader::load_image(&mut memory, image)?;
        Ok(Self {
            cpu: Cpu::new(memory, config),
            loaded_len,
        })
    }

    /// Builds a simulator from hex program text.
    ///
    /// # Errors
    ///
    /// Returns any [`LoadError`] raised while reading or parsing the text.
    pub fn from_reader<R: Read>(reader: R, config: &Config) -> Result<Self, LoadError> {
        let image = loader::read_program(reader)?;
        Self::from_image(&image, config)
    }

    /// Runs the program to its halt.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`Trap`] that stopped the run, if any.
    pub fn run(&mut self, sink: &mut dyn TraceSink) -> Result<(), Trap> {
        self.cpu.run(sink)
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Memory words covering the loaded image, as `(address, value)` pairs.
    ///
    /// The last word may extend past the image when its length is not a
    /// multiple of four.
    pub fn image_words(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.loaded_len).step_by(WORD_BYTES).map(|offset| {
            let addr = offset as u32;
            (addr, self.cpu.memory.read_u32_be(addr))
        })
    }
}
