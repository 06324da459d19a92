//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle. Each cycle:
//! 1. **Fetch:** Counts a fetch and decodes the instruction at the program counter.
//! 2. **Advance:** Moves the program counter past the instruction and applies
//!    the decoder's instruction-address delta.
//! 3. **Dispatch:** Runs the opcode's handler, or halts, or skips an unknown opcode.
//! 4. **Observability:** Reports the post-cycle state to the trace sink.

use tracing::{debug, info};

use super::Cpu;
use super::handlers::HANDLERS;
use crate::common::Trap;
use crate::common::constants::{HALT_INST_ADDR_DELTA, MEMORY_MASK};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::{Decoded, Opcode};
use crate::trace::TraceSink;

impl Cpu {
    /// Fetches and decodes the instruction at the program counter.
    ///
    /// Increments the fetch tally and advances the program counter and the
    /// instruction-address counter. Nothing is executed.
    pub fn fetch_decode(&mut self) -> Decoded {
        self.stats.fetches += 1;
        let inst = decode(&self.memory, self.pc);

        debug!(
            pc = self.pc,
            inst_addr = self.inst_addr,
            "{}",
            disassemble(&inst)
        );

        self.pc = self.pc.wrapping_add(u32::from(inst.encoded_len())) & MEMORY_MASK;
        self.inst_addr = self.inst_addr.wrapping_add(inst.inst_addr_delta());
        inst
    }

    /// Runs one fetch/decode/execute cycle.
    ///
    /// # Errors
    ///
    /// Propagates a fatal [`Trap`] from the executed instruction. The machine
    /// state is left as the failing instruction found it.
    pub fn step(&mut self, sink: &mut dyn TraceSink) -> Result<(), Trap> {
        let inst = self.fetch_decode();

        if inst.is_halt() {
            self.inst_addr = self.inst_addr.wrapping_add(HALT_INST_ADDR_DELTA);
            self.halted = true;
            info!(fetches = self.stats.fetches, inst_addr = self.inst_addr, "halt");
            sink.on_halt(&self.snapshot());
            return Ok(());
        }

        match Opcode::from_byte(inst.opcode) {
            Some(op) => {
                HANDLERS[op.index()](self, &inst, sink)?;
                self.stats.record(op);
            }
            None => debug!(opcode = inst.opcode, pc = self.pc, "unknown opcode ignored"),
        }

        sink.on_retire(&self.snapshot());
        Ok(())
    }

    /// Runs until a halt executes.
    ///
    /// Programs that never halt run forever; there is no step limit.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first fatal [`Trap`].
    pub fn run(&mut self, sink: &mut dyn TraceSink) -> Result<(), Trap> {
        while !self.halted {
            self.step(sink)?;
        }
        Ok(())
    }
}
