//! Simulation statistics collection and reporting.
//!
//! This module tracks the observational counters of a run. It provides:
//! 1. **Fetches:** Every opcode fetch, including the final halt.
//! 2. **Instruction mix:** Executions of each of the ten opcodes.
//! 3. **Branches:** Taken counts for BCT and BC.
//! 4. **Memory:** Data reads and writes.
//! 5. **Cache:** Hits and misses in the data cache.
//!
//! None of these values feed back into execution.

use std::fmt;

use crate::isa::Opcode;

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Opcode fetches, including the halt that ends the run.
    pub fetches: u64,
    /// Executions per opcode, indexed by [`Opcode::index`].
    pub executed: [u64; Opcode::COUNT],
    /// BCT instructions that branched.
    pub bct_taken: u64,
    /// BC instructions that branched.
    pub bc_taken: u64,
    /// Data memory reads (L, C).
    pub mem_reads: u64,
    /// Data memory writes (ST).
    pub mem_writes: u64,
    /// Data cache hits.
    pub cache_hits: u64,
    /// Data cache misses.
    pub cache_misses: u64,
}

impl SimStats {
    /// Counts one execution of `op`.
    pub const fn record(&mut self, op: Opcode) {
        self.executed[op.index()] += 1;
    }

    /// Number of times `op` executed.
    pub const fn count(&self, op: Opcode) -> u64 {
        self.executed[op.index()]
    }

    /// Taken count for a branch opcode, `None` for the others.
    pub const fn taken(&self, op: Opcode) -> Option<u64> {
        match op {
            Opcode::Bct => Some(self.bct_taken),
            Opcode::Bc => Some(self.bc_taken),
            _ => None,
        }
    }

    /// Percentage of executions of a branch opcode that branched.
    ///
    /// `None` for non-branch opcodes and for branches that never executed.
    pub fn taken_percent(&self, op: Opcode) -> Option<f64> {
        let taken = self.taken(op)?;
        let total = self.count(op);
        (total > 0).then(|| 100.0 * taken as f64 / total as f64)
    }

    /// Fetch count as reported: the fetch of the terminating halt is excluded.
    pub const fn reported_fetches(&self) -> u64 {
        self.fetches.saturating_sub(1)
    }

    /// Total executions across all ten opcodes.
    pub fn instructions(&self) -> u64 {
        self.executed.iter().sum()
    }
}

impl fmt::Display for SimStats {
    /// Writes the end-of-run execution statistics report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "execution statistics")?;
        writeln!(f, "  instruction fetches = {}", self.reported_fetches())?;
        for op in Opcode::ALL {
            write!(f, "    {:<3} instructions  = {}", op.mnemonic(), self.count(op))?;
            if let (Some(taken), Some(pct)) = (self.taken(op), self.taken_percent(op)) {
                write!(f, ", taken = {taken} ({pct:.1}%)")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  memory data reads   = {}", self.mem_reads)?;
        writeln!(f, "  memory data writes  = {}", self.mem_writes)?;
        writeln!(f, "  cache hits          = {}", self.cache_hits)?;
        writeln!(f, "  cache misses        = {}", self.cache_misses)
    }
}
