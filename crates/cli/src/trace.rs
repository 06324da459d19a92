//! Console rendering of the verbose trace.

use s360_core::isa::Opcode;
use s360_core::trace::{ArchSnapshot, ExecEvent, Operand2, TraceSink};

/// Prints one description line per executed instruction and a register dump
/// after each cycle.
#[derive(Debug, Default)]
pub struct ConsoleTracer;

impl ConsoleTracer {
    fn describe(event: &ExecEvent) -> String {
        let name = event.opcode.mnemonic();
        let r1 = event.r1;
        match (event.opcode, event.operand2) {
            (Opcode::Bc, Operand2::BranchTarget(target)) => {
                format!("{name} instruction, mask is {r1:x}, branch target is address {target:06x}")
            }
            (_, Operand2::BranchTarget(target)) => format!(
                "{name} instruction, operand 1 is R{r1:x}, branch target is address {target:06x}"
            ),
            (_, Operand2::Register(r2)) => {
                format!("{name} instruction, operand 1 is R{r1:x}, operand 2 is R{r2:x}")
            }
            (_, Operand2::Address(addr)) => {
                format!("{name} instruction, operand 1 is R{r1:x}, operand 2 at address {addr:06x}")
            }
        }
    }
}

impl TraceSink for ConsoleTracer {
    fn on_execute(&mut self, event: &ExecEvent) {
        println!("\n{}", Self::describe(event));
    }

    fn on_retire(&mut self, state: &ArchSnapshot) {
        print!("{state}");
    }

    fn on_halt(&mut self, state: &ArchSnapshot) {
        println!("\nHalt encountered");
        print!("{state}");
    }
}
