//! Register, arithmetic, load, and compare instruction tests.

use rstest::rstest;
use s360_core::core::arch::ConditionCode;
use s360_core::isa::Opcode;
use s360_core::trace::{ExecEvent, Operand2};

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

/// Runs `program` after presetting registers.
fn run_with(program: ProgramBuilder, regs: &[(usize, i32)]) -> TestContext {
    let mut ctx = TestContext::new(&program.halt().build());
    for &(reg, val) in regs {
        ctx.set_reg(reg, val);
    }
    ctx.run().unwrap();
    ctx
}

#[test]
fn lr_copies_register() {
    let ctx = run_with(ProgramBuilder::new().lr(1, 2), &[(2, -9)]);
    assert_eq!(ctx.reg(1), -9);
    assert_eq!(ctx.reg(2), -9);
    assert_eq!(ctx.cc(), ConditionCode::Equal);
}

#[test]
fn lr_leaves_condition_code_alone() {
    let program = ProgramBuilder::new().cr(1, 2).lr(3, 1);
    let ctx = run_with(program, &[(1, 1), (2, 5)]);
    assert_eq!(ctx.cc(), ConditionCode::Less);
}

#[rstest]
#[case(4, 4, ConditionCode::Equal)]
#[case(-1, 0, ConditionCode::Less)]
#[case(7, -7, ConditionCode::Greater)]
#[case(i32::MIN, i32::MAX, ConditionCode::Less)]
fn cr_compares_signed(#[case] a: i32, #[case] b: i32, #[case] cc: ConditionCode) {
    let ctx = run_with(ProgramBuilder::new().cr(1, 2), &[(1, a), (2, b)]);
    assert_eq!(ctx.cc(), cc);
    assert_eq!(ctx.reg(1), a);
}

#[rstest]
#[case(5, 6, 11, ConditionCode::Greater)]
#[case(5, -5, 0, ConditionCode::Equal)]
#[case(i32::MAX, 1, i32::MIN, ConditionCode::Less)]
fn ar_adds_with_wraparound(
    #[case] a: i32,
    #[case] b: i32,
    #[case] sum: i32,
    #[case] cc: ConditionCode,
) {
    let ctx = run_with(ProgramBuilder::new().ar(1, 2), &[(1, a), (2, b)]);
    assert_eq!(ctx.reg(1), sum);
    assert_eq!(ctx.cc(), cc);
}

#[rstest]
#[case(5, 6, -1, ConditionCode::Less)]
#[case(5, 5, 0, ConditionCode::Equal)]
#[case(i32::MIN, 1, i32::MAX, ConditionCode::Greater)]
fn sr_subtracts_with_wraparound(
    #[case] a: i32,
    #[case] b: i32,
    #[case] diff: i32,
    #[case] cc: ConditionCode,
) {
    let ctx = run_with(ProgramBuilder::new().sr(1, 2), &[(1, a), (2, b)]);
    assert_eq!(ctx.reg(1), diff);
    assert_eq!(ctx.cc(), cc);
}

#[test]
fn sr_of_register_with_itself_clears_it() {
    let ctx = run_with(ProgramBuilder::new().sr(4, 4), &[(4, 1234)]);
    assert_eq!(ctx.reg(4), 0);
    assert_eq!(ctx.cc(), ConditionCode::Equal);
}

#[test]
fn la_loads_displacement_not_effective_address() {
    let program = ProgramBuilder::new().rx(0x41, 1, 3, 4, 0x100);
    let ctx = run_with(program, &[(3, 0x50), (4, 0x60)]);
    assert_eq!(ctx.reg(1), 0x100);
    assert_eq!(
        ctx.sink.executed[0],
        ExecEvent {
            opcode: Opcode::La,
            r1: 1,
            operand2: Operand2::Address(0x100),
        }
    );
    assert_eq!(ctx.stats().mem_reads, 0);
}

#[test]
fn l_loads_big_endian_word() {
    let program = ProgramBuilder::new().l(2, 0x10).halt().org(0x10).word(0x8000_0001);
    let mut ctx = TestContext::new(&program.build());
    ctx.run().unwrap();

    assert_eq!(ctx.reg(2), i32::MIN + 1);
    assert_eq!(ctx.stats().mem_reads, 1);
    assert_eq!(ctx.stats().cache_misses, 1);
    assert_eq!(ctx.cc(), ConditionCode::Equal);
}

#[test]
fn l_uses_field_sum_not_registers() {
    let program = ProgramBuilder::new()
        .rx(0x58, 2, 1, 2, 0x0D)
        .halt()
        .org(0x10)
        .word(0x0102_0304);
    let mut ctx = TestContext::new(&program.build());
    ctx.set_reg(1, 0x400);
    ctx.set_reg(2, 0x800);
    ctx.run().unwrap();
    assert_eq!(ctx.reg(2), 0x0102_0304);
}

#[test]
fn l_word_wraps_at_end_of_memory() {
    let program = ProgramBuilder::new().l(1, 0xFFE).halt();
    let mut ctx = TestContext::new(&program.build());
    ctx.cpu_mut().memory.write_u8(0xFFE, 0xAA);
    ctx.cpu_mut().memory.write_u8(0xFFF, 0xBB);
    ctx.run().unwrap();
    // Bytes 0 and 1 hold the L opcode and its R1/X2 byte.
    assert_eq!(ctx.reg(1) as u32, 0xAABB_5810);
}

#[rstest]
#[case(0x10, 0x10, ConditionCode::Equal)]
#[case(0x0F, 0x10, ConditionCode::Less)]
#[case(-1, 0x10, ConditionCode::Less)]
#[case(0x11, 0x10, ConditionCode::Greater)]
fn c_compares_register_with_memory(#[case] reg: i32, #[case] word: u32, #[case] cc: ConditionCode) {
    let program = ProgramBuilder::new().c(1, 0x20).halt().org(0x20).word(word);
    let mut ctx = TestContext::new(&program.build());
    ctx.set_reg(1, reg);
    ctx.run().unwrap();

    assert_eq!(ctx.cc(), cc);
    assert_eq!(ctx.reg(1), reg);
    assert_eq!(ctx.stats().mem_reads, 1);
    assert_eq!(ctx.stats().cache_misses, 1);
}

#[test]
fn c_treats_memory_word_as_signed() {
    let program = ProgramBuilder::new().c(1, 0x20).halt().org(0x20).word(0xFFFF_FFFF);
    let mut ctx = TestContext::new(&program.build());
    ctx.set_reg(1, 0);
    ctx.run().unwrap();
    assert_eq!(ctx.cc(), ConditionCode::Greater);
}

#[test]
fn rr_events_name_second_register() {
    let ctx = run_with(ProgramBuilder::new().ar(0xA, 0xB), &[]);
    assert_eq!(
        ctx.sink.last_event(),
        Some(&ExecEvent {
            opcode: Opcode::Ar,
            r1: 0xA,
            operand2: Operand2::Register(0xB),
        })
    );
}
