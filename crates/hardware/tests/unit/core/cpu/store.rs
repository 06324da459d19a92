//! ST tests.
//!
//! The three forms are selected by the B2 and X2 fields and differ in both the
//! address the cache sees and where the data lands.

use s360_core::isa::Opcode;
use s360_core::trace::Operand2;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

const VALUE: i32 = 0x1234_5678;

fn word_at(ctx: &TestContext, addr: u32) -> u32 {
    ctx.cpu().memory.read_u32_be(addr)
}

fn run_store(x2: u8, b2: u8, disp: u16, regs: &[(usize, i32)]) -> TestContext {
    let program = ProgramBuilder::new().st(1, x2, b2, disp).halt();
    let mut ctx = TestContext::new(&program.build());
    ctx.set_reg(1, VALUE);
    for &(reg, val) in regs {
        ctx.set_reg(reg, val);
    }
    ctx.run().unwrap();
    ctx
}

#[test]
fn base_form_caches_base_plus_displacement_and_stores_at_base() {
    let ctx = run_store(0, 5, 0x010, &[(5, 0x200)]);

    assert_eq!(word_at(&ctx, 0x200), VALUE as u32);
    assert_eq!(word_at(&ctx, 0x210), 0);
    assert!(ctx.cpu().dcache.contains(0x210));
    assert!(!ctx.cpu().dcache.contains(0x200));
    assert_eq!(
        ctx.sink.last_event().unwrap().operand2,
        Operand2::Address(0x210)
    );
}

#[test]
fn base_and_index_form_caches_field_sum_and_stores_at_base() {
    let ctx = run_store(2, 5, 0x010, &[(2, 0x700), (5, 0x300)]);

    assert_eq!(word_at(&ctx, 0x300), VALUE as u32);
    assert!(ctx.cpu().dcache.contains(0x017));
    assert!(!ctx.cpu().dcache.contains(0x300));
    assert!(!ctx.cpu().dcache.contains(0x710));
    assert_eq!(
        ctx.sink.last_event().unwrap().operand2,
        Operand2::Address(0x017)
    );
}

#[test]
fn displacement_form_stores_at_displacement() {
    let ctx = run_store(0, 0, 0x300, &[(5, 0x100)]);

    assert_eq!(word_at(&ctx, 0x300), VALUE as u32);
    assert!(ctx.cpu().dcache.contains(0x300));
    assert_eq!(
        ctx.sink.last_event().unwrap().operand2,
        Operand2::Address(0x300)
    );
}

#[test]
fn index_form_writes_one_byte_of_the_index() {
    let ctx = run_store(3, 0, 0x040, &[(3, 0x1A5)]);

    let mem = &ctx.cpu().memory;
    assert_eq!(mem.read_u8(0x1A5), 0xA5);
    assert_eq!(mem.read_u8(0x1A4), 0);
    assert_eq!(mem.read_u8(0x1A6), 0);
    assert_eq!(word_at(&ctx, 0x040), 0);
    assert!(ctx.cpu().dcache.contains(0x1A5));
    assert_eq!(
        ctx.sink.last_event().unwrap().operand2,
        Operand2::Address(0x1A5)
    );
}

#[test]
fn every_form_counts_one_write() {
    for (x2, b2) in [(0, 5), (2, 5), (0, 0), (3, 0)] {
        let ctx = run_store(x2, b2, 0x080, &[(2, 0x100), (3, 0x104), (5, 0x108)]);
        assert_eq!(ctx.stats().mem_writes, 1, "x2={x2} b2={b2}");
        assert_eq!(ctx.stats().mem_reads, 0);
        assert_eq!(ctx.stats().count(Opcode::St), 1);
        assert_eq!(ctx.stats().cache_misses, 1);
    }
}

#[test]
fn store_wraps_at_end_of_memory() {
    let ctx = run_store(0, 5, 0, &[(5, 0xFFE)]);
    let mem = &ctx.cpu().memory;
    assert_eq!(mem.read_u8(0xFFE), 0x12);
    assert_eq!(mem.read_u8(0xFFF), 0x34);
    assert_eq!(mem.read_u8(0x000), 0x56);
    assert_eq!(mem.read_u8(0x001), 0x78);
}

#[test]
fn stored_word_reads_back() {
    let program = ProgramBuilder::new()
        .st(1, 0, 0, 0x100)
        .l(2, 0x100)
        .halt()
        .build();
    let mut ctx = TestContext::new(&program);
    ctx.set_reg(1, -2);
    ctx.run().unwrap();

    assert_eq!(ctx.reg(2), -2);
    assert_eq!(ctx.stats().cache_misses, 1);
    assert_eq!(ctx.stats().cache_hits, 1);
}
