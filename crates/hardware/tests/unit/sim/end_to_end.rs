//! Whole-program runs checked against hand-computed state and reports.

use pretty_assertions::assert_eq;
use s360_core::Simulator;
use s360_core::config::Config;
use s360_core::core::arch::ConditionCode;
use s360_core::isa::Opcode;
use s360_core::trace::NullSink;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

/// ```text
/// 00: LA R1,0x010
/// 04: L  R2,0x010
/// 08: C  R1,0x010
/// 0c: HALT
/// 10: 0000002a
/// ```
const LOAD_COMPARE: &str = "41 10 00 10  58 20 00 10  59 10 00 10  00 00 00 00  00 00 00 2a";

#[test]
fn load_and_compare_program() {
    let mut sim = Simulator::from_reader(LOAD_COMPARE.as_bytes(), &Config::default()).unwrap();
    sim.run(&mut NullSink).unwrap();

    let cpu = &sim.cpu;
    assert!(cpu.halted);
    assert_eq!(cpu.regs.read(1), 0x10);
    assert_eq!(cpu.regs.read(2), 0x2A);
    assert_eq!(cpu.cc, ConditionCode::Less);
    assert_eq!(cpu.pc, 0x0D);
    assert_eq!(cpu.inst_addr, 0x0E);
    assert_eq!(cpu.memory.read_u32_be(0x10), 0x2A);

    let expected = "\
execution statistics
  instruction fetches = 3
    LR  instructions  = 0
    CR  instructions  = 0
    AR  instructions  = 0
    SR  instructions  = 0
    LA  instructions  = 1
    BCT instructions  = 0
    BC  instructions  = 0
    ST  instructions  = 0
    L   instructions  = 1
    C   instructions  = 1
  memory data reads   = 2
  memory data writes  = 0
  cache hits          = 1
  cache misses        = 1
";
    assert_eq!(sim.stats().to_string(), expected);
}

#[test]
fn load_and_compare_final_words() {
    let mut sim = Simulator::from_reader(LOAD_COMPARE.as_bytes(), &Config::default()).unwrap();
    sim.run(&mut NullSink).unwrap();

    assert_eq!(sim.loaded_len, 20);
    let words: Vec<_> = sim.image_words().collect();
    assert_eq!(
        words,
        vec![
            (0x00, 0x4110_0010),
            (0x04, 0x5820_0010),
            (0x08, 0x5910_0010),
            (0x0C, 0x0000_0000),
            (0x10, 0x0000_002A),
        ]
    );
}

#[test]
fn summation_loop_with_store() {
    // 00: LA  R1,5
    // 04: AR  R2,R1
    // 06: BCT R1,0x004
    // 0a: ST  R2,0x020
    // 0e: HALT
    let program = ProgramBuilder::new()
        .la(1, 5)
        .ar(2, 1)
        .bct(1, 0x004)
        .st(2, 0, 0, 0x020)
        .halt()
        .build();
    let mut ctx = TestContext::new(&program);
    ctx.run().unwrap();

    assert_eq!(ctx.reg(2), 15);
    assert_eq!(ctx.cpu().memory.read_u32_be(0x20), 15);
    assert_eq!(ctx.cc(), ConditionCode::Greater);

    let expected = "\
execution statistics
  instruction fetches = 12
    LR  instructions  = 0
    CR  instructions  = 0
    AR  instructions  = 5
    SR  instructions  = 0
    LA  instructions  = 1
    BCT instructions  = 5, taken = 4 (80.0%)
    BC  instructions  = 0
    ST  instructions  = 1
    L   instructions  = 0
    C   instructions  = 0
  memory data reads   = 0
  memory data writes  = 1
  cache hits          = 0
  cache misses        = 1
";
    assert_eq!(ctx.stats().to_string(), expected);
}

#[test]
fn countdown_with_conditional_branch() {
    // 00: LA R1,3
    // 04: LA R3,1
    // 08: SR R1,R3
    // 0a: BC 2,0x008
    // 0e: HALT
    let program = ProgramBuilder::new()
        .la(1, 3)
        .la(3, 1)
        .sr(1, 3)
        .bc(2, 0x008)
        .halt()
        .build();
    let mut ctx = TestContext::new(&program);
    ctx.run().unwrap();

    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.cc(), ConditionCode::Equal);
    assert_eq!(ctx.stats().count(Opcode::Bc), 3);
    assert_eq!(ctx.stats().bc_taken, 2);
    assert_eq!(ctx.stats().reported_fetches(), 8);

    let report = ctx.stats().to_string();
    assert!(report.contains("    BC  instructions  = 3, taken = 2 (66.7%)\n"));
    assert!(report.contains("    BCT instructions  = 0\n"));
}

#[test]
fn cache_thrash_between_three_lines() {
    // Three words in set 0 with tags 1, 2, and 3, loaded round robin twice.
    let program = ProgramBuilder::new()
        .l(1, 0x080)
        .l(2, 0x100)
        .l(3, 0x180)
        .l(1, 0x080)
        .l(2, 0x100)
        .l(3, 0x180)
        .halt()
        .build();
    let mut ctx = TestContext::new(&program);
    ctx.run().unwrap();

    assert_eq!(ctx.stats().cache_misses, 6);
    assert_eq!(ctx.stats().cache_hits, 0);
    assert_eq!(ctx.stats().mem_reads, 6);
}

#[test]
fn disabled_cache_counts_nothing() {
    let config = Config::from_json(r#"{ "cache": { "enabled": false } }"#).unwrap();
    let mut sim = Simulator::from_reader(LOAD_COMPARE.as_bytes(), &config).unwrap();
    sim.run(&mut NullSink).unwrap();

    assert_eq!(sim.stats().cache_hits, 0);
    assert_eq!(sim.stats().cache_misses, 0);
    assert_eq!(sim.stats().mem_reads, 2);
    assert_eq!(sim.cpu.regs.read(2), 0x2A);
}

#[test]
fn program_without_instructions_reports_zero_fetches() {
    let mut sim = Simulator::from_reader("".as_bytes(), &Config::default()).unwrap();
    sim.run(&mut NullSink).unwrap();
    assert_eq!(sim.stats().fetches, 1);
    assert!(sim.stats().to_string().contains("  instruction fetches = 0\n"));
}
