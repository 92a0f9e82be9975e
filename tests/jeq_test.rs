//! Tests for the JEQ (Jump if Equal) instruction.
//!
//! Tests cover:
//! - Branch taken when the EQUAL flag is set
//! - Fall through (PC advance by 2) when the flags are clear or hold an
//!   inequality outcome
//! - End-to-end: compare-equal then branch to a print

use micro8::{opcodes, Capture, CPU};

fn setup_cpu() -> CPU<Capture> {
    CPU::new(Capture::new())
}

// ========== Branch Taken Tests ==========

#[test]
fn test_jeq_taken_when_equal() {
    let mut cpu = setup_cpu();

    // 0: LDI R0,5; 3: LDI R1,5; 6: LDI R2,15; 9: CMP R0,R1; 12: JEQ R2;
    // 14: HLT; 15: PRN R0; 17: HLT
    cpu.load(&[
        opcodes::LDI,
        0,
        5,
        opcodes::LDI,
        1,
        5,
        opcodes::LDI,
        2,
        15,
        opcodes::CMP,
        0,
        1,
        opcodes::JEQ,
        2,
        opcodes::HLT,
        opcodes::PRN,
        0,
        opcodes::HLT,
    ])
    .unwrap();
    cpu.run().unwrap();

    // The branch skipped the first HLT and reached the print.
    assert_eq!(cpu.console().values(), &[5]);
    assert_eq!(cpu.pc(), 18);
}

// ========== Fall-Through Tests ==========

#[test]
fn test_jeq_falls_through_before_any_cmp() {
    let mut cpu = setup_cpu();

    // 0: LDI R2,10; 3: JEQ R2; 5: LDI R1,1; 8: HLT
    cpu.load(&[
        opcodes::LDI,
        2,
        10,
        opcodes::JEQ,
        2,
        opcodes::LDI,
        1,
        1,
        opcodes::HLT,
    ])
    .unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    // No CMP has run, so the branch is not taken and PC advances by 2.
    assert_eq!(cpu.pc(), 5);

    cpu.run().unwrap();
    assert_eq!(cpu.registers().get(1).unwrap(), 1);
}

#[test]
fn test_jeq_falls_through_on_inequality() {
    let mut cpu = setup_cpu();

    // 0: LDI R0,3; 3: LDI R1,9; 6: LDI R2,16; 9: CMP R0,R1; 12: JEQ R2;
    // 14: PRN R0; 16: HLT
    cpu.load(&[
        opcodes::LDI,
        0,
        3,
        opcodes::LDI,
        1,
        9,
        opcodes::LDI,
        2,
        16,
        opcodes::CMP,
        0,
        1,
        opcodes::JEQ,
        2,
        opcodes::PRN,
        0,
        opcodes::HLT,
    ])
    .unwrap();
    cpu.run().unwrap();

    // LESS was set, so the branch fell through into the print.
    assert_eq!(cpu.console().values(), &[3]);
}
