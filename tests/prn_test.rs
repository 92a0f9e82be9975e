//! Tests for the PRN (Print Register) instruction.
//!
//! Tests cover:
//! - The named register's value reaches the console
//! - Multiple prints arrive in order
//! - PC advance by 2 (opcode + one operand)
//! - Registers and flags unaffected
//! - Invalid register operand is a fatal fault

use micro8::{opcodes, Capture, ExecutionError, State, CPU};

fn setup_cpu() -> CPU<Capture> {
    CPU::new(Capture::new())
}

// ========== Basic PRN Operation Tests ==========

#[test]
fn test_prn_emits_register_value() {
    let mut cpu = setup_cpu();

    // LDI R0,72; PRN R0
    cpu.load(&[opcodes::LDI, 0, 72, opcodes::PRN, 0]).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.console().values(), &[72]);
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_prn_fresh_register_prints_zero() {
    let mut cpu = setup_cpu();

    cpu.load(&[opcodes::PRN, 5]).unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.console().values(), &[0]);
}

#[test]
fn test_prn_multiple_prints_in_order() {
    let mut cpu = setup_cpu();

    // LDI R0,1; LDI R1,2; PRN R0; PRN R1; PRN R0
    cpu.load(&[
        opcodes::LDI,
        0,
        1,
        opcodes::LDI,
        1,
        2,
        opcodes::PRN,
        0,
        opcodes::PRN,
        1,
        opcodes::PRN,
        0,
    ])
    .unwrap();
    for _ in 0..5 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.console().values(), &[1, 2, 1]);
}

#[test]
fn test_prn_does_not_modify_register() {
    let mut cpu = setup_cpu();

    cpu.load(&[opcodes::LDI, 0, 99, opcodes::PRN, 0]).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.registers().get(0).unwrap(), 99);
}

// ========== Fault Tests ==========

#[test]
fn test_prn_invalid_register_is_fatal() {
    let mut cpu = setup_cpu();

    cpu.load(&[opcodes::PRN, 200]).unwrap();

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::InvalidRegister { index: 200 })
    );
    assert_eq!(cpu.state(), State::Halted);
    assert!(cpu.console().values().is_empty());
}
