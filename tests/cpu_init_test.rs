//! Machine initialization tests.
//!
//! Verifies the power-on state: zeroed memory and registers, PC at 0, SP at
//! the top of the stack region, clear flags, and the Running state.

use micro8::{Capture, Flags, State, CPU, MEMORY_SIZE, REGISTER_COUNT, STACK_TOP};

#[test]
fn test_initial_register_state() {
    let cpu = CPU::new(Capture::new());

    assert_eq!(cpu.pc(), 0);
    assert_eq!(cpu.sp(), STACK_TOP);
    assert_eq!(cpu.sp(), 0xF4);
    assert_eq!(cpu.flags(), Flags::empty());
    assert_eq!(cpu.state(), State::Running);
}

#[test]
fn test_general_purpose_registers_start_zeroed() {
    let cpu = CPU::new(Capture::new());

    for index in 0..REGISTER_COUNT as u8 {
        assert_eq!(cpu.registers().get(index).unwrap(), 0);
    }
}

#[test]
fn test_memory_starts_zeroed() {
    let cpu = CPU::new(Capture::new());

    for addr in 0..MEMORY_SIZE as u16 {
        assert_eq!(cpu.memory().read(addr).unwrap(), 0);
    }
}

#[test]
fn test_console_starts_empty() {
    let cpu = CPU::new(Capture::new());

    assert!(cpu.console().values().is_empty());
}
