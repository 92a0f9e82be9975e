//! # Branch Instructions
//!
//! Unconditional and conditional jumps. All three take one operand byte
//! naming the register that holds the target address; the conditional forms
//! read the EQUAL flag written by the most recent CMP and fall through
//! (advancing past their own bytes) when the condition does not hold.

use crate::console::Console;
use crate::flags::Flags;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, CPU};

/// Executes the JMP instruction: unconditional jump to the address held in
/// the named register.
pub(crate) fn execute_jmp<C: Console>(
    cpu: &mut CPU<C>,
    _meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    cpu.pc = cpu.registers.get(reg)? as u16;
    Ok(())
}

/// Executes the JEQ instruction: jump if the EQUAL flag is set, else fall
/// through.
pub(crate) fn execute_jeq<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    let target = cpu.registers.get(reg)?;

    if cpu.flags.contains(Flags::EQUAL) {
        cpu.pc = target as u16;
    } else {
        cpu.advance(meta);
    }
    Ok(())
}

/// Executes the JNE instruction: jump if the EQUAL flag is clear, else fall
/// through.
pub(crate) fn execute_jne<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    let target = cpu.registers.get(reg)?;

    if cpu.flags.contains(Flags::EQUAL) {
        cpu.advance(meta);
    } else {
        cpu.pc = target as u16;
    }
    Ok(())
}
