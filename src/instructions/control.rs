//! # Control Flow Instructions
//!
//! Subroutine call/return and the halt instruction:
//! - CALL: push the return address, then jump to the address held in the
//!   named register
//! - RET: pop the top of stack directly into the program counter
//! - HLT: stop execution
//!
//! CALL and RET share the stack with PUSH and POP. The engine does not
//! verify that calls and returns balance; an unbalanced pair leaves the
//! program counter in unintended memory and surfaces later, typically as a
//! decode fault.

use crate::console::Console;
use crate::cpu::State;
use crate::instructions::stack;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, CPU};

/// Executes the CALL instruction.
///
/// Pushes the address of the instruction after CALL's operand byte, then
/// sets the program counter to the address held in the named register. This
/// is exactly "push return address, then unconditional jump".
pub(crate) fn execute_call<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    let target = cpu.registers.get(reg)?;

    // The stack stores byte addresses; a program that fits below the stack
    // floor can never place a CALL high enough for this to truncate.
    let return_addr = (cpu.pc + meta.size() as u16) as u8;

    stack::push_byte(cpu, return_addr)?;
    cpu.pc = target as u16;
    Ok(())
}

/// Executes the RET instruction: pops the return address into the program
/// counter. No register is involved.
pub(crate) fn execute_ret<C: Console>(cpu: &mut CPU<C>) -> Result<(), ExecutionError> {
    let return_addr = stack::pop_byte(cpu)?;
    cpu.pc = return_addr as u16;
    Ok(())
}

/// Executes the HLT instruction: advances past the opcode, then stops the
/// machine.
pub(crate) fn execute_hlt<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    cpu.advance(meta);
    cpu.state = State::Halted;
    Ok(())
}
