//! # Load and Output Instructions
//!
//! - LDI: load an immediate value into a register
//! - PRN: emit a register value through the console device
//!
//! LDI's second operand is the only operand byte in the instruction set that
//! is used as a literal value rather than a register index.

use crate::console::Console;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, CPU};

/// Executes the LDI instruction: `reg[operand1] = operand2`.
pub(crate) fn execute_ldi<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    let value = cpu.fetch_operand(2)?;

    cpu.registers.set(reg, value)?;
    cpu.advance(meta);
    Ok(())
}

/// Executes the PRN instruction: prints the named register's value through
/// the console.
pub(crate) fn execute_prn<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg = cpu.fetch_operand(1)?;
    let value = cpu.registers.get(reg)?;

    cpu.console.print_value(value);
    cpu.advance(meta);
    Ok(())
}
