//! # ALU Instructions
//!
//! Register-to-register arithmetic and comparison:
//! - ADD: `reg[a] = (reg[a] + reg[b]) mod 256`
//! - MUL: `reg[a] = (reg[a] * reg[b]) mod 256`
//! - CMP: sets exactly one of EQUAL / LESS / GREATER
//!
//! The ALU is the only place numeric overflow is defined; everything else in
//! the machine treats register values as opaque bytes.

use crate::console::Console;
use crate::flags::Flags;
use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{ExecutionError, CPU};

/// Applies an ALU operation in place on the register file (and the flags,
/// for comparisons).
///
/// Only ADD, MUL, and CMP are arithmetic; routing any other mnemonic here is
/// a fatal [`ExecutionError::UnsupportedAluOp`].
pub(crate) fn apply<C: Console>(
    cpu: &mut CPU<C>,
    op: Mnemonic,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    let a = cpu.registers.get(reg_a)?;
    let b = cpu.registers.get(reg_b)?;

    match op {
        Mnemonic::Add => cpu.registers.set(reg_a, a.wrapping_add(b)),
        Mnemonic::Mul => cpu.registers.set(reg_a, a.wrapping_mul(b)),
        Mnemonic::Cmp => {
            // Equality first; the three outcomes are mutually exclusive and
            // the whole register is rewritten every time.
            cpu.flags = if a == b {
                Flags::EQUAL
            } else if a < b {
                Flags::LESS
            } else {
                Flags::GREATER
            };
            Ok(())
        }
        other => Err(ExecutionError::UnsupportedAluOp { op: other }),
    }
}

/// Executes the ADD instruction.
pub(crate) fn execute_add<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.fetch_operand(1)?;
    let reg_b = cpu.fetch_operand(2)?;

    apply(cpu, Mnemonic::Add, reg_a, reg_b)?;
    cpu.advance(meta);
    Ok(())
}

/// Executes the MUL instruction.
pub(crate) fn execute_mul<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.fetch_operand(1)?;
    let reg_b = cpu.fetch_operand(2)?;

    apply(cpu, Mnemonic::Mul, reg_a, reg_b)?;
    cpu.advance(meta);
    Ok(())
}

/// Executes the CMP instruction.
///
/// Compares `reg[a]` with `reg[b]` and rewrites the condition flags. Neither
/// register is modified.
pub(crate) fn execute_cmp<C: Console>(
    cpu: &mut CPU<C>,
    meta: &OpcodeMetadata,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.fetch_operand(1)?;
    let reg_b = cpu.fetch_operand(2)?;

    apply(cpu, Mnemonic::Cmp, reg_a, reg_b)?;
    cpu.advance(meta);
    Ok(())
}
