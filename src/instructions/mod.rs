//! # Micro-8 Instruction Implementations
//!
//! The implementations of all thirteen instructions, organized by category.
//! Each instruction is a standalone function taking a mutable reference to
//! the CPU plus its decode-table metadata, and follows exactly one program
//! counter policy: advance past its own bytes, or redirect explicitly.
//!
//! ## Categories
//!
//! - **alu**: arithmetic and comparison (ADD, MUL, CMP) plus the ALU core
//! - **branches**: jump instructions (JMP, JEQ, JNE)
//! - **control**: subroutines and halting (CALL, RET, HLT)
//! - **load_store**: register load and output (LDI, PRN)
//! - **stack**: data stack operations (PUSH, POP) and the push/pop helpers

pub mod alu;
pub mod branches;
pub mod control;
pub mod load_store;
pub mod stack;
