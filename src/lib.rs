//! # Micro-8 Virtual Machine Core
//!
//! An emulator for the Micro-8, a pedagogical 8-bit stored-program computer:
//! 256 bytes of flat memory, eight general-purpose registers, a condition-flags
//! register, and a downward-growing stack in high memory.
//!
//! The machine demonstrates the classic fetch-decode-execute cycle: each step
//! reads the opcode byte at the program counter, looks it up in a static
//! instruction table, and dispatches to the handler, which may touch the ALU,
//! the stack, or the control flow. Execution continues until a `HLT`
//! instruction or a fatal fault.
//!
//! ## Quick Start
//!
//! ```rust
//! use micro8::{Capture, CPU};
//!
//! // LDI R0,8; PRN R0; HLT
//! let program = [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001];
//!
//! let mut cpu = CPU::new(Capture::new());
//! cpu.load(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.console().values(), &[8]);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: all opcode metadata lives in a single
//!   256-entry table (`OPCODE_TABLE`); an opcode with no entry is a fatal
//!   `UnknownInstruction` fault, never a silent skip.
//! - **Checked data model**: every memory and register access goes through a
//!   bounds-checked accessor and fails with an explicit error instead of
//!   panicking.
//! - **Output seam**: the `PRN` instruction emits through the [`Console`]
//!   trait, so embedders and tests choose where printed values go.
//! - **Single owner**: all mutable machine state (memory, registers, flags,
//!   PC, SP) lives in one [`CPU`] value; there are no globals.
//!
//! ## Modules
//!
//! - `cpu` - machine state and the fetch-decode-execute loop
//! - `memory` - the 256-byte flat memory
//! - `registers` - the eight-slot register file
//! - `flags` - the condition-flags register
//! - `opcodes` - opcode constants and the decode table
//! - `console` - output device implementations
//! - `loader` - the line-oriented program image format

pub mod console;
pub mod cpu;
pub mod flags;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use console::{Capture, Console, StdConsole};
pub use cpu::{State, CPU, STACK_TOP};
pub use flags::Flags;
pub use loader::LoadError;
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, REGISTER_COUNT};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Every variant is fatal at the point of detection: the machine transitions
/// to [`State::Halted`] and performs no recovery or retry. The emulated
/// program has no notion of exception handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A memory access resolved to an address outside 0-255.
    #[error("memory address 0x{addr:02X} is out of range")]
    AddressOutOfRange {
        /// The offending address.
        addr: u16,
    },

    /// A register operand resolved to an index outside 0-7.
    #[error("register index {index} is out of range")]
    InvalidRegister {
        /// The offending register index.
        index: u8,
    },

    /// The opcode byte at the program counter has no entry in the
    /// instruction table.
    #[error("unknown instruction 0x{opcode:02X} at address 0x{addr:02X}")]
    UnknownInstruction {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// The address it was fetched from.
        addr: u16,
    },

    /// A non-arithmetic mnemonic was routed into the ALU.
    #[error("unsupported ALU operation {op}")]
    UnsupportedAluOp {
        /// The mnemonic the ALU rejected.
        op: Mnemonic,
    },

    /// A push would drive the stack pointer below the stack floor and into
    /// the loaded program region.
    #[error("stack overflow: stack pointer at 0x{sp:02X} cannot grow further")]
    StackOverflow {
        /// The stack pointer at the time of the fault.
        sp: u16,
    },

    /// A pop would drive the stack pointer above the initial top of stack.
    #[error("stack underflow: stack pointer at 0x{sp:02X} has nothing to pop")]
    StackUnderflow {
        /// The stack pointer at the time of the fault.
        sp: u16,
    },
}
