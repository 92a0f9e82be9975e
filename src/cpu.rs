//! # CPU State and Execution
//!
//! This module contains the machine-state struct and the fetch-decode-execute
//! loop.
//!
//! ## Machine State
//!
//! One [`CPU`] value owns everything mutable:
//! - **Memory**: 256 bytes of flat storage
//! - **Registers**: eight general-purpose 8-bit registers
//! - **Program counter** (PC): address of the next byte to fetch
//! - **Stack pointer** (SP): top of the downward-growing stack, reset to
//!   [`STACK_TOP`]
//! - **Flags**: condition bits written by `CMP`, read by `JEQ`/`JNE`
//! - **Console**: the output device `PRN` prints through
//!
//! ## Execution Model
//!
//! - [`CPU::step`]: execute one instruction
//! - [`CPU::run`]: execute until the machine halts
//!
//! Any fault transitions the machine to [`State::Halted`] before the error
//! is returned, so a faulted machine cannot be stepped past the failure.

use crate::console::Console;
use crate::flags::Flags;
use crate::instructions;
use crate::memory::Memory;
use crate::opcodes::{self, Mnemonic, OpcodeMetadata};
use crate::registers::{Registers, REGISTER_COUNT};
use crate::ExecutionError;

/// Initial stack-pointer value: the reserved top-of-memory address the stack
/// grows down from. The cell at this address is never written by a push; the
/// first push lands one below it.
pub const STACK_TOP: u16 = 0xF4;

/// Execution state of the machine.
///
/// `Halted` is terminal: it is reached by executing `HLT` or by any fatal
/// fault, and a halted machine ignores further `step()` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The machine will execute the instruction at the program counter on
    /// the next step.
    Running,
    /// The machine has stopped and will not execute further instructions.
    Halted,
}

/// Micro-8 machine state and execution context.
///
/// The struct owns all processor state plus the console device used by the
/// `PRN` instruction. It is generic over the console implementation via the
/// [`Console`] trait.
///
/// # Examples
///
/// ```
/// use micro8::{Capture, State, CPU, STACK_TOP};
///
/// let cpu = CPU::new(Capture::new());
///
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), STACK_TOP);
/// assert_eq!(cpu.state(), State::Running);
/// ```
#[derive(Debug)]
pub struct CPU<C: Console> {
    /// General-purpose register file R0-R7.
    pub(crate) registers: Registers,

    /// 256-byte flat memory.
    pub(crate) memory: Memory,

    /// Program counter (address of the next byte to fetch).
    pub(crate) pc: u16,

    /// Stack pointer. Decrements before a push-style write, increments after
    /// a pop-style read.
    pub(crate) sp: u16,

    /// Condition flags from the most recent `CMP`.
    pub(crate) flags: Flags,

    /// Execution state.
    pub(crate) state: State,

    /// Lowest address the stack may occupy. Set to the loaded image length
    /// so the stack can never descend into the program region.
    pub(crate) stack_floor: u16,

    /// Output device for `PRN`.
    pub(crate) console: C,
}

impl<C: Console> CPU<C> {
    /// Creates a new machine in its power-on state.
    ///
    /// Memory and registers are zeroed, the program counter is 0, the stack
    /// pointer is [`STACK_TOP`], the flags are clear, and the machine is
    /// [`State::Running`].
    pub fn new(console: C) -> Self {
        Self {
            registers: Registers::new(),
            memory: Memory::new(),
            pc: 0,
            sp: STACK_TOP,
            flags: Flags::empty(),
            state: State::Running,
            stack_floor: 0,
            console,
        }
    }

    /// Installs a program image at address 0.
    ///
    /// The image length becomes the stack floor: a later push that would
    /// descend into the program region faults with `StackOverflow` instead
    /// of corrupting it.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::AddressOutOfRange`] if the image is larger
    /// than memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro8::{Capture, CPU};
    ///
    /// let mut cpu = CPU::new(Capture::new());
    /// cpu.load(&[0b0000_0001]).unwrap(); // HLT
    /// cpu.run().unwrap();
    /// ```
    pub fn load(&mut self, image: &[u8]) -> Result<(), ExecutionError> {
        for (addr, &byte) in image.iter().enumerate() {
            self.memory.write(addr as u16, byte)?;
        }
        self.stack_floor = image.len() as u16;
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// Performs one fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at the program counter.
    /// 2. Look it up in the instruction table; a miss is a fatal
    ///    [`ExecutionError::UnknownInstruction`].
    /// 3. Invoke the handler, which either advances the program counter past
    ///    the instruction or redirects it explicitly - never both.
    ///
    /// On any error the machine transitions to [`State::Halted`] before the
    /// error is returned. Stepping a halted machine is a no-op.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.state == State::Halted {
            return Ok(());
        }

        match self.execute_cycle() {
            Ok(()) => Ok(()),
            Err(fault) => {
                self.state = State::Halted;
                Err(fault)
            }
        }
    }

    /// Runs the machine until it halts.
    ///
    /// Returns `Ok(())` on a clean `HLT` and the fault on any fatal error. A
    /// program that never halts or faults runs forever; bounding execution
    /// is the caller's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use micro8::{opcodes, Capture, CPU};
    ///
    /// // LDI R0,8; LDI R1,9; MUL R0,R1; PRN R0; HLT
    /// let program = [
    ///     opcodes::LDI, 0, 8,
    ///     opcodes::LDI, 1, 9,
    ///     opcodes::MUL, 0, 1,
    ///     opcodes::PRN, 0,
    ///     opcodes::HLT,
    /// ];
    ///
    /// let mut cpu = CPU::new(Capture::new());
    /// cpu.load(&program).unwrap();
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(cpu.console().values(), &[72]);
    /// ```
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.state == State::Running {
            self.step()?;
        }
        Ok(())
    }

    fn execute_cycle(&mut self) -> Result<(), ExecutionError> {
        // Fetch
        let opcode = self.memory.read(self.pc)?;

        // Decode: table miss means the byte is not an instruction
        let meta = opcodes::decode(opcode).ok_or(ExecutionError::UnknownInstruction {
            opcode,
            addr: self.pc,
        })?;

        // Execute
        match meta.mnemonic {
            Mnemonic::Ldi => instructions::load_store::execute_ldi(self, &meta),
            Mnemonic::Prn => instructions::load_store::execute_prn(self, &meta),
            Mnemonic::Add => instructions::alu::execute_add(self, &meta),
            Mnemonic::Mul => instructions::alu::execute_mul(self, &meta),
            Mnemonic::Cmp => instructions::alu::execute_cmp(self, &meta),
            Mnemonic::Push => instructions::stack::execute_push(self, &meta),
            Mnemonic::Pop => instructions::stack::execute_pop(self, &meta),
            Mnemonic::Call => instructions::control::execute_call(self, &meta),
            Mnemonic::Ret => instructions::control::execute_ret(self),
            Mnemonic::Jmp => instructions::branches::execute_jmp(self, &meta),
            Mnemonic::Jeq => instructions::branches::execute_jeq(self, &meta),
            Mnemonic::Jne => instructions::branches::execute_jne(self, &meta),
            Mnemonic::Hlt => instructions::control::execute_hlt(self, &meta),
        }
    }

    /// Reads the operand byte `offset` bytes past the opcode.
    pub(crate) fn fetch_operand(&self, offset: u16) -> Result<u8, ExecutionError> {
        self.memory.read(self.pc + offset)
    }

    /// Advances the program counter past the current instruction.
    pub(crate) fn advance(&mut self, meta: &OpcodeMetadata) {
        self.pc += meta.size() as u16;
    }

    /// Renders one trace line: program counter, the next three memory bytes,
    /// and all eight registers, in two-digit hex.
    ///
    /// This is a debugging aid; the runner binary prints it per cycle when
    /// `--trace` is given.
    pub fn trace_line(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.memory.read(self.pc).unwrap_or(0),
            self.memory.read(self.pc + 1).unwrap_or(0),
            self.memory.read(self.pc + 2).unwrap_or(0),
        );
        for index in 0..REGISTER_COUNT as u8 {
            let value = self.registers.get(index).unwrap_or(0);
            line.push_str(&format!(" {value:02X}"));
        }
        line
    }

    // ========== Accessors ==========

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Sets the stack pointer. Intended for tests and debuggers.
    pub fn set_sp(&mut self, sp: u16) {
        self.sp = sp;
    }

    /// Returns the condition flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Returns the execution state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns a shared reference to memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns a mutable reference to memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns a shared reference to the register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Returns a mutable reference to the register file.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    /// Returns a shared reference to the console device.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns a mutable reference to the console device.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }
}
