//! # Register File
//!
//! Eight general-purpose unsigned 8-bit registers, R0-R7, independent of
//! memory but addressed by operand bytes read from memory. Register values
//! wrap modulo 256 on arithmetic overflow; the wrapping itself is the ALU's
//! concern, the register file only stores bytes.

use crate::ExecutionError;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// The eight-slot general-purpose register file.
///
/// Register indices come from decoded operand bytes, so they are untrusted
/// input: both accessors validate the index and fail with
/// [`ExecutionError::InvalidRegister`] outside 0-7.
///
/// # Examples
///
/// ```
/// use micro8::Registers;
///
/// let mut regs = Registers::new();
/// regs.set(3, 0x2A).unwrap();
/// assert_eq!(regs.get(3).unwrap(), 0x2A);
///
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Registers {
    slots: [u8; REGISTER_COUNT],
}

impl Registers {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            slots: [0; REGISTER_COUNT],
        }
    }

    /// Returns the value of register `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidRegister`] if `index` is outside 0-7.
    pub fn get(&self, index: u8) -> Result<u8, ExecutionError> {
        self.slots
            .get(index as usize)
            .copied()
            .ok_or(ExecutionError::InvalidRegister { index })
    }

    /// Sets register `index` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidRegister`] if `index` is outside 0-7.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        match self.slots.get_mut(index as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ExecutionError::InvalidRegister { index }),
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_start_zeroed() {
        let regs = Registers::new();
        for index in 0..REGISTER_COUNT as u8 {
            assert_eq!(regs.get(index).unwrap(), 0);
        }
    }

    #[test]
    fn test_register_get_set() {
        let mut regs = Registers::new();

        regs.set(0, 0x11).unwrap();
        regs.set(7, 0xFF).unwrap();

        assert_eq!(regs.get(0).unwrap(), 0x11);
        assert_eq!(regs.get(7).unwrap(), 0xFF);
        assert_eq!(regs.get(1).unwrap(), 0x00);
    }

    #[test]
    fn test_register_index_out_of_range_is_error() {
        let mut regs = Registers::new();

        assert_eq!(
            regs.get(8),
            Err(ExecutionError::InvalidRegister { index: 8 })
        );
        assert_eq!(
            regs.set(255, 1),
            Err(ExecutionError::InvalidRegister { index: 255 })
        );
    }
}
