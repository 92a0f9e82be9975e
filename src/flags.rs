//! # Condition Flags
//!
//! The flags register holds the tri-state outcome of the most recent `CMP`
//! instruction. It is written only by the ALU and read only by the
//! conditional branch instructions.

use bitflags::bitflags;

bitflags! {
    /// The condition-flags register.
    ///
    /// After every `CMP` exactly one of the three bits is set; the other two
    /// are cleared at the same time, so stale bits from an earlier comparison
    /// never survive. Before the first `CMP` the register is empty, which the
    /// branch instructions read as "not equal".
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// The compared registers held equal values.
        const EQUAL = 1 << 0;
        /// The first compared register held the greater value.
        const GREATER = 1 << 1;
        /// The first compared register held the lesser value.
        const LESS = 1 << 2;
    }
}
