//! # Opcode Bit-Field Decoding
//!
//! Every LR35902 opcode byte splits into the same octal fields:
//!
//! ```text
//!   7 6 | 5 4 3 | 2 1 0
//!    x  |   y   |   z
//!       | p   q |
//! ```
//!
//! - `x` selects the instruction group
//! - `y` selects a register, condition or sub-operation
//! - `z` selects a register or operand
//! - `p` and `q` split `y` further for register-pair instructions
//!
//! Table lookup is by raw byte; these fields are only consumed inside
//! operation bodies.

/// The decoded fields of one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpcodeFields {
    /// Bits 7-6.
    pub x: u8,
    /// Bits 5-3.
    pub y: u8,
    /// Bits 2-0.
    pub z: u8,
    /// Bits 5-4 (`y >> 1`).
    pub p: u8,
    /// Bit 3 (`y & 1`).
    pub q: u8,
}

impl OpcodeFields {
    /// Splits an opcode byte into its fields. Total over all 256 values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lr35902::OpcodeFields;
    ///
    /// // LD HL,d16 = 00_100_001
    /// let f = OpcodeFields::decode(0x21);
    /// assert_eq!((f.x, f.y, f.z, f.p, f.q), (0, 4, 1, 2, 0));
    /// ```
    pub const fn decode(value: u8) -> Self {
        let y = (value >> 3) & 0b111;
        Self {
            x: value >> 6,
            y,
            z: value & 0b111,
            p: y >> 1,
            q: y & 1,
        }
    }

    /// Reassembles the opcode byte.
    pub const fn encode(self) -> u8 {
        (self.x << 6) | (self.y << 3) | self.z
    }
}

impl From<u8> for OpcodeFields {
    fn from(value: u8) -> Self {
        Self::decode(value)
    }
}
