//! # Register File and Flags
//!
//! Eight 8-bit registers, usable alone or as four 16-bit pairs (AF, BC, DE, HL).
//! Pairs are always `(high << 8) | low`. This is the opposite byte order from
//! 16-bit immediates in the instruction stream, which are little-endian; see
//! [`crate::ProgramImage::read16`].
//!
//! ## Flags
//!
//! ```text
//!   7   6   5   4   3 2 1 0
//!   Z   N   H   C   0 0 0 0
//! ```
//!
//! The low nibble of F is always zero.

use bitflags::bitflags;

bitflags! {
    /// Condition bits held in the F register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u8 {
        /// Set if the result was zero.
        const ZERO = 0b1000_0000;
        /// Set if the last arithmetic operation was a subtraction.
        const SUBTRACT = 0b0100_0000;
        /// Set on carry out of bit 3 (or bit 11 for 16-bit adds).
        const HALF_CARRY = 0b0010_0000;
        /// Set on carry out of bit 7 (or bit 15), or borrow.
        const CARRY = 0b0001_0000;
    }
}

/// Merges two bytes into a 16-bit word, high byte first.
///
/// ```
/// use lr35902::registers::merge_bytes;
/// assert_eq!(merge_bytes(0x12, 0x34), 0x1234);
/// ```
#[inline]
pub const fn merge_bytes(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Splits a 16-bit word into `(high, low)`.
#[inline]
pub const fn split_word(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// The general purpose registers and the flags byte.
///
/// PC and SP live on [`crate::CPU`]; this struct holds only what the
/// register-pair encoding can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// Flags (low half of AF)
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
}

impl Registers {
    /// AF pair. Only used by PUSH/POP; the ALU never treats F as data.
    pub fn af(&self) -> u16 {
        merge_bytes(self.a, self.f.bits())
    }

    /// Sets AF. Undefined flag bits are discarded.
    pub fn set_af(&mut self, value: u16) {
        let (a, f) = split_word(value);
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    pub fn bc(&self) -> u16 {
        merge_bytes(self.b, self.c)
    }

    pub fn set_bc(&mut self, value: u16) {
        (self.b, self.c) = split_word(value);
    }

    pub fn de(&self) -> u16 {
        merge_bytes(self.d, self.e)
    }

    pub fn set_de(&mut self, value: u16) {
        (self.d, self.e) = split_word(value);
    }

    pub fn hl(&self) -> u16 {
        merge_bytes(self.h, self.l)
    }

    pub fn set_hl(&mut self, value: u16) {
        (self.h, self.l) = split_word(value);
    }

    /// Returns true if every flag in `flag` is set.
    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.f.contains(flag)
    }

    /// Sets or clears `flag`, leaving the other bits alone.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.f.set(flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_high_byte_first() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        assert_eq!(regs.b, 0x12);
        assert_eq!(regs.c, 0x34);
        assert_eq!(regs.bc(), 0x1234);

        regs.d = 0xBE;
        regs.e = 0xEF;
        assert_eq!(regs.de(), 0xBEEF);
    }

    #[test]
    fn test_af_masks_low_nibble() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f.bits(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn test_flag_bit_positions() {
        assert_eq!(Flags::ZERO.bits(), 1 << 7);
        assert_eq!(Flags::SUBTRACT.bits(), 1 << 6);
        assert_eq!(Flags::HALF_CARRY.bits(), 1 << 5);
        assert_eq!(Flags::CARRY.bits(), 1 << 4);
        assert_eq!(Flags::all().bits(), 0xF0);
    }

    #[test]
    fn test_set_flag_leaves_others() {
        let mut regs = Registers::default();
        regs.f = Flags::CARRY | Flags::SUBTRACT;
        regs.set_flag(Flags::ZERO, true);
        regs.set_flag(Flags::CARRY, false);
        assert_eq!(regs.f, Flags::ZERO | Flags::SUBTRACT);
    }

    #[test]
    fn test_merge_split_round_trip() {
        for value in [0x0000u16, 0x00FF, 0xFF00, 0x1234, 0xFFFF] {
            let (hi, lo) = split_word(value);
            assert_eq!(merge_bytes(hi, lo), value);
        }
    }
}
