//! # Operand Selectors
//!
//! The decoded opcode fields index into a handful of fixed operand tables.
//! This module names those tables so instruction bodies can say
//! `Reg8::from_index(fields.z)` instead of matching on raw numbers.
//!
//! | Field use | Table | Entries |
//! |-----------|-------|---------|
//! | `r[y]`, `r[z]` | [`Reg8`] | B C D E H L (HL) A |
//! | `rp[p]` | [`Reg16`] | BC DE HL SP |
//! | `rp2[p]` | [`StackReg16`] | BC DE HL AF |
//! | `cc[y]` | [`Condition`] | NZ Z NC C |
//! | `alu[y]` | [`AluOp`] | ADD ADC SUB SBC AND XOR OR CP |
//! | `rot[y]` | [`RotateOp`] | RLC RRC RL RR SLA SRA SWAP SRL |

/// 8-bit operand selected by a 3-bit field.
///
/// Index 6 is not a register: it addresses memory through HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address held in HL.
    HlIndirect,
    A,
}

impl Reg8 {
    /// Maps a 3-bit field value to its operand. Only the low three bits are used.
    pub const fn from_index(index: u8) -> Self {
        match index & 0b111 {
            0 => Reg8::B,
            1 => Reg8::C,
            2 => Reg8::D,
            3 => Reg8::E,
            4 => Reg8::H,
            5 => Reg8::L,
            6 => Reg8::HlIndirect,
            _ => Reg8::A,
        }
    }

    /// Assembler spelling of the operand.
    pub const fn name(self) -> &'static str {
        match self {
            Reg8::B => "B",
            Reg8::C => "C",
            Reg8::D => "D",
            Reg8::E => "E",
            Reg8::H => "H",
            Reg8::L => "L",
            Reg8::HlIndirect => "(HL)",
            Reg8::A => "A",
        }
    }
}

/// 16-bit register pair for loads and arithmetic (`rp[p]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

impl Reg16 {
    /// Maps a 2-bit field value to its pair. Only the low two bits are used.
    pub const fn from_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }
}

/// 16-bit register pair for PUSH/POP (`rp2[p]`).
///
/// AF replaces SP; the flags byte is only ever the low half of a pair here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackReg16 {
    BC,
    DE,
    HL,
    AF,
}

impl StackReg16 {
    /// Maps a 2-bit field value to its pair. Only the low two bits are used.
    pub const fn from_index(index: u8) -> Self {
        match index & 0b11 {
            0 => StackReg16::BC,
            1 => StackReg16::DE,
            2 => StackReg16::HL,
            _ => StackReg16::AF,
        }
    }
}

/// Branch condition (`cc[y]`), tested against the flags register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Zero flag clear.
    NotZero,
    /// Zero flag set.
    Zero,
    /// Carry flag clear.
    NotCarry,
    /// Carry flag set.
    Carry,
}

impl Condition {
    /// Maps a field value to its condition. Only the low two bits are used.
    pub const fn from_index(index: u8) -> Self {
        match index & 0b11 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NotCarry,
            _ => Condition::Carry,
        }
    }
}

/// Accumulator arithmetic/logic operation (`alu[y]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn from_index(index: u8) -> Self {
        match index & 0b111 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// CB-prefixed rotate/shift operation (`rot[y]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotateOp {
    pub const fn from_index(index: u8) -> Self {
        match index & 0b111 {
            0 => RotateOp::Rlc,
            1 => RotateOp::Rrc,
            2 => RotateOp::Rl,
            3 => RotateOp::Rr,
            4 => RotateOp::Sla,
            5 => RotateOp::Sra,
            6 => RotateOp::Swap,
            _ => RotateOp::Srl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reg8_order_matches_encoding() {
        let expected = [
            Reg8::B,
            Reg8::C,
            Reg8::D,
            Reg8::E,
            Reg8::H,
            Reg8::L,
            Reg8::HlIndirect,
            Reg8::A,
        ];
        for (i, reg) in expected.iter().enumerate() {
            assert_eq!(Reg8::from_index(i as u8), *reg);
        }
        assert_eq!(Reg8::from_index(6).name(), "(HL)");
    }

    #[test]
    fn test_pair_tables_differ_only_in_last_slot() {
        assert_eq!(Reg16::from_index(3), Reg16::SP);
        assert_eq!(StackReg16::from_index(3), StackReg16::AF);
        assert_eq!(Reg16::from_index(2), Reg16::HL);
        assert_eq!(StackReg16::from_index(2), StackReg16::HL);
    }

    #[test]
    fn test_condition_uses_low_two_bits() {
        // JR cc uses y-4, which is the same as masking y to two bits
        assert_eq!(Condition::from_index(4), Condition::NotZero);
        assert_eq!(Condition::from_index(7), Condition::Carry);
    }
}
