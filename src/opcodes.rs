//! # Opcode Tables
//!
//! Two 256-entry tables cover the whole LR35902 instruction set:
//!
//! - [`UNPREFIXED_TABLE`] - single-byte opcodes
//! - [`CB_TABLE`] - the rotate/shift/bit space reached through the `0xCB` prefix
//!
//! Each entry is an [`OpcodeDescriptor`]: mnemonic, assembler syntax, operand
//! shape (signed displacement, 0/1/2 immediate bytes) and the [`Operation`] that
//! executes it. The shape alone determines instruction length, so the loop can
//! keep `pc` aligned even for entries it cannot execute.
//!
//! The eleven slots the LR35902 removed from the Z80 map (0xD3, 0xDB, 0xDD, 0xE3,
//! 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD) are [`Operation::Illegal`]. In
//! particular 0xDD, 0xED and 0xFD are not prefixes on this CPU.
//!
//! ## Syntax placeholders
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `d8`  | 8-bit immediate |
//! | `d16` | 16-bit immediate |
//! | `a8`  | 8-bit offset into the 0xFF00 page |
//! | `a16` | 16-bit address |
//! | `r8`  | signed 8-bit displacement |

use std::fmt;

/// The prefix byte that selects [`CB_TABLE`].
pub const CB_PREFIX: u8 = 0xCB;

/// Instruction mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Nop,
    Stop,
    Halt,
    Ld,
    Ldh,
    Inc,
    Dec,
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr,
    Jp,
    Call,
    Ret,
    Reti,
    Rst,
    Push,
    Pop,
    Di,
    Ei,
    /// The `0xCB` escape byte.
    Prefix,
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit,
    Res,
    Set,
    /// A slot with no instruction on this CPU.
    Illegal,
}

impl Mnemonic {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Nop => "NOP",
            Mnemonic::Stop => "STOP",
            Mnemonic::Halt => "HALT",
            Mnemonic::Ld => "LD",
            Mnemonic::Ldh => "LDH",
            Mnemonic::Inc => "INC",
            Mnemonic::Dec => "DEC",
            Mnemonic::Add => "ADD",
            Mnemonic::Adc => "ADC",
            Mnemonic::Sub => "SUB",
            Mnemonic::Sbc => "SBC",
            Mnemonic::And => "AND",
            Mnemonic::Xor => "XOR",
            Mnemonic::Or => "OR",
            Mnemonic::Cp => "CP",
            Mnemonic::Rlca => "RLCA",
            Mnemonic::Rrca => "RRCA",
            Mnemonic::Rla => "RLA",
            Mnemonic::Rra => "RRA",
            Mnemonic::Daa => "DAA",
            Mnemonic::Cpl => "CPL",
            Mnemonic::Scf => "SCF",
            Mnemonic::Ccf => "CCF",
            Mnemonic::Jr => "JR",
            Mnemonic::Jp => "JP",
            Mnemonic::Call => "CALL",
            Mnemonic::Ret => "RET",
            Mnemonic::Reti => "RETI",
            Mnemonic::Rst => "RST",
            Mnemonic::Push => "PUSH",
            Mnemonic::Pop => "POP",
            Mnemonic::Di => "DI",
            Mnemonic::Ei => "EI",
            Mnemonic::Prefix => "PREFIX",
            Mnemonic::Rlc => "RLC",
            Mnemonic::Rrc => "RRC",
            Mnemonic::Rl => "RL",
            Mnemonic::Rr => "RR",
            Mnemonic::Sla => "SLA",
            Mnemonic::Sra => "SRA",
            Mnemonic::Swap => "SWAP",
            Mnemonic::Srl => "SRL",
            Mnemonic::Bit => "BIT",
            Mnemonic::Res => "RES",
            Mnemonic::Set => "SET",
            Mnemonic::Illegal => "???",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of immediate bytes following the opcode (and displacement, if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImmediateSize {
    None,
    Byte,
    Word,
}

impl ImmediateSize {
    pub const fn bytes(self) -> u16 {
        match self {
            ImmediateSize::None => 0,
            ImmediateSize::Byte => 1,
            ImmediateSize::Word => 2,
        }
    }
}

/// One distinct instruction behaviour.
///
/// Variants that cover several opcodes (e.g. `Alu`, `Jr`) pick their operands
/// from the decoded opcode fields at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    /// `LD r[y],r[z]`
    LdRR,
    /// `LD r[y],d8`
    LdRImm,
    /// `LD rp[p],d16`
    LdRpImm,
    /// `LD (BC)/(DE)/(HL+)/(HL-),A`
    LdIndirectA,
    /// `LD A,(BC)/(DE)/(HL+)/(HL-)`
    LdAIndirect,
    /// `LD (a16),SP`
    LdAbsSp,
    /// `LDH (a8),A`
    LdhImmA,
    /// `LDH A,(a8)`
    LdhAImm,
    /// `LD (C),A`
    LdhCA,
    /// `LD A,(C)`
    LdhAC,
    /// `LD (a16),A`
    LdAbsA,
    /// `LD A,(a16)`
    LdAAbs,
    LdSpHl,
    /// `LD HL,SP+r8`
    LdHlSpOffset,
    IncR,
    DecR,
    IncRp,
    DecRp,
    AddHlRp,
    /// `ADD SP,r8`
    AddSpOffset,
    /// `alu[y] r[z]`
    Alu,
    /// `alu[y] d8`
    AluImm,
    /// RLCA, RRCA, RLA, RRA
    RotateA,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jr,
    Jp,
    JpHl,
    Call,
    Ret,
    Reti,
    Rst,
    Push,
    Pop,
    Di,
    Ei,
    /// `rot[y] r[z]` (CB space)
    Rotate,
    Bit,
    Res,
    Set,
}

impl Op {
    /// The operand bytes this behaviour reads: `(has_displacement, immediate)`.
    ///
    /// Table entries must agree with this; the table tests enforce it.
    pub const fn operand_shape(self) -> (bool, ImmediateSize) {
        match self {
            Op::Jr | Op::AddSpOffset | Op::LdHlSpOffset => (true, ImmediateSize::None),
            Op::Stop | Op::LdRImm | Op::AluImm | Op::LdhImmA | Op::LdhAImm => {
                (false, ImmediateSize::Byte)
            }
            Op::LdRpImm | Op::LdAbsSp | Op::LdAbsA | Op::LdAAbs | Op::Jp | Op::Call => {
                (false, ImmediateSize::Word)
            }
            _ => (false, ImmediateSize::None),
        }
    }
}

/// What executing a table slot means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Executes the given behaviour.
    Implemented(Op),
    /// A recognized instruction with no behaviour wired up yet.
    Unimplemented,
    /// Escape byte selecting another table.
    Prefix,
    /// No instruction exists in this slot.
    Illegal,
}

/// Static metadata for one opcode.
///
/// # Examples
///
/// ```
/// use lr35902::{ImmediateSize, Mnemonic, UNPREFIXED_TABLE};
///
/// let ld_hl = &UNPREFIXED_TABLE[0x21];
/// assert_eq!(ld_hl.mnemonic, Mnemonic::Ld);
/// assert_eq!(ld_hl.syntax, "LD HL,d16");
/// assert_eq!(ld_hl.immediate, ImmediateSize::Word);
/// assert_eq!(ld_hl.length(false), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeDescriptor {
    pub mnemonic: Mnemonic,

    /// Assembler syntax with operand placeholders (e.g. `"JR NZ,r8"`).
    pub syntax: &'static str,

    /// Whether a signed displacement byte follows the opcode.
    pub has_displacement: bool,

    /// Immediate bytes following the opcode and displacement.
    pub immediate: ImmediateSize,

    pub operation: Operation,
}

impl OpcodeDescriptor {
    /// Total encoded length: opcode, optional prefix, displacement and immediate.
    pub const fn length(&self, prefixed: bool) -> u16 {
        1 + prefixed as u16 + self.has_displacement as u16 + self.immediate.bytes()
    }

    pub const fn is_implemented(&self) -> bool {
        matches!(self.operation, Operation::Implemented(_))
    }
}

/// Looks up the descriptor for `opcode` in the table selected by `prefix`
/// (`0` for none, [`CB_PREFIX`] for the CB space).
///
/// Returns `None` for any other prefix.
pub fn lookup(prefix: u8, opcode: u8) -> Option<&'static OpcodeDescriptor> {
    match prefix {
        0 => Some(&UNPREFIXED_TABLE[opcode as usize]),
        CB_PREFIX => Some(&CB_TABLE[opcode as usize]),
        _ => None,
    }
}

const fn entry(
    mnemonic: Mnemonic,
    syntax: &'static str,
    has_displacement: bool,
    immediate: ImmediateSize,
    op: Op,
) -> OpcodeDescriptor {
    OpcodeDescriptor {
        mnemonic,
        syntax,
        has_displacement,
        immediate,
        operation: Operation::Implemented(op),
    }
}

const fn imp(mnemonic: Mnemonic, syntax: &'static str, op: Op) -> OpcodeDescriptor {
    entry(mnemonic, syntax, false, ImmediateSize::None, op)
}

const fn d8(mnemonic: Mnemonic, syntax: &'static str, op: Op) -> OpcodeDescriptor {
    entry(mnemonic, syntax, false, ImmediateSize::Byte, op)
}

const fn d16(mnemonic: Mnemonic, syntax: &'static str, op: Op) -> OpcodeDescriptor {
    entry(mnemonic, syntax, false, ImmediateSize::Word, op)
}

const fn disp(mnemonic: Mnemonic, syntax: &'static str, op: Op) -> OpcodeDescriptor {
    entry(mnemonic, syntax, true, ImmediateSize::None, op)
}

const fn prefix() -> OpcodeDescriptor {
    OpcodeDescriptor {
        mnemonic: Mnemonic::Prefix,
        syntax: "PREFIX CB",
        has_displacement: false,
        immediate: ImmediateSize::None,
        operation: Operation::Prefix,
    }
}

const fn illegal() -> OpcodeDescriptor {
    OpcodeDescriptor {
        mnemonic: Mnemonic::Illegal,
        syntax: "???",
        has_displacement: false,
        immediate: ImmediateSize::None,
        operation: Operation::Illegal,
    }
}

/// Opcodes with no prefix byte, indexed by opcode.
pub static UNPREFIXED_TABLE: [OpcodeDescriptor; 256] = [
    // 0x00
    imp(Mnemonic::Nop, "NOP", Op::Nop),
    d16(Mnemonic::Ld, "LD BC,d16", Op::LdRpImm),
    imp(Mnemonic::Ld, "LD (BC),A", Op::LdIndirectA),
    imp(Mnemonic::Inc, "INC BC", Op::IncRp),
    imp(Mnemonic::Inc, "INC B", Op::IncR),
    imp(Mnemonic::Dec, "DEC B", Op::DecR),
    d8(Mnemonic::Ld, "LD B,d8", Op::LdRImm),
    imp(Mnemonic::Rlca, "RLCA", Op::RotateA),
    d16(Mnemonic::Ld, "LD (a16),SP", Op::LdAbsSp),
    imp(Mnemonic::Add, "ADD HL,BC", Op::AddHlRp),
    imp(Mnemonic::Ld, "LD A,(BC)", Op::LdAIndirect),
    imp(Mnemonic::Dec, "DEC BC", Op::DecRp),
    imp(Mnemonic::Inc, "INC C", Op::IncR),
    imp(Mnemonic::Dec, "DEC C", Op::DecR),
    d8(Mnemonic::Ld, "LD C,d8", Op::LdRImm),
    imp(Mnemonic::Rrca, "RRCA", Op::RotateA),
    // 0x10
    d8(Mnemonic::Stop, "STOP d8", Op::Stop),
    d16(Mnemonic::Ld, "LD DE,d16", Op::LdRpImm),
    imp(Mnemonic::Ld, "LD (DE),A", Op::LdIndirectA),
    imp(Mnemonic::Inc, "INC DE", Op::IncRp),
    imp(Mnemonic::Inc, "INC D", Op::IncR),
    imp(Mnemonic::Dec, "DEC D", Op::DecR),
    d8(Mnemonic::Ld, "LD D,d8", Op::LdRImm),
    imp(Mnemonic::Rla, "RLA", Op::RotateA),
    disp(Mnemonic::Jr, "JR r8", Op::Jr),
    imp(Mnemonic::Add, "ADD HL,DE", Op::AddHlRp),
    imp(Mnemonic::Ld, "LD A,(DE)", Op::LdAIndirect),
    imp(Mnemonic::Dec, "DEC DE", Op::DecRp),
    imp(Mnemonic::Inc, "INC E", Op::IncR),
    imp(Mnemonic::Dec, "DEC E", Op::DecR),
    d8(Mnemonic::Ld, "LD E,d8", Op::LdRImm),
    imp(Mnemonic::Rra, "RRA", Op::RotateA),
    // 0x20
    disp(Mnemonic::Jr, "JR NZ,r8", Op::Jr),
    d16(Mnemonic::Ld, "LD HL,d16", Op::LdRpImm),
    imp(Mnemonic::Ld, "LD (HL+),A", Op::LdIndirectA),
    imp(Mnemonic::Inc, "INC HL", Op::IncRp),
    imp(Mnemonic::Inc, "INC H", Op::IncR),
    imp(Mnemonic::Dec, "DEC H", Op::DecR),
    d8(Mnemonic::Ld, "LD H,d8", Op::LdRImm),
    imp(Mnemonic::Daa, "DAA", Op::Daa),
    disp(Mnemonic::Jr, "JR Z,r8", Op::Jr),
    imp(Mnemonic::Add, "ADD HL,HL", Op::AddHlRp),
    imp(Mnemonic::Ld, "LD A,(HL+)", Op::LdAIndirect),
    imp(Mnemonic::Dec, "DEC HL", Op::DecRp),
    imp(Mnemonic::Inc, "INC L", Op::IncR),
    imp(Mnemonic::Dec, "DEC L", Op::DecR),
    d8(Mnemonic::Ld, "LD L,d8", Op::LdRImm),
    imp(Mnemonic::Cpl, "CPL", Op::Cpl),
    // 0x30
    disp(Mnemonic::Jr, "JR NC,r8", Op::Jr),
    d16(Mnemonic::Ld, "LD SP,d16", Op::LdRpImm),
    imp(Mnemonic::Ld, "LD (HL-),A", Op::LdIndirectA),
    imp(Mnemonic::Inc, "INC SP", Op::IncRp),
    imp(Mnemonic::Inc, "INC (HL)", Op::IncR),
    imp(Mnemonic::Dec, "DEC (HL)", Op::DecR),
    d8(Mnemonic::Ld, "LD (HL),d8", Op::LdRImm),
    imp(Mnemonic::Scf, "SCF", Op::Scf),
    disp(Mnemonic::Jr, "JR C,r8", Op::Jr),
    imp(Mnemonic::Add, "ADD HL,SP", Op::AddHlRp),
    imp(Mnemonic::Ld, "LD A,(HL-)", Op::LdAIndirect),
    imp(Mnemonic::Dec, "DEC SP", Op::DecRp),
    imp(Mnemonic::Inc, "INC A", Op::IncR),
    imp(Mnemonic::Dec, "DEC A", Op::DecR),
    d8(Mnemonic::Ld, "LD A,d8", Op::LdRImm),
    imp(Mnemonic::Ccf, "CCF", Op::Ccf),
    // 0x40
    imp(Mnemonic::Ld, "LD B,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD B,A", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD C,A", Op::LdRR),
    // 0x50
    imp(Mnemonic::Ld, "LD D,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD D,A", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD E,A", Op::LdRR),
    // 0x60
    imp(Mnemonic::Ld, "LD H,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD H,A", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD L,A", Op::LdRR),
    // 0x70
    imp(Mnemonic::Ld, "LD (HL),B", Op::LdRR),
    imp(Mnemonic::Ld, "LD (HL),C", Op::LdRR),
    imp(Mnemonic::Ld, "LD (HL),D", Op::LdRR),
    imp(Mnemonic::Ld, "LD (HL),E", Op::LdRR),
    imp(Mnemonic::Ld, "LD (HL),H", Op::LdRR),
    imp(Mnemonic::Ld, "LD (HL),L", Op::LdRR),
    imp(Mnemonic::Halt, "HALT", Op::Halt),
    imp(Mnemonic::Ld, "LD (HL),A", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,B", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,C", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,D", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,E", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,H", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,L", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,(HL)", Op::LdRR),
    imp(Mnemonic::Ld, "LD A,A", Op::LdRR),
    // 0x80
    imp(Mnemonic::Add, "ADD A,B", Op::Alu),
    imp(Mnemonic::Add, "ADD A,C", Op::Alu),
    imp(Mnemonic::Add, "ADD A,D", Op::Alu),
    imp(Mnemonic::Add, "ADD A,E", Op::Alu),
    imp(Mnemonic::Add, "ADD A,H", Op::Alu),
    imp(Mnemonic::Add, "ADD A,L", Op::Alu),
    imp(Mnemonic::Add, "ADD A,(HL)", Op::Alu),
    imp(Mnemonic::Add, "ADD A,A", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,B", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,C", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,D", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,E", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,H", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,L", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,(HL)", Op::Alu),
    imp(Mnemonic::Adc, "ADC A,A", Op::Alu),
    // 0x90
    imp(Mnemonic::Sub, "SUB B", Op::Alu),
    imp(Mnemonic::Sub, "SUB C", Op::Alu),
    imp(Mnemonic::Sub, "SUB D", Op::Alu),
    imp(Mnemonic::Sub, "SUB E", Op::Alu),
    imp(Mnemonic::Sub, "SUB H", Op::Alu),
    imp(Mnemonic::Sub, "SUB L", Op::Alu),
    imp(Mnemonic::Sub, "SUB (HL)", Op::Alu),
    imp(Mnemonic::Sub, "SUB A", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,B", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,C", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,D", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,E", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,H", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,L", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,(HL)", Op::Alu),
    imp(Mnemonic::Sbc, "SBC A,A", Op::Alu),
    // 0xA0
    imp(Mnemonic::And, "AND B", Op::Alu),
    imp(Mnemonic::And, "AND C", Op::Alu),
    imp(Mnemonic::And, "AND D", Op::Alu),
    imp(Mnemonic::And, "AND E", Op::Alu),
    imp(Mnemonic::And, "AND H", Op::Alu),
    imp(Mnemonic::And, "AND L", Op::Alu),
    imp(Mnemonic::And, "AND (HL)", Op::Alu),
    imp(Mnemonic::And, "AND A", Op::Alu),
    imp(Mnemonic::Xor, "XOR B", Op::Alu),
    imp(Mnemonic::Xor, "XOR C", Op::Alu),
    imp(Mnemonic::Xor, "XOR D", Op::Alu),
    imp(Mnemonic::Xor, "XOR E", Op::Alu),
    imp(Mnemonic::Xor, "XOR H", Op::Alu),
    imp(Mnemonic::Xor, "XOR L", Op::Alu),
    imp(Mnemonic::Xor, "XOR (HL)", Op::Alu),
    imp(Mnemonic::Xor, "XOR A", Op::Alu),
    // 0xB0
    imp(Mnemonic::Or, "OR B", Op::Alu),
    imp(Mnemonic::Or, "OR C", Op::Alu),
    imp(Mnemonic::Or, "OR D", Op::Alu),
    imp(Mnemonic::Or, "OR E", Op::Alu),
    imp(Mnemonic::Or, "OR H", Op::Alu),
    imp(Mnemonic::Or, "OR L", Op::Alu),
    imp(Mnemonic::Or, "OR (HL)", Op::Alu),
    imp(Mnemonic::Or, "OR A", Op::Alu),
    imp(Mnemonic::Cp, "CP B", Op::Alu),
    imp(Mnemonic::Cp, "CP C", Op::Alu),
    imp(Mnemonic::Cp, "CP D", Op::Alu),
    imp(Mnemonic::Cp, "CP E", Op::Alu),
    imp(Mnemonic::Cp, "CP H", Op::Alu),
    imp(Mnemonic::Cp, "CP L", Op::Alu),
    imp(Mnemonic::Cp, "CP (HL)", Op::Alu),
    imp(Mnemonic::Cp, "CP A", Op::Alu),
    // 0xC0
    imp(Mnemonic::Ret, "RET NZ", Op::Ret),
    imp(Mnemonic::Pop, "POP BC", Op::Pop),
    d16(Mnemonic::Jp, "JP NZ,a16", Op::Jp),
    d16(Mnemonic::Jp, "JP a16", Op::Jp),
    d16(Mnemonic::Call, "CALL NZ,a16", Op::Call),
    imp(Mnemonic::Push, "PUSH BC", Op::Push),
    d8(Mnemonic::Add, "ADD A,d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 00H", Op::Rst),
    imp(Mnemonic::Ret, "RET Z", Op::Ret),
    imp(Mnemonic::Ret, "RET", Op::Ret),
    d16(Mnemonic::Jp, "JP Z,a16", Op::Jp),
    prefix(),
    d16(Mnemonic::Call, "CALL Z,a16", Op::Call),
    d16(Mnemonic::Call, "CALL a16", Op::Call),
    d8(Mnemonic::Adc, "ADC A,d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 08H", Op::Rst),
    // 0xD0
    imp(Mnemonic::Ret, "RET NC", Op::Ret),
    imp(Mnemonic::Pop, "POP DE", Op::Pop),
    d16(Mnemonic::Jp, "JP NC,a16", Op::Jp),
    illegal(),
    d16(Mnemonic::Call, "CALL NC,a16", Op::Call),
    imp(Mnemonic::Push, "PUSH DE", Op::Push),
    d8(Mnemonic::Sub, "SUB d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 10H", Op::Rst),
    imp(Mnemonic::Ret, "RET C", Op::Ret),
    imp(Mnemonic::Reti, "RETI", Op::Reti),
    d16(Mnemonic::Jp, "JP C,a16", Op::Jp),
    illegal(),
    d16(Mnemonic::Call, "CALL C,a16", Op::Call),
    illegal(),
    d8(Mnemonic::Sbc, "SBC A,d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 18H", Op::Rst),
    // 0xE0
    d8(Mnemonic::Ldh, "LDH (a8),A", Op::LdhImmA),
    imp(Mnemonic::Pop, "POP HL", Op::Pop),
    imp(Mnemonic::Ld, "LD (C),A", Op::LdhCA),
    illegal(),
    illegal(),
    imp(Mnemonic::Push, "PUSH HL", Op::Push),
    d8(Mnemonic::And, "AND d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 20H", Op::Rst),
    disp(Mnemonic::Add, "ADD SP,r8", Op::AddSpOffset),
    imp(Mnemonic::Jp, "JP HL", Op::JpHl),
    d16(Mnemonic::Ld, "LD (a16),A", Op::LdAbsA),
    illegal(),
    illegal(),
    illegal(),
    d8(Mnemonic::Xor, "XOR d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 28H", Op::Rst),
    // 0xF0
    d8(Mnemonic::Ldh, "LDH A,(a8)", Op::LdhAImm),
    imp(Mnemonic::Pop, "POP AF", Op::Pop),
    imp(Mnemonic::Ld, "LD A,(C)", Op::LdhAC),
    imp(Mnemonic::Di, "DI", Op::Di),
    illegal(),
    imp(Mnemonic::Push, "PUSH AF", Op::Push),
    d8(Mnemonic::Or, "OR d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 30H", Op::Rst),
    disp(Mnemonic::Ld, "LD HL,SP+r8", Op::LdHlSpOffset),
    imp(Mnemonic::Ld, "LD SP,HL", Op::LdSpHl),
    d16(Mnemonic::Ld, "LD A,(a16)", Op::LdAAbs),
    imp(Mnemonic::Ei, "EI", Op::Ei),
    illegal(),
    illegal(),
    d8(Mnemonic::Cp, "CP d8", Op::AluImm),
    imp(Mnemonic::Rst, "RST 38H", Op::Rst),
];

/// Opcodes following the `0xCB` prefix, indexed by the second byte.
pub static CB_TABLE: [OpcodeDescriptor; 256] = [
    // 0x00
    imp(Mnemonic::Rlc, "RLC B", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC C", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC D", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC E", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC H", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC L", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC (HL)", Op::Rotate),
    imp(Mnemonic::Rlc, "RLC A", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC B", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC C", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC D", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC E", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC H", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC L", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC (HL)", Op::Rotate),
    imp(Mnemonic::Rrc, "RRC A", Op::Rotate),
    // 0x10
    imp(Mnemonic::Rl, "RL B", Op::Rotate),
    imp(Mnemonic::Rl, "RL C", Op::Rotate),
    imp(Mnemonic::Rl, "RL D", Op::Rotate),
    imp(Mnemonic::Rl, "RL E", Op::Rotate),
    imp(Mnemonic::Rl, "RL H", Op::Rotate),
    imp(Mnemonic::Rl, "RL L", Op::Rotate),
    imp(Mnemonic::Rl, "RL (HL)", Op::Rotate),
    imp(Mnemonic::Rl, "RL A", Op::Rotate),
    imp(Mnemonic::Rr, "RR B", Op::Rotate),
    imp(Mnemonic::Rr, "RR C", Op::Rotate),
    imp(Mnemonic::Rr, "RR D", Op::Rotate),
    imp(Mnemonic::Rr, "RR E", Op::Rotate),
    imp(Mnemonic::Rr, "RR H", Op::Rotate),
    imp(Mnemonic::Rr, "RR L", Op::Rotate),
    imp(Mnemonic::Rr, "RR (HL)", Op::Rotate),
    imp(Mnemonic::Rr, "RR A", Op::Rotate),
    // 0x20
    imp(Mnemonic::Sla, "SLA B", Op::Rotate),
    imp(Mnemonic::Sla, "SLA C", Op::Rotate),
    imp(Mnemonic::Sla, "SLA D", Op::Rotate),
    imp(Mnemonic::Sla, "SLA E", Op::Rotate),
    imp(Mnemonic::Sla, "SLA H", Op::Rotate),
    imp(Mnemonic::Sla, "SLA L", Op::Rotate),
    imp(Mnemonic::Sla, "SLA (HL)", Op::Rotate),
    imp(Mnemonic::Sla, "SLA A", Op::Rotate),
    imp(Mnemonic::Sra, "SRA B", Op::Rotate),
    imp(Mnemonic::Sra, "SRA C", Op::Rotate),
    imp(Mnemonic::Sra, "SRA D", Op::Rotate),
    imp(Mnemonic::Sra, "SRA E", Op::Rotate),
    imp(Mnemonic::Sra, "SRA H", Op::Rotate),
    imp(Mnemonic::Sra, "SRA L", Op::Rotate),
    imp(Mnemonic::Sra, "SRA (HL)", Op::Rotate),
    imp(Mnemonic::Sra, "SRA A", Op::Rotate),
    // 0x30
    imp(Mnemonic::Swap, "SWAP B", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP C", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP D", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP E", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP H", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP L", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP (HL)", Op::Rotate),
    imp(Mnemonic::Swap, "SWAP A", Op::Rotate),
    imp(Mnemonic::Srl, "SRL B", Op::Rotate),
    imp(Mnemonic::Srl, "SRL C", Op::Rotate),
    imp(Mnemonic::Srl, "SRL D", Op::Rotate),
    imp(Mnemonic::Srl, "SRL E", Op::Rotate),
    imp(Mnemonic::Srl, "SRL H", Op::Rotate),
    imp(Mnemonic::Srl, "SRL L", Op::Rotate),
    imp(Mnemonic::Srl, "SRL (HL)", Op::Rotate),
    imp(Mnemonic::Srl, "SRL A", Op::Rotate),
    // 0x40
    imp(Mnemonic::Bit, "BIT 0,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 0,A", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 1,A", Op::Bit),
    // 0x50
    imp(Mnemonic::Bit, "BIT 2,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 2,A", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 3,A", Op::Bit),
    // 0x60
    imp(Mnemonic::Bit, "BIT 4,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 4,A", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 5,A", Op::Bit),
    // 0x70
    imp(Mnemonic::Bit, "BIT 6,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 6,A", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,B", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,C", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,D", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,E", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,H", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,L", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,(HL)", Op::Bit),
    imp(Mnemonic::Bit, "BIT 7,A", Op::Bit),
    // 0x80
    imp(Mnemonic::Res, "RES 0,B", Op::Res),
    imp(Mnemonic::Res, "RES 0,C", Op::Res),
    imp(Mnemonic::Res, "RES 0,D", Op::Res),
    imp(Mnemonic::Res, "RES 0,E", Op::Res),
    imp(Mnemonic::Res, "RES 0,H", Op::Res),
    imp(Mnemonic::Res, "RES 0,L", Op::Res),
    imp(Mnemonic::Res, "RES 0,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 0,A", Op::Res),
    imp(Mnemonic::Res, "RES 1,B", Op::Res),
    imp(Mnemonic::Res, "RES 1,C", Op::Res),
    imp(Mnemonic::Res, "RES 1,D", Op::Res),
    imp(Mnemonic::Res, "RES 1,E", Op::Res),
    imp(Mnemonic::Res, "RES 1,H", Op::Res),
    imp(Mnemonic::Res, "RES 1,L", Op::Res),
    imp(Mnemonic::Res, "RES 1,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 1,A", Op::Res),
    // 0x90
    imp(Mnemonic::Res, "RES 2,B", Op::Res),
    imp(Mnemonic::Res, "RES 2,C", Op::Res),
    imp(Mnemonic::Res, "RES 2,D", Op::Res),
    imp(Mnemonic::Res, "RES 2,E", Op::Res),
    imp(Mnemonic::Res, "RES 2,H", Op::Res),
    imp(Mnemonic::Res, "RES 2,L", Op::Res),
    imp(Mnemonic::Res, "RES 2,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 2,A", Op::Res),
    imp(Mnemonic::Res, "RES 3,B", Op::Res),
    imp(Mnemonic::Res, "RES 3,C", Op::Res),
    imp(Mnemonic::Res, "RES 3,D", Op::Res),
    imp(Mnemonic::Res, "RES 3,E", Op::Res),
    imp(Mnemonic::Res, "RES 3,H", Op::Res),
    imp(Mnemonic::Res, "RES 3,L", Op::Res),
    imp(Mnemonic::Res, "RES 3,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 3,A", Op::Res),
    // 0xA0
    imp(Mnemonic::Res, "RES 4,B", Op::Res),
    imp(Mnemonic::Res, "RES 4,C", Op::Res),
    imp(Mnemonic::Res, "RES 4,D", Op::Res),
    imp(Mnemonic::Res, "RES 4,E", Op::Res),
    imp(Mnemonic::Res, "RES 4,H", Op::Res),
    imp(Mnemonic::Res, "RES 4,L", Op::Res),
    imp(Mnemonic::Res, "RES 4,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 4,A", Op::Res),
    imp(Mnemonic::Res, "RES 5,B", Op::Res),
    imp(Mnemonic::Res, "RES 5,C", Op::Res),
    imp(Mnemonic::Res, "RES 5,D", Op::Res),
    imp(Mnemonic::Res, "RES 5,E", Op::Res),
    imp(Mnemonic::Res, "RES 5,H", Op::Res),
    imp(Mnemonic::Res, "RES 5,L", Op::Res),
    imp(Mnemonic::Res, "RES 5,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 5,A", Op::Res),
    // 0xB0
    imp(Mnemonic::Res, "RES 6,B", Op::Res),
    imp(Mnemonic::Res, "RES 6,C", Op::Res),
    imp(Mnemonic::Res, "RES 6,D", Op::Res),
    imp(Mnemonic::Res, "RES 6,E", Op::Res),
    imp(Mnemonic::Res, "RES 6,H", Op::Res),
    imp(Mnemonic::Res, "RES 6,L", Op::Res),
    imp(Mnemonic::Res, "RES 6,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 6,A", Op::Res),
    imp(Mnemonic::Res, "RES 7,B", Op::Res),
    imp(Mnemonic::Res, "RES 7,C", Op::Res),
    imp(Mnemonic::Res, "RES 7,D", Op::Res),
    imp(Mnemonic::Res, "RES 7,E", Op::Res),
    imp(Mnemonic::Res, "RES 7,H", Op::Res),
    imp(Mnemonic::Res, "RES 7,L", Op::Res),
    imp(Mnemonic::Res, "RES 7,(HL)", Op::Res),
    imp(Mnemonic::Res, "RES 7,A", Op::Res),
    // 0xC0
    imp(Mnemonic::Set, "SET 0,B", Op::Set),
    imp(Mnemonic::Set, "SET 0,C", Op::Set),
    imp(Mnemonic::Set, "SET 0,D", Op::Set),
    imp(Mnemonic::Set, "SET 0,E", Op::Set),
    imp(Mnemonic::Set, "SET 0,H", Op::Set),
    imp(Mnemonic::Set, "SET 0,L", Op::Set),
    imp(Mnemonic::Set, "SET 0,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 0,A", Op::Set),
    imp(Mnemonic::Set, "SET 1,B", Op::Set),
    imp(Mnemonic::Set, "SET 1,C", Op::Set),
    imp(Mnemonic::Set, "SET 1,D", Op::Set),
    imp(Mnemonic::Set, "SET 1,E", Op::Set),
    imp(Mnemonic::Set, "SET 1,H", Op::Set),
    imp(Mnemonic::Set, "SET 1,L", Op::Set),
    imp(Mnemonic::Set, "SET 1,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 1,A", Op::Set),
    // 0xD0
    imp(Mnemonic::Set, "SET 2,B", Op::Set),
    imp(Mnemonic::Set, "SET 2,C", Op::Set),
    imp(Mnemonic::Set, "SET 2,D", Op::Set),
    imp(Mnemonic::Set, "SET 2,E", Op::Set),
    imp(Mnemonic::Set, "SET 2,H", Op::Set),
    imp(Mnemonic::Set, "SET 2,L", Op::Set),
    imp(Mnemonic::Set, "SET 2,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 2,A", Op::Set),
    imp(Mnemonic::Set, "SET 3,B", Op::Set),
    imp(Mnemonic::Set, "SET 3,C", Op::Set),
    imp(Mnemonic::Set, "SET 3,D", Op::Set),
    imp(Mnemonic::Set, "SET 3,E", Op::Set),
    imp(Mnemonic::Set, "SET 3,H", Op::Set),
    imp(Mnemonic::Set, "SET 3,L", Op::Set),
    imp(Mnemonic::Set, "SET 3,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 3,A", Op::Set),
    // 0xE0
    imp(Mnemonic::Set, "SET 4,B", Op::Set),
    imp(Mnemonic::Set, "SET 4,C", Op::Set),
    imp(Mnemonic::Set, "SET 4,D", Op::Set),
    imp(Mnemonic::Set, "SET 4,E", Op::Set),
    imp(Mnemonic::Set, "SET 4,H", Op::Set),
    imp(Mnemonic::Set, "SET 4,L", Op::Set),
    imp(Mnemonic::Set, "SET 4,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 4,A", Op::Set),
    imp(Mnemonic::Set, "SET 5,B", Op::Set),
    imp(Mnemonic::Set, "SET 5,C", Op::Set),
    imp(Mnemonic::Set, "SET 5,D", Op::Set),
    imp(Mnemonic::Set, "SET 5,E", Op::Set),
    imp(Mnemonic::Set, "SET 5,H", Op::Set),
    imp(Mnemonic::Set, "SET 5,L", Op::Set),
    imp(Mnemonic::Set, "SET 5,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 5,A", Op::Set),
    // 0xF0
    imp(Mnemonic::Set, "SET 6,B", Op::Set),
    imp(Mnemonic::Set, "SET 6,C", Op::Set),
    imp(Mnemonic::Set, "SET 6,D", Op::Set),
    imp(Mnemonic::Set, "SET 6,E", Op::Set),
    imp(Mnemonic::Set, "SET 6,H", Op::Set),
    imp(Mnemonic::Set, "SET 6,L", Op::Set),
    imp(Mnemonic::Set, "SET 6,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 6,A", Op::Set),
    imp(Mnemonic::Set, "SET 7,B", Op::Set),
    imp(Mnemonic::Set, "SET 7,C", Op::Set),
    imp(Mnemonic::Set, "SET 7,D", Op::Set),
    imp(Mnemonic::Set, "SET 7,E", Op::Set),
    imp(Mnemonic::Set, "SET 7,H", Op::Set),
    imp(Mnemonic::Set, "SET 7,L", Op::Set),
    imp(Mnemonic::Set, "SET 7,(HL)", Op::Set),
    imp(Mnemonic::Set, "SET 7,A", Op::Set),
];

#[cfg(test)]
mod tests {
    use super::*;

    const ILLEGAL: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn test_illegal_slots() {
        for (opcode, desc) in UNPREFIXED_TABLE.iter().enumerate() {
            let expect_illegal = ILLEGAL.contains(&(opcode as u8));
            assert_eq!(
                desc.operation == Operation::Illegal,
                expect_illegal,
                "opcode 0x{:02X}",
                opcode
            );
        }
        assert!(CB_TABLE.iter().all(|d| d.operation != Operation::Illegal));
    }

    #[test]
    fn test_only_cb_is_a_prefix() {
        for (opcode, desc) in UNPREFIXED_TABLE.iter().enumerate() {
            assert_eq!(desc.operation == Operation::Prefix, opcode as u8 == CB_PREFIX);
        }
    }

    #[test]
    fn test_lengths() {
        assert_eq!(UNPREFIXED_TABLE[0x00].length(false), 1); // NOP
        assert_eq!(UNPREFIXED_TABLE[0x06].length(false), 2); // LD B,d8
        assert_eq!(UNPREFIXED_TABLE[0x18].length(false), 2); // JR r8
        assert_eq!(UNPREFIXED_TABLE[0xCD].length(false), 3); // CALL a16
        assert_eq!(UNPREFIXED_TABLE[0x10].length(false), 2); // STOP
        assert_eq!(CB_TABLE[0x7C].length(true), 2); // BIT 7,H
    }

    #[test]
    fn test_lookup_rejects_unknown_prefix() {
        assert!(lookup(0xED, 0x00).is_none());
        assert!(lookup(0xDD, 0x21).is_none());
        assert_eq!(lookup(CB_PREFIX, 0x11).map(|d| d.syntax), Some("RL C"));
        assert_eq!(lookup(0, 0xAF).map(|d| d.mnemonic), Some(Mnemonic::Xor));
    }
}
