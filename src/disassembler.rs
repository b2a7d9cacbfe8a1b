//! LR35902 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly text using the same
//! opcode tables the CPU executes from.

pub mod decoder;
pub mod formatter;

pub use formatter::{format_fields, format_instruction, format_listing};

use crate::opcodes::OpcodeDescriptor;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Address where this instruction starts
    pub address: u16,

    /// 0x00 for unprefixed opcodes, 0xCB for the CB table
    pub prefix: u8,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LD", "JR", "BIT"), or ".byte"
    pub mnemonic: &'static str,

    /// Table entry this instruction was decoded from; `None` for `.byte`
    pub descriptor: Option<&'static OpcodeDescriptor>,

    /// Displacement and immediate bytes, in program order
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3)
    pub size_bytes: u8,
}

impl Instruction {
    /// A one-byte `.byte` entry for data the tables cannot decode.
    pub fn data_byte(address: u16, value: u8) -> Self {
        Self {
            address,
            prefix: 0,
            opcode: value,
            mnemonic: ".byte",
            descriptor: None,
            operand_bytes: Vec::new(),
            size_bytes: 1,
        }
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and JR targets)
    pub start_address: u16,

    /// Whether listings include the raw instruction bytes
    pub hex_dump: bool,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Illegal opcodes become one-byte `.byte` entries. An instruction cut off by
/// the end of `bytes` ends the listing: it and everything after it come out
/// as `.byte` entries. Every input byte is accounted for.
///
/// # Examples
///
/// ```
/// use lr35902::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0x3E, 0x42, 0xCB, 0x7C, 0xD3];
/// let lines: Vec<String> = disassemble(&code, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(lines, ["LD A,$42", "BIT 7,H", ".byte $D3"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        let rest = &bytes[pc..];
        if decoder::is_truncated(rest) {
            for &value in rest {
                instructions.push(Instruction::data_byte(address, value));
                address = address.wrapping_add(1);
            }
            break;
        }

        let instr = decoder::decode_instruction(rest, address)
            .unwrap_or_else(|| Instruction::data_byte(address, rest[0]));

        pc += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_empty() {
        let bytes = &[];
        let instructions = disassemble(bytes, DisassemblyOptions::default());
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_disassemble_addresses_follow_lengths() {
        let bytes = &[0x00, 0x21, 0x34, 0x12, 0xCB, 0x11, 0xC9];
        let options = DisassemblyOptions {
            start_address: 0x0100,
            ..Default::default()
        };
        let addresses: Vec<u16> = disassemble(bytes, options)
            .iter()
            .map(|i| i.address)
            .collect();
        assert_eq!(addresses, [0x0100, 0x0101, 0x0104, 0x0106]);
    }

    #[test]
    fn test_truncated_tail_becomes_data() {
        // JP a16 missing its high byte
        let instructions = disassemble(&[0xC3, 0x50], DisassemblyOptions::default());
        assert_eq!(instructions.len(), 2);
        assert!(instructions.iter().all(|i| i.mnemonic == ".byte"));
        assert_eq!(instructions[1].address, 1);
    }

    #[test]
    fn test_truncated_prefix_and_operands_stay_data() {
        let instructions = disassemble(&[0x00, 0x21, 0x34], DisassemblyOptions::default());
        let mnemonics: Vec<&str> = instructions.iter().map(|i| i.mnemonic).collect();
        assert_eq!(mnemonics, ["NOP", ".byte", ".byte"]);

        let instructions = disassemble(&[0xCB], DisassemblyOptions::default());
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].mnemonic, ".byte");
    }
}
