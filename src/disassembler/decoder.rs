//! Instruction decoder for the LR35902 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::{lookup, Operation, UNPREFIXED_TABLE};

/// Decode a single instruction from a byte slice
///
/// Follows the instruction loop's rules: a prefix byte selects the CB table
/// for the following byte, then the descriptor decides how many displacement
/// and immediate bytes follow.
///
/// # Returns
///
/// `None` for illegal opcodes and for instructions longer than `bytes`
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let first = *bytes.first()?;
    let mut descriptor = &UNPREFIXED_TABLE[first as usize];
    let mut prefix = 0;
    let mut opcode = first;
    let mut header = 1;

    if descriptor.operation == Operation::Prefix {
        prefix = first;
        opcode = *bytes.get(1)?;
        descriptor = lookup(prefix, opcode)?;
        header = 2;
    }

    if matches!(descriptor.operation, Operation::Illegal | Operation::Prefix) {
        return None;
    }

    let size = descriptor.length(prefix != 0) as usize;
    let operand_bytes = bytes.get(header..size)?.to_vec();

    Some(Instruction {
        address,
        prefix,
        opcode,
        mnemonic: descriptor.mnemonic.as_str(),
        descriptor: Some(descriptor),
        operand_bytes,
        size_bytes: size as u8,
    })
}

/// True when `bytes` starts with a legal instruction that runs past its end
pub(crate) fn is_truncated(bytes: &[u8]) -> bool {
    let Some(&first) = bytes.first() else {
        return false;
    };
    let descriptor = &UNPREFIXED_TABLE[first as usize];

    if descriptor.operation != Operation::Prefix {
        return descriptor.operation != Operation::Illegal
            && bytes.len() < descriptor.length(false) as usize;
    }

    match bytes.get(1) {
        None => true,
        Some(&opcode) => lookup(first, opcode).map_or(false, |d| {
            !matches!(d.operation, Operation::Illegal | Operation::Prefix)
                && bytes.len() < d.length(true) as usize
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ld_immediate() {
        let instr = decode_instruction(&[0x3E, 0x42], 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.prefix, 0);
        assert_eq!(instr.opcode, 0x3E);
        assert_eq!(instr.mnemonic, "LD");
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_jp_absolute() {
        let instr = decode_instruction(&[0xC3, 0x50, 0x01], 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "JP");
        assert_eq!(instr.operand_bytes, vec![0x50, 0x01]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_cb_prefixed() {
        let instr = decode_instruction(&[0xCB, 0x37], 0x1000).unwrap();

        assert_eq!(instr.prefix, 0xCB);
        assert_eq!(instr.opcode, 0x37);
        assert_eq!(instr.mnemonic, "SWAP");
        assert!(instr.operand_bytes.is_empty());
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_rejects_illegal_and_truncated() {
        assert!(decode_instruction(&[0xDD], 0).is_none());
        assert!(decode_instruction(&[0xCB], 0).is_none());
        assert!(decode_instruction(&[0x01, 0x00], 0).is_none());
        assert!(decode_instruction(&[], 0).is_none());
    }

    #[test]
    fn test_is_truncated() {
        assert!(is_truncated(&[0xC3, 0x50]));
        assert!(is_truncated(&[0xCB]));
        assert!(is_truncated(&[0x10]));
        assert!(!is_truncated(&[0xC3, 0x50, 0x01]));
        assert!(!is_truncated(&[0xDD]));
        assert!(!is_truncated(&[]));
    }
}
