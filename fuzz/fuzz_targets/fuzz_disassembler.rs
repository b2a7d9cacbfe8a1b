//! Disassembler fuzz target.
//!
//! Arbitrary byte streams must disassemble without panicking, cover every
//! input byte exactly once and format without leftover operand placeholders.

#![no_main]

use arbitrary::Arbitrary;
use lr35902::disassembler::format_listing;
use lr35902::{disassemble, format_instruction, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    code: Vec<u8>,
    origin: u16,
    hex_dump: bool,
}

fuzz_target!(|input: Input| {
    // One address space's worth is plenty
    if input.code.len() > 0x10000 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.origin,
        hex_dump: input.hex_dump,
    };
    let listing = disassemble(&input.code, options);

    let mut covered = 0usize;
    let mut address = input.origin;

    for instruction in &listing {
        assert_eq!(instruction.address, address);
        assert!((1..=3).contains(&instruction.size_bytes));

        // Prefix and opcode are not operands
        let header = if instruction.prefix != 0 { 2 } else { 1 };
        if instruction.descriptor.is_some() {
            assert_eq!(
                instruction.operand_bytes.len() + header,
                instruction.size_bytes as usize
            );
        }

        let text = format_instruction(instruction);
        assert!(!text.contains("d8") && !text.contains("d16") && !text.contains("r8"));

        covered += instruction.size_bytes as usize;
        address = address.wrapping_add(instruction.size_bytes as u16);
    }

    assert_eq!(covered, input.code.len());
    assert_eq!(format_listing(&listing, options).lines().count(), listing.len());
});
