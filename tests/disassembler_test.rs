//! Disassembler tests over short realistic routines.

use lr35902::disassembler::{format_fields, format_listing};
use lr35902::{disassemble, format_instruction, DisassemblyOptions};

fn lines(bytes: &[u8], start_address: u16) -> Vec<String> {
    let options = DisassemblyOptions {
        start_address,
        ..Default::default()
    };
    disassemble(bytes, options)
        .iter()
        .map(format_instruction)
        .collect()
}

#[test]
fn test_disassemble_memcpy_loop() {
    let code = [
        0x21, 0x00, 0xC0, // LD HL,$C000
        0x11, 0x00, 0xD0, // LD DE,$D000
        0x0E, 0x10, // LD C,$10
        0x1A, // LD A,(DE)
        0x22, // LD (HL+),A
        0x13, // INC DE
        0x0D, // DEC C
        0x20, 0xFA, // JR NZ,loop
        0xC9, // RET
    ];

    assert_eq!(
        lines(&code, 0x0150),
        [
            "LD HL,$C000",
            "LD DE,$D000",
            "LD C,$10",
            "LD A,(DE)",
            "LD (HL+),A",
            "INC DE",
            "DEC C",
            "JR NZ,$0158",
            "RET",
        ]
    );
}

#[test]
fn test_disassemble_prefixed_and_high_page() {
    let code = [0xF0, 0x44, 0xCB, 0x27, 0xE2, 0xCD, 0x00, 0x40, 0xFF];

    assert_eq!(
        lines(&code, 0),
        ["LDH A,($44)", "SLA A", "LD (C),A", "CALL $4000", "RST 38H"]
    );
}

#[test]
fn test_illegal_bytes_become_data() {
    let code = [0xDD, 0x00, 0xFD];

    assert_eq!(lines(&code, 0), [".byte $DD", "NOP", ".byte $FD"]);
}

#[test]
fn test_trailing_prefix_becomes_data() {
    assert_eq!(lines(&[0x00, 0xCB], 0), ["NOP", ".byte $CB"]);
}

#[test]
fn test_truncated_call_leaves_rest_as_data() {
    // CALL a16 with only the low byte present
    assert_eq!(
        lines(&[0xAF, 0xCD, 0x00], 0x0200),
        ["XOR A", ".byte $CD", ".byte $00"]
    );
}

#[test]
fn test_format_fields() {
    assert_eq!(format_fields(0x00, false), "00_000_000");
    assert_eq!(format_fields(0xFF, false), "11_111_111");
    assert_eq!(format_fields(0x46, true), "CB 01_000_110");
}

#[test]
fn test_listing_without_hex_dump() {
    let options = DisassemblyOptions {
        start_address: 0x0100,
        hex_dump: false,
    };
    let instructions = disassemble(&[0x00, 0xC3, 0x50, 0x01], options);

    assert_eq!(
        format_listing(&instructions, options),
        "0100: NOP\n0101: JP $0150\n"
    );
}
