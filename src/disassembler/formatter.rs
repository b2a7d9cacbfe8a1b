//! Formatting functions for disassembled instructions

use crate::decode::OpcodeFields;
use crate::disassembler::{DisassemblyOptions, Instruction};
use crate::opcodes::{ImmediateSize, Op, Operation};

/// Format a single instruction as assembly text
///
/// The descriptor's syntax template is filled in from the operand bytes:
/// `d8`/`a8` become `$NN`, `d16`/`a16` become `$NNNN`, and `r8` becomes the
/// absolute target for `JR` or a signed decimal offset for the SP forms.
pub fn format_instruction(instr: &Instruction) -> String {
    let Some(descriptor) = instr.descriptor else {
        return format!(".byte ${:02X}", instr.opcode);
    };

    let mut text = descriptor.syntax.to_string();
    let mut operands = instr.operand_bytes.iter().copied();

    if descriptor.has_displacement {
        let Some(raw) = operands.next() else {
            return text;
        };
        let offset = raw as i8;

        text = if descriptor.operation == Operation::Implemented(Op::Jr) {
            let target = instr
                .address
                .wrapping_add(instr.size_bytes as u16)
                .wrapping_add(offset as i16 as u16);
            text.replace("r8", &format!("${:04X}", target))
        } else if text.contains("+r8") {
            text.replace("+r8", &format!("{:+}", offset))
        } else {
            text.replace("r8", &format!("{:+}", offset))
        };
    }

    match descriptor.immediate {
        ImmediateSize::None => {}
        ImmediateSize::Byte => {
            if let Some(value) = operands.next() {
                let rendered = format!("${:02X}", value);
                text = text.replace("d8", &rendered).replace("a8", &rendered);
            }
        }
        ImmediateSize::Word => {
            if let (Some(low), Some(high)) = (operands.next(), operands.next()) {
                let rendered = format!("${:04X}", u16::from_le_bytes([low, high]));
                text = text.replace("d16", &rendered).replace("a16", &rendered);
            }
        }
    }

    text
}

/// Render an opcode's `x_y_z` split as `xx_yyy_zzz`, with a `CB ` marker for
/// the prefixed table.
///
/// ```
/// use lr35902::disassembler::format_fields;
///
/// assert_eq!(format_fields(0x21, false), "00_100_001");
/// assert_eq!(format_fields(0x7C, true), "CB 01_111_100");
/// ```
pub fn format_fields(opcode: u8, prefixed: bool) -> String {
    let fields = OpcodeFields::decode(opcode);
    let split = format!("{:02b}_{:03b}_{:03b}", fields.x, fields.y, fields.z);
    if prefixed {
        format!("CB {}", split)
    } else {
        split
    }
}

/// Format a run of instructions one per line as `ADDR: [BYTES] TEXT`.
pub fn format_listing(instructions: &[Instruction], options: DisassemblyOptions) -> String {
    let mut out = String::new();

    for instr in instructions {
        out.push_str(&format!("{:04X}: ", instr.address));

        if options.hex_dump {
            let mut bytes = Vec::with_capacity(3);
            if instr.prefix != 0 {
                bytes.push(instr.prefix);
            }
            bytes.push(instr.opcode);
            bytes.extend_from_slice(&instr.operand_bytes);

            let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
            out.push_str(&format!("{:<9} ", hex.join(" ")));
        }

        out.push_str(&format_instruction(instr));
        out.push('\n');
    }

    out
}
