//! # Control Transfer Instructions
//!
//! JR, JP, CALL, RET, RETI and RST. Every routine here computes an absolute
//! target and hands it to `CPU::redirect`, which compensates for the uniform
//! PC advance the instruction loop applies afterwards. A conditional branch
//! that is not taken does nothing, so PC simply moves past the instruction.
//!
//! Condition selection follows the opcode fields:
//!
//! | Family | Unconditional when | Condition index |
//! |--------|--------------------|-----------------|
//! | JR     | y == 3             | y - 4           |
//! | JP     | z == 3             | y               |
//! | CALL   | z == 5             | y               |
//! | RET    | z == 1             | y               |

use super::Operands;
use crate::addressing::Condition;
use crate::{MemoryBus, CPU};

/// Address of the instruction following the current one.
#[inline]
fn next_pc<M: MemoryBus>(cpu: &CPU<M>, operands: &Operands) -> u16 {
    cpu.pc.wrapping_add(operands.length)
}

/// Executes `JR r8` / `JR cc,r8`.
///
/// The offset is relative to the address after the 2-byte instruction.
pub(crate) fn execute_jr<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let y = operands.fields.y;
    let taken = y == 3 || cpu.condition(Condition::from_index(y.wrapping_sub(4)));

    if taken {
        let target = next_pc(cpu, operands).wrapping_add(operands.offset() as i16 as u16);
        cpu.redirect(target, operands);
    }
}

/// Executes `JP a16` / `JP cc,a16`.
pub(crate) fn execute_jp<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let fields = operands.fields;
    if fields.z == 3 || cpu.condition(Condition::from_index(fields.y)) {
        cpu.redirect(operands.immediate, operands);
    }
}

/// Executes `JP HL`.
pub(crate) fn execute_jp_hl<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let target = cpu.regs.hl();
    cpu.redirect(target, operands);
}

/// Executes `CALL a16` / `CALL cc,a16`.
///
/// Pushes the address of the next instruction, then jumps.
pub(crate) fn execute_call<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let fields = operands.fields;
    if fields.z == 5 || cpu.condition(Condition::from_index(fields.y)) {
        let return_address = next_pc(cpu, operands);
        cpu.push_word(return_address);
        cpu.redirect(operands.immediate, operands);
    }
}

/// Executes `RET` / `RET cc`.
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let fields = operands.fields;
    if fields.z == 1 || cpu.condition(Condition::from_index(fields.y)) {
        let target = cpu.pop_word();
        cpu.redirect(target, operands);
    }
}

/// Executes `RETI`: `RET` plus setting IME.
pub(crate) fn execute_reti<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let target = cpu.pop_word();
    cpu.ime = true;
    cpu.redirect(target, operands);
}

/// Executes `RST y*8`.
pub(crate) fn execute_rst<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let return_address = next_pc(cpu, operands);
    cpu.push_word(return_address);
    cpu.redirect(operands.fields.y as u16 * 8, operands);
}
