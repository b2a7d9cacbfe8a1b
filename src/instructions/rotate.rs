//! # Rotate and Shift Instructions
//!
//! Two groups share one shifter:
//!
//! - RLCA, RRCA, RLA, RRA (unprefixed 0x07/0x0F/0x17/0x1F): operate on A and
//!   touch only C, which receives the bit shifted out
//! - RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL (CB 0x00-0x3F): operate on any
//!   `r[z]`, set Z from the result, clear N and H and put the bit shifted out
//!   in C (SWAP clears C)

use super::Operands;
use crate::addressing::{Reg8, RotateOp};
use crate::registers::Flags;
use crate::{MemoryBus, CPU};

/// Applies `op` to `value` with the incoming carry. Returns the result and the
/// outgoing carry.
fn shift(op: RotateOp, value: u8, carry_in: bool) -> (u8, bool) {
    match op {
        RotateOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        RotateOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        RotateOp::Rl => ((value << 1) | carry_in as u8, value & 0x80 != 0),
        RotateOp::Rr => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
        RotateOp::Sla => (value << 1, value & 0x80 != 0),
        RotateOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        RotateOp::Swap => (value.rotate_left(4), false),
        RotateOp::Srl => (value >> 1, value & 0x01 != 0),
    }
}

/// Executes `RLCA`, `RRCA`, `RLA` or `RRA` (selected by `y` 0-3).
pub(crate) fn execute_rotate_a<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let op = RotateOp::from_index(operands.fields.y);
    let (result, carry) = shift(op, cpu.regs.a, cpu.regs.flag(Flags::CARRY));

    cpu.regs.a = result;
    cpu.regs.set_flag(Flags::CARRY, carry);
}

/// Executes `rot[y] r[z]` from the CB table.
pub(crate) fn execute_rotate<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg8::from_index(operands.fields.z);
    let op = RotateOp::from_index(operands.fields.y);
    let (result, carry) = shift(op, cpu.read_r8(reg), cpu.regs.flag(Flags::CARRY));
    cpu.write_r8(reg, result);

    let mut flags = Flags::empty();
    flags.set(Flags::ZERO, result == 0);
    flags.set(Flags::CARRY, carry);
    cpu.regs.f = flags;
}
