//! # Single-Bit Instructions
//!
//! CB-prefixed BIT (0x40-0x7F), RES (0x80-0xBF) and SET (0xC0-0xFF). The bit
//! number is `y`, the operand is `r[z]`.

use super::Operands;
use crate::addressing::Reg8;
use crate::registers::Flags;
use crate::{MemoryBus, CPU};

/// `BIT y,r[z]`: Z set when the bit is clear, N=0, H=1, C unchanged. The
/// operand is not written.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let value = cpu.read_r8(Reg8::from_index(operands.fields.z));
    let set = value & (1 << operands.fields.y) != 0;

    cpu.regs.set_flag(Flags::ZERO, !set);
    cpu.regs.set_flag(Flags::SUBTRACT, false);
    cpu.regs.set_flag(Flags::HALF_CARRY, true);
}

/// `RES y,r[z]`
pub(crate) fn execute_res<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg8::from_index(operands.fields.z);
    let value = cpu.read_r8(reg);
    cpu.write_r8(reg, value & !(1 << operands.fields.y));
}

/// `SET y,r[z]`
pub(crate) fn execute_set<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg8::from_index(operands.fields.z);
    let value = cpu.read_r8(reg);
    cpu.write_r8(reg, value | (1 << operands.fields.y));
}
