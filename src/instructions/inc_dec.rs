//! # Increment and Decrement Instructions
//!
//! - INC r / DEC r: 8-bit, update Z, N and H; C is preserved
//! - INC rr / DEC rr: 16-bit, no flags affected

use super::Operands;
use crate::addressing::{Reg16, Reg8};
use crate::registers::Flags;
use crate::{MemoryBus, CPU};

/// Executes `INC r[y]`.
///
/// Adds one to the register (or to the byte at HL for `INC (HL)`), wrapping
/// 0xFF to 0x00.
///
/// Flags affected:
/// - Z: set if the result is zero
/// - N: cleared
/// - H: set on carry out of bit 3
pub(crate) fn execute_inc_r<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg8::from_index(operands.fields.y);
    let value = cpu.read_r8(reg);
    let result = value.wrapping_add(1);
    cpu.write_r8(reg, result);

    cpu.regs.set_flag(Flags::ZERO, result == 0);
    cpu.regs.set_flag(Flags::SUBTRACT, false);
    cpu.regs.set_flag(Flags::HALF_CARRY, value & 0x0F == 0x0F);
}

/// Executes `DEC r[y]`.
///
/// Flags affected:
/// - Z: set if the result is zero
/// - N: set
/// - H: set on borrow from bit 4
pub(crate) fn execute_dec_r<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg8::from_index(operands.fields.y);
    let value = cpu.read_r8(reg);
    let result = value.wrapping_sub(1);
    cpu.write_r8(reg, result);

    cpu.regs.set_flag(Flags::ZERO, result == 0);
    cpu.regs.set_flag(Flags::SUBTRACT, true);
    cpu.regs.set_flag(Flags::HALF_CARRY, value & 0x0F == 0x00);
}

/// Executes `INC rp[p]`.
pub(crate) fn execute_inc_rp<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg16::from_index(operands.fields.p);
    let value = cpu.read_rp(reg);
    cpu.write_rp(reg, value.wrapping_add(1));
}

/// Executes `DEC rp[p]`.
pub(crate) fn execute_dec_rp<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let reg = Reg16::from_index(operands.fields.p);
    let value = cpu.read_rp(reg);
    cpu.write_rp(reg, value.wrapping_sub(1));
}
