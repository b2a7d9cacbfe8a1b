//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADD, ADC, SUB, SBC, AND, XOR, OR, CP on the accumulator
//! - ADD HL,rr and ADD SP,r8
//! - DAA, CPL, SCF, CCF
//!
//! Flag rules for the accumulator group:
//!
//! | Op | Z | N | H | C |
//! |----|---|---|---|---|
//! | ADD/ADC | result | 0 | carry from bit 3 | carry from bit 7 |
//! | SUB/SBC/CP | result | 1 | borrow from bit 4 | borrow |
//! | AND | result | 0 | 1 | 0 |
//! | XOR/OR | result | 0 | 0 | 0 |

use super::Operands;
use crate::addressing::{AluOp, Reg16, Reg8};
use crate::registers::Flags;
use crate::{MemoryBus, CPU};

/// `alu[y] r[z]` (0x80-0xBF).
pub(crate) fn execute_alu<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let value = cpu.read_r8(Reg8::from_index(operands.fields.z));
    apply(cpu, AluOp::from_index(operands.fields.y), value);
}

/// `alu[y] d8`
pub(crate) fn execute_alu_imm<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    apply(cpu, AluOp::from_index(operands.fields.y), operands.imm8());
}

fn apply<M: MemoryBus>(cpu: &mut CPU<M>, op: AluOp, value: u8) {
    let a = cpu.regs.a;
    let carry = cpu.regs.flag(Flags::CARRY) as u8;

    let (result, flags) = match op {
        AluOp::Add => add(a, value, 0),
        AluOp::Adc => add(a, value, carry),
        AluOp::Sub | AluOp::Cp => sub(a, value, 0),
        AluOp::Sbc => sub(a, value, carry),
        AluOp::And => {
            let result = a & value;
            (result, zero(result) | Flags::HALF_CARRY)
        }
        AluOp::Xor => {
            let result = a ^ value;
            (result, zero(result))
        }
        AluOp::Or => {
            let result = a | value;
            (result, zero(result))
        }
    };

    cpu.regs.f = flags;
    if op != AluOp::Cp {
        cpu.regs.a = result;
    }
}

#[inline]
fn zero(result: u8) -> Flags {
    if result == 0 {
        Flags::ZERO
    } else {
        Flags::empty()
    }
}

fn add(a: u8, value: u8, carry: u8) -> (u8, Flags) {
    let full = a as u16 + value as u16 + carry as u16;
    let result = full as u8;

    let mut flags = zero(result);
    flags.set(Flags::HALF_CARRY, (a & 0x0F) + (value & 0x0F) + carry > 0x0F);
    flags.set(Flags::CARRY, full > 0xFF);
    (result, flags)
}

fn sub(a: u8, value: u8, carry: u8) -> (u8, Flags) {
    let result = a.wrapping_sub(value).wrapping_sub(carry);

    let mut flags = zero(result) | Flags::SUBTRACT;
    flags.set(Flags::HALF_CARRY, (a & 0x0F) < (value & 0x0F) + carry);
    flags.set(Flags::CARRY, (a as u16) < value as u16 + carry as u16);
    (result, flags)
}

/// `ADD HL,rp[p]`
///
/// Z unchanged, N=0, H from bit 11, C from bit 15.
pub(crate) fn execute_add_hl_rp<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let hl = cpu.regs.hl();
    let value = cpu.read_rp(Reg16::from_index(operands.fields.p));
    let (result, carry) = hl.overflowing_add(value);

    cpu.regs.set_flag(Flags::SUBTRACT, false);
    cpu.regs
        .set_flag(Flags::HALF_CARRY, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
    cpu.regs.set_flag(Flags::CARRY, carry);
    cpu.regs.set_hl(result);
}

/// `ADD SP,r8`
pub(crate) fn execute_add_sp_offset<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.sp = add_sp_offset(cpu, operands.displacement);
}

/// SP plus a sign-extended displacement, with the flags shared by `ADD SP,r8`
/// and `LD HL,SP+r8`: Z=0, N=0, H and C from adding the raw byte to SP's low
/// byte as unsigned values.
pub(crate) fn add_sp_offset<M: MemoryBus>(cpu: &mut CPU<M>, displacement: u8) -> u16 {
    let sp = cpu.sp;
    let offset = displacement as i8 as i16 as u16;

    let mut flags = Flags::empty();
    flags.set(Flags::HALF_CARRY, (sp & 0x000F) + (offset & 0x000F) > 0x000F);
    flags.set(Flags::CARRY, (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF);
    cpu.regs.f = flags;

    sp.wrapping_add(offset)
}

/// `DAA`: decimal-adjusts A after a BCD add or subtract. N is preserved.
pub(crate) fn execute_daa<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    let mut a = cpu.regs.a;
    let mut adjust = 0u8;
    let mut carry = cpu.regs.flag(Flags::CARRY);

    if cpu.regs.flag(Flags::HALF_CARRY) {
        adjust |= 0x06;
    }
    if carry {
        adjust |= 0x60;
    }

    if cpu.regs.flag(Flags::SUBTRACT) {
        a = a.wrapping_sub(adjust);
    } else {
        if a & 0x0F > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
            carry = true;
        }
        a = a.wrapping_add(adjust);
    }

    cpu.regs.set_flag(Flags::ZERO, a == 0);
    cpu.regs.set_flag(Flags::HALF_CARRY, false);
    cpu.regs.set_flag(Flags::CARRY, carry);
    cpu.regs.a = a;
}

/// `CPL`: A = !A. N=1, H=1.
pub(crate) fn execute_cpl<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.regs.a = !cpu.regs.a;
    cpu.regs.set_flag(Flags::SUBTRACT, true);
    cpu.regs.set_flag(Flags::HALF_CARRY, true);
}

/// `SCF`: C=1, N=0, H=0.
pub(crate) fn execute_scf<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.regs.set_flag(Flags::SUBTRACT, false);
    cpu.regs.set_flag(Flags::HALF_CARRY, false);
    cpu.regs.set_flag(Flags::CARRY, true);
}

/// `CCF`: C inverted, N=0, H=0.
pub(crate) fn execute_ccf<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    let carry = cpu.regs.flag(Flags::CARRY);
    cpu.regs.set_flag(Flags::SUBTRACT, false);
    cpu.regs.set_flag(Flags::HALF_CARRY, false);
    cpu.regs.set_flag(Flags::CARRY, !carry);
}
