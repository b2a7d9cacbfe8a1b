//! # Load Instructions
//!
//! Register, immediate and memory-indirect transfers. None of these touch the
//! flags except `LD HL,SP+r8`, which shares its flag rules with `ADD SP,r8`.
//!
//! Memory operands always go through the data bus; the program image is only
//! ever read by the fetch stage.

use super::{alu, Operands};
use crate::addressing::{Reg16, Reg8};
use crate::memory::HIGH_PAGE;
use crate::{MemoryBus, CPU};

/// `LD r[y],r[z]` (0x40-0x7F except 0x76).
pub(crate) fn execute_ld_r_r<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let value = cpu.read_r8(Reg8::from_index(operands.fields.z));
    cpu.write_r8(Reg8::from_index(operands.fields.y), value);
}

/// `LD r[y],d8`
pub(crate) fn execute_ld_r_imm<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.write_r8(Reg8::from_index(operands.fields.y), operands.imm8());
}

/// `LD rp[p],d16`. The immediate arrives little-endian from the program image
/// and is stored into the pair high byte first.
pub(crate) fn execute_ld_rp_imm<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.write_rp(Reg16::from_index(operands.fields.p), operands.immediate);
}

/// Address for the `(BC)`, `(DE)`, `(HL+)`, `(HL-)` forms, applying the HL
/// post-increment or post-decrement.
fn indirect_address<M: MemoryBus>(cpu: &mut CPU<M>, p: u8) -> u16 {
    match p {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_add(1));
            hl
        }
        _ => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_sub(1));
            hl
        }
    }
}

/// `LD (BC),A`, `LD (DE),A`, `LD (HL+),A`, `LD (HL-),A`
pub(crate) fn execute_ld_indirect_a<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let address = indirect_address(cpu, operands.fields.p);
    cpu.memory.write(address, cpu.regs.a);
}

/// `LD A,(BC)`, `LD A,(DE)`, `LD A,(HL+)`, `LD A,(HL-)`
pub(crate) fn execute_ld_a_indirect<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let address = indirect_address(cpu, operands.fields.p);
    cpu.regs.a = cpu.memory.read(address);
}

/// `LD (a16),SP`: stores SP little-endian.
pub(crate) fn execute_ld_abs_sp<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let [low, high] = cpu.sp.to_le_bytes();
    cpu.memory.write(operands.immediate, low);
    cpu.memory.write(operands.immediate.wrapping_add(1), high);
}

/// `LDH (a8),A`
pub(crate) fn execute_ldh_imm_a<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.memory
        .write(HIGH_PAGE | operands.imm8() as u16, cpu.regs.a);
}

/// `LDH A,(a8)`
pub(crate) fn execute_ldh_a_imm<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.regs.a = cpu.memory.read(HIGH_PAGE | operands.imm8() as u16);
}

/// `LD (C),A`
pub(crate) fn execute_ldh_c_a<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.memory.write(HIGH_PAGE | cpu.regs.c as u16, cpu.regs.a);
}

/// `LD A,(C)`
pub(crate) fn execute_ldh_a_c<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.regs.a = cpu.memory.read(HIGH_PAGE | cpu.regs.c as u16);
}

/// `LD (a16),A`
pub(crate) fn execute_ld_abs_a<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.memory.write(operands.immediate, cpu.regs.a);
}

/// `LD A,(a16)`
pub(crate) fn execute_ld_a_abs<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    cpu.regs.a = cpu.memory.read(operands.immediate);
}

/// `LD SP,HL`
pub(crate) fn execute_ld_sp_hl<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.sp = cpu.regs.hl();
}

/// `LD HL,SP+r8`
///
/// Flags: Z=0, N=0, H and C from the unsigned low-byte addition.
pub(crate) fn execute_ld_hl_sp_offset<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let result = alu::add_sp_offset(cpu, operands.displacement);
    cpu.regs.set_hl(result);
}
