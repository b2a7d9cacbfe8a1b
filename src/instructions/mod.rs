//! # LR35902 Instruction Implementations
//!
//! One routine per distinct instruction behaviour, grouped by family. Each takes
//! the CPU and the decoded [`Operands`] of the instruction being executed; PC
//! still points at the first byte of that instruction while the routine runs.
//!
//! ## Families
//!
//! - **load**: register, immediate and indirect transfers (LD, LDH)
//! - **alu**: 8-bit accumulator arithmetic, 16-bit adds, DAA/CPL/SCF/CCF
//! - **inc_dec**: 8-bit and 16-bit increment/decrement
//! - **rotate**: accumulator rotates and the CB rotate/shift group
//! - **bits**: BIT, RES, SET
//! - **branches**: JR, JP, CALL, RET, RETI, RST
//! - **stack**: PUSH, POP
//! - **control**: NOP, HALT, STOP, DI, EI

pub mod alu;
pub mod bits;
pub mod branches;
pub mod control;
pub mod inc_dec;
pub mod load;
pub mod rotate;
pub mod stack;

use crate::{MemoryBus, Op, OpcodeFields, CPU};

/// Everything fetched for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operands {
    pub fields: OpcodeFields,
    /// Raw displacement byte; only meaningful when the descriptor has one.
    pub displacement: u8,
    /// Immediate value, already merged little-endian for 2-byte immediates.
    pub immediate: u16,
    /// Total encoded length in bytes.
    pub length: u16,
}

impl Operands {
    /// Displacement as a signed offset.
    #[inline]
    pub fn offset(&self) -> i8 {
        self.displacement as i8
    }

    /// Low byte of the immediate.
    #[inline]
    pub fn imm8(&self) -> u8 {
        self.immediate as u8
    }
}

/// Dispatches one behaviour. The match is exhaustive over [`Op`].
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, op: Op, operands: &Operands) {
    match op {
        Op::Nop => control::execute_nop(cpu, operands),
        Op::Stop => control::execute_stop(cpu, operands),
        Op::Halt => control::execute_halt(cpu, operands),
        Op::Di => control::execute_di(cpu, operands),
        Op::Ei => control::execute_ei(cpu, operands),

        Op::LdRR => load::execute_ld_r_r(cpu, operands),
        Op::LdRImm => load::execute_ld_r_imm(cpu, operands),
        Op::LdRpImm => load::execute_ld_rp_imm(cpu, operands),
        Op::LdIndirectA => load::execute_ld_indirect_a(cpu, operands),
        Op::LdAIndirect => load::execute_ld_a_indirect(cpu, operands),
        Op::LdAbsSp => load::execute_ld_abs_sp(cpu, operands),
        Op::LdhImmA => load::execute_ldh_imm_a(cpu, operands),
        Op::LdhAImm => load::execute_ldh_a_imm(cpu, operands),
        Op::LdhCA => load::execute_ldh_c_a(cpu, operands),
        Op::LdhAC => load::execute_ldh_a_c(cpu, operands),
        Op::LdAbsA => load::execute_ld_abs_a(cpu, operands),
        Op::LdAAbs => load::execute_ld_a_abs(cpu, operands),
        Op::LdSpHl => load::execute_ld_sp_hl(cpu, operands),
        Op::LdHlSpOffset => load::execute_ld_hl_sp_offset(cpu, operands),

        Op::IncR => inc_dec::execute_inc_r(cpu, operands),
        Op::DecR => inc_dec::execute_dec_r(cpu, operands),
        Op::IncRp => inc_dec::execute_inc_rp(cpu, operands),
        Op::DecRp => inc_dec::execute_dec_rp(cpu, operands),

        Op::Alu => alu::execute_alu(cpu, operands),
        Op::AluImm => alu::execute_alu_imm(cpu, operands),
        Op::AddHlRp => alu::execute_add_hl_rp(cpu, operands),
        Op::AddSpOffset => alu::execute_add_sp_offset(cpu, operands),
        Op::Daa => alu::execute_daa(cpu, operands),
        Op::Cpl => alu::execute_cpl(cpu, operands),
        Op::Scf => alu::execute_scf(cpu, operands),
        Op::Ccf => alu::execute_ccf(cpu, operands),

        Op::RotateA => rotate::execute_rotate_a(cpu, operands),
        Op::Rotate => rotate::execute_rotate(cpu, operands),

        Op::Bit => bits::execute_bit(cpu, operands),
        Op::Res => bits::execute_res(cpu, operands),
        Op::Set => bits::execute_set(cpu, operands),

        Op::Jr => branches::execute_jr(cpu, operands),
        Op::Jp => branches::execute_jp(cpu, operands),
        Op::JpHl => branches::execute_jp_hl(cpu, operands),
        Op::Call => branches::execute_call(cpu, operands),
        Op::Ret => branches::execute_ret(cpu, operands),
        Op::Reti => branches::execute_reti(cpu, operands),
        Op::Rst => branches::execute_rst(cpu, operands),

        Op::Push => stack::execute_push(cpu, operands),
        Op::Pop => stack::execute_pop(cpu, operands),
    }
}
