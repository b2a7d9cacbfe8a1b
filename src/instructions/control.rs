//! # CPU Control Instructions
//!
//! - NOP
//! - HALT, STOP: latch the halted state (see [`crate::CPU::resume`])
//! - DI, EI: latch the interrupt master enable
//!
//! No interrupt controller exists, so IME is only recorded.

use super::Operands;
use crate::{MemoryBus, CPU};

pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>, _operands: &Operands) {}

/// `STOP d8`. The operand byte is fetched and ignored.
pub(crate) fn execute_stop<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.halted = true;
}

pub(crate) fn execute_halt<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.halted = true;
}

pub(crate) fn execute_di<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.ime = false;
}

pub(crate) fn execute_ei<M: MemoryBus>(cpu: &mut CPU<M>, _operands: &Operands) {
    cpu.ime = true;
}
