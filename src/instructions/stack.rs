//! # Stack Instructions
//!
//! PUSH and POP move `rp2[p]` (BC, DE, HL, AF) through the stack at SP. The
//! high byte sits at the higher address.

use super::Operands;
use crate::addressing::StackReg16;
use crate::{MemoryBus, CPU};

/// Executes `PUSH rp2[p]`.
pub(crate) fn execute_push<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let value = cpu.read_rp2(StackReg16::from_index(operands.fields.p));
    cpu.push_word(value);
}

/// Executes `POP rp2[p]`.
///
/// `POP AF` drops the low nibble of the popped flags byte.
pub(crate) fn execute_pop<M: MemoryBus>(cpu: &mut CPU<M>, operands: &Operands) {
    let value = cpu.pop_word();
    cpu.write_rp2(StackReg16::from_index(operands.fields.p), value);
}
