//! Instruction observers.
//!
//! The CPU calls its observer once per committed instruction, after PC and
//! the tick counter have moved. Faults and halted ticks are not reported.

use tracing::trace;

use crate::disassembler::{format_instruction, Instruction};
use crate::opcodes::OpcodeDescriptor;

/// Snapshot of one executed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent {
    /// Address of the first byte of the instruction
    pub pc: u16,
    /// 0x00, or 0xCB for the prefixed table
    pub prefix: u8,
    pub opcode: u8,
    pub descriptor: &'static OpcodeDescriptor,
    /// Raw displacement byte (0 when the instruction has none)
    pub displacement: u8,
    /// Immediate operand (0 when the instruction has none)
    pub immediate: u16,
    pub length: u16,
    /// PC after the instruction, including any branch
    pub next_pc: u16,
    /// Tick counter after the instruction
    pub tick: u64,
}

impl TraceEvent {
    /// Rebuilds the disassembler view of this instruction.
    pub fn instruction(&self) -> Instruction {
        let mut operand_bytes = Vec::with_capacity(2);
        if self.descriptor.has_displacement {
            operand_bytes.push(self.displacement);
        }
        let [low, high] = self.immediate.to_le_bytes();
        match self.descriptor.immediate.bytes() {
            1 => operand_bytes.push(low),
            2 => operand_bytes.extend_from_slice(&[low, high]),
            _ => {}
        }

        Instruction {
            address: self.pc,
            prefix: self.prefix,
            opcode: self.opcode,
            mnemonic: self.descriptor.mnemonic.as_str(),
            descriptor: Some(self.descriptor),
            operand_bytes,
            size_bytes: self.length as u8,
        }
    }

    /// Assembly text of the executed instruction, e.g. `JR NZ,$0150`.
    pub fn disassembly(&self) -> String {
        format_instruction(&self.instruction())
    }
}

/// Receives every committed instruction.
pub trait InstructionObserver {
    fn on_instruction(&mut self, event: &TraceEvent);
}

impl<F: FnMut(&TraceEvent)> InstructionObserver for F {
    fn on_instruction(&mut self, event: &TraceEvent) {
        self(event)
    }
}

/// Emits one `TRACE` event per instruction on the `lr35902::trace` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl InstructionObserver for TracingObserver {
    fn on_instruction(&mut self, event: &TraceEvent) {
        trace!(
            target: "lr35902::trace",
            pc = format_args!("{:04X}", event.pc),
            tick = event.tick,
            next_pc = format_args!("{:04X}", event.next_pc),
            "{}",
            event.disassembly()
        );
    }
}
