//! # LR35902 CPU Core
//!
//! A table-driven emulator for the Sharp LR35902, the Z80-derived processor in
//! the DMG Game Boy.
//!
//! The crate covers the fetch-decode-execute core only: the bit-field decoder,
//! the two 256-entry opcode tables, the operation set, and the instruction loop.
//! Video, audio, input, interrupts and bank switching are not modeled.
//!
//! ## Quick Start
//!
//! ```rust
//! use lr35902::{CPU, FlatMemory};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LD HL,$1234 ; XOR A
//! cpu.load_program(vec![0x21, 0x34, 0x12, 0xAF]);
//!
//! cpu.run_instruction().unwrap();
//! assert_eq!(cpu.registers().hl(), 0x1234);
//! assert_eq!(cpu.pc(), 3);
//!
//! cpu.run_instruction().unwrap();
//! assert_eq!(cpu.registers().a, 0x00);
//! assert!(cpu.flag_z());
//! ```
//!
//! ## Architecture
//!
//! - **Owned state**: every session is one [`CPU`] value; there are no globals
//! - **Separate program image**: instructions are fetched from a [`ProgramImage`],
//!   data accesses go through a [`MemoryBus`]
//! - **Table-driven decode**: [`UNPREFIXED_TABLE`] and [`CB_TABLE`] describe every
//!   opcode's length and behaviour
//! - **Typed faults**: unrecognized opcodes and out-of-range fetches come back as
//!   [`ExecutionError`] instead of aborting
//! - **Injectable tracing**: see [`InstructionObserver`]
//!
//! ## Modules
//!
//! - `cpu` - processor state and the instruction loop
//! - `decode` - opcode bit-field decoding
//! - `addressing` - operand selectors indexed by decoded fields
//! - `registers` - register file and flags
//! - `memory` - MemoryBus trait and FlatMemory
//! - `program` - the program image
//! - `opcodes` - opcode tables
//! - `config` - core configuration
//! - `trace` - instruction observers
//! - `disassembler` - table-driven disassembly

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod decode;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod program;
pub mod registers;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

// WASM bindings (only compiled when wasm feature is enabled)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::{AluOp, Condition, Reg16, Reg8, RotateOp, StackReg16};
pub use config::{CoreConfig, FaultPolicy};
pub use cpu::CPU;
pub use decode::OpcodeFields;
pub use disassembler::{disassemble, format_instruction, DisassemblyOptions, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{
    lookup, ImmediateSize, Mnemonic, Op, OpcodeDescriptor, Operation, CB_PREFIX, CB_TABLE,
    UNPREFIXED_TABLE,
};
pub use program::ProgramImage;
pub use registers::{Flags, Registers};
pub use trace::{InstructionObserver, TraceEvent, TracingObserver};

/// Errors surfaced by the instruction loop and the program accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode byte has no instruction in the active table.
    #[error("unrecognized opcode {opcode:#04X} (prefix {prefix:#04X}) at {pc:#06X}")]
    UnrecognizedOpcode { prefix: u8, opcode: u8, pc: u16 },

    /// The opcode is known but has no operation wired to it.
    #[error("opcode {opcode:#04X} (prefix {prefix:#04X}) at {pc:#06X} is not implemented")]
    UnimplementedOpcode { prefix: u8, opcode: u8, pc: u16 },

    /// A program image access landed past the end of the loaded image.
    #[error("program read at {address:#06X} is outside the {len}-byte program image")]
    ProgramOutOfBounds { address: u16, len: usize },
}
