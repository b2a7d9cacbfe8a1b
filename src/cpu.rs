//! # CPU State and Execution
//!
//! This module contains the `CPU` struct holding all LR35902 processor state,
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: A, F, B, C, D, E, H, L (see [`Registers`])
//! - **Program counter** (PC): offset of the next instruction byte in the program image
//! - **Stack pointer** (SP): full 16-bit address, grows downward
//! - **Tick counter**: one tick per completed instruction
//! - **Interrupt master enable** latch, set by EI/RETI and cleared by DI
//! - **Halted** latch, set by HALT/STOP
//!
//! ## Execution Model
//!
//! Each call to [`CPU::run_instruction`] walks these stages:
//!
//! 1. Fetch one byte at PC from the program image
//! 2. If the table marks it as a prefix, fetch the real opcode from the next byte
//! 3. Look up the descriptor (illegal slots fault with `UnrecognizedOpcode`)
//! 4. Read the displacement byte, if the descriptor has one
//! 5. Read 0, 1 or 2 immediate bytes (little-endian)
//! 6. Dispatch to the operation
//! 7. Advance PC by the full instruction length
//! 8. Bump the tick counter and notify the observer
//!
//! Step 7 is unconditional. Operations that change control flow store
//! `target - length` into PC so the uniform advance lands on `target`.

use tracing::warn;

use crate::addressing::{Condition, Reg16, Reg8, StackReg16};
use crate::instructions::{self, Operands};
use crate::opcodes::{lookup, Operation, UNPREFIXED_TABLE};
use crate::registers::{Flags, Registers};
use crate::trace::{InstructionObserver, TraceEvent};
use crate::{CoreConfig, ExecutionError, FaultPolicy, MemoryBus, OpcodeFields, ProgramImage};

/// Initial stack pointer: the top of high RAM, where boot code places it.
pub const INITIAL_SP: u16 = 0xFFFE;

/// LR35902 CPU state and execution context.
///
/// Generic over the data bus via the `MemoryBus` trait. Each value is one
/// independent emulation session.
///
/// # Examples
///
/// ```
/// use lr35902::{CPU, FlatMemory};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.load_program(vec![0x00]); // NOP
///
/// cpu.run_instruction().unwrap();
/// assert_eq!(cpu.pc(), 1);
/// assert_eq!(cpu.tick_count(), 1);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,

    /// Program counter (offset of next instruction in the program image)
    pub(crate) pc: u16,

    /// Stack pointer
    pub(crate) sp: u16,

    /// Interrupt master enable. Latched only; nothing services interrupts.
    pub(crate) ime: bool,

    /// Set by HALT/STOP, cleared by `resume`
    pub(crate) halted: bool,

    /// Completed instructions since construction
    pub(crate) tick_count: u64,

    pub(crate) memory: M,

    pub(crate) program: ProgramImage,

    config: CoreConfig,

    observer: Option<Box<dyn InstructionObserver>>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over `memory` with the default configuration and an empty
    /// program image.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CoreConfig::default())
    }

    /// Creates a CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CoreConfig) -> Self {
        Self {
            regs: Registers::default(),
            pc: 0x0000,
            sp: INITIAL_SP,
            ime: false,
            halted: false,
            tick_count: 0,
            memory,
            program: ProgramImage::default(),
            config,
            observer: None,
        }
    }

    /// Replaces the program image and resets PC to 0.
    ///
    /// Registers, SP, memory and the tick counter are left as they are.
    pub fn load_program(&mut self, bytes: impl Into<Vec<u8>>) {
        self.program = ProgramImage::new(bytes);
        self.pc = 0;
        self.halted = false;
    }

    /// Executes exactly one instruction.
    ///
    /// While halted, no fetch happens: the tick counter advances and the call
    /// returns `Ok`.
    ///
    /// # Errors
    ///
    /// - `ProgramOutOfBounds` if any byte of the instruction lies past the end
    ///   of the program image
    /// - `UnrecognizedOpcode` / `UnimplementedOpcode` when the configured
    ///   [`FaultPolicy`] is `Halt`
    ///
    /// On error no state has changed: PC still addresses the faulting
    /// instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use lr35902::{CPU, ExecutionError, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_program(vec![0xDD]); // not an instruction on this CPU
    ///
    /// match cpu.run_instruction() {
    ///     Err(ExecutionError::UnrecognizedOpcode { opcode: 0xDD, pc: 0, .. }) => {}
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0);
    /// ```
    pub fn run_instruction(&mut self) -> Result<(), ExecutionError> {
        if self.halted {
            self.tick_count += 1;
            return Ok(());
        }

        let pc = self.pc;

        // Fetch: the first byte is either the opcode or a prefix
        let first = self.program.read8(pc)?;
        let mut prefix = 0;
        let mut opcode = first;
        let mut offset: u16 = 1;
        let mut descriptor = &UNPREFIXED_TABLE[first as usize];

        if descriptor.operation == Operation::Prefix {
            prefix = first;
            opcode = self.program.read8(pc.wrapping_add(offset))?;
            offset += 1;
            descriptor = lookup(prefix, opcode).ok_or(ExecutionError::UnrecognizedOpcode {
                prefix,
                opcode,
                pc,
            })?;
        }

        let op = match descriptor.operation {
            Operation::Implemented(op) => op,
            Operation::Unimplemented => {
                let skip = descriptor.length(prefix != 0);
                return self.fault(
                    ExecutionError::UnimplementedOpcode { prefix, opcode, pc },
                    self.config.unimplemented_opcode,
                    skip,
                );
            }
            Operation::Illegal | Operation::Prefix => {
                return self.fault(
                    ExecutionError::UnrecognizedOpcode { prefix, opcode, pc },
                    self.config.unrecognized_opcode,
                    offset,
                );
            }
        };

        let mut displacement = 0;
        if descriptor.has_displacement {
            displacement = self.program.read8(pc.wrapping_add(offset))?;
            offset += 1;
        }

        let immediate = match descriptor.immediate.bytes() {
            1 => self.program.read8(pc.wrapping_add(offset))? as u16,
            2 => self.program.read16(pc.wrapping_add(offset))?,
            _ => 0,
        };
        offset += descriptor.immediate.bytes();

        let operands = Operands {
            fields: OpcodeFields::decode(opcode),
            displacement,
            immediate,
            length: offset,
        };

        instructions::execute(self, op, &operands);

        self.pc = self.pc.wrapping_add(offset);
        self.tick_count += 1;

        if let Some(observer) = self.observer.as_mut() {
            observer.on_instruction(&TraceEvent {
                pc,
                prefix,
                opcode,
                descriptor,
                displacement,
                immediate,
                length: offset,
                next_pc: self.pc,
                tick: self.tick_count,
            });
        }

        Ok(())
    }

    /// Runs up to `count` instructions, stopping early if the CPU halts.
    ///
    /// Returns the number of instructions executed.
    pub fn run_instructions(&mut self, count: u32) -> Result<u32, ExecutionError> {
        let mut executed = 0;
        while executed < count && !self.halted {
            self.run_instruction()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Runs one frame's burst of instructions (`CoreConfig::instructions_per_frame`).
    ///
    /// Stands in for "run until the video unit signals a frame boundary".
    pub fn run_frame(&mut self) -> Result<u32, ExecutionError> {
        self.run_instructions(self.config.instructions_per_frame)
    }

    fn fault(
        &mut self,
        error: ExecutionError,
        policy: FaultPolicy,
        skip: u16,
    ) -> Result<(), ExecutionError> {
        match policy {
            FaultPolicy::Halt => Err(error),
            FaultPolicy::Skip => {
                warn!(target: "lr35902::cpu", %error, skip, "skipping instruction");
                self.pc = self.pc.wrapping_add(skip);
                self.tick_count += 1;
                Ok(())
            }
        }
    }

    // ========== Operand Access ==========

    pub(crate) fn read_r8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlIndirect => self.memory.read(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    pub(crate) fn write_r8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlIndirect => self.memory.write(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    pub(crate) fn read_rp(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.sp,
        }
    }

    pub(crate) fn write_rp(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.sp = value,
        }
    }

    pub(crate) fn read_rp2(&self, reg: StackReg16) -> u16 {
        match reg {
            StackReg16::BC => self.regs.bc(),
            StackReg16::DE => self.regs.de(),
            StackReg16::HL => self.regs.hl(),
            StackReg16::AF => self.regs.af(),
        }
    }

    pub(crate) fn write_rp2(&mut self, reg: StackReg16, value: u16) {
        match reg {
            StackReg16::BC => self.regs.set_bc(value),
            StackReg16::DE => self.regs.set_de(value),
            StackReg16::HL => self.regs.set_hl(value),
            StackReg16::AF => self.regs.set_af(value),
        }
    }

    pub(crate) fn condition(&self, cc: Condition) -> bool {
        match cc {
            Condition::NotZero => !self.regs.flag(Flags::ZERO),
            Condition::Zero => self.regs.flag(Flags::ZERO),
            Condition::NotCarry => !self.regs.flag(Flags::CARRY),
            Condition::Carry => self.regs.flag(Flags::CARRY),
        }
    }

    /// Points PC at `target` once the loop's uniform advance has been applied.
    pub(crate) fn redirect(&mut self, target: u16, operands: &Operands) {
        self.pc = target.wrapping_sub(operands.length);
    }

    // ========== Stack ==========

    /// Pushes a word: high byte at `SP-1`, low byte at `SP-2`, then `SP -= 2`.
    ///
    /// ```
    /// use lr35902::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_sp(0xFFFE);
    /// cpu.push_word(0xBEEF);
    /// assert_eq!(cpu.read_memory(0xFFFD), 0xBE);
    /// assert_eq!(cpu.read_memory(0xFFFC), 0xEF);
    /// assert_eq!(cpu.sp(), 0xFFFC);
    /// ```
    pub fn push_word(&mut self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.sp = self.sp.wrapping_sub(1);
        self.memory.write(self.sp, high);
        self.sp = self.sp.wrapping_sub(1);
        self.memory.write(self.sp, low);
    }

    /// Pops a word pushed by [`CPU::push_word`].
    pub fn pop_word(&mut self) -> u16 {
        let low = self.memory.read(self.sp);
        self.sp = self.sp.wrapping_add(1);
        let high = self.memory.read(self.sp);
        self.sp = self.sp.wrapping_add(1);
        u16::from_be_bytes([high, low])
    }

    // ========== Memory and Program Access ==========

    pub fn read_memory(&self, address: u16) -> u8 {
        self.memory.read(address)
    }

    pub fn write_memory(&mut self, address: u16, value: u8) {
        self.memory.write(address, value);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn program(&self) -> &ProgramImage {
        &self.program
    }

    pub fn read_program8(&self, address: u16) -> Result<u8, ExecutionError> {
        self.program.read8(address)
    }

    /// Little-endian word read from the program image.
    pub fn read_program16(&self, address: u16) -> Result<u16, ExecutionError> {
        self.program.read16(address)
    }

    pub fn write_program(&mut self, address: u16, value: u8) -> Result<(), ExecutionError> {
        self.program.write(address, value)
    }

    // ========== Observers and Configuration ==========

    /// Installs an observer that sees every committed instruction.
    pub fn set_observer(&mut self, observer: Box<dyn InstructionObserver>) {
        self.observer = Some(observer);
    }

    /// Removes and returns the installed observer.
    pub fn clear_observer(&mut self) -> Option<Box<dyn InstructionObserver>> {
        self.observer.take()
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CoreConfig {
        &mut self.config
    }

    // ========== Register Access ==========

    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn sp(&self) -> u16 {
        self.sp
    }

    pub fn set_sp(&mut self, sp: u16) {
        self.sp = sp;
    }

    /// Returns the number of instructions completed since construction.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the interrupt master enable latch.
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Returns true after HALT or STOP until [`CPU::resume`] is called.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Leaves the halted state. The hook an interrupt controller would use.
    pub fn resume(&mut self) {
        self.halted = false;
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flag(Flags::ZERO)
    }

    /// Returns true if the Subtract flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flag(Flags::SUBTRACT)
    }

    /// Returns true if the Half-carry flag is set.
    pub fn flag_h(&self) -> bool {
        self.regs.flag(Flags::HALF_CARRY)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flag(Flags::CARRY)
    }
}
