//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary register states, memory contents and
//! instruction bytes, then executes one instruction to find panics in the
//! decode and dispatch paths.

#![no_main]

use arbitrary::Arbitrary;
use lr35902::{CoreConfig, FaultPolicy, Flags, FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    f: u8,
    bc: u16,
    de: u16,
    hl: u16,
    sp: u16,
    /// Skip faults instead of returning them
    skip_faults: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Program image; may be shorter than the instruction it starts
    program: Vec<u8>,
    /// Bytes placed at HL, where `(HL)` operands read from
    hl_window: [u8; 4],
    /// Bytes placed at SP, where POP/RET read from
    stack_window: [u8; 4],
}

fuzz_target!(|input: FuzzInput| {
    if input.program.len() > 16 {
        return;
    }

    let state = &input.cpu_state;
    let mut memory = FlatMemory::new();
    memory.load(state.hl, &input.hl_window);
    memory.load(state.sp, &input.stack_window);

    let policy = if state.skip_faults {
        FaultPolicy::Skip
    } else {
        FaultPolicy::Halt
    };
    let config = CoreConfig {
        unrecognized_opcode: policy,
        unimplemented_opcode: policy,
        ..CoreConfig::default()
    };

    let mut cpu = CPU::with_config(memory, config);
    cpu.load_program(input.program.clone());

    let regs = cpu.registers_mut();
    regs.a = state.a;
    regs.f = Flags::from_bits_truncate(state.f);
    regs.set_bc(state.bc);
    regs.set_de(state.de);
    regs.set_hl(state.hl);
    cpu.set_sp(state.sp);

    // Errors are fine; panics are not
    let before = cpu.tick_count();
    match cpu.run_instruction() {
        Ok(()) => assert_eq!(cpu.tick_count(), before + 1),
        Err(_) => {
            assert_eq!(cpu.pc(), 0);
            assert_eq!(cpu.tick_count(), before);
        }
    }

    // The flags register never holds bits outside the top nibble
    assert_eq!(cpu.registers().f.bits() & 0x0F, 0);
});
