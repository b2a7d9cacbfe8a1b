//! Tests for JR, JP, CALL, RET, RETI and RST.
//!
//! Every taken branch must land exactly on its target after the loop's
//! uniform PC advance; every untaken branch must only skip its own bytes.

use lr35902::{Flags, FlatMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program.to_vec());
    cpu
}

// ========== JR ==========

#[test]
fn test_jr_not_taken_skips_instruction() {
    // JR NZ,+5 with Z set
    let mut cpu = setup_cpu(&[0x20, 0x05]);
    cpu.registers_mut().set_flag(Flags::ZERO, true);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_jr_taken_applies_displacement() {
    // JR NZ,+5 with Z clear
    let mut cpu = setup_cpu(&[0x20, 0x05]);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 7);
}

#[test]
fn test_jr_backwards() {
    // NOP x4 ; JR -6
    let mut cpu = setup_cpu(&[0x00, 0x00, 0x00, 0x00, 0x18, 0xFA]);
    cpu.set_pc(4);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 0);
}

#[test]
fn test_jr_conditions() {
    // (opcode, flags, taken)
    let cases = [
        (0x20, Flags::empty(), true),
        (0x20, Flags::ZERO, false),
        (0x28, Flags::ZERO, true),
        (0x28, Flags::empty(), false),
        (0x30, Flags::empty(), true),
        (0x30, Flags::CARRY, false),
        (0x38, Flags::CARRY, true),
        (0x38, Flags::empty(), false),
        (0x18, Flags::empty(), true),
    ];

    for (opcode, flags, taken) in cases {
        let mut cpu = setup_cpu(&[opcode, 0x10]);
        cpu.registers_mut().f = flags;

        cpu.run_instruction().unwrap();

        let expected = if taken { 0x12 } else { 0x02 };
        assert_eq!(cpu.pc(), expected, "opcode {:#04X} flags {:?}", opcode, flags);
    }
}

// ========== JP ==========

#[test]
fn test_jp_absolute() {
    let mut cpu = setup_cpu(&[0xC3, 0x50, 0x01]);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 0x0150);
    assert_eq!(cpu.tick_count(), 1);
}

#[test]
fn test_jp_conditional() {
    // JP C,$1234 not taken ; JP NC,$0000 taken
    let mut cpu = setup_cpu(&[0xDA, 0x34, 0x12, 0xD2, 0x00, 0x00]);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 3);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 0);
}

#[test]
fn test_jp_hl() {
    let mut cpu = setup_cpu(&[0xE9]);
    cpu.registers_mut().set_hl(0x4000);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 0x4000);
}

// ========== CALL / RET ==========

#[test]
fn test_call_and_ret() {
    // 0000: CALL $0005
    // 0003: NOP
    // 0004: NOP
    // 0005: RET
    let mut cpu = setup_cpu(&[0xCD, 0x05, 0x00, 0x00, 0x00, 0xC9]);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 0x0005);
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(cpu.read_memory(0xFFFD), 0x00);
    assert_eq!(cpu.read_memory(0xFFFC), 0x03);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 0x0003);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn test_call_conditional_not_taken_leaves_stack() {
    // CALL Z,$0100
    let mut cpu = setup_cpu(&[0xCC, 0x00, 0x01]);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn test_ret_conditional() {
    // RET NZ (not taken) ; RET Z (taken)
    let mut cpu = setup_cpu(&[0xC0, 0xC8]);
    cpu.registers_mut().set_flag(Flags::ZERO, true);
    cpu.push_word(0x1234);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 1);
    assert_eq!(cpu.sp(), 0xFFFC);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn test_reti_enables_interrupts() {
    let mut cpu = setup_cpu(&[0xD9]);
    cpu.push_word(0x0200);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.pc(), 0x0200);
    assert!(cpu.ime());
}

#[test]
fn test_rst_vectors() {
    for (opcode, target) in [(0xC7, 0x00), (0xCF, 0x08), (0xEF, 0x28), (0xFF, 0x38)] {
        let mut cpu = setup_cpu(&[0x00, opcode]);
        cpu.run_instruction().unwrap();

        cpu.run_instruction().unwrap();

        assert_eq!(cpu.pc(), target, "RST opcode {:#04X}", opcode);
        assert_eq!(cpu.pop_word(), 0x0002);
    }
}

// ========== Interrupt latch ==========

#[test]
fn test_di_ei_only_latch() {
    // EI ; DI
    let mut cpu = setup_cpu(&[0xFB, 0xF3]);

    cpu.run_instruction().unwrap();
    assert!(cpu.ime());
    assert_eq!(cpu.pc(), 1);

    cpu.run_instruction().unwrap();
    assert!(!cpu.ime());
    assert_eq!(cpu.pc(), 2);
}
