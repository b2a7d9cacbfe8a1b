//! Tests for PUSH/POP and the stack primitives.

use lr35902::{Flags, FlatMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program.to_vec());
    cpu
}

#[test]
fn test_push_word_byte_order() {
    let mut cpu = setup_cpu(&[]);
    cpu.set_sp(0xFFFE);

    cpu.push_word(0xBEEF);

    assert_eq!(cpu.read_memory(0xFFFD), 0xBE);
    assert_eq!(cpu.read_memory(0xFFFC), 0xEF);
    assert_eq!(cpu.sp(), 0xFFFC);

    assert_eq!(cpu.pop_word(), 0xBEEF);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn test_stack_wraps_around_address_space() {
    let mut cpu = setup_cpu(&[]);
    cpu.set_sp(0x0001);

    cpu.push_word(0x1234);

    assert_eq!(cpu.read_memory(0x0000), 0x12);
    assert_eq!(cpu.read_memory(0xFFFF), 0x34);
    assert_eq!(cpu.sp(), 0xFFFF);
    assert_eq!(cpu.pop_word(), 0x1234);
    assert_eq!(cpu.sp(), 0x0001);
}

#[test]
fn test_push_pop_bc_to_de() {
    // PUSH BC ; POP DE
    let mut cpu = setup_cpu(&[0xC5, 0xD1]);
    cpu.registers_mut().set_bc(0xCAFE);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.sp(), 0xFFFC);
    assert_eq!(cpu.read_memory(0xFFFD), 0xCA);

    cpu.run_instruction().unwrap();
    assert_eq!(cpu.registers().de(), 0xCAFE);
    assert_eq!(cpu.sp(), 0xFFFE);
}

#[test]
fn test_push_af() {
    let mut cpu = setup_cpu(&[0xF5]);
    cpu.registers_mut().a = 0x12;
    cpu.registers_mut().f = Flags::ZERO | Flags::CARRY;

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.read_memory(0xFFFD), 0x12);
    assert_eq!(cpu.read_memory(0xFFFC), 0x90);
}

#[test]
fn test_pop_af_masks_low_nibble() {
    // POP AF
    let mut cpu = setup_cpu(&[0xF1]);
    cpu.push_word(0x34FF);

    cpu.run_instruction().unwrap();

    assert_eq!(cpu.registers().a, 0x34);
    assert_eq!(cpu.registers().f.bits(), 0xF0);
    assert_eq!(cpu.registers().af(), 0x34F0);
}

#[test]
fn test_push_pop_hl() {
    // PUSH HL ; LD HL,$0000 ; POP HL
    let mut cpu = setup_cpu(&[0xE5, 0x21, 0x00, 0x00, 0xE1]);
    cpu.registers_mut().set_hl(0x8001);

    cpu.run_instructions(3).unwrap();

    assert_eq!(cpu.registers().hl(), 0x8001);
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cpu.pc(), 5);
}
