//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that decoding, register access and
//! execution maintain fundamental invariants across all input combinations.

use lr35902::{
    Flags, FlatMemory, Op, OpcodeFields, Operation, Registers, CB_PREFIX, CB_TABLE, CPU,
    UNPREFIXED_TABLE,
};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program.to_vec());
    cpu
}

fn is_branch(op: Op) -> bool {
    matches!(
        op,
        Op::Jr | Op::Jp | Op::JpHl | Op::Call | Op::Ret | Op::Reti | Op::Rst
    )
}

/// (prefix, opcode) for every implemented, non-branching instruction
fn non_branching_opcodes() -> Vec<(u8, u8)> {
    let unprefixed = UNPREFIXED_TABLE
        .iter()
        .enumerate()
        .filter(|(_, d)| matches!(d.operation, Operation::Implemented(op) if !is_branch(op)))
        .map(|(i, _)| (0, i as u8));
    let prefixed = (0..=255u8).map(|i| (CB_PREFIX, i));
    unprefixed.chain(prefixed).collect()
}

fn encode(prefix: u8, opcode: u8, operand1: u8, operand2: u8) -> Vec<u8> {
    if prefix == CB_PREFIX {
        vec![prefix, opcode]
    } else {
        vec![opcode, operand1, operand2]
    }
}

fn length(prefix: u8, opcode: u8) -> u16 {
    if prefix == CB_PREFIX {
        CB_TABLE[opcode as usize].length(true)
    } else {
        UNPREFIXED_TABLE[opcode as usize].length(false)
    }
}

// ========== Decoder Property Tests ==========

proptest! {
    /// Property: decoding is total and lossless
    #[test]
    fn prop_decode_round_trips(opcode in 0u8..=255u8) {
        let fields = OpcodeFields::decode(opcode);

        prop_assert!(fields.x <= 3);
        prop_assert!(fields.y <= 7 && fields.z <= 7);
        prop_assert_eq!(fields.p, fields.y >> 1);
        prop_assert_eq!(fields.q, fields.y & 1);
        prop_assert_eq!(fields.encode(), opcode);
    }
}

// ========== Register Property Tests ==========

proptest! {
    /// Property: pair writes split high/low and read back unchanged
    #[test]
    fn prop_register_pairs_round_trip(value in 0u16..=0xFFFF) {
        let mut regs = Registers::default();

        regs.set_bc(value);
        regs.set_de(value);
        regs.set_hl(value);

        prop_assert_eq!(regs.bc(), value);
        prop_assert_eq!(regs.de(), value);
        prop_assert_eq!(regs.hl(), value);
        prop_assert_eq!(regs.h, (value >> 8) as u8);
        prop_assert_eq!(regs.l, value as u8);
    }

    /// Property: AF never holds bits in the low nibble of F
    #[test]
    fn prop_af_masks_flags(value in 0u16..=0xFFFF) {
        let mut regs = Registers::default();
        regs.set_af(value);

        prop_assert_eq!(regs.af(), value & 0xFFF0);
        prop_assert_eq!(regs.a, (value >> 8) as u8);
    }
}

// ========== Stack Property Tests ==========

proptest! {
    /// Property: pop returns what push stored and restores SP
    #[test]
    fn prop_push_pop_round_trip(sp in 0u16..=0xFFFF, value in 0u16..=0xFFFF) {
        let mut cpu = setup_cpu(&[]);
        cpu.set_sp(sp);

        cpu.push_word(value);
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(2));
        prop_assert_eq!(cpu.read_memory(sp.wrapping_sub(1)), (value >> 8) as u8);

        prop_assert_eq!(cpu.pop_word(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }
}

proptest! {
    /// Property: N pushes followed by N pops restore SP and return the words
    /// in reverse order
    #[test]
    fn prop_push_pop_sequence_round_trip(
        sp in 0u16..=0xFFFF,
        words in prop::collection::vec(0u16..=0xFFFF, 1..32),
    ) {
        let mut cpu = setup_cpu(&[]);
        cpu.set_sp(sp);

        for &word in &words {
            cpu.push_word(word);
        }
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(2 * words.len() as u16));

        let popped: Vec<u16> = (0..words.len()).map(|_| cpu.pop_word()).collect();
        let expected: Vec<u16> = words.iter().rev().copied().collect();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(cpu.sp(), sp);
    }
}

// ========== Flag Isolation Property Tests ==========

/// (name, encoding, flags the instruction must leave alone)
fn flag_isolation_cases() -> Vec<(&'static str, Vec<u8>, Flags)> {
    let all = Flags::all();
    vec![
        ("NOP", vec![0x00], all),
        ("LD B,C", vec![0x41], all),
        ("LD A,d8", vec![0x3E], all),
        ("LD (HL),A", vec![0x77], all),
        ("LD BC,d16", vec![0x01], all),
        ("LD SP,HL", vec![0xF9], all),
        ("INC BC", vec![0x03], all),
        ("DEC BC", vec![0x0B], all),
        ("PUSH BC", vec![0xC5], all),
        ("POP BC", vec![0xC1], all),
        ("DI", vec![0xF3], all),
        ("EI", vec![0xFB], all),
        ("JR r8", vec![0x18], all),
        ("JP a16", vec![0xC3], all),
        ("INC B", vec![0x04], Flags::CARRY),
        ("DEC B", vec![0x05], Flags::CARRY),
        ("INC (HL)", vec![0x34], Flags::CARRY),
        ("ADD HL,BC", vec![0x09], Flags::ZERO),
        ("ADD HL,SP", vec![0x39], Flags::ZERO),
        ("RLCA", vec![0x07], Flags::ZERO | Flags::SUBTRACT | Flags::HALF_CARRY),
        ("RRCA", vec![0x0F], Flags::ZERO | Flags::SUBTRACT | Flags::HALF_CARRY),
        ("RLA", vec![0x17], Flags::ZERO | Flags::SUBTRACT | Flags::HALF_CARRY),
        ("RRA", vec![0x1F], Flags::ZERO | Flags::SUBTRACT | Flags::HALF_CARRY),
        ("DAA", vec![0x27], Flags::SUBTRACT),
        ("CPL", vec![0x2F], Flags::ZERO | Flags::CARRY),
        ("SCF", vec![0x37], Flags::ZERO),
        ("CCF", vec![0x3F], Flags::ZERO),
        ("BIT 0,B", vec![0xCB, 0x40], Flags::CARRY),
        ("BIT 7,(HL)", vec![0xCB, 0x7E], Flags::CARRY),
        ("RES 0,B", vec![0xCB, 0x80], all),
        ("SET 7,A", vec![0xCB, 0xFF], all),
    ]
}

proptest! {
    /// Property: an instruction leaves every flag outside its documented set
    /// bit-for-bit unchanged
    #[test]
    fn prop_flag_isolation(
        (name, encoding, preserved) in prop::sample::select(flag_isolation_cases()),
        f in 0u8..=255u8,
        a in 0u8..=255u8,
        b in 0u8..=255u8,
        hl in 0u16..=0xFFFF,
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
    ) {
        let mut program = encoding;
        program.extend_from_slice(&[operand1, operand2]);
        let mut cpu = setup_cpu(&program);
        cpu.registers_mut().f = Flags::from_bits_truncate(f);
        cpu.registers_mut().a = a;
        cpu.registers_mut().b = b;
        cpu.registers_mut().set_hl(hl);
        let before = cpu.registers().f;

        cpu.run_instruction().unwrap();

        prop_assert_eq!(
            cpu.registers().f & preserved,
            before & preserved,
            "{} changed flags outside its set",
            name
        );
    }
}

// ========== PC Advancement Property Tests ==========

proptest! {
    /// Property: For non-branching instructions, PC advances by exactly the
    /// encoded length
    #[test]
    fn prop_pc_advances_by_instruction_length(
        (prefix, opcode) in prop::sample::select(non_branching_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
        hl in 0u16..=0xFFFF,
    ) {
        let mut cpu = setup_cpu(&encode(prefix, opcode, operand1, operand2));
        cpu.registers_mut().set_hl(hl);

        cpu.run_instruction().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            length(prefix, opcode),
            "PC after {:#04X}:{:#04X}",
            prefix,
            opcode
        );
        prop_assert_eq!(cpu.tick_count(), 1);
    }

    /// Property: the low nibble of F stays zero after any instruction
    #[test]
    fn prop_flags_low_nibble_stays_zero(
        (prefix, opcode) in prop::sample::select(non_branching_opcodes()),
        a in 0u8..=255u8,
        f in 0u8..=255u8,
        operand1 in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu(&encode(prefix, opcode, operand1, 0x00));
        cpu.registers_mut().a = a;
        cpu.registers_mut().f = Flags::from_bits_truncate(f);

        cpu.run_instruction().unwrap();

        prop_assert_eq!(cpu.registers().f.bits() & 0x0F, 0);
    }

    /// Property: a relative jump moves PC by length plus displacement when
    /// taken, and by length alone when not
    #[test]
    fn prop_jr_target(
        start in 0u16..0x100,
        offset in any::<i8>(),
        zero in proptest::bool::ANY,
    ) {
        let mut program = vec![0x00; start as usize];
        program.extend_from_slice(&[0x20, offset as u8]); // JR NZ,r8
        let mut cpu = setup_cpu(&program);
        cpu.set_pc(start);
        cpu.registers_mut().set_flag(Flags::ZERO, zero);

        cpu.run_instruction().unwrap();

        let fallthrough = start + 2;
        let expected = if zero {
            fallthrough
        } else {
            fallthrough.wrapping_add(offset as i16 as u16)
        };
        prop_assert_eq!(cpu.pc(), expected);
    }
}

// ========== ALU Property Tests ==========

proptest! {
    /// Property: ADC computes A + n + C with carry out of bit 7
    #[test]
    fn prop_adc_immediate_result(
        a in 0u8..=255u8,
        operand in 0u8..=255u8,
        carry_in in proptest::bool::ANY,
    ) {
        let mut cpu = setup_cpu(&[0xCE, operand]);
        cpu.registers_mut().a = a;
        cpu.registers_mut().set_flag(Flags::CARRY, carry_in);

        cpu.run_instruction().unwrap();

        let sum = a as u16 + operand as u16 + carry_in as u16;
        prop_assert_eq!(cpu.registers().a, sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_z(), sum as u8 == 0);
        prop_assert!(!cpu.flag_n());
    }

    /// Property: SBC computes A - n - C with borrow in C
    #[test]
    fn prop_sbc_immediate_result(
        a in 0u8..=255u8,
        operand in 0u8..=255u8,
        carry_in in proptest::bool::ANY,
    ) {
        let mut cpu = setup_cpu(&[0xDE, operand]);
        cpu.registers_mut().a = a;
        cpu.registers_mut().set_flag(Flags::CARRY, carry_in);

        cpu.run_instruction().unwrap();

        let diff = a as i16 - operand as i16 - carry_in as i16;
        prop_assert_eq!(cpu.registers().a, diff as u8);
        prop_assert_eq!(cpu.flag_c(), diff < 0);
        prop_assert!(cpu.flag_n());
    }

    /// Property: CP sets the same flags as SUB without writing A
    #[test]
    fn prop_cp_matches_sub_flags(a in 0u8..=255u8, operand in 0u8..=255u8) {
        let mut sub = setup_cpu(&[0xD6, operand]);
        let mut cp = setup_cpu(&[0xFE, operand]);
        sub.registers_mut().a = a;
        cp.registers_mut().a = a;

        sub.run_instruction().unwrap();
        cp.run_instruction().unwrap();

        prop_assert_eq!(cp.registers().f, sub.registers().f);
        prop_assert_eq!(cp.registers().a, a);
    }

    /// Property: XOR/OR results and flags
    #[test]
    fn prop_logical_immediate(a in 0u8..=255u8, operand in 0u8..=255u8) {
        let mut xor = setup_cpu(&[0xEE, operand]);
        let mut or = setup_cpu(&[0xF6, operand]);
        xor.registers_mut().a = a;
        or.registers_mut().a = a;

        xor.run_instruction().unwrap();
        or.run_instruction().unwrap();

        prop_assert_eq!(xor.registers().a, a ^ operand);
        prop_assert_eq!(xor.registers().f, if a ^ operand == 0 { Flags::ZERO } else { Flags::empty() });
        prop_assert_eq!(or.registers().a, a | operand);
        prop_assert_eq!(or.registers().f, if a | operand == 0 { Flags::ZERO } else { Flags::empty() });
    }

    /// Property: SWAP twice is the identity
    #[test]
    fn prop_swap_involution(value in 0u8..=255u8) {
        let mut cpu = setup_cpu(&[0xCB, 0x30, 0xCB, 0x30]); // SWAP B ; SWAP B
        cpu.registers_mut().b = value;

        cpu.run_instruction().unwrap();
        prop_assert_eq!(cpu.registers().b, value.rotate_left(4));

        cpu.run_instruction().unwrap();
        prop_assert_eq!(cpu.registers().b, value);
    }
}
