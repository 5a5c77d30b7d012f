//! Tests for PHA, PHP, PLA and PLP.
//!
//! The stack lives at 0x0100-0x01FF, grows downward and wraps within the
//! page.

use cpu6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_writes_and_decrements() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x48);

    cpu.a = 0x42;
    let before = cpu.p;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0x42);
    assert_eq!(cpu.sp, 0xFC);
    assert_eq!(cpu.p, before);
    assert_eq!(cpu.pc, 0x8001);
    assert_eq!(cpu.cycles, 3);
}

#[test]
fn test_pha_wraps_stack_pointer() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x48);

    cpu.a = 0x99;
    cpu.sp = 0x00;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp, 0xFF);
}

#[test]
fn test_pla_reads_and_sets_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x01FE, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x80);
    assert_eq!(cpu.sp, 0xFE);
    assert!(cpu.p.get(Status::NEGATIVE));
    assert!(!cpu.p.get(Status::ZERO));
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_pla_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x01FE, 0x00);

    cpu.a = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.get(Status::ZERO));
}

#[test]
fn test_pla_wraps_stack_pointer() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x68);
    cpu.memory_mut().write(0x0100, 0x33);

    cpu.sp = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x33);
    assert_eq!(cpu.sp, 0x00);
}

#[test]
fn test_php_pushes_break_and_unused() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x08);

    cpu.p = Status::CARRY | Status::NEGATIVE;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0xB1);
    // The live register is not modified
    assert_eq!(cpu.p, Status::CARRY | Status::NEGATIVE);
    assert_eq!(cpu.sp, 0xFC);
    assert_eq!(cpu.cycles, 3);
}

#[test]
fn test_plp_restores_raw_byte() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x28);
    cpu.memory_mut().write(0x01FE, 0xC3);

    cpu.step().unwrap();

    assert_eq!(cpu.p.bits(), 0xC3);
    assert!(cpu.p.get(Status::NEGATIVE));
    assert!(cpu.p.get(Status::OVERFLOW));
    assert!(cpu.p.get(Status::ZERO));
    assert!(cpu.p.get(Status::CARRY));
    assert!(!cpu.p.get(Status::UNUSED));
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();

    // PHA; LDA #$00; PLA
    cpu.memory_mut()
        .write_block(0x8000, &[0x48, 0xA9, 0x00, 0x68]);

    cpu.a = 0x99;
    let initial_sp = cpu.sp;

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a, 0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x99);
    assert_eq!(cpu.sp, initial_sp);
    assert!(cpu.p.get(Status::NEGATIVE));
}

#[test]
fn test_php_plp_round_trip_sets_break_bits() {
    let mut cpu = setup_cpu();

    // PHP; CLC; PLP
    cpu.memory_mut().write_block(0x8000, &[0x08, 0x18, 0x28]);

    cpu.p = Status::CARRY;

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(!cpu.p.get(Status::CARRY));
    cpu.step().unwrap();

    assert!(cpu.p.get(Status::CARRY));
    assert!(cpu.p.get(Status::BREAK));
    assert!(cpu.p.get(Status::UNUSED));
    assert_eq!(cpu.cycles, 3 + 2 + 4);
}
