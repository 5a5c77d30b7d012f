//! Comprehensive tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (C, Z, V, N)
//! - Overflow conditions
//! - Decimal mode
//! - Cycle counts including page crossing penalties

use cpu6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    // ADC #$05
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.a = 0x10;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x15);
    assert!(!cpu.p.get(Status::CARRY));
    assert!(!cpu.p.get(Status::ZERO));
    assert!(!cpu.p.get(Status::OVERFLOW));
    assert!(!cpu.p.get(Status::NEGATIVE));
    assert_eq!(cpu.pc, 0x8002);
    assert_eq!(cpu.cycles, 2);
}

#[test]
fn test_adc_with_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x05);

    cpu.a = 0x10;
    cpu.p.set(Status::CARRY, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x16);
    assert!(!cpu.p.get(Status::CARRY));
}

// ========== Flag Tests ==========

#[test]
fn test_adc_carry_and_zero() {
    let mut cpu = setup_cpu();

    // ADC #$01 with A = 0xFF
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x01);

    cpu.a = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.get(Status::CARRY));
    assert!(cpu.p.get(Status::ZERO));
    assert!(!cpu.p.get(Status::OVERFLOW));
}

#[test]
fn test_adc_positive_overflow() {
    let mut cpu = setup_cpu();

    // 0x50 + 0x50 = 0xA0: two positives give a negative
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x50);

    cpu.a = 0x50;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0xA0);
    assert!(cpu.p.get(Status::OVERFLOW));
    assert!(cpu.p.get(Status::NEGATIVE));
    assert!(!cpu.p.get(Status::CARRY));
}

#[test]
fn test_adc_negative_overflow() {
    let mut cpu = setup_cpu();

    // 0x90 + 0x90 = 0x120: two negatives give a positive
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x90);

    cpu.a = 0x90;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x20);
    assert!(cpu.p.get(Status::OVERFLOW));
    assert!(cpu.p.get(Status::CARRY));
    assert!(!cpu.p.get(Status::NEGATIVE));
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.a = 0x7F;
    cpu.p.set(Status::OVERFLOW, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x7E);
    assert!(!cpu.p.get(Status::OVERFLOW));
    assert!(cpu.p.get(Status::CARRY));
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $42
    cpu.memory_mut().write(0x8000, 0x65);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.memory_mut().write(0x0042, 0x07);

    cpu.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x08);
    assert_eq!(cpu.pc, 0x8002);
    assert_eq!(cpu.cycles, 3);
}

#[test]
fn test_adc_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    // ADC $F0,X with X = 0x20 reads $10
    cpu.memory_mut().write(0x8000, 0x75);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x0010, 0x22);

    cpu.a = 0x11;
    cpu.x = 0x20;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x33);
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_adc_absolute() {
    let mut cpu = setup_cpu();

    // ADC $1234
    cpu.memory_mut().write(0x8000, 0x6D);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1234, 0x40);

    cpu.a = 0x02;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x8003);
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_adc_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $1200,X with X = 0x05
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1205, 0x01);

    cpu.x = 0x05;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x01);
    assert_eq!(cpu.cycles, 4);
}

#[test]
fn test_adc_absolute_x_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $12FF,X with X = 0x01 reads $1300
    cpu.memory_mut().write(0x8000, 0x7D);
    cpu.memory_mut().write(0x8001, 0xFF);
    cpu.memory_mut().write(0x8002, 0x12);
    cpu.memory_mut().write(0x1300, 0x09);

    cpu.x = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x09);
    assert_eq!(cpu.cycles, 5); // +1 for page crossing
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $20F0,Y with Y = 0x20 reads $2110
    cpu.memory_mut().write(0x8000, 0x79);
    cpu.memory_mut().write(0x8001, 0xF0);
    cpu.memory_mut().write(0x8002, 0x20);
    cpu.memory_mut().write(0x2110, 0x03);

    cpu.y = 0x20;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x03);
    assert_eq!(cpu.cycles, 5);
}

#[test]
fn test_adc_indirect_x() {
    let mut cpu = setup_cpu();

    // ADC ($20,X) with X = 0x04: pointer at $24 -> $3000
    cpu.memory_mut().write(0x8000, 0x61);
    cpu.memory_mut().write(0x8001, 0x20);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3000, 0x05);

    cpu.a = 0x05;
    cpu.x = 0x04;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x0A);
    assert_eq!(cpu.cycles, 6);
}

#[test]
fn test_adc_indirect_y() {
    let mut cpu = setup_cpu();

    // ADC ($40),Y with Y = 0x10: pointer $3000 -> $3010
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0x00);
    cpu.memory_mut().write(0x0041, 0x30);
    cpu.memory_mut().write(0x3010, 0x0F);

    cpu.a = 0x01;
    cpu.y = 0x10;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x10);
    assert_eq!(cpu.cycles, 5);
}

#[test]
fn test_adc_indirect_y_page_cross() {
    let mut cpu = setup_cpu();

    // ADC ($40),Y with Y = 0x01: pointer $30FF -> $3100
    cpu.memory_mut().write(0x8000, 0x71);
    cpu.memory_mut().write(0x8001, 0x40);
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x30);
    cpu.memory_mut().write(0x3100, 0x01);

    cpu.y = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x01);
    assert_eq!(cpu.cycles, 6);
}

// ========== Decimal Mode Tests ==========

#[test]
fn test_adc_decimal_basic() {
    let mut cpu = setup_cpu();

    // SED; ADC #$25 with A = 0x19
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x25);

    cpu.a = 0x19;
    cpu.p.set(Status::DECIMAL, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x44);
    assert!(!cpu.p.get(Status::CARRY));
    assert_eq!(cpu.cycles, 2);
}

#[test]
fn test_adc_decimal_carry_out() {
    let mut cpu = setup_cpu();

    // 58 + 46 + 1 = 105
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x46);

    cpu.a = 0x58;
    cpu.p.set(Status::DECIMAL, true);
    cpu.p.set(Status::CARRY, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x05);
    assert!(cpu.p.get(Status::CARRY));
}

#[test]
fn test_adc_decimal_99_plus_1_wraps() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x01);

    cpu.a = 0x99;
    cpu.p.set(Status::DECIMAL, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.get(Status::CARRY));
    assert!(cpu.p.get(Status::ZERO));
}

#[test]
fn test_adc_decimal_overflow_from_binary_sum() {
    let mut cpu = setup_cpu();

    // Binary 0x79 + 0x10 = 0x89 overflows, decimal 79 + 10 = 89
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, 0x10);

    cpu.a = 0x79;
    cpu.p.set(Status::DECIMAL, true);

    cpu.step().unwrap();

    assert_eq!(cpu.a, 0x89);
    assert!(cpu.p.get(Status::OVERFLOW));
    assert!(cpu.p.get(Status::NEGATIVE));
    assert!(!cpu.p.get(Status::CARRY));
}
