//! Tests for the flag instructions: CLC, SEC, CLI, SEI, CLV, CLD, SED.

use cpu6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_each_flag_instruction() {
    // (opcode, flag, resulting value)
    let cases = [
        (0x18, Status::CARRY, false),             // CLC
        (0x38, Status::CARRY, true),              // SEC
        (0x58, Status::INTERRUPT_DISABLE, false), // CLI
        (0x78, Status::INTERRUPT_DISABLE, true),  // SEI
        (0xB8, Status::OVERFLOW, false),          // CLV
        (0xD8, Status::DECIMAL, false),           // CLD
        (0xF8, Status::DECIMAL, true),            // SED
    ];

    for (opcode, flag, value) in cases {
        for start in [Status::empty(), Status::all()] {
            let mut cpu = setup_cpu();
            cpu.memory_mut().write(0x8000, opcode);
            cpu.p = start;

            cpu.step().unwrap();

            assert_eq!(cpu.p.get(flag), value, "opcode 0x{:02X}", opcode);
            // Every other bit is untouched
            assert_eq!(cpu.p - flag, start - flag, "opcode 0x{:02X}", opcode);
            assert_eq!(cpu.pc, 0x8001);
            assert_eq!(cpu.cycles, 2);
        }
    }
}

#[test]
fn test_sed_switches_adc_to_decimal() {
    let mut cpu = setup_cpu();

    // SED; CLC; LDA #$09; ADC #$01; CLD; ADC #$01
    cpu.memory_mut().write_block(
        0x8000,
        &[0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01, 0xD8, 0x69, 0x01],
    );

    for _ in 0..4 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.a, 0x10);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a, 0x11);
}
