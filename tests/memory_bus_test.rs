//! Memory bus trait tests
//!
//! Verifies FlatMemory and that the CPU works against any `MemoryBus`.

use std::collections::HashMap;

use cpu6502::{FlatMemory, LoadError, MemoryBus, CPU};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF] {
        assert_eq!(
            memory.read(addr), 0x00,
            "Memory at 0x{:04X} should be initialized to 0",
            addr
        );
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x1234, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for &(addr, value) in &test_data {
        memory.write(addr, value);
        assert_eq!(memory.read(addr), value, "address 0x{:04X}", addr);
    }
}

#[test]
fn test_load_program_fits_exactly() {
    let mut memory = FlatMemory::new();

    memory.load_program(0xFFFE, &[0x11, 0x22]).unwrap();

    assert_eq!(memory.read16(0xFFFE), 0x2211);
}

#[test]
fn test_load_program_rejects_overflow() {
    let mut memory = FlatMemory::new();

    let err = memory.load_program(0xFFFF, &[0x11, 0x22]).unwrap_err();

    assert_eq!(
        err,
        LoadError::DoesNotFit {
            start: 0xFFFF,
            len: 2
        }
    );
    assert_eq!(memory.read(0xFFFF), 0x00);
    assert_eq!(memory.read(0x0000), 0x00);
}

/// Sparse bus that records every write.
#[derive(Default)]
struct LoggingBus {
    cells: HashMap<u16, u8>,
    writes: Vec<(u16, u8)>,
}

impl MemoryBus for LoggingBus {
    fn read(&self, addr: u16) -> u8 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.cells.insert(addr, value);
        self.writes.push((addr, value));
    }
}

#[test]
fn test_cpu_with_custom_bus() {
    let mut bus = LoggingBus::default();
    bus.write_block(0xFFFC, &[0x00, 0x80]);
    // LDA #$2A; PHA; STA $0300
    bus.write_block(0x8000, &[0xA9, 0x2A, 0x48, 0x8D, 0x00, 0x03]);
    bus.writes.clear();

    let mut cpu = CPU::new(&mut bus);
    for _ in 0..3 {
        cpu.step().unwrap();
    }

    assert_eq!(bus.writes, vec![(0x01FD, 0x2A), (0x0300, 0x2A)]);
}

#[test]
fn test_memory_survives_cpu_borrow() {
    let mut memory = FlatMemory::with_reset_vector(0x8000);
    memory.write_block(0x8000, &[0xE6, 0x40]); // INC $40

    for _ in 0..3 {
        let mut cpu = CPU::new(&mut memory);
        cpu.step().unwrap();
    }

    assert_eq!(memory.read(0x0040), 3);
}
