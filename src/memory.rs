//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, a plain 64KB RAM.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are `u16`, so every access is already reduced modulo 65536
//! - Multi-byte helpers wrap from 0xFFFF to 0x0000

use thiserror::Error;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations provide the memory backend for the CPU. Only `read` and
/// `write` are required; the 16-bit read and block write are derived from them.
///
/// The trait is also implemented for `&mut T`, so a CPU can work on memory
/// that is owned elsewhere and outlives it.
///
/// # Examples
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_block(0x2000, &[0x34, 0x12]);
/// assert_eq!(mem.read16(0x2000), 0x1234);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped addresses may
    /// ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The second address wraps from 0xFFFF to 0x0000.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes `data` starting at `start`, wrapping past 0xFFFF.
    fn write_block(&mut self, start: u16, data: &[u8]) {
        let mut addr = start;
        for &byte in data {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }

    fn read16(&self, addr: u16) -> u16 {
        (**self).read16(addr)
    }

    fn write_block(&mut self, start: u16, data: &[u8]) {
        (**self).write_block(start, data)
    }
}

/// Error returned when a program image cannot be placed in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The image would run past 0xFFFF.
    #[error("{len} bytes do not fit in memory starting at 0x{start:04X}")]
    DoesNotFit { start: u16, len: usize },
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array,
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::with_reset_vector(0x8000);
/// memory.load_program(0x8000, &[0xEA]).unwrap(); // NOP
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc, 0x8000);
/// cpu.step().unwrap();
/// assert_eq!(cpu.pc, 0x8001);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Creates zeroed memory whose reset vector (0xFFFC/0xFFFD) points at `addr`.
    pub fn with_reset_vector(addr: u16) -> Self {
        let mut mem = Self::new();
        mem.write_block(0xFFFC, &addr.to_le_bytes());
        mem
    }

    /// Copies a program image into memory at `start`.
    ///
    /// Unlike [`MemoryBus::write_block`] this refuses images that would wrap
    /// past the end of the address space, leaving memory untouched.
    pub fn load_program(&mut self, start: u16, data: &[u8]) -> Result<(), LoadError> {
        let begin = start as usize;
        let end = begin + data.len();
        if end > self.data.len() {
            return Err(LoadError::DoesNotFit {
                start,
                len: data.len(),
            });
        }
        self.data[begin..end].copy_from_slice(data);
        Ok(())
    }

    /// Borrows the whole address space, e.g. for a display observer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
