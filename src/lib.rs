//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 instruction execution core: register file,
//! packed status flags, addressing-mode resolution and the complete set of
//! documented opcodes, including decimal-mode arithmetic and the indirect
//! `JMP` page-wrap bug.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus, Status};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$10; ADC #$20
//! memory.write_block(0x8000, &[0xA9, 0x10, 0x69, 0x20]);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc, 0x8000);
//!
//! cpu.step().unwrap();
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.a, 0x30);
//! assert!(!cpu.p.get(Status::CARRY));
//! assert_eq!(cpu.cycles, 4);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait.
//!   The CPU may own its memory or borrow it (`CPU<&mut FlatMemory>`).
//! - **Table-Driven Decoding**: `OPCODE_TABLE` maps every opcode byte to its
//!   metadata; undocumented opcodes have no entry and are reported, not executed.
//! - **Cycle Accuracy**: every documented opcode charges its NMOS cycle count,
//!   plus page-crossing and branch penalties.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `status` - Packed status register
//! - `memory` - MemoryBus trait and FlatMemory
//! - `addressing` - Addressing modes and effective address resolution
//! - `opcodes` - Opcode metadata table
//! - `runner` - Bounded execution with spin-loop detection
//! - `snapshot` - Serializable register state

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod runner;
pub mod snapshot;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, LoadError, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use runner::{run, RunConfig, RunSummary, StopReason, UnimplementedPolicy};
pub use snapshot::CpuSnapshot;
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode has no documented instruction.
    ///
    /// `pc` is the address the opcode was fetched from. The CPU has already
    /// advanced past the opcode byte, so execution may continue as if it were
    /// a one-byte NOP.
    #[error("opcode 0x{opcode:02X} at 0x{pc:04X} is not implemented")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /// An instruction asked for a memory operand in a mode that has none.
    #[error("addressing mode {mode:?} has no memory operand")]
    InvalidAddressingMode { mode: AddressingMode },
}
