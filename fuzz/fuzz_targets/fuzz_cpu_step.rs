//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one instruction and checks the invariants that must hold
//! for every opcode.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{ExecutionError, FlatMemory, MemoryBus, OpcodeMetadata, Status, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte, all eight bits
    p: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::with_reset_vector(0x8000);

    // IRQ vector for BRK
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);

    memory.write_block(0x8000, &input.memory.instruction_bytes);
    memory.write_block(0x0000, &input.memory.zero_page);
    memory.write_block(0x0100, &input.memory.stack_page);
    memory.write_block(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.a = input.cpu_state.a;
    cpu.x = input.cpu_state.x;
    cpu.y = input.cpu_state.y;
    cpu.sp = input.cpu_state.sp;
    cpu.p = Status::from_bits_retain(input.cpu_state.p);

    let opcode = input.memory.instruction_bytes[0];
    let result = cpu.step();

    match OpcodeMetadata::lookup(opcode) {
        None => {
            // Undocumented: reported, one cycle charged, PC just past the byte
            assert_eq!(
                result,
                Err(ExecutionError::UnimplementedOpcode {
                    opcode,
                    pc: 0x8000
                })
            );
            assert_eq!(cpu.cycles, 1);
            assert_eq!(cpu.pc, 0x8001);
        }
        Some(metadata) => {
            assert!(result.is_ok());
            // Penalties add at most two cycles (branch taken across a page)
            let base = metadata.base_cycles as u64;
            assert!(cpu.cycles >= base && cpu.cycles <= base + 2);
            if !metadata.mnemonic.is_control_flow() {
                assert_eq!(cpu.pc, 0x8000 + metadata.size_bytes as u16);
            }
        }
    }
});
