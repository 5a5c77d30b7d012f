//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function taking a
//! mutable reference to the CPU (and the addressing mode when it has a memory
//! operand). By the time it runs, the opcode has been fetched and its cycle
//! charged; the function charges everything else.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Applies `op` to the accumulator or to a memory operand.
///
/// Accumulator mode costs one internal cycle. Memory mode resolves the
/// operand (always paying the indexing fix-up), then spends one cycle each
/// to read, modify and write back.
pub(crate) fn read_modify_write<M, F>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: F,
) -> Result<(), ExecutionError>
where
    M: MemoryBus,
    F: FnOnce(&mut CPU<M>, u8) -> u8,
{
    if mode == AddressingMode::Accumulator {
        cpu.tick();
        let value = cpu.a;
        cpu.a = op(cpu, value);
        return Ok(());
    }

    let addr = cpu.resolve_for_write(mode)?.addr();
    let value = cpu.memory.read(addr);
    cpu.tick();
    let result = op(cpu, value);
    cpu.tick();
    cpu.memory.write(addr, result);
    cpu.tick();

    Ok(())
}
