//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the page-crossing penalty of indexed modes; stores always pay
//! the indexing fix-up cycle instead.

use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cpu.a = cpu.read_operand(mode)?;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction. Updates Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cpu.x = cpu.read_operand(mode)?;
    cpu.p.set_nz(cpu.x);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction. Updates Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    cpu.y = cpu.read_operand(mode)?;
    cpu.p.set_nz(cpu.y);
    Ok(())
}

/// Writes `value` to the operand of `mode`. No flags affected.
fn store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    value: u8,
) -> Result<(), ExecutionError> {
    let addr = cpu.resolve_for_write(mode)?.addr();
    cpu.memory.write(addr, value);
    cpu.tick();
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.a;
    store(cpu, mode, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.x;
    store(cpu, mode, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.y;
    store(cpu, mode, value)
}
