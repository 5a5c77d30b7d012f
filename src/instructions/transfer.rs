//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All transfers take 2 cycles. Every one of them except TXS updates Z and N
//! from the copied value.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.x = cpu.a;
    cpu.p.set_nz(cpu.x);
    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.y = cpu.a;
    cpu.p.set_nz(cpu.y);
    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.a = cpu.x;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.a = cpu.y;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.x = cpu.sp;
    cpu.p.set_nz(cpu.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.sp = cpu.x;
    Ok(())
}
