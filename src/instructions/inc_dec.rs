//! # Increment and Decrement Instructions
//!
//! - INC / DEC: Memory, read-modify-write
//! - INX / INY / DEX / DEY: Index registers, 2 cycles
//!
//! All of them wrap modulo 256 and update Z and N. Carry and overflow are
//! never touched.

use super::read_modify_write;
use crate::{AddressingMode, ExecutionError, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.p.set_nz(result);
        result
    })
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.p.set_nz(result);
        result
    })
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_nz(cpu.x);
    Ok(())
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_nz(cpu.y);
    Ok(())
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_nz(cpu.x);
    Ok(())
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_nz(cpu.y);
    Ok(())
}
