//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (2 cycles) or on memory as a
//! read-modify-write. C receives the bit shifted out; Z and N are then set
//! from the shifted value.

use super::read_modify_write;
use crate::{AddressingMode, ExecutionError, MemoryBus, Status, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        cpu.p.set(Status::CARRY, value & 0x80 != 0);
        let result = value << 1;
        cpu.p.set_nz(result);
        result
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        cpu.p.set(Status::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        cpu.p.set_nz(result);
        result
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        let carry_in = cpu.p.carry_bit();
        cpu.p.set(Status::CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        cpu.p.set_nz(result);
        result
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    read_modify_write(cpu, mode, |cpu, value| {
        let carry_in = cpu.p.carry_bit();
        cpu.p.set(Status::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | (carry_in << 7);
        cpu.p.set_nz(result);
        result
    })
}
