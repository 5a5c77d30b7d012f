//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Cycles: 3. Flags affected: None
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::with_reset_vector(0x8000);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.a = 0x42;
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x01FD), 0x42);
/// assert_eq!(cpu.sp, 0xFC);
/// assert_eq!(cpu.pc, 0x8001);
/// assert_eq!(cpu.cycles, 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    let value = cpu.a;
    cpu.push(value);
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and the unused bit set; P itself is unchanged.
/// Cycles: 3.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    let status = cpu.p.pushed();
    cpu.push(status);
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// N and Z reflect the pulled value. Cycles: 4.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.tick();
    cpu.a = cpu.pull();
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// P takes the pulled byte exactly, all eight bits. Cycles: 4.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.tick();
    cpu.p = Status::from_bits_retain(cpu.pull());
    Ok(())
}
