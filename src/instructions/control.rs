//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute and indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! Return addresses are pushed high byte first, so the low byte sits on top
//! of the stack.

use log::debug;

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, ExecutionError, MemoryBus, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - 3 cycles
/// - Indirect (0x6C): JMP ($1234) - 5 cycles
///
/// The indirect form reproduces the NMOS page-wrap bug: the pointer's high
/// byte is fetched from the same page as its low byte, so JMP ($10FF) reads
/// $10FF and $1000.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    if mode != AddressingMode::Indirect {
        cpu.pc = cpu.resolve(mode)?.addr();
        return Ok(());
    }

    let ptr = cpu.fetch_word();
    cpu.cycles += 2;

    let lo = cpu.memory.read(ptr);
    // The high byte never leaves the pointer's page
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = cpu.memory.read(hi_addr);
    cpu.cycles += 2;

    cpu.pc = u16::from_le_bytes([lo, hi]);
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (return address - 1) and
/// jumps to the target. 6 cycles.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let target = cpu.fetch_word();
    cpu.cycles += 2;
    cpu.tick();

    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes one past it.
/// 6 cycles.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.tick();
    let address = cpu.pull_word();
    cpu.pc = address.wrapping_add(1);
    cpu.tick();
    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Skips the padding byte after the opcode (PC + 2 is pushed)
/// 2. Pushes PC high, then PC low
/// 3. Pushes the status with B and the unused bit set
/// 4. Sets the I flag
/// 5. Loads PC from the IRQ vector at $FFFE/$FFFF
///
/// 7 cycles.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let origin = cpu.pc.wrapping_sub(1);
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.tick();

    cpu.push_word(cpu.pc);
    let status = cpu.p.pushed();
    cpu.push(status);
    cpu.p.set(Status::INTERRUPT_DISABLE, true);

    cpu.pc = cpu.memory.read16(IRQ_VECTOR);
    cpu.cycles += 2;

    debug!("BRK at 0x{:04X}, vectoring to 0x{:04X}", origin, cpu.pc);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then PC low and PC high. Unlike RTS the pulled
/// address is used as is. 6 cycles.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.tick();
    cpu.p = Status::from_bits_retain(cpu.pull());
    cpu.pc = cpu.pull_word();
    Ok(())
}

/// Executes the NOP (No Operation) instruction. 2 cycles.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.tick();
    Ok(())
}
