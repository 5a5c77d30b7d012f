//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! measured from the address of the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::page_crossed;
use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Executes a conditional branch taken when `flag` equals `expected`.
///
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Status,
    expected: bool,
) -> Result<(), ExecutionError> {
    let offset = cpu.fetch_byte() as i8;
    cpu.tick();

    if cpu.p.get(flag) != expected {
        return Ok(());
    }

    // PC now points at the following instruction
    let next = cpu.pc;
    let target = next.wrapping_add_signed(offset as i16);

    cpu.tick();
    if page_crossed(next, target) {
        cpu.tick();
    }
    cpu.pc = target;

    Ok(())
}
