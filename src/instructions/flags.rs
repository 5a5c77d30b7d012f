//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt disable
//! - CLV: Overflow (there is no SEV)
//! - CLD / SED: Decimal mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{ExecutionError, MemoryBus, Status, CPU};

/// Sets `flag` to `value`, leaving every other flag unchanged.
pub(crate) fn execute_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: Status,
    value: bool,
) -> Result<(), ExecutionError> {
    cpu.tick();
    cpu.p.set(flag, value);
    Ok(())
}
