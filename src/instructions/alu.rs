//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry (binary and decimal)
//! - SBC: Subtract with Carry (binary and decimal)
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register compares
//! - BIT: Bit test
//!
//! ## Decimal Mode
//!
//! With the D flag set, ADC and SBC treat both operands as two BCD digits
//! and adjust each nibble separately. The result byte, Z, N and C come from the
//! decimal computation. V is always computed from the binary result.

use crate::{AddressingMode, ExecutionError, MemoryBus, Status, CPU};

/// `A + M + C` with the carry out in bit 8.
fn binary_add(a: u8, m: u8, carry_in: u8) -> u16 {
    a as u16 + m as u16 + carry_in as u16
}

/// Nibble-wise BCD addition with the carry out in bit 8.
///
/// Each nibble over 9 is pushed past 15 by adding 6, which both produces the
/// decimal digit in the low four bits and the carry into the next digit.
fn decimal_add(a: u8, m: u8, carry_in: u8) -> u16 {
    let mut low = (a & 0x0F) as u16 + (m & 0x0F) as u16 + carry_in as u16;
    if low > 9 {
        low += 6;
    }
    let carry_to_high = u16::from(low > 0x0F);

    let mut high = (a >> 4) as u16 + (m >> 4) as u16 + carry_to_high;
    if high > 9 {
        high += 6;
    }
    let carry_out = u16::from(high > 0x0F);

    (carry_out << 8) | ((high & 0x0F) << 4) | (low & 0x0F)
}

/// `A - M - (1 - C)`; bit 8 is set when a borrow occurred.
fn binary_sub(a: u8, m: u8, carry_in: u8) -> u16 {
    (a as u16)
        .wrapping_sub(m as u16)
        .wrapping_sub(1 - carry_in as u16)
}

/// Nibble-wise BCD subtraction; bit 8 is set when a borrow left the high digit.
///
/// A nibble that underflows is corrected by a further -6, the mirror of the
/// +6 used by addition.
fn decimal_sub(a: u8, m: u8, carry_in: u8) -> u16 {
    let borrow_in = 1 - carry_in as i16;

    let mut low = (a & 0x0F) as i16 - (m & 0x0F) as i16 - borrow_in;
    let low_borrow = low < 0;
    if low_borrow {
        low -= 6;
    }

    let mut high = (a >> 4) as i16 - (m >> 4) as i16 - i16::from(low_borrow);
    let high_borrow = high < 0;
    if high_borrow {
        high -= 6;
    }

    let digits = (((high & 0x0F) << 4) | (low & 0x0F)) as u16;
    if high_borrow {
        digits | 0x100
    } else {
        digits
    }
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - C: carry out of bit 7 (binary) or out of the tens digit (decimal)
/// - V: signed overflow of the binary sum
/// - Z, N: from the stored result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    let a = cpu.a;
    let carry_in = cpu.p.carry_bit();

    let binary = binary_add(a, value, carry_in);

    // Both operands share a sign that the result does not
    let overflow = (!(a ^ value) & (a ^ binary as u8) & 0x80) != 0;

    let result = if cpu.p.get(Status::DECIMAL) {
        decimal_add(a, value, carry_in)
    } else {
        binary
    };

    cpu.p.set(Status::CARRY, result > 0xFF);
    cpu.p.set(Status::OVERFLOW, overflow);
    cpu.a = result as u8;
    cpu.p.set_nz(cpu.a);

    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (the borrow) from the
/// accumulator.
///
/// # Flag Behavior
///
/// - C: set when no borrow occurred
/// - V: signed overflow of the binary difference
/// - Z, N: from the stored result
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    let a = cpu.a;
    let carry_in = cpu.p.carry_bit();

    let binary = binary_sub(a, value, carry_in);

    // Operands differ in sign and the result's sign differs from A
    let overflow = ((a ^ value) & (a ^ binary as u8) & 0x80) != 0;

    let result = if cpu.p.get(Status::DECIMAL) {
        decimal_sub(a, value, carry_in)
    } else {
        binary
    };

    cpu.p.set(Status::CARRY, result & 0x100 == 0);
    cpu.p.set(Status::OVERFLOW, overflow);
    cpu.a = result as u8;
    cpu.p.set_nz(cpu.a);

    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    cpu.a &= value;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    cpu.a |= value;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    cpu.a ^= value;
    cpu.p.set_nz(cpu.a);
    Ok(())
}

/// Executes CMP, CPX or CPY against `register`.
///
/// # Flag Behavior
///
/// - C: set if register >= operand (unsigned)
/// - Z: set if register == operand
/// - N: bit 7 of `register - operand`
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    register: u8,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    cpu.p.set(Status::CARRY, register >= value);
    cpu.p.set_nz(register.wrapping_sub(value));
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of the operand.
/// The accumulator is not changed.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(mode)?;
    cpu.p.set(Status::ZERO, cpu.a & value == 0);
    cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
    Ok(())
}
