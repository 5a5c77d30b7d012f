//! # Processor Status Register
//!
//! The 6502 keeps its flags packed in a single byte (NV-BDIZC). The layout is
//! fixed: it is what `PHP`/`BRK` push to the stack and what snapshots store.
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 7 | N | Negative |
//! | 6 | V | Overflow |
//! | 5 | - | Unused, always 1 when pushed |
//! | 4 | B | Break (only meaningful in pushed copies) |
//! | 3 | D | Decimal mode |
//! | 2 | I | Interrupt disable |
//! | 1 | Z | Zero |
//! | 0 | C | Carry |

use bitflags::bitflags;

bitflags! {
    /// Packed processor status register.
    ///
    /// Every one of the 256 byte values is a legal status word, so values
    /// pulled from the stack are kept with [`Status::from_bits_retain`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let mut p = Status::empty();
    /// p.set(Status::CARRY, true);
    /// p.set(Status::NEGATIVE, true);
    ///
    /// assert!(p.get(Status::CARRY));
    /// assert_eq!(p.bits(), 0b1000_0001);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const NEGATIVE = 0b1000_0000;
        const OVERFLOW = 0b0100_0000;
        const UNUSED = 0b0010_0000;
        const BREAK = 0b0001_0000;
        const DECIMAL = 0b0000_1000;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const ZERO = 0b0000_0010;
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// Status after reset: interrupts disabled, unused bit set.
    pub const POWER_ON: Status = Status::UNUSED.union(Status::INTERRUPT_DISABLE);

    /// Returns true if every bit of `flag` is set.
    #[inline]
    pub fn get(self, flag: Status) -> bool {
        self.contains(flag)
    }

    /// Sets Z and N from an 8-bit result.
    ///
    /// Z is set when the value is zero, N mirrors bit 7. Shared by every
    /// instruction that produces a new register or memory value.
    #[inline]
    pub fn set_nz(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// The byte pushed by `PHP` and `BRK`: B and the unused bit forced to 1.
    #[inline]
    pub fn pushed(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// Carry as 0 or 1, for arithmetic.
    #[inline]
    pub fn carry_bit(self) -> u8 {
        u8::from(self.contains(Status::CARRY))
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bit_positions() {
        assert_eq!(Status::NEGATIVE.bits(), 1 << 7);
        assert_eq!(Status::OVERFLOW.bits(), 1 << 6);
        assert_eq!(Status::UNUSED.bits(), 1 << 5);
        assert_eq!(Status::BREAK.bits(), 1 << 4);
        assert_eq!(Status::DECIMAL.bits(), 1 << 3);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 1 << 2);
        assert_eq!(Status::ZERO.bits(), 1 << 1);
        assert_eq!(Status::CARRY.bits(), 1);
    }

    #[test]
    fn test_set_preserves_other_bits() {
        for raw in 0..=255u8 {
            let mut p = Status::from_bits_retain(raw);
            p.set(Status::ZERO, true);
            assert_eq!(p.bits(), raw | 0x02);

            p.set(Status::ZERO, false);
            assert_eq!(p.bits(), raw & !0x02);
        }
    }

    #[test]
    fn test_set_nz() {
        let mut p = Status::empty();

        p.set_nz(0x00);
        assert!(p.get(Status::ZERO));
        assert!(!p.get(Status::NEGATIVE));

        p.set_nz(0x80);
        assert!(!p.get(Status::ZERO));
        assert!(p.get(Status::NEGATIVE));

        p.set_nz(0x7F);
        assert!(!p.get(Status::ZERO));
        assert!(!p.get(Status::NEGATIVE));
    }

    #[test]
    fn test_pushed_forces_break_and_unused() {
        assert_eq!(Status::empty().pushed(), 0x30);
        assert_eq!(Status::from_bits_retain(0xC3).pushed(), 0xF3);
    }

    #[test]
    fn test_power_on_value() {
        assert_eq!(Status::default().bits(), 0x24);
    }
}
