//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns the nine memory-operand modes into effective addresses.
//!
//! Resolution consumes operand bytes at PC and charges the cycles the mode
//! spends computing the address:
//!
//! | Mode | Bytes | Cycles |
//! |------|-------|--------|
//! | Immediate | 1 | 0 |
//! | Zero Page | 1 | 1 |
//! | Zero Page,X / ,Y | 1 | 2 |
//! | Absolute | 2 | 2 |
//! | Absolute,X / ,Y | 2 | 2 (+1 on page cross) |
//! | (Indirect,X) | 1 | 4 |
//! | (Indirect),Y | 1 | 3 (+1 on page cross) |
//!
//! The data access itself (read or write of the operand) is charged by the
//! instruction.

use crate::{ExecutionError, MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }

    /// True for the indexed modes whose page crossing costs a cycle.
    pub const fn has_page_penalty(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
        )
    }
}

/// An effective address, as produced by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EffectiveAddress {
    /// Address within page zero.
    ZeroPage(u8),
    /// Any 16-bit address.
    Absolute(u16),
}

impl EffectiveAddress {
    /// The address on the 16-bit bus.
    #[inline]
    pub fn get(self) -> u16 {
        match self {
            EffectiveAddress::ZeroPage(zp) => zp as u16,
            EffectiveAddress::Absolute(addr) => addr,
        }
    }
}

/// Result of resolving one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operand {
    pub address: EffectiveAddress,
    /// Cycles charged by the mode, including any page-crossing penalty.
    pub cycles: u8,
    pub page_crossed: bool,
}

impl Operand {
    fn new(address: EffectiveAddress, cycles: u8) -> Self {
        Self {
            address,
            cycles,
            page_crossed: false,
        }
    }

    /// Builds an indexed operand, adding the penalty cycle when `base` and
    /// `addr` sit on different pages.
    fn indexed(base: u16, addr: u16, cycles: u8) -> Self {
        let page_crossed = page_crossed(base, addr);
        Self {
            address: EffectiveAddress::Absolute(addr),
            cycles: cycles + u8::from(page_crossed),
            page_crossed,
        }
    }

    /// The address on the 16-bit bus.
    #[inline]
    pub fn addr(&self) -> u16 {
        self.address.get()
    }
}

/// True when `a` and `b` have different high bytes.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand of a memory-operand mode.
    ///
    /// Advances PC over the operand bytes and charges the mode's cycles.
    /// Modes without a memory operand are rejected.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Result<Operand, ExecutionError> {
        let operand = match mode {
            AddressingMode::Immediate => self.immediate(),
            AddressingMode::ZeroPage => self.zero_page(),
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.y),
            AddressingMode::Absolute => self.absolute(),
            AddressingMode::AbsoluteX => self.absolute_indexed(self.x),
            AddressingMode::AbsoluteY => self.absolute_indexed(self.y),
            AddressingMode::IndirectX => self.indirect_x(),
            AddressingMode::IndirectY => self.indirect_y(),
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Relative
            | AddressingMode::Indirect => {
                return Err(ExecutionError::InvalidAddressingMode { mode })
            }
        };
        self.cycles += operand.cycles as u64;
        Ok(operand)
    }

    /// Resolves an operand and reads it, charging the read cycle.
    ///
    /// Used by every instruction that only consumes its operand.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        let operand = self.resolve(mode)?;
        self.cycles += 1;
        Ok(self.memory.read(operand.addr()))
    }

    /// Resolves an operand for an instruction that writes to it.
    ///
    /// Stores and read-modify-write instructions always spend the indexing
    /// fix-up cycle, page crossing or not.
    pub(crate) fn resolve_for_write(
        &mut self,
        mode: AddressingMode,
    ) -> Result<Operand, ExecutionError> {
        let operand = self.resolve(mode)?;
        if mode.has_page_penalty() && !operand.page_crossed {
            self.cycles += 1;
        }
        Ok(operand)
    }

    fn immediate(&mut self) -> Operand {
        let addr = self.pc;
        self.pc = self.pc.wrapping_add(1);
        Operand::new(EffectiveAddress::Absolute(addr), 0)
    }

    fn zero_page(&mut self) -> Operand {
        let zp = self.fetch_byte();
        Operand::new(EffectiveAddress::ZeroPage(zp), 1)
    }

    fn zero_page_indexed(&mut self, index: u8) -> Operand {
        let zp = self.fetch_byte().wrapping_add(index);
        Operand::new(EffectiveAddress::ZeroPage(zp), 2)
    }

    fn absolute(&mut self) -> Operand {
        let addr = self.fetch_word();
        Operand::new(EffectiveAddress::Absolute(addr), 2)
    }

    fn absolute_indexed(&mut self, index: u8) -> Operand {
        let base = self.fetch_word();
        Operand::indexed(base, base.wrapping_add(index as u16), 2)
    }

    fn indirect_x(&mut self) -> Operand {
        let ptr = self.fetch_byte().wrapping_add(self.x);
        let addr = self.read_zero_page_word(ptr);
        Operand::new(EffectiveAddress::Absolute(addr), 4)
    }

    fn indirect_y(&mut self) -> Operand {
        let ptr = self.fetch_byte();
        let base = self.read_zero_page_word(ptr);
        Operand::indexed(base, base.wrapping_add(self.y as u16), 3)
    }

    /// Reads a pointer from page zero; the high byte wraps 0xFF -> 0x00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}
