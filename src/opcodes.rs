//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that drives instruction
//! decoding. The 151 documented NMOS 6502 opcodes have an entry; the 105
//! undocumented ones are `None` and are reported by the CPU as unimplemented.
//!
//! Each entry records:
//! - Mnemonic (a closed enum, matched exhaustively by the execution loop)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes

use std::fmt;

use crate::addressing::AddressingMode;

/// Documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }

    /// True for instructions that set PC themselves rather than falling
    /// through to the next instruction.
    pub const fn is_control_flow(self) -> bool {
        matches!(
            self,
            Mnemonic::Bcc
                | Mnemonic::Bcs
                | Mnemonic::Beq
                | Mnemonic::Bmi
                | Mnemonic::Bne
                | Mnemonic::Bpl
                | Mnemonic::Bvc
                | Mnemonic::Bvs
                | Mnemonic::Jmp
                | Mnemonic::Jsr
                | Mnemonic::Rts
                | Mnemonic::Rti
                | Mnemonic::Brk
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Metadata for a single documented 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// // Undocumented opcodes have no entry
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    pub mnemonic: Mnemonic,

    pub addressing_mode: AddressingMode,

    /// Cycle cost before page-crossing and branch penalties.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        }
    }

    /// Looks up the metadata for `opcode`, if it is documented.
    #[inline]
    pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
        OPCODE_TABLE[opcode as usize].as_ref()
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < DOCUMENTED.len() {
        let (opcode, metadata) = DOCUMENTED[i];
        table[opcode as usize] = Some(metadata);
        i += 1;
    }
    table
}

const DOCUMENTED: [(u8, OpcodeMetadata); 151] = {
    use AddressingMode::*;
    use Mnemonic::*;

    const fn op(m: Mnemonic, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
        OpcodeMetadata::new(m, mode, cycles)
    }

    [
        // 0x00 - 0x0F
        (0x00, op(Brk, Implicit, 7)),
        (0x01, op(Ora, IndirectX, 6)),
        (0x05, op(Ora, ZeroPage, 3)),
        (0x06, op(Asl, ZeroPage, 5)),
        (0x08, op(Php, Implicit, 3)),
        (0x09, op(Ora, Immediate, 2)),
        (0x0A, op(Asl, Accumulator, 2)),
        (0x0D, op(Ora, Absolute, 4)),
        (0x0E, op(Asl, Absolute, 6)),
        // 0x10 - 0x1F
        (0x10, op(Bpl, Relative, 2)),
        (0x11, op(Ora, IndirectY, 5)),
        (0x15, op(Ora, ZeroPageX, 4)),
        (0x16, op(Asl, ZeroPageX, 6)),
        (0x18, op(Clc, Implicit, 2)),
        (0x19, op(Ora, AbsoluteY, 4)),
        (0x1D, op(Ora, AbsoluteX, 4)),
        (0x1E, op(Asl, AbsoluteX, 7)),
        // 0x20 - 0x2F
        (0x20, op(Jsr, Absolute, 6)),
        (0x21, op(And, IndirectX, 6)),
        (0x24, op(Bit, ZeroPage, 3)),
        (0x25, op(And, ZeroPage, 3)),
        (0x26, op(Rol, ZeroPage, 5)),
        (0x28, op(Plp, Implicit, 4)),
        (0x29, op(And, Immediate, 2)),
        (0x2A, op(Rol, Accumulator, 2)),
        (0x2C, op(Bit, Absolute, 4)),
        (0x2D, op(And, Absolute, 4)),
        (0x2E, op(Rol, Absolute, 6)),
        // 0x30 - 0x3F
        (0x30, op(Bmi, Relative, 2)),
        (0x31, op(And, IndirectY, 5)),
        (0x35, op(And, ZeroPageX, 4)),
        (0x36, op(Rol, ZeroPageX, 6)),
        (0x38, op(Sec, Implicit, 2)),
        (0x39, op(And, AbsoluteY, 4)),
        (0x3D, op(And, AbsoluteX, 4)),
        (0x3E, op(Rol, AbsoluteX, 7)),
        // 0x40 - 0x4F
        (0x40, op(Rti, Implicit, 6)),
        (0x41, op(Eor, IndirectX, 6)),
        (0x45, op(Eor, ZeroPage, 3)),
        (0x46, op(Lsr, ZeroPage, 5)),
        (0x48, op(Pha, Implicit, 3)),
        (0x49, op(Eor, Immediate, 2)),
        (0x4A, op(Lsr, Accumulator, 2)),
        (0x4C, op(Jmp, Absolute, 3)),
        (0x4D, op(Eor, Absolute, 4)),
        (0x4E, op(Lsr, Absolute, 6)),
        // 0x50 - 0x5F
        (0x50, op(Bvc, Relative, 2)),
        (0x51, op(Eor, IndirectY, 5)),
        (0x55, op(Eor, ZeroPageX, 4)),
        (0x56, op(Lsr, ZeroPageX, 6)),
        (0x58, op(Cli, Implicit, 2)),
        (0x59, op(Eor, AbsoluteY, 4)),
        (0x5D, op(Eor, AbsoluteX, 4)),
        (0x5E, op(Lsr, AbsoluteX, 7)),
        // 0x60 - 0x6F
        (0x60, op(Rts, Implicit, 6)),
        (0x61, op(Adc, IndirectX, 6)),
        (0x65, op(Adc, ZeroPage, 3)),
        (0x66, op(Ror, ZeroPage, 5)),
        (0x68, op(Pla, Implicit, 4)),
        (0x69, op(Adc, Immediate, 2)),
        (0x6A, op(Ror, Accumulator, 2)),
        (0x6C, op(Jmp, Indirect, 5)),
        (0x6D, op(Adc, Absolute, 4)),
        (0x6E, op(Ror, Absolute, 6)),
        // 0x70 - 0x7F
        (0x70, op(Bvs, Relative, 2)),
        (0x71, op(Adc, IndirectY, 5)),
        (0x75, op(Adc, ZeroPageX, 4)),
        (0x76, op(Ror, ZeroPageX, 6)),
        (0x78, op(Sei, Implicit, 2)),
        (0x79, op(Adc, AbsoluteY, 4)),
        (0x7D, op(Adc, AbsoluteX, 4)),
        (0x7E, op(Ror, AbsoluteX, 7)),
        // 0x80 - 0x8F
        (0x81, op(Sta, IndirectX, 6)),
        (0x84, op(Sty, ZeroPage, 3)),
        (0x85, op(Sta, ZeroPage, 3)),
        (0x86, op(Stx, ZeroPage, 3)),
        (0x88, op(Dey, Implicit, 2)),
        (0x8A, op(Txa, Implicit, 2)),
        (0x8C, op(Sty, Absolute, 4)),
        (0x8D, op(Sta, Absolute, 4)),
        (0x8E, op(Stx, Absolute, 4)),
        // 0x90 - 0x9F
        (0x90, op(Bcc, Relative, 2)),
        (0x91, op(Sta, IndirectY, 6)),
        (0x94, op(Sty, ZeroPageX, 4)),
        (0x95, op(Sta, ZeroPageX, 4)),
        (0x96, op(Stx, ZeroPageY, 4)),
        (0x98, op(Tya, Implicit, 2)),
        (0x99, op(Sta, AbsoluteY, 5)),
        (0x9A, op(Txs, Implicit, 2)),
        (0x9D, op(Sta, AbsoluteX, 5)),
        // 0xA0 - 0xAF
        (0xA0, op(Ldy, Immediate, 2)),
        (0xA1, op(Lda, IndirectX, 6)),
        (0xA2, op(Ldx, Immediate, 2)),
        (0xA4, op(Ldy, ZeroPage, 3)),
        (0xA5, op(Lda, ZeroPage, 3)),
        (0xA6, op(Ldx, ZeroPage, 3)),
        (0xA8, op(Tay, Implicit, 2)),
        (0xA9, op(Lda, Immediate, 2)),
        (0xAA, op(Tax, Implicit, 2)),
        (0xAC, op(Ldy, Absolute, 4)),
        (0xAD, op(Lda, Absolute, 4)),
        (0xAE, op(Ldx, Absolute, 4)),
        // 0xB0 - 0xBF
        (0xB0, op(Bcs, Relative, 2)),
        (0xB1, op(Lda, IndirectY, 5)),
        (0xB4, op(Ldy, ZeroPageX, 4)),
        (0xB5, op(Lda, ZeroPageX, 4)),
        (0xB6, op(Ldx, ZeroPageY, 4)),
        (0xB8, op(Clv, Implicit, 2)),
        (0xB9, op(Lda, AbsoluteY, 4)),
        (0xBA, op(Tsx, Implicit, 2)),
        (0xBC, op(Ldy, AbsoluteX, 4)),
        (0xBD, op(Lda, AbsoluteX, 4)),
        (0xBE, op(Ldx, AbsoluteY, 4)),
        // 0xC0 - 0xCF
        (0xC0, op(Cpy, Immediate, 2)),
        (0xC1, op(Cmp, IndirectX, 6)),
        (0xC4, op(Cpy, ZeroPage, 3)),
        (0xC5, op(Cmp, ZeroPage, 3)),
        (0xC6, op(Dec, ZeroPage, 5)),
        (0xC8, op(Iny, Implicit, 2)),
        (0xC9, op(Cmp, Immediate, 2)),
        (0xCA, op(Dex, Implicit, 2)),
        (0xCC, op(Cpy, Absolute, 4)),
        (0xCD, op(Cmp, Absolute, 4)),
        (0xCE, op(Dec, Absolute, 6)),
        // 0xD0 - 0xDF
        (0xD0, op(Bne, Relative, 2)),
        (0xD1, op(Cmp, IndirectY, 5)),
        (0xD5, op(Cmp, ZeroPageX, 4)),
        (0xD6, op(Dec, ZeroPageX, 6)),
        (0xD8, op(Cld, Implicit, 2)),
        (0xD9, op(Cmp, AbsoluteY, 4)),
        (0xDD, op(Cmp, AbsoluteX, 4)),
        (0xDE, op(Dec, AbsoluteX, 7)),
        // 0xE0 - 0xEF
        (0xE0, op(Cpx, Immediate, 2)),
        (0xE1, op(Sbc, IndirectX, 6)),
        (0xE4, op(Cpx, ZeroPage, 3)),
        (0xE5, op(Sbc, ZeroPage, 3)),
        (0xE6, op(Inc, ZeroPage, 5)),
        (0xE8, op(Inx, Implicit, 2)),
        (0xE9, op(Sbc, Immediate, 2)),
        (0xEA, op(Nop, Implicit, 2)),
        (0xEC, op(Cpx, Absolute, 4)),
        (0xED, op(Sbc, Absolute, 4)),
        (0xEE, op(Inc, Absolute, 6)),
        // 0xF0 - 0xFF
        (0xF0, op(Beq, Relative, 2)),
        (0xF1, op(Sbc, IndirectY, 5)),
        (0xF5, op(Sbc, ZeroPageX, 4)),
        (0xF6, op(Inc, ZeroPageX, 6)),
        (0xF8, op(Sed, Implicit, 2)),
        (0xF9, op(Sbc, AbsoluteY, 4)),
        (0xFD, op(Sbc, AbsoluteX, 4)),
        (0xFE, op(Inc, AbsoluteX, 7)),
    ]
};
