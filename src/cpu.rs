//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed NV-BDIZC flags
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! ## Cycle Accounting
//!
//! `step()` charges the opcode fetch. The addressing-mode resolver charges
//! address computation, and each instruction charges its own data accesses,
//! stack traffic and internal cycles. Together they add up to the documented
//! NMOS cycle count of every opcode.

use log::{debug, trace, warn};

use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::{AddressingMode, ExecutionError, MemoryBus, Mnemonic, OpcodeMetadata, Status};

/// Address of the reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// 6502 CPU state and execution context.
///
/// Registers are public so that loaders, debuggers and tests can inspect
/// and override them between instructions.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation. Use `&mut FlatMemory` (or any
///   `&mut impl MemoryBus`) to leave ownership of memory with the caller.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus, Status};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(&mut memory);
///
/// assert_eq!(cpu.pc, 0x8000);
/// assert_eq!(cpu.sp, 0xFD);
/// assert!(cpu.p.get(Status::INTERRUPT_DISABLE));
/// assert_eq!(cpu.cycles, 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Processor status register
    pub p: Status,

    /// Total CPU cycles executed
    pub cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU bound to `memory` and resets it.
    ///
    /// See [`CPU::reset`] for the resulting register values.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: RESET_SP,
            p: Status::POWER_ON,
            cycles: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Reinitializes the registers and loads PC from the reset vector.
    ///
    /// - A, X, Y are zeroed
    /// - SP is set to 0xFD
    /// - P is 0x24 (interrupt disable and the unused bit set)
    /// - PC is the little-endian word at 0xFFFC/0xFFFD
    ///
    /// The cycle counter is left untouched; it only ever grows.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_SP;
        self.p = Status::POWER_ON;
        self.pc = self.memory.read16(RESET_VECTOR);
        debug!("reset: PC=0x{:04X}", self.pc);
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up the opcode in `OPCODE_TABLE`
    /// 3. Run the instruction, which charges its own cycles
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnimplementedOpcode` if the byte is not a documented
    /// opcode. PC has then moved past the opcode and the fetch cycle has been
    /// charged, so the caller may halt, trap, or carry on as after a NOP.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, ExecutionError};
    ///
    /// let mut mem = FlatMemory::with_reset_vector(0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    /// mem.write(0x8001, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), Ok(()));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x02, pc: 0x8001 })
    /// );
    /// ```
    #[doc(alias = "execute")]
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let pc = self.pc;
        let opcode = self.fetch_byte();
        self.cycles += 1;

        let Some(metadata) = OpcodeMetadata::lookup(opcode) else {
            warn!("unimplemented opcode 0x{:02X} at 0x{:04X}", opcode, pc);
            return Err(ExecutionError::UnimplementedOpcode { opcode, pc });
        };

        trace!(
            "{:04X}  {:02X}  {:<3} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            opcode,
            metadata.mnemonic,
            self.a,
            self.x,
            self.y,
            self.p.bits(),
            self.sp,
            self.cycles - 1
        );

        self.dispatch(metadata.mnemonic, metadata.addressing_mode)
    }

    fn dispatch(&mut self, mnemonic: Mnemonic, mode: AddressingMode) -> Result<(), ExecutionError> {
        match mnemonic {
            // Load / store
            Mnemonic::Lda => load_store::execute_lda(self, mode),
            Mnemonic::Ldx => load_store::execute_ldx(self, mode),
            Mnemonic::Ldy => load_store::execute_ldy(self, mode),
            Mnemonic::Sta => load_store::execute_sta(self, mode),
            Mnemonic::Stx => load_store::execute_stx(self, mode),
            Mnemonic::Sty => load_store::execute_sty(self, mode),

            // Arithmetic and logic
            Mnemonic::Adc => alu::execute_adc(self, mode),
            Mnemonic::Sbc => alu::execute_sbc(self, mode),
            Mnemonic::And => alu::execute_and(self, mode),
            Mnemonic::Ora => alu::execute_ora(self, mode),
            Mnemonic::Eor => alu::execute_eor(self, mode),
            Mnemonic::Cmp => {
                let register = self.a;
                alu::execute_compare(self, mode, register)
            }
            Mnemonic::Cpx => {
                let register = self.x;
                alu::execute_compare(self, mode, register)
            }
            Mnemonic::Cpy => {
                let register = self.y;
                alu::execute_compare(self, mode, register)
            }
            Mnemonic::Bit => alu::execute_bit(self, mode),

            // Shifts and rotates
            Mnemonic::Asl => shifts::execute_asl(self, mode),
            Mnemonic::Lsr => shifts::execute_lsr(self, mode),
            Mnemonic::Rol => shifts::execute_rol(self, mode),
            Mnemonic::Ror => shifts::execute_ror(self, mode),

            // Increment / decrement
            Mnemonic::Inc => inc_dec::execute_inc(self, mode),
            Mnemonic::Dec => inc_dec::execute_dec(self, mode),
            Mnemonic::Inx => inc_dec::execute_inx(self),
            Mnemonic::Iny => inc_dec::execute_iny(self),
            Mnemonic::Dex => inc_dec::execute_dex(self),
            Mnemonic::Dey => inc_dec::execute_dey(self),

            // Conditional branches
            Mnemonic::Bcc => branches::execute_branch(self, Status::CARRY, false),
            Mnemonic::Bcs => branches::execute_branch(self, Status::CARRY, true),
            Mnemonic::Bne => branches::execute_branch(self, Status::ZERO, false),
            Mnemonic::Beq => branches::execute_branch(self, Status::ZERO, true),
            Mnemonic::Bpl => branches::execute_branch(self, Status::NEGATIVE, false),
            Mnemonic::Bmi => branches::execute_branch(self, Status::NEGATIVE, true),
            Mnemonic::Bvc => branches::execute_branch(self, Status::OVERFLOW, false),
            Mnemonic::Bvs => branches::execute_branch(self, Status::OVERFLOW, true),

            // Stack
            Mnemonic::Pha => stack::execute_pha(self),
            Mnemonic::Php => stack::execute_php(self),
            Mnemonic::Pla => stack::execute_pla(self),
            Mnemonic::Plp => stack::execute_plp(self),

            // Register transfers
            Mnemonic::Tax => transfer::execute_tax(self),
            Mnemonic::Tay => transfer::execute_tay(self),
            Mnemonic::Txa => transfer::execute_txa(self),
            Mnemonic::Tya => transfer::execute_tya(self),
            Mnemonic::Tsx => transfer::execute_tsx(self),
            Mnemonic::Txs => transfer::execute_txs(self),

            // Control flow
            Mnemonic::Jmp => control::execute_jmp(self, mode),
            Mnemonic::Jsr => control::execute_jsr(self),
            Mnemonic::Rts => control::execute_rts(self),
            Mnemonic::Brk => control::execute_brk(self),
            Mnemonic::Rti => control::execute_rti(self),
            Mnemonic::Nop => control::execute_nop(self),

            // Flag set / clear
            Mnemonic::Clc => flags::execute_flag(self, Status::CARRY, false),
            Mnemonic::Sec => flags::execute_flag(self, Status::CARRY, true),
            Mnemonic::Cli => flags::execute_flag(self, Status::INTERRUPT_DISABLE, false),
            Mnemonic::Sei => flags::execute_flag(self, Status::INTERRUPT_DISABLE, true),
            Mnemonic::Clv => flags::execute_flag(self, Status::OVERFLOW, false),
            Mnemonic::Cld => flags::execute_flag(self, Status::DECIMAL, false),
            Mnemonic::Sed => flags::execute_flag(self, Status::DECIMAL, true),
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    ///
    /// For spin-loop detection and an unimplemented-opcode policy see
    /// [`crate::runner::run`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::with_reset_vector(0x8000);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles each
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc, 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Internal helpers shared by the instructions ==========

    /// Reads the byte at PC and advances PC. Charges nothing.
    #[inline]
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two. Charges nothing.
    #[inline]
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Charges one internal (or dummy access) cycle.
    #[inline]
    pub(crate) fn tick(&mut self) {
        self.cycles += 1;
    }

    /// Pushes a byte at 0x0100 | SP, then decrements SP. One cycle.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
        self.cycles += 1;
    }

    /// Increments SP, then reads the byte at 0x0100 | SP. One cycle.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.cycles += 1;
        self.memory.read(STACK_PAGE | self.sp as u16)
    }

    /// Pushes a return address, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pulls a return address, low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }
}
