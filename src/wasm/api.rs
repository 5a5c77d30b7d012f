//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control and state
//! inspection.

use wasm_bindgen::prelude::*;

use crate::{run, FlatMemory, MemoryBus, RunConfig, StopReason, Status, CPU};

/// Exclusive end of an image, pinned to 0xFFFF when it reaches the top of memory.
fn image_end(start: u16, len: usize) -> u16 {
    let len = u16::try_from(len).unwrap_or(u16::MAX);
    start.saturating_add(len)
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with zeroed memory and the reset vector at $0600
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::with_reset_vector(0x0600)),
            program_start: 0x0600,
            program_end: 0x0600,
        }
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Result<(), JsError> {
        self.cpu.step()?;
        Ok(())
    }

    /// Execute at least `cycles` cycles and return the number actually spent.
    ///
    /// The count may exceed the budget by part of an instruction, so it is
    /// returned as `f64` like [`Emulator6502::cycles`].
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<f64, JsError> {
        let spent = self.cpu.run_for_cycles(cycles as u64)?;
        Ok(spent as f64)
    }

    /// Run until the budget is spent or the program parks in a spin loop.
    ///
    /// Returns true when the run ended in a spin loop.
    pub fn run_until_spin(&mut self, max_cycles: u32) -> Result<bool, JsError> {
        let config = RunConfig {
            max_cycles: max_cycles as u64,
            ..RunConfig::default()
        };
        let summary = run(&mut self.cpu, &config)?;
        Ok(matches!(summary.reason, StopReason::SpinLoop { .. }))
    }

    /// Reset the CPU, keeping memory contents
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp
    }

    /// Packed status register (NV-BDIZC)
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.p.bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.p.get(Status::NEGATIVE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.p.get(Status::OVERFLOW)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.p.get(Status::DECIMAL)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.p.get(Status::INTERRUPT_DISABLE)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.p.get(Status::ZERO)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.p.get(Status::CARRY)
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.pc = addr;
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy a 256-byte page into a fresh `Uint8Array` (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 256])
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu.memory_mut().load_program(start_addr, program)?;
        self.cpu.pc = start_addr;
        self.program_start = start_addr;
        self.program_end = image_end(start_addr, program.len());
        Ok(())
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
