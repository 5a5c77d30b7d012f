//! WebAssembly bindings for the 6502 core.
//!
//! Exposes a single [`Emulator6502`] that owns a flat 64KB memory and can be
//! driven from JavaScript: load a program, step or run, and inspect
//! registers and memory.

pub mod api;

pub use api::Emulator6502;
