//! Serializable copy of the register file.
//!
//! Memory is not included; a snapshot pairs with whatever bus the CPU is
//! attached to.

use serde::{Deserialize, Serialize};

use crate::{MemoryBus, Status, CPU};

/// Register state of a CPU at an instruction boundary.
///
/// `p` is the raw status byte in NV-BDIZC order, so snapshots stay readable
/// by tools that know nothing about [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: u8,
    pub cycles: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Captures the registers and cycle counter.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::with_reset_vector(0xC000));
    /// let snapshot = cpu.snapshot();
    ///
    /// assert_eq!(snapshot.pc, 0xC000);
    /// assert_eq!(snapshot.p, 0x24);
    /// ```
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            p: self.p.bits(),
            cycles: self.cycles,
        }
    }

    /// Overwrites the registers and cycle counter from `snapshot`.
    ///
    /// All eight bits of `p` are taken as they are.
    pub fn restore(&mut self, snapshot: &CpuSnapshot) {
        self.a = snapshot.a;
        self.x = snapshot.x;
        self.y = snapshot.y;
        self.sp = snapshot.sp;
        self.pc = snapshot.pc;
        self.p = Status::from_bits_retain(snapshot.p);
        self.cycles = snapshot.cycles;
    }
}
