//! # Bounded Execution
//!
//! [`run`] drives a CPU until one of three things happens:
//!
//! - the cycle budget in [`RunConfig::max_cycles`] is spent
//! - PC stops moving (a `JMP *` style spin loop)
//! - an undocumented opcode is fetched under [`UnimplementedPolicy::Halt`]
//!
//! Test programs conventionally end in a jump-to-self, so spin detection is
//! how a run normally finishes.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{ExecutionError, MemoryBus, CPU};

/// What to do when the CPU fetches an opcode it does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnimplementedPolicy {
    /// Stop and return the error.
    #[default]
    Halt,
    /// Log it and carry on as if it were a one-byte NOP.
    Skip,
}

/// Limits for a call to [`run`].
///
/// Every field has a default, so a partial JSON or TOML document is enough:
///
/// ```
/// use cpu6502::{RunConfig, UnimplementedPolicy};
///
/// let config: RunConfig = serde_json::from_str(r#"{ "max_cycles": 5000 }"#).unwrap();
/// assert_eq!(config.max_cycles, 5000);
/// assert_eq!(config.spin_threshold, 5);
/// assert_eq!(config.on_unimplemented, UnimplementedPolicy::Halt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Cycles this run may consume, counted from the start of the run.
    pub max_cycles: u64,

    /// Number of consecutive instructions that may leave PC unchanged before
    /// the run is considered stuck. Zero disables spin detection.
    pub spin_threshold: u32,

    /// Handling of undocumented opcodes.
    pub on_unimplemented: UnimplementedPolicy,
}

impl RunConfig {
    /// Default cycle budget.
    pub const DEFAULT_MAX_CYCLES: u64 = 100_000_000;

    /// Default spin threshold.
    pub const DEFAULT_SPIN_THRESHOLD: u32 = 5;
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_cycles: Self::DEFAULT_MAX_CYCLES,
            spin_threshold: Self::DEFAULT_SPIN_THRESHOLD,
            on_unimplemented: UnimplementedPolicy::Halt,
        }
    }
}

/// Why [`run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// `max_cycles` were consumed.
    CycleBudget,
    /// PC stayed at `pc` for more than `spin_threshold` instructions.
    SpinLoop { pc: u16 },
}

/// Outcome of a completed [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub reason: StopReason,
    /// Cycles consumed by this run.
    pub cycles: u64,
    /// Instructions executed, skipped opcodes included.
    pub instructions: u64,
    /// PC when the run stopped.
    pub final_pc: u16,
}

/// Runs `cpu` within the limits of `config`.
///
/// # Errors
///
/// Returns [`ExecutionError::UnimplementedOpcode`] when an undocumented opcode
/// is fetched and the policy is [`UnimplementedPolicy::Halt`]. The CPU is
/// left just past the offending byte.
///
/// # Examples
///
/// ```
/// use cpu6502::{run, FlatMemory, MemoryBus, RunConfig, StopReason, CPU};
///
/// let mut memory = FlatMemory::with_reset_vector(0x8000);
/// // LDX #$03; DEX; BNE -3; JMP *
/// memory.write_block(0x8000, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x4C, 0x05, 0x80]);
///
/// let mut cpu = CPU::new(&mut memory);
/// let summary = run(&mut cpu, &RunConfig::default()).unwrap();
///
/// assert_eq!(summary.reason, StopReason::SpinLoop { pc: 0x8005 });
/// assert_eq!(cpu.x, 0);
/// ```
pub fn run<M: MemoryBus>(
    cpu: &mut CPU<M>,
    config: &RunConfig,
) -> Result<RunSummary, ExecutionError> {
    let start_cycles = cpu.cycles;
    let target_cycles = start_cycles.saturating_add(config.max_cycles);
    let mut instructions = 0u64;
    let mut previous_pc = cpu.pc;
    let mut same_pc_count = 0u32;

    debug!(
        "run: start PC=0x{:04X}, budget {} cycles",
        cpu.pc, config.max_cycles
    );

    let reason = loop {
        if cpu.cycles >= target_cycles {
            break StopReason::CycleBudget;
        }

        match cpu.step() {
            Ok(()) => {}
            Err(ExecutionError::UnimplementedOpcode { opcode, pc })
                if config.on_unimplemented == UnimplementedPolicy::Skip =>
            {
                warn!("skipping opcode 0x{:02X} at 0x{:04X}", opcode, pc);
            }
            Err(err) => return Err(err),
        }
        instructions += 1;

        if config.spin_threshold == 0 {
            continue;
        }
        if cpu.pc == previous_pc {
            same_pc_count += 1;
            if same_pc_count > config.spin_threshold {
                break StopReason::SpinLoop { pc: cpu.pc };
            }
        } else {
            same_pc_count = 0;
            previous_pc = cpu.pc;
        }
    };

    let summary = RunSummary {
        reason,
        cycles: cpu.cycles - start_cycles,
        instructions,
        final_pc: cpu.pc,
    };

    info!(
        "run stopped ({:?}) after {} instructions, {} cycles, PC=0x{:04X}",
        summary.reason, summary.instructions, summary.cycles, summary.final_pc
    );

    Ok(summary)
}
