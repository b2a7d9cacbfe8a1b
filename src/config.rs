//! Core configuration.

/// Machine clocks in one DMG video frame.
pub const CLOCKS_PER_FRAME: u32 = 70_224;

/// Default instruction burst for [`crate::CPU::run_frame`]: one frame's worth of
/// the shortest (4-clock) instructions.
pub const DEFAULT_INSTRUCTIONS_PER_FRAME: u32 = CLOCKS_PER_FRAME / 4;

/// What the instruction loop does when it meets an opcode it cannot execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FaultPolicy {
    /// Return the error and leave `pc` on the faulting instruction.
    #[default]
    Halt,
    /// Log a warning, step over the instruction and keep going.
    Skip,
}

/// Tunables for one emulation session.
///
/// # Examples
///
/// ```
/// use lr35902::{CoreConfig, CPU, FaultPolicy, FlatMemory};
///
/// let config = CoreConfig {
///     instructions_per_frame: 4,
///     unrecognized_opcode: FaultPolicy::Skip,
///     ..CoreConfig::default()
/// };
///
/// let mut cpu = CPU::with_config(FlatMemory::new(), config);
/// cpu.load_program(vec![0xD3, 0x00, 0x00, 0x00]);
/// assert_eq!(cpu.run_frame().unwrap(), 4);
/// assert_eq!(cpu.pc(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoreConfig {
    /// Instructions executed by each `run_frame` call.
    pub instructions_per_frame: u32,

    /// Handling of illegal opcode slots (0xD3, 0xDB, 0xDD, ...).
    pub unrecognized_opcode: FaultPolicy,

    /// Handling of table slots tagged `Operation::Unimplemented`.
    pub unimplemented_opcode: FaultPolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            instructions_per_frame: DEFAULT_INSTRUCTIONS_PER_FRAME,
            unrecognized_opcode: FaultPolicy::Halt,
            unimplemented_opcode: FaultPolicy::Halt,
        }
    }
}
