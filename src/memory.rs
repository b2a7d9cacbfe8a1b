//! # Memory Bus
//!
//! The `MemoryBus` trait decouples the CPU from whatever backs the 64K data
//! address space. Stack pushes, `(HL)` operands and the `LDH`/`LD (nn)` family all
//! go through it; instruction fetch does not (see [`crate::ProgramImage`]).
//!
//! The region from `0xFF00` up is where the real machine maps its I/O registers.
//! [`FlatMemory`] treats it as plain RAM.

/// Base of the high page addressed by `LDH` and `LD (C),A`.
pub const HIGH_PAGE: u16 = 0xFF00;

/// Memory bus trait for CPU data reads and writes.
///
/// # Design
///
/// - `read(&self)`: reads have no side effects on plain memory
/// - `write(&mut self)`: mutation is explicit
/// - No error type: every 16-bit address is valid
///
/// # Examples
///
/// ```
/// use lr35902::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xC000, 0x42);
/// assert_eq!(mem.read(0xC000), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use lr35902::MemoryBus;
///
/// /// Logs every write to the high page.
/// struct SpyMemory {
///     ram: Vec<u8>,
///     io_writes: Vec<(u16, u8)>,
/// }
///
/// impl MemoryBus for SpyMemory {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[addr as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr >= 0xFF00 {
///             self.io_writes.push((addr, value));
///         }
///         self.ram[addr as usize] = value;
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address. Must never panic.
    fn write(&mut self, addr: u16, value: u8);
}

/// 64KB of zero-initialized RAM covering the whole address space.
///
/// # Examples
///
/// ```
/// use lr35902::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFE, 0x99);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.read_memory(0xFFFE), 0x99);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory with all bytes set to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.write(start.wrapping_add(i as u16), byte);
        }
    }

    /// The whole address space as one slice, indexed by address.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
