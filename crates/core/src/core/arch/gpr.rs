//! RISC-V General-Purpose Register File.
//!
//! This module implements the general-purpose register file for the RV32 core.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides a utility for dumping the complete register state.

use crate::common::Word;

/// General-purpose register file.
///
/// Contains the 32 integer registers. Register `x0` always reads as zero;
/// writes to it are accepted and silently discarded, mirroring the hardwired
/// zero register of the ISA (never a fault). All other slots store bit
/// patterns exactly; signed and unsigned views come from [`Word`].
pub struct RegFile {
    regs: [Word; 32],
}

impl RegFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [Word::ZERO; 32],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns zero.
    ///
    /// # Panics
    ///
    /// Panics if `idx` exceeds 31; an out-of-range register index is a bug in
    /// the calling execution engine, not a runtime condition.
    pub fn read(&self, idx: usize) -> Word {
        if idx == 0 { Word::ZERO } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are discarded without error.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to store.
    ///
    /// # Panics
    ///
    /// Panics if `idx` exceeds 31 (programmer error).
    pub fn write(&mut self, idx: usize, val: Word) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all general-purpose registers to stderr.
    ///
    /// Useful when tracing hart state during debugging sessions.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegFile").field("regs", &self.regs).finish()
    }
}
