//! Aggregate hart state.
//!
//! This module implements the full architectural state of one RV32 hart.
//! It performs the following:
//! 1. **Aggregation:** Owns the program counter, the general-purpose register
//!    file, the CSR bank, and the current privilege mode.
//! 2. **Delegation:** Forwards register and CSR accesses to the owned
//!    components, supplying the hart's privilege mode to the gated CSR paths.
//! 3. **Retirement:** Advances the program counter and the architectural
//!    counters as instructions complete.

use tracing::trace;

use crate::common::{CsrError, Word};
use crate::config::Config;
use crate::core::arch::csr::CsrBank;
use crate::core::arch::gpr::RegFile;
use crate::core::arch::mode::PrivilegeMode;

/// The complete architectural state of one hart.
///
/// This is the single mutation surface the execution engine works against:
/// fetch reads the program counter, decode and execute read and write
/// registers, and system instructions go through the privilege-gated CSR
/// paths. The hart owns its CSR bank outright; nothing else aliases it.
#[derive(Debug)]
pub struct CpuState {
    pc: Word,
    regs: RegFile,
    csrs: CsrBank,
    mode: PrivilegeMode,
    reset_pc: Word,
    reservation_valid: bool,
    trace: bool,
}

impl CpuState {
    /// Creates a hart in the architectural reset state described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: Word::new(config.reset_pc),
            regs: RegFile::new(),
            csrs: CsrBank::with_hartid(config.mhartid),
            mode: PrivilegeMode::Machine,
            reset_pc: Word::new(config.reset_pc),
            reservation_valid: false,
            trace: config.trace,
        }
    }

    /// Returns the hart to its reset state: PC at the reset vector, all GPRs
    /// zero, every CSR at its reset value, the reservation set invalid, and
    /// the hart back in Machine mode.
    pub fn reset(&mut self) {
        self.pc = self.reset_pc;
        self.regs = RegFile::new();
        self.csrs.reset();
        self.mode = PrivilegeMode::Machine;
        self.reservation_valid = false;
        trace!("hart reset, pc = {}", self.pc);
    }

    /// Returns the current program counter.
    pub fn pc(&self) -> Word {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: Word) {
        self.pc = pc;
    }

    /// Advances the program counter by one 32-bit instruction, wrapping at
    /// the top of the address space.
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(Word::new(4));
    }

    /// Reads a general-purpose register (`x0` always reads zero).
    ///
    /// # Panics
    ///
    /// Panics if `idx` exceeds 31.
    pub fn reg(&self, idx: usize) -> Word {
        self.regs.read(idx)
    }

    /// Writes a general-purpose register (writes to `x0` are discarded).
    ///
    /// # Panics
    ///
    /// Panics if `idx` exceeds 31.
    pub fn set_reg(&mut self, idx: usize, val: Word) {
        self.regs.write(idx, val);
    }

    /// Returns the current privilege mode.
    pub fn privilege_mode(&self) -> PrivilegeMode {
        self.mode
    }

    /// Moves the hart to a new privilege mode.
    ///
    /// Called by trap entry and return logic; the CSR bank itself never
    /// changes the mode, it only observes it through the gated accessors.
    pub fn set_privilege_mode(&mut self, mode: PrivilegeMode) {
        if mode != self.mode {
            trace!("privilege mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Reads a CSR on behalf of an executing instruction, gated by the
    /// hart's current privilege mode.
    ///
    /// # Errors
    ///
    /// See [`CsrBank::read`].
    pub fn csr_read(&mut self, addr: u16) -> Result<Word, CsrError> {
        self.csrs.read(addr, self.mode)
    }

    /// Writes a CSR on behalf of an executing instruction, gated by the
    /// hart's current privilege mode.
    ///
    /// # Errors
    ///
    /// See [`CsrBank::write`].
    pub fn csr_write(&mut self, addr: u16, data: Word) -> Result<(), CsrError> {
        self.csrs.write(addr, self.mode, data)
    }

    /// Reads a CSR for inspection without privilege checks or side effects.
    ///
    /// # Errors
    ///
    /// See [`CsrBank::explicit_read`].
    pub fn csr_explicit_read(&self, addr: u16) -> Result<Word, CsrError> {
        self.csrs.explicit_read(addr)
    }

    /// Returns a shared view of the CSR bank for trap and platform logic.
    pub fn csrs(&self) -> &CsrBank {
        &self.csrs
    }

    /// Returns an exclusive view of the CSR bank for trap and platform logic.
    pub fn csrs_mut(&mut self) -> &mut CsrBank {
        &mut self.csrs
    }

    /// Marks the load reservation valid; LR calls this.
    pub fn validate_reservation_set(&mut self) {
        self.reservation_valid = true;
    }

    /// Invalidates the load reservation; SC calls this whether it succeeds
    /// or fails, and trap entry clears it as well.
    pub fn invalidate_reservation_set(&mut self) {
        self.reservation_valid = false;
    }

    /// Returns whether the load reservation is currently valid.
    pub fn reservation_set_valid(&self) -> bool {
        self.reservation_valid
    }

    /// Records the completion of one instruction: bumps the retired and
    /// cycle counters (one instruction per cycle in this model). Emits a
    /// trace event per retirement when the config enabled instruction
    /// tracing.
    pub fn retire(&mut self) {
        self.csrs.increment_instret();
        self.csrs.increment_cycle();
        if self.trace {
            trace!("retired #{}, pc = {}", self.csrs.instret(), self.pc);
        }
    }

    /// Returns the number of instructions the hart has retired since reset.
    pub fn instructions_retired(&self) -> u64 {
        self.csrs.instret()
    }

    /// Dumps the program counter, privilege mode, and register file to
    /// stderr.
    pub fn dump(&self) {
        eprintln!("pc ={:#010x} mode={}", self.pc, self.mode);
        self.regs.dump();
    }
}
