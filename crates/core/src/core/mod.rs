//! Hart state components.
//!
//! This module contains the architectural elements of one emulated hart.
//! It includes the following modules:
//! 1. **Arch:** Register file, privilege modes, and the CSR bank.
//! 2. **Cpu:** The `CpuState` aggregate consumed by the execution engine.

/// Architectural registers (GPRs, CSRs) and privilege modes.
pub mod arch;

/// The aggregate hart state surface.
pub mod cpu;
