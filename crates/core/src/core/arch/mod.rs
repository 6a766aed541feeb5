//! RISC-V architecture-specific components.
//!
//! This module contains the architectural register state of an RV32 hart.
//! It includes the following modules:
//! 1. **CSRs:** Control and Status Register bank with privilege-gated access.
//! 2. **GPRs:** General-purpose register file with the hardwired zero register.
//! 3. **Modes:** Privilege mode definitions.

/// Control and Status Register (CSR) definitions and the gated bank.
pub mod csr;

/// General-purpose register file implementation.
pub mod gpr;

/// Privilege mode definitions.
pub mod mode;
