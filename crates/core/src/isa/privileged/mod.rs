//! RISC-V Privileged Architecture.
//!
//! Defines constants for system instructions: CSR access, environment calls,
//! and trap returns.

/// Privileged and system instruction opcodes.
pub mod opcodes;
