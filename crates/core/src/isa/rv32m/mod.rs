//! RISC-V Multiply/Divide Extension (M).
//!
//! Defines constants for the integer multiplication and division extension.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Multiply/divide extension selectors.
pub mod opcodes;
