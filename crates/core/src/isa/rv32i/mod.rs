//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Defines the opcodes and function codes of the 32-bit base integer
//! instruction set.

/// Function code 3 definitions for base integer instructions.
pub mod funct3;

/// Function code 7 definitions for base integer instructions.
pub mod funct7;

/// Base integer major opcodes.
pub mod opcodes;
