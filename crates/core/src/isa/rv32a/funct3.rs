//! RISC-V Atomic Extension (A) Function Codes (funct3).
//!
//! The `funct3` field encodes the operand width of an atomic operation.
//! RV32 supports word-sized atomics only.

/// Word-sized atomic operation.
pub const AMO_W: u32 = 0b010;
