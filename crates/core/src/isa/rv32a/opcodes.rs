//! RISC-V Atomic Extension (A) Opcodes.
//!
//! Defines the major opcode shared by all atomic memory operations.

/// Atomic Memory Operation opcode (AMO, LR, SC).
pub const OP_AMO: u32 = 0b010_1111;
