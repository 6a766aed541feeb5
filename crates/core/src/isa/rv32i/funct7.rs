//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes between standard and
//! alternate encodings sharing the same opcode and funct3 (ADD vs SUB,
//! SRL vs SRA).

/// Standard encoding (ADD, SRL).
pub const DEFAULT: u32 = 0b000_0000;

/// Subtract variant of ADD_SUB.
pub const SUB: u32 = 0b010_0000;

/// Arithmetic variant of SRL_SRA.
pub const SRA: u32 = 0b010_0000;
