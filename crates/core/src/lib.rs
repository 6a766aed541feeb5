//! RISC-V RV32 architectural-state core.
//!
//! This crate implements the architectural state of an RV32 hart with the following:
//! 1. **Common:** The `Word` bit-field value type and recoverable CSR access errors.
//! 2. **Core:** Register file, privilege modes, the CSR bank, and the `CpuState` aggregate.
//! 3. **ISA:** Instruction field extraction, format decoding, and the disassembler.
//! 4. **Configuration:** Serde-deserializable reset configuration.
//!
//! The fetch/decode/execute pipeline, memory subsystem, and trap delivery are
//! external collaborators: they drive this crate's state surface but live elsewhere.

/// Common types (the `Word` bit-field value, CSR access errors).
pub mod common;
/// Core configuration (reset PC, hart id, tracing).
pub mod config;
/// Hart state (register file, privilege modes, CSR bank, CPU state).
pub mod core;
/// Instruction set (field extraction, decode, disassembly, opcode constants).
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The bit-field register value underlying all architectural state.
pub use crate::common::Word;
/// Aggregate hart state; construct with `CpuState::new` from a [`Config`].
pub use crate::core::cpu::CpuState;
