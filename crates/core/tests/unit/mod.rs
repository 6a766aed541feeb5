//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the emulator
//! core. It organizes tests by the module under test: shared data types,
//! configuration, hart state, and the ISA layer.


/// Unit tests for the host-facing configuration surface.
pub mod config;


/// Unit tests for the Instruction Set Architecture (ISA) layer.
///
/// This module aggregates tests for instruction decoding and disassembler
/// mnemonic generation.
pub mod isa;
