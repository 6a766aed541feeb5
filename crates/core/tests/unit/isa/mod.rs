//! # ISA Unit Tests
//!
//! This module contains unit tests for the Instruction Set Architecture (ISA)
//! layer. It covers instruction decoding and disassembly.
