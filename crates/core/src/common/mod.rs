//! Common types shared across the emulator core.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Word:** A 32-bit bit-field value with aliased signed and unsigned views.
//! 2. **Errors:** Recoverable CSR access conditions reported to the caller.

/// Recoverable CSR access error conditions.
pub mod error;

/// The 32-bit bit-field register value type.
pub mod word;

pub use error::CsrError;
pub use word::Word;
