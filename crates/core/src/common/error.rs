//! Recoverable CSR access conditions.
//!
//! Every variant here is a condition the execution engine is expected to
//! translate into a RISC-V illegal-instruction trap. The CSR bank itself never
//! delivers a trap: it only reports the condition to its caller. Programmer
//! errors (bad register indices, bad bit ranges) are not represented here;
//! those panic at the point of misuse.

use crate::core::arch::mode::PrivilegeMode;
use thiserror::Error;

/// A failed CSR access.
///
/// Returned by the gated CSR accessors; the caller owns the translation into
/// trap state. None of these conditions are swallowed internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CsrError {
    /// The current privilege mode is below the minimum the address requires.
    #[error("CSR {addr:#05x} requires {required} privilege (current mode: {current})")]
    PrivilegeViolation {
        /// The CSR address that was accessed.
        addr: u16,
        /// Minimum privilege mode encoded in the address.
        required: PrivilegeMode,
        /// The mode the access was attempted from.
        current: PrivilegeMode,
    },

    /// A write to an address whose encoding marks it read-only
    /// (address bits [11:10] are 0b11).
    #[error("write to read-only CSR {addr:#05x}")]
    WriteToReadOnly {
        /// The CSR address that was written.
        addr: u16,
    },

    /// No CSR is mapped at this address.
    #[error("undefined CSR address {addr:#05x}")]
    UndefinedCsr {
        /// The unmapped address.
        addr: u16,
    },
}
