//! # CSR Error Tests
//!
//! Tests for the recoverable CSR access error taxonomy and the diagnostic
//! text it renders.

use remu_core::common::CsrError;
use remu_core::core::arch::mode::PrivilegeMode;

#[test]
fn test_privilege_violation_display_names_both_modes() {
    let err = CsrError::PrivilegeViolation {
        addr: 0x300,
        required: PrivilegeMode::Machine,
        current: PrivilegeMode::User,
    };
    let text = err.to_string();
    assert!(text.contains("0x300"));
    assert!(text.contains("Machine"));
    assert!(text.contains("User"));
}

#[test]
fn test_write_to_read_only_display() {
    let err = CsrError::WriteToReadOnly { addr: 0xF14 };
    assert_eq!(err.to_string(), "write to read-only CSR 0xf14");
}

#[test]
fn test_undefined_csr_display() {
    let err = CsrError::UndefinedCsr { addr: 0x7C0 };
    assert_eq!(err.to_string(), "undefined CSR address 0x7c0");
}

#[test]
fn test_errors_are_comparable() {
    let a = CsrError::UndefinedCsr { addr: 0x7C0 };
    let b = CsrError::UndefinedCsr { addr: 0x7C0 };
    let c = CsrError::UndefinedCsr { addr: 0x7C1 };
    assert_eq!(a, b);
    assert_ne!(a, c);
}
