//! # CSR Access Control Tests
//!
//! Tests for the privilege gate, the read-only address rule, undefined
//! address handling, and the ungated inspection and platform access paths.

use remu_core::common::{CsrError, Word};
use remu_core::core::arch::csr::{self, CsrBank};
use remu_core::core::arch::mode::PrivilegeMode;
use rstest::rstest;

#[rstest]
#[case(csr::MSTATUS, PrivilegeMode::User)]
#[case(csr::MSTATUS, PrivilegeMode::Supervisor)]
#[case(csr::MSCRATCH, PrivilegeMode::User)]
#[case(csr::MSCRATCH, PrivilegeMode::Supervisor)]
#[case(csr::MHARTID, PrivilegeMode::Supervisor)]
#[case(csr::SSTATUS, PrivilegeMode::User)]
#[case(csr::SSCRATCH, PrivilegeMode::User)]
fn test_read_below_minimum_privilege_rejected(
    #[case] addr: u16,
    #[case] mode: PrivilegeMode,
) {
    let mut bank = CsrBank::new();
    let err = bank.read(addr, mode).unwrap_err();
    assert!(matches!(err, CsrError::PrivilegeViolation { .. }));
}

#[rstest]
#[case(csr::MSTATUS, PrivilegeMode::Machine)]
#[case(csr::SSTATUS, PrivilegeMode::Supervisor)]
#[case(csr::SSTATUS, PrivilegeMode::Machine)]
#[case(csr::CYCLE, PrivilegeMode::User)]
#[case(csr::INSTRET, PrivilegeMode::User)]
#[case(csr::TIME, PrivilegeMode::User)]
fn test_read_at_or_above_minimum_privilege_allowed(
    #[case] addr: u16,
    #[case] mode: PrivilegeMode,
) {
    let mut bank = CsrBank::new();
    assert!(bank.read(addr, mode).is_ok());
}

#[test]
fn test_privilege_violation_reports_modes() {
    let mut bank = CsrBank::new();
    let err = bank.read(csr::MSTATUS, PrivilegeMode::User).unwrap_err();
    assert_eq!(
        err,
        CsrError::PrivilegeViolation {
            addr: csr::MSTATUS,
            required: PrivilegeMode::Machine,
            current: PrivilegeMode::User,
        }
    );
}

#[test]
fn test_write_below_minimum_privilege_rejected() {
    let mut bank = CsrBank::new();
    let err = bank
        .write(csr::SSCRATCH, PrivilegeMode::User, Word::new(1))
        .unwrap_err();
    assert!(matches!(err, CsrError::PrivilegeViolation { .. }));
    // The failed write left no trace.
    assert_eq!(bank.explicit_read(csr::SSCRATCH).unwrap(), Word::ZERO);
}

#[rstest]
#[case(csr::MHARTID)]
#[case(csr::MVENDORID)]
#[case(csr::CYCLE)]
#[case(csr::TIMEH)]
#[case(csr::INSTRET)]
fn test_write_to_read_only_address_rejected(#[case] addr: u16) {
    let mut bank = CsrBank::new();
    let err = bank
        .write(addr, PrivilegeMode::Machine, Word::new(1))
        .unwrap_err();
    assert_eq!(err, CsrError::WriteToReadOnly { addr });
}

#[rstest]
#[case(0x7C0)]
#[case(0x000)]
#[case(0xFFF)]
fn test_undefined_address_rejected_everywhere(#[case] addr: u16) {
    let mut bank = CsrBank::new();
    assert_eq!(
        bank.read(addr, PrivilegeMode::Machine).unwrap_err(),
        CsrError::UndefinedCsr { addr }
    );
    assert_eq!(
        bank.write(addr, PrivilegeMode::Machine, Word::ZERO)
            .unwrap_err(),
        CsrError::UndefinedCsr { addr }
    );
    assert_eq!(
        bank.explicit_read(addr).unwrap_err(),
        CsrError::UndefinedCsr { addr }
    );
    assert_eq!(
        bank.implicit_write(addr, Word::ZERO).unwrap_err(),
        CsrError::UndefinedCsr { addr }
    );
    assert!(!CsrBank::defined(addr));
}

#[test]
fn test_explicit_read_bypasses_privilege_gate() {
    // Inspection works regardless of how privileged the register is.
    let bank = CsrBank::new();
    assert!(bank.explicit_read(csr::MSTATUS).is_ok());
    assert!(bank.explicit_read(csr::MHARTID).is_ok());
    assert!(bank.explicit_read(csr::SSCRATCH).is_ok());
}

#[test]
fn test_implicit_write_bypasses_privilege_and_read_only() {
    let mut bank = CsrBank::new();
    bank.implicit_write(csr::MEPC, Word::new(0x8000_0000)).unwrap();
    assert_eq!(
        bank.implicit_read(csr::MEPC).unwrap(),
        Word::new(0x8000_0000)
    );
}

#[test]
fn test_implicit_write_can_post_machine_timer_interrupt() {
    // Platform logic may set MTIP; the software write path may not.
    let mut bank = CsrBank::new();
    bank.implicit_write(csr::MIP, Word::new(csr::MIP_MTIP)).unwrap();
    assert_eq!(
        bank.explicit_read(csr::MIP).unwrap().as_u32() & csr::MIP_MTIP,
        csr::MIP_MTIP
    );
}

#[test]
fn test_software_write_cannot_change_machine_pending_bits() {
    let mut bank = CsrBank::new();
    bank.write(
        csr::MIP,
        PrivilegeMode::Machine,
        Word::new(csr::MIP_MTIP | csr::MIP_MSIP | csr::MIP_SSIP),
    )
    .unwrap();
    let mip = bank.explicit_read(csr::MIP).unwrap().as_u32();
    assert_eq!(mip & csr::MIP_MTIP, 0);
    assert_eq!(mip & csr::MIP_MSIP, 0);
    assert_eq!(mip & csr::MIP_SSIP, csr::MIP_SSIP);
}

#[test]
fn test_machine_mode_reaches_supervisor_registers() {
    let mut bank = CsrBank::new();
    bank.write(csr::SSCRATCH, PrivilegeMode::Machine, Word::new(0xAB))
        .unwrap();
    assert_eq!(
        bank.read(csr::SSCRATCH, PrivilegeMode::Machine).unwrap(),
        Word::new(0xAB)
    );
}

#[test]
fn test_defined_covers_full_pmp_ranges() {
    for addr in csr::PMPCFG_START..=csr::PMPCFG_END {
        assert!(CsrBank::defined(addr));
    }
    for addr in csr::PMPADDR_START..=csr::PMPADDR_END {
        assert!(CsrBank::defined(addr));
    }
    assert!(!CsrBank::defined(csr::PMPADDR_END + 1));
}

#[test]
fn test_min_privilege_follows_address_encoding() {
    assert_eq!(csr::min_privilege(csr::CYCLE), PrivilegeMode::User);
    assert_eq!(csr::min_privilege(csr::SSTATUS), PrivilegeMode::Supervisor);
    assert_eq!(csr::min_privilege(csr::MSTATUS), PrivilegeMode::Machine);
    assert_eq!(csr::min_privilege(csr::MHARTID), PrivilegeMode::Machine);
}

#[test]
fn test_read_only_follows_address_encoding() {
    assert!(csr::is_read_only(csr::CYCLE));
    assert!(csr::is_read_only(csr::MHARTID));
    assert!(!csr::is_read_only(csr::MSTATUS));
    assert!(!csr::is_read_only(csr::MCYCLE));
}
