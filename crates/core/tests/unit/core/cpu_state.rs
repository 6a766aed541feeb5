//! # CPU State Tests
//!
//! Tests for the aggregate hart state: reset behavior, program counter
//! management, register delegation, privilege transitions, and the gated
//! CSR paths as seen from the execution engine.

use remu_core::common::{CsrError, Word};
use remu_core::core::arch::csr;
use remu_core::core::arch::mode::PrivilegeMode;
use remu_core::core::cpu::CpuState;
use remu_core::Config;

fn machine_hart() -> CpuState {
    CpuState::new(&Config::default())
}

#[test]
fn test_cpu_starts_in_machine_mode_at_reset_pc() {
    let config = Config {
        reset_pc: 0x8000_0000,
        ..Config::default()
    };
    let cpu = CpuState::new(&config);
    assert_eq!(cpu.pc(), Word::new(0x8000_0000));
    assert_eq!(cpu.privilege_mode(), PrivilegeMode::Machine);
    assert_eq!(cpu.instructions_retired(), 0);
}

#[test]
fn test_cpu_reports_configured_hartid() {
    let config = Config {
        mhartid: 7,
        ..Config::default()
    };
    let cpu = CpuState::new(&config);
    assert_eq!(cpu.csr_explicit_read(csr::MHARTID).unwrap(), Word::new(7));
}

#[test]
fn test_cpu_pc_management() {
    let mut cpu = machine_hart();
    cpu.set_pc(Word::new(0x100));
    assert_eq!(cpu.pc(), Word::new(0x100));
    cpu.advance_pc();
    assert_eq!(cpu.pc(), Word::new(0x104));
}

#[test]
fn test_cpu_advance_pc_wraps() {
    let mut cpu = machine_hart();
    cpu.set_pc(Word::new(0xFFFF_FFFC));
    cpu.advance_pc();
    assert_eq!(cpu.pc(), Word::ZERO);
}

#[test]
fn test_cpu_register_delegation_keeps_x0_zero() {
    let mut cpu = machine_hart();
    cpu.set_reg(10, Word::from_signed(-123));
    cpu.set_reg(0, Word::new(0xDEAD_BEEF));
    assert_eq!(cpu.reg(10).as_i32(), -123);
    assert_eq!(cpu.reg(0), Word::ZERO);
}

#[test]
fn test_cpu_retire_counts_instructions() {
    let mut cpu = machine_hart();
    for _ in 0..123 {
        cpu.retire();
    }
    assert_eq!(cpu.instructions_retired(), 123);
    assert_eq!(
        cpu.csr_explicit_read(csr::MINSTRET).unwrap(),
        Word::new(123)
    );
    assert_eq!(cpu.csr_explicit_read(csr::MCYCLE).unwrap(), Word::new(123));
}

#[test]
fn test_cpu_csr_access_follows_current_mode() {
    let mut cpu = machine_hart();
    assert!(cpu.csr_read(csr::MSTATUS).is_ok());

    cpu.set_privilege_mode(PrivilegeMode::User);
    assert!(matches!(
        cpu.csr_read(csr::MSTATUS).unwrap_err(),
        CsrError::PrivilegeViolation { .. }
    ));
    assert!(cpu.csr_read(csr::CYCLE).is_ok());

    cpu.set_privilege_mode(PrivilegeMode::Supervisor);
    assert!(cpu.csr_read(csr::SSTATUS).is_ok());
    assert!(cpu.csr_read(csr::MSTATUS).is_err());
}

#[test]
fn test_cpu_csr_write_delegates_with_mode() {
    let mut cpu = machine_hart();
    cpu.csr_write(csr::MSCRATCH, Word::new(0xABCD_1234)).unwrap();
    assert_eq!(
        cpu.csr_read(csr::MSCRATCH).unwrap(),
        Word::new(0xABCD_1234)
    );

    cpu.set_privilege_mode(PrivilegeMode::User);
    assert!(cpu.csr_write(csr::MSCRATCH, Word::ZERO).is_err());
}

#[test]
fn test_cpu_trap_logic_uses_ungated_bank_access() {
    let mut cpu = machine_hart();
    cpu.set_privilege_mode(PrivilegeMode::User);
    // Trap entry records state regardless of the interrupted mode.
    cpu.csrs_mut()
        .implicit_write(csr::MEPC, Word::new(0x4000))
        .unwrap();
    cpu.csrs_mut()
        .implicit_write(csr::MCAUSE, Word::new(0x8000_0007))
        .unwrap();
    assert_eq!(
        cpu.csrs().implicit_read(csr::MEPC).unwrap(),
        Word::new(0x4000)
    );
    assert_eq!(
        cpu.csrs().implicit_read(csr::MCAUSE).unwrap(),
        Word::new(0x8000_0007)
    );
}

#[test]
fn test_cpu_reset_restores_everything() {
    let config = Config {
        reset_pc: 0x200,
        ..Config::default()
    };
    let mut cpu = CpuState::new(&config);
    cpu.set_pc(Word::new(0x9999_0000));
    cpu.set_reg(5, Word::new(55));
    cpu.set_privilege_mode(PrivilegeMode::User);
    cpu.csrs_mut()
        .implicit_write(csr::MSCRATCH, Word::new(1))
        .unwrap();
    cpu.retire();

    cpu.reset();

    assert_eq!(cpu.pc(), Word::new(0x200));
    assert_eq!(cpu.reg(5), Word::ZERO);
    assert_eq!(cpu.privilege_mode(), PrivilegeMode::Machine);
    assert_eq!(cpu.csr_explicit_read(csr::MSCRATCH).unwrap(), Word::ZERO);
    assert_eq!(cpu.instructions_retired(), 0);
}

#[test]
fn test_cpu_pc_round_trips_exactly() {
    let mut cpu = machine_hart();
    cpu.set_pc(Word::new(0xABCD_1234));
    assert_eq!(cpu.pc(), Word::new(0xABCD_1234));
    cpu.set_pc(Word::ZERO);
    assert_eq!(cpu.pc(), Word::ZERO);
}

#[test]
fn test_cpu_fresh_hart_scenario() {
    let mut cpu = machine_hart();
    assert_eq!(cpu.pc(), Word::ZERO);
    assert_eq!(cpu.instructions_retired(), 0);

    cpu.set_reg(1, Word::new(0x9876_5432));
    assert_eq!(cpu.reg(1), Word::new(0x9876_5432));

    for _ in 0..123 {
        cpu.retire();
    }
    assert_eq!(cpu.instructions_retired(), 123);

    // Interrupts still globally disabled: mstatus.MIE clear since reset.
    let mstatus = cpu.csr_explicit_read(csr::MSTATUS).unwrap();
    assert_eq!(mstatus.bit(3), 0);
}

#[test]
fn test_cpu_reservation_set_lifecycle() {
    let mut cpu = machine_hart();
    // No LR has executed yet on a fresh hart.
    assert!(!cpu.reservation_set_valid());

    cpu.validate_reservation_set();
    assert!(cpu.reservation_set_valid());

    cpu.invalidate_reservation_set();
    assert!(!cpu.reservation_set_valid());
}

#[test]
fn test_cpu_reset_invalidates_reservation_set() {
    let mut cpu = machine_hart();
    cpu.validate_reservation_set();
    cpu.reset();
    assert!(!cpu.reservation_set_valid());
}

#[test]
fn test_cpu_trace_enabled_hart_retires_normally() {
    let config = Config {
        trace: true,
        ..Config::default()
    };
    let mut cpu = CpuState::new(&config);
    for _ in 0..3 {
        cpu.retire();
    }
    assert_eq!(cpu.instructions_retired(), 3);
}

#[test]
fn test_cpu_dump_does_not_panic() {
    let mut cpu = machine_hart();
    cpu.set_reg(1, Word::new(0x1234_5678));
    cpu.dump();
}
