//! # CSR Reset Tests
//!
//! Tests for the architectural reset state of the CSR bank, including the
//! fields the privileged specification pins down and the legal values chosen
//! for the rest.

use remu_core::common::Word;
use remu_core::core::arch::csr::{self, CsrBank};

#[test]
fn test_reset_mstatus_interrupt_bits_clear() {
    let bank = CsrBank::new();
    let mstatus = bank.explicit_read(csr::MSTATUS).unwrap();
    assert_eq!(mstatus.as_u32() & csr::MSTATUS_MIE, 0);
    assert_eq!(mstatus.as_u32() & csr::MSTATUS_MPRV, 0);
}

#[test]
fn test_reset_mstatush_reads_zero() {
    // mstatush is hardwired here, so MBE is clear by construction.
    let bank = CsrBank::new();
    let mstatush = bank.explicit_read(csr::MSTATUSH).unwrap();
    assert_eq!(mstatush, Word::ZERO);
    assert_eq!(mstatush.as_u32() & csr::MSTATUSH_MBE, 0);
}

#[test]
fn test_reset_misa_and_mcause_zero() {
    let bank = CsrBank::new();
    assert_eq!(bank.explicit_read(csr::MISA).unwrap(), Word::ZERO);
    assert_eq!(bank.explicit_read(csr::MCAUSE).unwrap(), Word::ZERO);
}

#[test]
fn test_reset_mtvec_vectored_at_4() {
    let bank = CsrBank::new();
    assert_eq!(
        bank.explicit_read(csr::MTVEC).unwrap(),
        Word::new(csr::MTVEC_RESET)
    );
}

#[test]
fn test_reset_mtimecmp_all_ones() {
    let bank = CsrBank::new();
    assert_eq!(bank.explicit_read(csr::MTIMECMP).unwrap().as_u32(), u32::MAX);
    assert_eq!(
        bank.explicit_read(csr::MTIMECMPH).unwrap().as_u32(),
        u32::MAX
    );
}

#[test]
fn test_reset_counters_zero() {
    let bank = CsrBank::new();
    for addr in [
        csr::MCYCLE,
        csr::MCYCLEH,
        csr::MINSTRET,
        csr::MINSTRETH,
        csr::MTIME,
        csr::MTIMEH,
    ] {
        assert_eq!(bank.explicit_read(addr).unwrap(), Word::ZERO);
    }
}

#[test]
fn test_reset_pmpcfg_lock_and_mode_clear() {
    let bank = CsrBank::new();
    for addr in csr::PMPCFG_START..=csr::PMPCFG_END {
        let value = bank.explicit_read(addr).unwrap();
        for lane in 0..4 {
            let base = lane * 8;
            assert_eq!(value.bits(base + csr::PMPCFG_A_HI, base + csr::PMPCFG_A_LO), 0);
            assert_eq!(value.bit(base + csr::PMPCFG_L), 0);
        }
    }
}

#[test]
fn test_reset_restores_state_after_writes() {
    let mut bank = CsrBank::new();
    bank.implicit_write(csr::MSCRATCH, Word::new(0xABCD_1234))
        .unwrap();
    bank.implicit_write(csr::MCAUSE, Word::new(0x8000_0007))
        .unwrap();
    bank.implicit_write(csr::MTIMECMP, Word::new(0x1000)).unwrap();

    bank.reset();

    assert_eq!(bank.explicit_read(csr::MSCRATCH).unwrap(), Word::ZERO);
    assert_eq!(bank.explicit_read(csr::MCAUSE).unwrap(), Word::ZERO);
    assert_eq!(bank.explicit_read(csr::MTIMECMP).unwrap().as_u32(), u32::MAX);
}

#[test]
fn test_reset_preserves_hartid() {
    let mut bank = CsrBank::with_hartid(2);
    bank.reset();
    assert_eq!(bank.explicit_read(csr::MHARTID).unwrap(), Word::new(2));
}

#[test]
fn test_identity_registers_read_zero() {
    let bank = CsrBank::new();
    for addr in [csr::MVENDORID, csr::MARCHID, csr::MIMPID, csr::MCONFIGPTR] {
        assert_eq!(bank.explicit_read(addr).unwrap(), Word::ZERO);
    }
    assert_eq!(bank.explicit_read(csr::MHARTID).unwrap(), Word::ZERO);
}
