//! Control and Status Register (CSR) definitions and operations.
//!
//! This module implements the CSR subsystem for the RV32 core. It provides:
//! 1. **Address Definitions:** Constants for the implemented machine and supervisor CSRs.
//! 2. **Field Masks:** Bitmasks and shifts for status, interrupt, and PMP fields.
//! 3. **Access Records:** A per-address record of reset value, write mask, and
//!    minimum privilege, looked up through [`csr_spec`].
//! 4. **The Bank:** [`CsrBank`], a sparse, privilege-gated register space.
//!
//! The bank reports access failures to its caller as [`CsrError`] values; it
//! never delivers a trap itself, and it never changes the privilege mode (mode
//! transitions are enacted by external trap/return logic and merely observed
//! here through the mode argument of the gated accessors).

use std::collections::BTreeMap;

use tracing::trace;

use crate::common::{CsrError, Word};
use crate::core::arch::mode::PrivilegeMode;

/// Supervisor status register CSR address (masked view of `mstatus`).
pub const SSTATUS: u16 = 0x100;

/// Supervisor interrupt enable register CSR address.
pub const SIE: u16 = 0x104;

/// Supervisor trap vector base address register CSR address.
pub const STVEC: u16 = 0x105;

/// Supervisor counter enable register CSR address.
pub const SCOUNTEREN: u16 = 0x106;

/// Supervisor environment configuration register CSR address.
pub const SENVCFG: u16 = 0x10A;

/// Supervisor scratch register CSR address.
pub const SSCRATCH: u16 = 0x140;

/// Supervisor exception program counter CSR address.
pub const SEPC: u16 = 0x141;

/// Supervisor cause register CSR address.
pub const SCAUSE: u16 = 0x142;

/// Supervisor trap value register CSR address (hardwired to zero here).
pub const STVAL: u16 = 0x143;

/// Supervisor interrupt pending register CSR address.
pub const SIP: u16 = 0x144;

/// Supervisor address translation and protection register CSR address.
pub const SATP: u16 = 0x180;

/// Machine status register CSR address.
pub const MSTATUS: u16 = 0x300;

/// Machine ISA register CSR address (reads zero: no extensions are claimed).
pub const MISA: u16 = 0x301;

/// Machine exception delegation register CSR address.
pub const MEDELEG: u16 = 0x302;

/// Machine interrupt delegation register CSR address.
pub const MIDELEG: u16 = 0x303;

/// Machine interrupt enable register CSR address.
pub const MIE: u16 = 0x304;

/// Machine trap vector base address register CSR address.
pub const MTVEC: u16 = 0x305;

/// Machine counter enable register CSR address (hardwired to zero here).
pub const MCOUNTEREN: u16 = 0x306;

/// Machine environment configuration register CSR address.
pub const MENVCFG: u16 = 0x30A;

/// Machine status register high half CSR address (reads zero: little-endian only).
pub const MSTATUSH: u16 = 0x310;

/// Machine environment configuration high half CSR address.
pub const MENVCFGH: u16 = 0x31A;

/// Machine counter inhibit register CSR address (hardwired to zero here).
pub const MCOUNTINHIBIT: u16 = 0x320;

/// First machine performance event selector CSR address (inclusive).
pub const MHPMEVENT_START: u16 = 0x323;

/// Last machine performance event selector CSR address (inclusive).
pub const MHPMEVENT_END: u16 = 0x33F;

/// Machine scratch register CSR address.
pub const MSCRATCH: u16 = 0x340;

/// Machine exception program counter CSR address.
pub const MEPC: u16 = 0x341;

/// Machine cause register CSR address.
pub const MCAUSE: u16 = 0x342;

/// Machine trap value register CSR address (hardwired to zero here).
pub const MTVAL: u16 = 0x343;

/// Machine interrupt pending register CSR address.
pub const MIP: u16 = 0x344;

/// First physical memory protection configuration CSR address (inclusive).
pub const PMPCFG_START: u16 = 0x3A0;

/// Last physical memory protection configuration CSR address (inclusive).
pub const PMPCFG_END: u16 = 0x3AF;

/// First physical memory protection address CSR address (inclusive).
pub const PMPADDR_START: u16 = 0x3B0;

/// Last physical memory protection address CSR address (inclusive).
pub const PMPADDR_END: u16 = 0x3EF;

/// Machine cycle counter CSR address (low half).
pub const MCYCLE: u16 = 0xB00;

/// Machine instructions retired counter CSR address (low half).
pub const MINSTRET: u16 = 0xB02;

/// First machine performance counter CSR address (inclusive).
pub const MHPMCOUNTER_START: u16 = 0xB03;

/// Last machine performance counter CSR address (inclusive).
pub const MHPMCOUNTER_END: u16 = 0xB1F;

/// Machine cycle counter CSR address (high half).
pub const MCYCLEH: u16 = 0xB80;

/// Machine instructions retired counter CSR address (high half).
pub const MINSTRETH: u16 = 0xB82;

/// First machine performance counter high-half CSR address (inclusive).
pub const MHPMCOUNTERH_START: u16 = 0xB83;

/// Last machine performance counter high-half CSR address (inclusive).
pub const MHPMCOUNTERH_END: u16 = 0xB9F;

/// Machine timer CSR address, low half (custom mapping; the platform timer
/// normally lives in memory, but keeping it in the bank lets the external
/// driver advance it through ungated writes).
pub const MTIME: u16 = 0xBC0;

/// Machine timer CSR address, high half (custom mapping).
pub const MTIMEH: u16 = 0xBC4;

/// Machine timer compare CSR address, low half (custom mapping).
pub const MTIMECMP: u16 = 0xBD0;

/// Machine timer compare CSR address, high half (custom mapping).
pub const MTIMECMPH: u16 = 0xBD4;

/// Cycle counter CSR address (read-only user view, low half).
pub const CYCLE: u16 = 0xC00;

/// Timer CSR address (read-only user view, low half).
pub const TIME: u16 = 0xC01;

/// Instructions retired counter CSR address (read-only user view, low half).
pub const INSTRET: u16 = 0xC02;

/// First user performance counter CSR address (inclusive).
pub const HPMCOUNTER_START: u16 = 0xC03;

/// Last user performance counter CSR address (inclusive).
pub const HPMCOUNTER_END: u16 = 0xC1F;

/// Cycle counter CSR address (read-only user view, high half).
pub const CYCLEH: u16 = 0xC80;

/// Timer CSR address (read-only user view, high half).
pub const TIMEH: u16 = 0xC81;

/// Instructions retired counter CSR address (read-only user view, high half).
pub const INSTRETH: u16 = 0xC82;

/// First user performance counter high-half CSR address (inclusive).
pub const HPMCOUNTERH_START: u16 = 0xC83;

/// Last user performance counter high-half CSR address (inclusive).
pub const HPMCOUNTERH_END: u16 = 0xC9F;

/// Machine vendor ID CSR address (read-only, zero: non-commercial implementation).
pub const MVENDORID: u16 = 0xF11;

/// Machine architecture ID CSR address (read-only).
pub const MARCHID: u16 = 0xF12;

/// Machine implementation ID CSR address (read-only).
pub const MIMPID: u16 = 0xF13;

/// Machine hardware thread ID CSR address (read-only).
pub const MHARTID: u16 = 0xF14;

/// Machine configuration pointer CSR address (read-only).
pub const MCONFIGPTR: u16 = 0xF15;

/// Machine interrupt enable bit in `mstatus` (bit 3).
pub const MSTATUS_MIE: u32 = 1 << 3;

/// Supervisor interrupt enable bit in `mstatus` (bit 1).
pub const MSTATUS_SIE: u32 = 1 << 1;

/// Supervisor previous interrupt enable bit in `mstatus` (bit 5).
pub const MSTATUS_SPIE: u32 = 1 << 5;

/// Machine previous interrupt enable bit in `mstatus` (bit 7).
pub const MSTATUS_MPIE: u32 = 1 << 7;

/// Supervisor previous privilege bit in `mstatus` (bit 8).
pub const MSTATUS_SPP: u32 = 1 << 8;

/// Machine previous privilege field mask in `mstatus` (bits 12:11).
pub const MSTATUS_MPP: u32 = 3 << 11;

/// Modify-privilege bit in `mstatus` (bit 17).
pub const MSTATUS_MPRV: u32 = 1 << 17;

/// Machine big-endian bit in `mstatush` (bit 5).
pub const MSTATUSH_MBE: u32 = 1 << 5;

/// Bits of `mstatus` visible and writable through the `sstatus` window.
pub const SSTATUS_MASK: u32 = 0b1000_0000_0000_1101_1110_0111_0110_0010;

/// Supervisor software interrupt bit in `mip`/`mie` (bit 1).
pub const MIP_SSIP: u32 = 1 << 1;

/// Machine software interrupt bit in `mip`/`mie` (bit 3).
pub const MIP_MSIP: u32 = 1 << 3;

/// Supervisor timer interrupt bit in `mip`/`mie` (bit 5).
pub const MIP_STIP: u32 = 1 << 5;

/// Machine timer interrupt bit in `mip`/`mie` (bit 7).
pub const MIP_MTIP: u32 = 1 << 7;

/// Supervisor external interrupt bit in `mip`/`mie` (bit 9).
pub const MIP_SEIP: u32 = 1 << 9;

/// Machine external interrupt bit in `mip`/`mie` (bit 11).
pub const MIP_MEIP: u32 = 1 << 11;

/// Writable bits of `mie` and `mideleg` (the supervisor and machine
/// software/timer/external enables).
pub const MIE_WRITE_MASK: u32 = MIP_SSIP | MIP_MSIP | MIP_STIP | MIP_MTIP | MIP_SEIP | MIP_MEIP;

/// Bits of `mip` writable by software: the machine-level pending bits are
/// read-only to software and set/cleared by platform logic only.
pub const MIP_WRITE_MASK: u32 = MIP_SSIP | MIP_STIP | MIP_SEIP;

/// Bits of `mip` writable through the ungated platform path
/// ([`CsrBank::implicit_write`]): includes the machine-level pending bits.
pub const MIP_PLATFORM_MASK: u32 = MIE_WRITE_MASK;

/// Writable bits of `medeleg` (the delegatable synchronous exception causes).
pub const MEDELEG_WRITE_MASK: u32 = 0b1011_0011_1111_1111;

/// Writable bits of `mepc`/`sepc`: bits 1:0 are hardwired to zero (IALIGN=32).
pub const EPC_WRITE_MASK: u32 = 0xFFFF_FFFC;

/// Writable bits of `menvcfg`/`senvcfg` (only the FIOM bit).
pub const ENVCFG_WRITE_MASK: u32 = 0b1;

/// Low bit of the address-matching-mode field `A` in a `pmpcfgN` byte lane
/// (the field occupies bits 4:3 of each configuration byte).
pub const PMPCFG_A_LO: u32 = 3;

/// High bit of the address-matching-mode field `A` in a `pmpcfgN` byte lane.
pub const PMPCFG_A_HI: u32 = 4;

/// Lock bit `L` in a `pmpcfgN` byte lane (bit 7).
pub const PMPCFG_L: u32 = 7;

/// Reset value of `mtvec`: vectored mode with the base at `0x4`, the layout
/// the bundled supervisor software expects.
pub const MTVEC_RESET: u32 = 0x0000_0004 | 0b01;

/// Access record for one defined CSR address.
///
/// This is the per-address record [`csr_spec`] produces: everything the bank
/// needs to reset, gate, and mask an access, with no per-address branching at
/// the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsrSpec {
    /// Value the register holds after [`CsrBank::reset`].
    pub reset: u32,
    /// Bits software can change; writes outside the mask are silently preserved.
    pub write_mask: u32,
    /// Minimum privilege mode required for gated access.
    pub min_privilege: PrivilegeMode,
}

/// Returns the minimum privilege mode required to access `addr`.
///
/// Per the privileged specification, address bits 9:8 encode the minimum
/// level (0b10, hypervisor, maps up to Machine; no such address is defined
/// in this bank anyway).
pub fn min_privilege(addr: u16) -> PrivilegeMode {
    match (addr >> 8) & 0b11 {
        0 => PrivilegeMode::User,
        1 => PrivilegeMode::Supervisor,
        _ => PrivilegeMode::Machine,
    }
}

/// Returns true if the address encoding marks the CSR read-only
/// (address bits 11:10 are 0b11).
pub fn is_read_only(addr: u16) -> bool {
    (addr >> 10) & 0b11 == 0b11
}

/// Looks up the access record for a CSR address.
///
/// Returns `None` for addresses with no backing register; callers translate
/// that into [`CsrError::UndefinedCsr`]. This table is the single source of
/// truth for which addresses exist: the bank validates its storage against it
/// at reset.
pub fn csr_spec(addr: u16) -> Option<CsrSpec> {
    let (reset, write_mask) = match addr {
        SSTATUS => (0, SSTATUS_MASK),
        SIE => (0, MIE_WRITE_MASK),
        STVEC | SCOUNTEREN | SSCRATCH | SCAUSE | SATP => (0, u32::MAX),
        SENVCFG | MENVCFG => (0, ENVCFG_WRITE_MASK),
        SEPC | MEPC => (0, EPC_WRITE_MASK),
        // stval/mtval are hardwired to zero; writes are ignored, not faulted.
        STVAL | MTVAL => (0, 0),
        SIP => (0, MIP_WRITE_MASK),
        MSTATUS => (0, u32::MAX),
        // misa reads zero (no extensions claimed) and ignores writes.
        MISA => (0, 0),
        MEDELEG => (0, MEDELEG_WRITE_MASK),
        MIDELEG | MIE => (0, MIE_WRITE_MASK),
        MTVEC => (MTVEC_RESET, u32::MAX),
        MCOUNTEREN | MSTATUSH | MENVCFGH | MCOUNTINHIBIT => (0, 0),
        MHPMEVENT_START..=MHPMEVENT_END => (0, 0),
        MSCRATCH | MCAUSE => (0, u32::MAX),
        MIP => (0, MIP_WRITE_MASK),
        PMPCFG_START..=PMPCFG_END => (0, u32::MAX),
        PMPADDR_START..=PMPADDR_END => (0, u32::MAX),
        MCYCLE | MCYCLEH | MINSTRET | MINSTRETH => (0, u32::MAX),
        MHPMCOUNTER_START..=MHPMCOUNTER_END | MHPMCOUNTERH_START..=MHPMCOUNTERH_END => (0, 0),
        MTIME | MTIMEH | MTIMECMP | MTIMECMPH => (0, u32::MAX),
        CYCLE | TIME | INSTRET | CYCLEH | TIMEH | INSTRETH => (0, 0),
        HPMCOUNTER_START..=HPMCOUNTER_END | HPMCOUNTERH_START..=HPMCOUNTERH_END => (0, 0),
        MVENDORID | MARCHID | MIMPID | MHARTID | MCONFIGPTR => (0, 0),
        _ => return None,
    };
    Some(CsrSpec {
        reset,
        write_mask,
        min_privilege: min_privilege(addr),
    })
}

/// Word-backed CSR addresses outside the PMP ranges.
const WORD_BACKED: [u16; 19] = [
    SIE, STVEC, SCOUNTEREN, SENVCFG, SSCRATCH, SEPC, SCAUSE, SIP, SATP, MSTATUS, MEDELEG, MIDELEG,
    MIE, MTVEC, MENVCFG, MSCRATCH, MEPC, MCAUSE, MIP,
];

/// Iterates every address whose value lives in the bank's word storage.
fn word_backed_addresses() -> impl Iterator<Item = u16> {
    WORD_BACKED
        .into_iter()
        .chain(PMPCFG_START..=PMPCFG_END)
        .chain(PMPADDR_START..=PMPADDR_END)
}

/// The control and status register bank of one hart.
///
/// A sparse 16-bit address space: word-sized registers live in a map populated
/// at reset from the [`csr_spec`] table, 64-bit counters live in dedicated
/// fields addressed through 32-bit half CSRs, and aliased or hardwired
/// addresses are computed views. Constructed once per hart and owned
/// exclusively by its [`CpuState`](crate::core::cpu::CpuState).
#[derive(Debug, Clone)]
pub struct CsrBank {
    regs: BTreeMap<u16, Word>,
    mcycle: u64,
    minstret: u64,
    mtime: u64,
    mtimecmp: u64,
    mhartid: u32,
}

impl CsrBank {
    /// Creates a bank for hart 0 in the architectural reset state.
    pub fn new() -> Self {
        Self::with_hartid(0)
    }

    /// Creates a bank reporting the given `mhartid`, in the architectural
    /// reset state.
    pub fn with_hartid(mhartid: u32) -> Self {
        let mut bank = Self {
            regs: BTreeMap::new(),
            mcycle: 0,
            minstret: 0,
            mtime: 0,
            mtimecmp: u64::MAX,
            mhartid,
        };
        bank.reset();
        bank
    }

    /// Restores every defined CSR to its reset value.
    ///
    /// Reproduces the reset state the privileged specification requires:
    /// `mstatus.MIE = 0`, `mstatus.MPRV = 0`, `mstatush.MBE = 0`, `misa = 0`,
    /// `mcause = 0`, and the `A` field and `L` bit of every `pmpcfgN` cleared.
    /// Registers the specification leaves unspecified reset to legal values
    /// (zero, except `mtvec` and `mtimecmp`).
    pub fn reset(&mut self) {
        self.regs.clear();
        for addr in word_backed_addresses() {
            // The unreachable! doubles as the startup completeness check of
            // the storage list against the address table.
            let spec = csr_spec(addr)
                .unwrap_or_else(|| unreachable!("storage-backed CSR {addr:#05x} not in table"));
            let _ = self.regs.insert(addr, Word::new(spec.reset));
        }
        self.mcycle = 0;
        self.minstret = 0;
        self.mtime = 0;
        // No timer interrupt until the platform programs a deadline.
        self.mtimecmp = u64::MAX;
        trace!("CSR bank reset (hart {})", self.mhartid);
    }

    /// Returns true if a CSR is mapped at `addr`.
    pub fn defined(addr: u16) -> bool {
        csr_spec(addr).is_some()
    }

    /// Reads a CSR for inspection, bypassing execution-path semantics.
    ///
    /// This path performs no privilege check and never triggers the read side
    /// effects a CSR may mandate during instruction execution, so debuggers
    /// and tests can observe state without corrupting it.
    ///
    /// # Errors
    ///
    /// [`CsrError::UndefinedCsr`] if no register backs `addr`.
    pub fn explicit_read(&self, addr: u16) -> Result<Word, CsrError> {
        if csr_spec(addr).is_none() {
            return Err(CsrError::UndefinedCsr { addr });
        }
        Ok(self.read_raw(addr))
    }

    /// Reads a CSR on behalf of an executing instruction.
    ///
    /// Takes `&mut self` because execution-path reads are allowed to carry
    /// specification-mandated side effects; none of the currently modeled
    /// CSRs have any, but diagnostics must use [`CsrBank::explicit_read`]
    /// regardless.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address (in a 16-bit carrier).
    /// * `mode` - The privilege mode the access executes in.
    ///
    /// # Errors
    ///
    /// [`CsrError::PrivilegeViolation`] if `mode` is below the address's
    /// minimum level, [`CsrError::UndefinedCsr`] if unmapped.
    pub fn read(&mut self, addr: u16, mode: PrivilegeMode) -> Result<Word, CsrError> {
        let spec = csr_spec(addr).ok_or(CsrError::UndefinedCsr { addr })?;
        Self::check_privilege(addr, spec.min_privilege, mode)?;
        Ok(self.read_raw(addr))
    }

    /// Writes a CSR on behalf of an executing instruction.
    ///
    /// Only bits inside the address's write mask are updated; attempting to
    /// set a read-only field is not an error, the bits are silently preserved
    /// (software cannot force illegal field values, as in hardware).
    ///
    /// # Arguments
    ///
    /// * `addr` - The 12-bit CSR address.
    /// * `mode` - The privilege mode the access executes in.
    /// * `data` - The value to write (masked).
    ///
    /// # Errors
    ///
    /// [`CsrError::PrivilegeViolation`] if `mode` is insufficient,
    /// [`CsrError::WriteToReadOnly`] if the address encoding is read-only,
    /// [`CsrError::UndefinedCsr`] if unmapped.
    pub fn write(&mut self, addr: u16, mode: PrivilegeMode, data: Word) -> Result<(), CsrError> {
        let spec = csr_spec(addr).ok_or(CsrError::UndefinedCsr { addr })?;
        Self::check_privilege(addr, spec.min_privilege, mode)?;
        if is_read_only(addr) {
            return Err(CsrError::WriteToReadOnly { addr });
        }
        self.write_masked(addr, data, spec.write_mask);
        trace!("csr write {addr:#05x} <- {data}");
        Ok(())
    }

    /// Reads a CSR on behalf of trap or platform logic, bypassing the
    /// privilege gate.
    ///
    /// Internal accesses are always architecturally legal; the definedness
    /// check remains so a wrong address in the trap logic surfaces instead of
    /// reading garbage.
    ///
    /// # Errors
    ///
    /// [`CsrError::UndefinedCsr`] if no register backs `addr`.
    pub fn implicit_read(&self, addr: u16) -> Result<Word, CsrError> {
        self.explicit_read(addr)
    }

    /// Writes a CSR on behalf of trap or platform logic, bypassing the
    /// privilege gate and the read-only address rule.
    ///
    /// The write mask still applies, with one widening: the machine-level
    /// pending bits of `mip` (MSIP/MTIP/MEIP) are writable on this path,
    /// since posting and clearing those interrupts is exactly what platform
    /// logic does.
    ///
    /// # Errors
    ///
    /// [`CsrError::UndefinedCsr`] if no register backs `addr`.
    pub fn implicit_write(&mut self, addr: u16, data: Word) -> Result<(), CsrError> {
        let spec = csr_spec(addr).ok_or(CsrError::UndefinedCsr { addr })?;
        let mask = if addr == MIP {
            MIP_PLATFORM_MASK
        } else {
            spec.write_mask
        };
        self.write_masked(addr, data, mask);
        Ok(())
    }

    /// Merges `data` into the register under `mask` and stores the result.
    fn write_masked(&mut self, addr: u16, data: Word, mask: u32) {
        let old = self.read_raw(addr).as_u32();
        let merged = (old & !mask) | (data.as_u32() & mask);
        self.write_raw(addr, Word::new(merged));
    }

    fn check_privilege(
        addr: u16,
        required: PrivilegeMode,
        current: PrivilegeMode,
    ) -> Result<(), CsrError> {
        if current < required {
            return Err(CsrError::PrivilegeViolation {
                addr,
                required,
                current,
            });
        }
        Ok(())
    }

    /// Returns the architectural value at `addr`. Only called for defined
    /// addresses.
    fn read_raw(&self, addr: u16) -> Word {
        match addr {
            // Only some bits of mstatus are visible through sstatus.
            SSTATUS => Word::new(self.word(MSTATUS).as_u32() & SSTATUS_MASK),
            STVAL | MTVAL => Word::ZERO,
            MISA | MCOUNTEREN | MSTATUSH | MENVCFGH | MCOUNTINHIBIT => Word::ZERO,
            MHPMEVENT_START..=MHPMEVENT_END => Word::ZERO,
            MHPMCOUNTER_START..=MHPMCOUNTER_END | MHPMCOUNTERH_START..=MHPMCOUNTERH_END => {
                Word::ZERO
            }
            HPMCOUNTER_START..=HPMCOUNTER_END | HPMCOUNTERH_START..=HPMCOUNTERH_END => Word::ZERO,
            MCYCLE | CYCLE => low_half(self.mcycle),
            MCYCLEH | CYCLEH => high_half(self.mcycle),
            MINSTRET | INSTRET => low_half(self.minstret),
            MINSTRETH | INSTRETH => high_half(self.minstret),
            MTIME | TIME => low_half(self.mtime),
            MTIMEH | TIMEH => high_half(self.mtime),
            MTIMECMP => low_half(self.mtimecmp),
            MTIMECMPH => high_half(self.mtimecmp),
            MVENDORID | MARCHID | MIMPID | MCONFIGPTR => Word::ZERO,
            MHARTID => Word::new(self.mhartid),
            _ => self.word(addr),
        }
    }

    /// Stores a fully masked value at `addr`. Only called for defined
    /// addresses, with masking already applied.
    fn write_raw(&mut self, addr: u16, data: Word) {
        match addr {
            SSTATUS => {
                let mstatus = self.word(MSTATUS).as_u32();
                let merged = (mstatus & !SSTATUS_MASK) | (data.as_u32() & SSTATUS_MASK);
                let _ = self.regs.insert(MSTATUS, Word::new(merged));
            }
            // Hardwired views: the merge already preserved them bit-for-bit,
            // there is nothing to store.
            STVAL | MTVAL | MISA | MCOUNTEREN | MSTATUSH | MENVCFGH | MCOUNTINHIBIT => {}
            MHPMEVENT_START..=MHPMEVENT_END => {}
            MHPMCOUNTER_START..=MHPMCOUNTER_END | MHPMCOUNTERH_START..=MHPMCOUNTERH_END => {}
            CYCLE | TIME | INSTRET | CYCLEH | TIMEH | INSTRETH => {}
            HPMCOUNTER_START..=HPMCOUNTER_END | HPMCOUNTERH_START..=HPMCOUNTERH_END => {}
            MVENDORID | MARCHID | MIMPID | MHARTID | MCONFIGPTR => {}
            MCYCLE => self.mcycle = set_low_half(self.mcycle, data),
            MCYCLEH => self.mcycle = set_high_half(self.mcycle, data),
            MINSTRET => self.minstret = set_low_half(self.minstret, data),
            MINSTRETH => self.minstret = set_high_half(self.minstret, data),
            MTIME => self.mtime = set_low_half(self.mtime, data),
            MTIMEH => self.mtime = set_high_half(self.mtime, data),
            MTIMECMP => {
                self.mtimecmp = set_low_half(self.mtimecmp, data);
                self.clear_mtip();
            }
            MTIMECMPH => {
                self.mtimecmp = set_high_half(self.mtimecmp, data);
                self.clear_mtip();
            }
            _ => {
                debug_assert!(self.regs.contains_key(&addr));
                let _ = self.regs.insert(addr, data);
            }
        }
    }

    /// Advances the cycle counter by one.
    pub fn increment_cycle(&mut self) {
        self.mcycle = self.mcycle.wrapping_add(1);
    }

    /// Advances the retired-instruction counter by one.
    pub fn increment_instret(&mut self) {
        self.minstret = self.minstret.wrapping_add(1);
    }

    /// Returns the full 64-bit retired-instruction count.
    pub fn instret(&self) -> u64 {
        self.minstret
    }

    /// Returns the full 64-bit cycle count.
    pub fn cycle(&self) -> u64 {
        self.mcycle
    }

    /// Programming a new timer deadline retires the pending timer interrupt.
    fn clear_mtip(&mut self) {
        let mip = self.word(MIP).as_u32();
        let _ = self.regs.insert(MIP, Word::new(mip & !MIP_MTIP));
    }

    fn word(&self, addr: u16) -> Word {
        self.regs.get(&addr).copied().unwrap_or(Word::ZERO)
    }
}

impl Default for CsrBank {
    fn default() -> Self {
        Self::new()
    }
}

fn low_half(value: u64) -> Word {
    Word::new(value as u32)
}

fn high_half(value: u64) -> Word {
    Word::new((value >> 32) as u32)
}

fn set_low_half(value: u64, data: Word) -> u64 {
    (value & 0xFFFF_FFFF_0000_0000) | u64::from(data.as_u32())
}

fn set_high_half(value: u64, data: Word) -> u64 {
    (value & 0x0000_0000_FFFF_FFFF) | (u64::from(data.as_u32()) << 32)
}
