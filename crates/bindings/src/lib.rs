//! C bindings for the remu RISC-V emulator core.
//!
//! This crate exposes the disassembler across a C ABI. It provides:
//! 1. **Disassembly:** [`disassemble`] converts a pre-decoded field record
//!    ([`RawInst`]) into a heap-allocated, NUL-terminated mnemonic string;
//!    [`disassemble_raw`] does the same from the raw 32-bit encoding.
//! 2. **Ownership transfer:** the returned pointer is owned by the caller and
//!    must be handed back to [`free_disassembly`] exactly once; the Rust side
//!    then reclaims the allocation.
//!
//! Disassembly is total, so the C side never has to handle a disassembly
//! error: unknown encodings come back as placeholder text.

use std::ffi::CString;

use libc::c_char;

use remu_core::isa::decode::format_of;
use remu_core::isa::disasm;
use remu_core::isa::instruction::Decoded;

/// Pre-decoded instruction fields crossing the C boundary.
///
/// Byte-sized register indices and function fields plus the 32-bit
/// immediate, as the embedding emulator's decode stage produces them.
/// Register indices use their low five bits; the function fields use their
/// low three, five, and seven bits; `opcode` is the full seven-bit opcode
/// field in a byte container.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawInst {
    /// Opcode field (bits 6-0 of the encoding).
    pub opcode: u8,
    /// Destination register index.
    pub rd: u8,
    /// First source register index.
    pub rs1: u8,
    /// Second source register index.
    pub rs2: u8,
    /// funct3 field.
    pub funct3: u8,
    /// funct5 field (atomic operation select; the high five bits of funct7).
    pub funct5: u8,
    /// funct7 field.
    pub funct7: u8,
    /// Immediate for the opcode's format, sign-extended into 32 bits
    /// (zero for R-type).
    pub imm: u32,
}

impl RawInst {
    /// Rebuilds the native decoded record from the field bytes.
    ///
    /// The six field bytes cover bits [31:25], [24:20], [19:15], [14:12],
    /// [11:7], and [6:0] of the encoding, so the raw word is reconstructed
    /// exactly when the fields came from a real decode.
    fn to_decoded(&self) -> Decoded {
        debug_assert_eq!(self.funct5 & 0x1F, (self.funct7 >> 2) & 0x1F);
        let opcode = u32::from(self.opcode) & 0x7F;
        let raw = (u32::from(self.funct7) & 0x7F) << 25
            | (u32::from(self.rs2) & 0x1F) << 20
            | (u32::from(self.rs1) & 0x1F) << 15
            | (u32::from(self.funct3) & 0x7) << 12
            | (u32::from(self.rd) & 0x1F) << 7
            | opcode;
        Decoded {
            raw,
            opcode,
            rd: usize::from(self.rd & 0x1F),
            rs1: usize::from(self.rs1 & 0x1F),
            rs2: usize::from(self.rs2 & 0x1F),
            funct3: u32::from(self.funct3) & 0x7,
            funct7: u32::from(self.funct7) & 0x7F,
            imm: self.imm as i32,
            format: format_of(opcode),
        }
    }
}

/// Hands a mnemonic string to the C side as an owned pointer.
fn into_owned_c_string(text: String) -> *mut c_char {
    // Mnemonic text is plain ASCII and cannot contain interior NULs, so the
    // conversion only fails if the disassembler itself is broken; an empty
    // string is the safe fallback either way.
    CString::new(text).unwrap_or_default().into_raw()
}

/// Disassembles a pre-decoded instruction record into a C string.
///
/// The returned string is allocated on the heap and ownership passes to the
/// caller; release it with [`free_disassembly`] when it is no longer needed.
/// Never returns null: unrecognised encodings produce placeholder text
/// rather than an error.
///
/// # Arguments
///
/// * `raw_inst` - The decoded instruction fields.
#[unsafe(no_mangle)]
pub extern "C" fn disassemble(raw_inst: &RawInst) -> *mut c_char {
    into_owned_c_string(disasm::disassemble(&raw_inst.to_decoded()))
}

/// Disassembles a raw 32-bit RISC-V instruction into a C string.
///
/// Variant of [`disassemble`] for callers that have not decoded the
/// instruction themselves. Same ownership contract: release the returned
/// pointer with [`free_disassembly`].
///
/// # Arguments
///
/// * `raw_inst` - The raw 32-bit instruction encoding.
#[unsafe(no_mangle)]
pub extern "C" fn disassemble_raw(raw_inst: u32) -> *mut c_char {
    into_owned_c_string(disasm::disassemble_raw(raw_inst))
}

/// Frees a string returned by [`disassemble`] or [`disassemble_raw`].
///
/// # Panics
///
/// Panics on a null pointer: passing one means the caller's ownership
/// tracking is already corrupt, and continuing would hide the bug.
///
/// # Safety
///
/// `disassembly` must be a pointer previously returned by one of the
/// disassembly entry points that has not been freed yet. Passing anything
/// else is undefined behavior.
#[unsafe(no_mangle)]
pub unsafe extern "C-unwind" fn free_disassembly(disassembly: *mut c_char) {
    assert!(
        !disassembly.is_null(),
        "attempted to free a null disassembly pointer"
    );
    // Retakes ownership of the allocation made at disassembly time; dropping
    // the CString releases it.
    drop(unsafe { CString::from_raw(disassembly) });
}
