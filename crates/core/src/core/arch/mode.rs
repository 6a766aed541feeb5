//! RISC-V Privilege Modes.
//!
//! This module defines the privilege levels supported by the RV32 core.
//! It implements the following:
//! 1. **Mode Classification:** Definitions for User (U), Supervisor (S), and Machine (M) modes.
//! 2. **Conversion:** Mapping between the architectural 2-bit encoding and enum variants.
//! 3. **Observability:** Human-readable naming and display formatting.

/// RISC-V privilege mode levels.
///
/// The discriminants match the architectural 2-bit encoding, so privilege
/// comparisons ("is mode X sufficient for mode Y") are ordinary `Ord`
/// comparisons. Machine mode is the highest privilege level and the only
/// legal mode at reset. Encoding 0b10 is reserved by the architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// User mode (U-mode), the lowest privilege level, for application code.
    User = 0,

    /// Supervisor mode (S-mode), for operating system kernels.
    Supervisor = 1,

    /// Machine mode (M-mode), for firmware and low-level system control.
    Machine = 3,
}

impl PrivilegeMode {
    /// Converts the architectural 2-bit encoding to a privilege mode.
    ///
    /// # Panics
    ///
    /// Panics on the reserved encoding 0b10 and on values above 0b11. The
    /// architectural state in this crate never produces either, so seeing one
    /// means the caller handed over corrupt bits.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::User,
            1 => Self::Supervisor,
            3 => Self::Machine,
            _ => panic!("reserved privilege encoding {bits:#04b}"),
        }
    }

    /// Returns the architectural 2-bit encoding of this mode.
    pub fn to_bits(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the privilege mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Supervisor => "Supervisor",
            Self::Machine => "Machine",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
