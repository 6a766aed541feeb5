//! Emulator configuration.
//!
//! This module defines the knobs a host supplies when constructing harts.
//! It performs the following:
//! 1. **Definition:** The [`Config`] struct with defaults matching the
//!    architectural reset state.
//! 2. **Deserialization:** Loading a configuration from a JSON document.

use serde::Deserialize;

/// Host-supplied construction parameters for a hart.
///
/// Every field has a default, so an empty JSON object (or
/// [`Config::default`]) yields a standard single-hart setup starting at
/// address zero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the program counter holds at reset.
    pub reset_pc: u32,

    /// Hardware thread ID reported through the `mhartid` CSR.
    pub mhartid: u32,

    /// Emit a `tracing` event for every retired instruction.
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_pc: 0,
            mhartid: 0,
            trace: false,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Unknown fields are rejected so a typo in a config file fails loudly
    /// instead of silently using a default.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the document is not
    /// valid JSON or does not match the schema.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
