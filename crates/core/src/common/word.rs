//! The RISC-V 32-bit word value type.
//!
//! `Word` wraps one 32-bit bit pattern and exposes two typed projections of it:
//! an unsigned view and a two's-complement signed view. Keeping the projection
//! explicit protects the rest of the core from accidental arithmetic shifts
//! where logical shifts are meant, and from silent sign conversion.

use std::fmt;

/// A 32-bit register value.
///
/// One bit pattern, two typed projections: [`Word::as_u32`] and [`Word::as_i32`]
/// reinterpret the same storage (never value-convert). Plain value semantics,
/// freely copied, no shared mutable state.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word(u32);

impl Word {
    /// The all-zero word.
    pub const ZERO: Self = Self(0);

    /// Constructs a word from an unsigned bit pattern.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Constructs a word from a signed value, reinterpreting its two's-complement
    /// bit pattern.
    #[inline]
    pub const fn from_signed(value: i32) -> Self {
        Self(value as u32)
    }

    /// Returns the unsigned projection of the stored bit pattern.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the signed projection of the stored bit pattern
    /// (two's-complement reinterpretation, not a value conversion).
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Extracts a single bit.
    ///
    /// # Arguments
    ///
    /// * `index` - Bit position, 0 is the least significant. Must be below 32.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 32`; an out-of-range bit position is a bug in the
    /// caller, not a recoverable condition.
    #[inline]
    pub fn bit(self, index: u32) -> u32 {
        assert!(index < 32, "bit index {index} out of range");
        (self.0 >> index) & 1
    }

    /// Extracts the inclusive bit range `[hi:lo]`, right-justified.
    ///
    /// # Arguments
    ///
    /// * `hi` - Top bit of the range (inclusive). Must be below 32.
    /// * `lo` - Bottom bit of the range (inclusive). Must not exceed `hi`.
    ///
    /// # Panics
    ///
    /// Panics on an empty or out-of-range bit range (programmer error).
    #[inline]
    pub fn bits(self, hi: u32, lo: u32) -> u32 {
        assert!(hi < 32 && hi >= lo, "bad bit range [{hi}:{lo}]");
        let width = hi - lo + 1;
        let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
        (self.0 >> lo) & mask
    }

    /// Replaces the inclusive bit range `[hi:lo]` with `value`, leaving all
    /// other bits unchanged.
    ///
    /// `value` is truncated to the field width (`hi - lo + 1` bits); supplying
    /// a wider value is not an error, the excess bits are dropped.
    ///
    /// # Panics
    ///
    /// Panics on an empty or out-of-range bit range (programmer error).
    #[inline]
    pub fn set_bits(&mut self, hi: u32, lo: u32, value: u32) {
        assert!(hi < 32 && hi >= lo, "bad bit range [{hi}:{lo}]");
        let width = hi - lo + 1;
        let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
        self.0 = (self.0 & !(mask << lo)) | ((value & mask) << lo);
    }

    /// Sign-extends the low `size` bits of this word up to 32 bits.
    ///
    /// # Arguments
    ///
    /// * `size` - Width of the original data, between 1 and 32 inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or exceeds 32 (programmer error).
    #[inline]
    pub fn sign_extend_from_size(self, size: u32) -> Self {
        assert!(size >= 1 && size <= 32, "bad sign-extension size {size}");
        let shift = 32 - size;
        Self(((self.0 << shift) as i32 >> shift) as u32)
    }

    /// Sign-extends from bit `index` upward, so that all bits above it equal it.
    ///
    /// Equivalent to `sign_extend_from_size(index + 1)`.
    #[inline]
    pub fn sign_extend_from_bit(self, index: u32) -> Self {
        self.sign_extend_from_size(index + 1)
    }

    /// Wrapping addition of two words (sign-agnostic, as in hardware).
    #[inline]
    pub const fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Wrapping subtraction of two words (sign-agnostic, as in hardware).
    #[inline]
    pub const fn wrapping_sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }
}

impl From<u32> for Word {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<i32> for Word {
    fn from(value: i32) -> Self {
        Self::from_signed(value)
    }
}

impl From<Word> for u32 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl std::ops::BitAnd for Word {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Word {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Word {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Word {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:#010x})", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
