//! alphabet.rs
//! The four-symbol alphabet and its 2-bit code.
//!
//! Design:
//! - Discriminants ARE the wire code (00=A, 01=T, 10=C, 11=G).
//! - Input is case-insensitive; output is always uppercase.

use std::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// One symbol of a sequence.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Nucleotide {
    A = 0b00,
    T = 0b01,
    C = 0b10,
    G = 0b11,
}

impl Nucleotide {
    /// All symbols in code order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

    /// Symbol for the low two bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Nucleotide::A,
            0b01 => Nucleotide::T,
            0b10 => Nucleotide::C,
            _ => Nucleotide::G,
        }
    }

    /// 2-bit code of this symbol.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
        }
    }

    /// Case-insensitive parse of one ASCII byte.
    #[inline]
    pub const fn from_ascii(b: u8) -> Option<Self> {
        match b {
            b'A' | b'a' => Some(Nucleotide::A),
            b'T' | b't' => Some(Nucleotide::T),
            b'C' | b'c' => Some(Nucleotide::C),
            b'G' | b'g' => Some(Nucleotide::G),
            _ => None,
        }
    }

    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Canonical uppercase form of a symbol sequence. Non-ASCII-letter content is
/// left untouched so that later stages can decide how to treat it.
pub fn canonicalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

/// GC fraction of `sequence` in percent, counted over all characters
/// (0 for an empty sequence).
pub fn gc_content_percent(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .bytes()
        .filter(|&b| Nucleotide::from_ascii(b).map_or(false, Nucleotide::is_gc))
        .count();
    gc as f64 / sequence.len() as f64 * 100.0
}
