use std::fmt;
use thiserror::Error;

use crate::config::NanoporeOptions;

bitflags::bitflags! {
    /// Constraint checks that a sequence failed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConstraintViolations: u8 {
        /// Two or more identical adjacent symbols.
        const HOMOPOLYMER     = 0b0000_0001;
        /// Contains `ATATAT`.
        const ALTERNATING_AT  = 0b0000_0010;
        /// Contains `GCGCGC`.
        const ALTERNATING_GC  = 0b0000_0100;
        /// GC content outside the checked band.
        const GC_OUT_OF_RANGE = 0b0000_1000;
    }
}

impl Default for ConstraintViolations {
    fn default() -> Self {
        Self::empty()
    }
}

/// Verdict of a constraint check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstraintReport {
    pub violations: ConstraintViolations,
    /// GC content of the checked sequence, percent.
    pub gc_content: f64,
}

impl ConstraintReport {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ConstraintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gc={:.1}%", self.gc_content)?;
        if self.violations.is_empty() {
            return write!(f, ", ok");
        }
        let names: Vec<&str> = self.violations.iter_names().map(|(name, _)| name).collect();
        write!(f, ", violations=[{}]", names.join(", "))
    }
}

/// Encoder output with the diagnostics the plain `encode` discards.
#[derive(Debug, Clone, PartialEq)]
pub struct NanoporeEncoding {
    pub sequence: String,
    /// Padding repair was applied.
    pub padded: bool,
    /// Post-repair validation of the framed sequence.
    pub verdict: ConstraintReport,
    /// Delimiter extraction on this output recovers the coded payload.
    pub framing_intact: bool,
}

/// Nanopore codec handle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NanoporeCodec {
    pub options: NanoporeOptions,
}

impl NanoporeCodec {
    pub const fn new(options: NanoporeOptions) -> Self {
        Self { options }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NanoporeCodecError {
    #[error("sequence violates constraints after repair ({0})")]
    ConstraintViolation(ConstraintReport),

    #[error("padding block collides with the delimiter; payload would be mis-framed")]
    FramingCollision,

    #[error("unknown triplet {triplet:?} at symbol {position}")]
    InvalidTriplet { triplet: String, position: usize },

    #[error("{count} trailing symbols do not form a triplet")]
    TrailingSymbols { count: usize },

    #[error("parity mismatch in byte {index}")]
    ParityMismatch { index: usize },

    #[error("{bits} trailing bits do not form a parity chunk")]
    TrailingBits { bits: usize },
}
