use crate::alphabet::{gc_content_percent, Nucleotide};
use crate::constants::nanopore::{
    BANNED_REPEATS, OPTIMAL_GC_MAX, OPTIMAL_GC_MIN, SAFE_GC_MAX, SAFE_GC_MIN,
};
use crate::nanopore::types::{ConstraintReport, ConstraintViolations};

/// Banned-pattern flags for `sequence` (uppercase expected).
pub fn banned_pattern_flags(sequence: &str) -> ConstraintViolations {
    let mut flags = ConstraintViolations::empty();

    let homopolymer = sequence
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == w[1] && Nucleotide::from_ascii(w[0]).is_some());
    flags.set(ConstraintViolations::HOMOPOLYMER, homopolymer);
    flags.set(ConstraintViolations::ALTERNATING_AT, sequence.contains(BANNED_REPEATS[0]));
    flags.set(ConstraintViolations::ALTERNATING_GC, sequence.contains(BANNED_REPEATS[1]));
    flags
}

#[inline]
pub fn has_banned_patterns(sequence: &str) -> bool {
    !banned_pattern_flags(sequence).is_empty()
}

/// GC content inside `[min, max]` percent, inclusive.
#[inline]
pub fn is_gc_balanced(sequence: &str, min: f64, max: f64) -> bool {
    let gc = gc_content_percent(sequence);
    (min..=max).contains(&gc)
}

fn check(sequence: &str, min: f64, max: f64) -> ConstraintReport {
    let gc_content = gc_content_percent(sequence);
    let mut violations = banned_pattern_flags(sequence);
    violations.set(ConstraintViolations::GC_OUT_OF_RANGE, !(min..=max).contains(&gc_content));
    ConstraintReport { violations, gc_content }
}

/// Pre-repair check against the optimal GC band; any violation triggers padding.
pub fn check_payload(sequence: &str) -> ConstraintReport {
    check(sequence, OPTIMAL_GC_MIN, OPTIMAL_GC_MAX)
}

/// Post-repair validation of a framed sequence against the safe GC band.
pub fn validate_sequence(sequence: &str) -> ConstraintReport {
    check(sequence, SAFE_GC_MIN, SAFE_GC_MAX)
}
