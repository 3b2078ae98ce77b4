// ## src/stats.rs

//! stats.rs
//!
//! Composition statistics and a coarse nanopore risk assessment.
//!
//! Design notes:
//! - Counting is case-insensitive; `length` counts every byte, so foreign
//!   characters dilute `gc_content` the same way they do in the encoders.
//! - Risk: +2 when GC misses the optimal band, +1 per homopolymer run.
//!   The acceptance threshold grows from 3 to 5 over the first 1000 symbols.

use serde::Serialize;

use crate::alphabet::Nucleotide;
use crate::constants::nanopore::{OPTIMAL_GC_MAX, OPTIMAL_GC_MIN};

const BASE_RISK_THRESHOLD: f64 = 3.0;
const LENGTH_RISK_ALLOWANCE: f64 = 2.0;
const LENGTH_NORMALIZER: f64 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseCounts {
    pub a: usize,
    pub t: usize,
    pub c: usize,
    pub g: usize,
}

impl BaseCounts {
    pub fn from_sequence(sequence: &str) -> Self {
        let mut counts = Self::default();
        for n in sequence.bytes().filter_map(Nucleotide::from_ascii) {
            match n {
                Nucleotide::A => counts.a += 1,
                Nucleotide::T => counts.t += 1,
                Nucleotide::C => counts.c += 1,
                Nucleotide::G => counts.g += 1,
            }
        }
        counts
    }

    /// GC percentage relative to `total` (0 when `total` is 0).
    pub fn gc_content(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.c + self.g) as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceStatistics {
    pub length: usize,
    pub bases: BaseCounts,
    pub gc_content: f64,
}

impl SequenceStatistics {
    pub fn new(sequence: &str) -> Self {
        let length = sequence.len();
        let bases = BaseCounts::from_sequence(sequence);
        Self { length, bases, gc_content: bases.gc_content(length) }
    }
}

/// Run of two or more identical symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomopolymerRun {
    pub base: char,
    pub length: usize,
    pub start: usize,
}

/// All homopolymer runs (length >= 2), in order of position.
pub fn homopolymer_runs(sequence: &str) -> Vec<HomopolymerRun> {
    let raw = sequence.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < raw.len() {
        let Some(n) = Nucleotide::from_ascii(raw[i]) else {
            i += 1;
            continue;
        };
        let mut j = i + 1;
        while j < raw.len() && Nucleotide::from_ascii(raw[j]) == Some(n) {
            j += 1;
        }
        if j - i > 1 {
            runs.push(HomopolymerRun { base: n.as_char(), length: j - i, start: i });
        }
        i = j;
    }
    runs
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NanoporeStats {
    pub length: usize,
    pub bases: BaseCounts,
    /// Percent, rounded to two decimals.
    pub gc_content: f64,
    pub homopolymers: Vec<HomopolymerRun>,
    pub risk_score: u32,
    pub warnings: Vec<String>,
    pub nanopore_optimized: bool,
}

impl NanoporeStats {
    /// `None` for an empty sequence.
    pub fn assess(sequence: &str) -> Option<Self> {
        if sequence.is_empty() {
            return None;
        }

        let base = SequenceStatistics::new(sequence);
        let gc = base.gc_content;
        let homopolymers = homopolymer_runs(sequence);

        let mut risk_score = 0u32;
        let mut warnings = Vec::new();

        if !(OPTIMAL_GC_MIN..=OPTIMAL_GC_MAX).contains(&gc) {
            risk_score += 2;
            warnings.push(format!("GC content {gc:.1}% outside optimal range"));
        }
        if !homopolymers.is_empty() {
            risk_score += homopolymers.len() as u32;
            warnings.push(format!("{} homopolymer runs detected", homopolymers.len()));
        }

        let length_factor = (base.length as f64 / LENGTH_NORMALIZER).min(1.0);
        let threshold = BASE_RISK_THRESHOLD + length_factor * LENGTH_RISK_ALLOWANCE;

        Some(Self {
            length: base.length,
            bases: base.bases,
            gc_content: (gc * 100.0).round() / 100.0,
            homopolymers,
            risk_score,
            warnings,
            nanopore_optimized: (risk_score as f64) < threshold,
        })
    }
}
