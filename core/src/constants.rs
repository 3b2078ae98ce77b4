//! Wire constants shared by every codec tier.
//!
//! Everything in this file is part of the interoperable format: changing any
//! value breaks decoding of sequences produced by other implementations.

/// Framing literals (shared by nanopore and secure tiers).
pub mod markers {
    /// Start marker prepended to every framed sequence.
    pub const START_MARKER: &str = "ATCGATCG";
    /// Stop marker appended to every framed sequence.
    pub const STOP_MARKER: &str = "CGATATCG";
    /// Delimiter that separates the padding block from the payload.
    pub const PADDING_DELIMITER: &str = "TACGTA";
    /// Constraint-safe pattern repeated to build a padding block.
    pub const PADDING_PATTERN: &str = "ATCATGACTACG";
    /// Smallest padding block ever emitted.
    pub const MIN_PADDING_LEN: usize = 6;
    /// Padding length is payload_len / PADDING_RATIO (before the minimum applies).
    pub const PADDING_RATIO: usize = 10;
}

/// Nanopore tier tables and thresholds.
pub mod nanopore {
    /// 3-bit value (index) -> 3-symbol codeword. No codeword holds a homopolymer.
    pub const CODEWORDS: [&str; 8] = [
        "ATC", // 000
        "ATG", // 001
        "ACT", // 010
        "ACG", // 011
        "TAG", // 100
        "TAC", // 101
        "TCG", // 110
        "TCA", // 111
    ];

    pub const BITS_PER_CODEWORD: usize = 3;
    pub const SYMBOLS_PER_CODEWORD: usize = 3;

    /// 8 data bits + 1 even-parity bit.
    pub const BITS_PER_CHUNK: usize = 9;

    /// Triple repetition.
    pub const ERROR_CORRECTION_REPEATS: usize = 3;

    /// GC window that triggers padding repair when missed (percent).
    pub const OPTIMAL_GC_MIN: f64 = 40.0;
    pub const OPTIMAL_GC_MAX: f64 = 60.0;

    /// GC window enforced by post-repair validation (percent).
    pub const SAFE_GC_MIN: f64 = 20.0;
    pub const SAFE_GC_MAX: f64 = 80.0;

    /// Alternating repeats that confuse basecallers.
    pub const BANNED_REPEATS: [&str; 2] = ["ATATAT", "GCGCGC"];
}

/// Secure envelope parameters.
pub mod secure {
    /// AES-256 key.
    pub const KEY_SIZE: usize = 32;
    /// AES block-sized CBC IV.
    pub const IV_SIZE: usize = 16;
    /// PBKDF2 salt.
    pub const SALT_SIZE: usize = 16;
    /// AES block size (PKCS#7 granularity).
    pub const BLOCK_SIZE: usize = 16;
    pub const PBKDF2_ITERATIONS: u32 = 100_000;

    /// Width of the big-endian length prefix in front of each envelope field.
    pub const SALT_LEN_PREFIX: usize = 2;
    pub const IV_LEN_PREFIX: usize = 2;
    pub const CIPHERTEXT_LEN_PREFIX: usize = 4;
}

/// Password policy.
pub mod password {
    pub const MIN_LENGTH: usize = 8;
    pub const STRONG_LENGTH: usize = 12;
    pub const MAX_SCORE: u8 = 6;
    pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
    /// Generated passwords are never shorter than this.
    pub const MIN_GENERATED_LENGTH: usize = 12;
    pub const DEFAULT_GENERATED_LENGTH: usize = 16;
}
