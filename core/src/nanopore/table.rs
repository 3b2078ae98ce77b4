use crate::constants::nanopore::{CODEWORDS, SYMBOLS_PER_CODEWORD};

/// Codeword for the low three bits of `value`.
#[inline]
pub fn codeword(value: u8) -> &'static str {
    CODEWORDS[(value & 0b111) as usize]
}

/// Inverse lookup of one uppercase triplet.
pub fn codeword_value(triplet: &[u8]) -> Option<u8> {
    if triplet.len() != SYMBOLS_PER_CODEWORD {
        return None;
    }
    CODEWORDS
        .iter()
        .position(|cw| cw.as_bytes() == triplet)
        .map(|i| i as u8)
}

/// Map a bit string (length a multiple of 3) to codewords, MSB first.
pub fn bits_to_codewords(bits: &[u8]) -> String {
    let mut out = String::with_capacity(bits.len());
    for triple in bits.chunks_exact(3) {
        let value = (triple[0] << 2) | (triple[1] << 1) | triple[2];
        out.push_str(codeword(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_bijective() {
        for v in 0u8..8 {
            assert_eq!(codeword_value(codeword(v).as_bytes()), Some(v));
        }
        let mut sorted = CODEWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), CODEWORDS.len());
    }

    #[test]
    fn codewords_hold_no_homopolymer() {
        for cw in CODEWORDS {
            let b = cw.as_bytes();
            assert!(b.windows(2).all(|w| w[0] != w[1]), "{cw}");
        }
    }

    #[test]
    fn unknown_triplets() {
        assert_eq!(codeword_value(b"GGG"), None);
        assert_eq!(codeword_value(b"atc"), None);
        assert_eq!(codeword_value(b"AT"), None);
    }
}
