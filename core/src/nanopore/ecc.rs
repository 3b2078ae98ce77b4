use crate::constants::nanopore::ERROR_CORRECTION_REPEATS;
use crate::utils::{even_parity_bit, push_byte_bits};

/// Each byte as 8 data bits followed by its even-parity bit.
pub fn bytes_to_parity_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 9);
    for &byte in data {
        push_byte_bits(&mut bits, byte);
        bits.push(even_parity_bit(byte));
    }
    bits
}

/// Repeat every bit `ERROR_CORRECTION_REPEATS` times.
pub fn repeat_bits(bits: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bits.len() * ERROR_CORRECTION_REPEATS);
    for &b in bits {
        out.extend(std::iter::repeat(b).take(ERROR_CORRECTION_REPEATS));
    }
    out
}

/// Majority vote over consecutive groups. A short final group is treated as
/// if padded with zeros.
pub fn majority_vote(bits: &[u8]) -> Vec<u8> {
    bits.chunks(ERROR_CORRECTION_REPEATS)
        .map(|group| {
            let ones = group.iter().filter(|&&b| b == 1).count();
            u8::from(ones * 2 > ERROR_CORRECTION_REPEATS)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_chunk_layout() {
        // 0x43 has three set bits -> parity 1
        assert_eq!(bytes_to_parity_bits(&[0x43]), vec![0, 1, 0, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn vote_corrects_single_flip() {
        let mut bits = repeat_bits(&[1, 0, 1]);
        bits[0] ^= 1;
        bits[4] ^= 1;
        assert_eq!(majority_vote(&bits), vec![1, 0, 1]);
    }

    #[test]
    fn vote_follows_two_flips() {
        let mut bits = repeat_bits(&[1]);
        bits[0] ^= 1;
        bits[2] ^= 1;
        assert_eq!(majority_vote(&bits), vec![0]);
    }

    #[test]
    fn vote_short_group_zero_padded() {
        assert_eq!(majority_vote(&[1, 1, 1, 1]), vec![1, 0]);
        assert_eq!(majority_vote(&[0, 0, 0, 1, 1]), vec![0, 1]);
    }
}
