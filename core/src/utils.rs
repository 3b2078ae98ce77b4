//! utils.rs
//! Bit-string helpers shared by the codec tiers.
//!
//! A bit string is a `Vec<u8>` whose elements are 0 or 1, most significant
//! bit of each source byte first.

/// Append the big-endian bit form of `byte`.
#[inline]
pub fn push_byte_bits(bits: &mut Vec<u8>, byte: u8) {
    for shift in (0..8).rev() {
        bits.push((byte >> shift) & 1);
    }
}

/// Fold up to 8 bits (MSB first) into a byte.
#[inline]
pub fn bits_to_byte(bits: &[u8]) -> u8 {
    debug_assert!(bits.len() <= 8);
    bits.iter().fold(0u8, |acc, &b| (acc << 1) | (b & 1))
}

/// Even-parity bit: 1 iff `byte` has an odd number of set bits.
#[inline]
pub const fn even_parity_bit(byte: u8) -> u8 {
    (byte.count_ones() & 1) as u8
}

/// Right-pad with zero bits until `bits.len()` is a multiple of `multiple`.
pub fn pad_bits_to_multiple(bits: &mut Vec<u8>, multiple: usize) {
    let rem = bits.len() % multiple;
    if rem != 0 {
        bits.resize(bits.len() + (multiple - rem), 0);
    }
}

/// Byte-wise XOR of two equal-length arrays.
#[inline]
pub fn xor_arrays<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut out = [0u8; N];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = x ^ y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_roundtrip_single_byte() {
        let mut bits = Vec::new();
        push_byte_bits(&mut bits, 0b0100_0001);
        assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(bits_to_byte(&bits), 0x41);
    }

    #[test]
    fn parity_counts_set_bits() {
        assert_eq!(even_parity_bit(0x00), 0);
        assert_eq!(even_parity_bit(0x41), 0);
        assert_eq!(even_parity_bit(0x43), 1);
        assert_eq!(even_parity_bit(0xFF), 0);
    }

    #[test]
    fn pad_to_multiple() {
        let mut bits = vec![1, 1];
        pad_bits_to_multiple(&mut bits, 3);
        assert_eq!(bits, vec![1, 1, 0]);
        pad_bits_to_multiple(&mut bits, 3);
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn xor_is_involutive() {
        let a = [0xAAu8; 4];
        let b = [0x0Fu8; 4];
        assert_eq!(xor_arrays(&xor_arrays(&a, &b), &b), a);
    }
}
