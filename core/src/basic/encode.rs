use crate::alphabet::Nucleotide;

/// Encode bytes, four symbols per byte.
///
/// `b"A"` (0b01_00_00_01) encodes to `"TAAT"`.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 4);
    for &byte in data {
        for shift in [6u8, 4, 2, 0] {
            out.push(Nucleotide::from_bits(byte >> shift).as_char());
        }
    }
    out
}

/// Encode an arbitrary bit string two bits at a time. A final lone bit is
/// right-padded with a zero before mapping.
pub fn encode_bits(bits: &[u8]) -> String {
    let mut out = String::with_capacity(bits.len().div_ceil(2));
    for pair in bits.chunks(2) {
        let hi = pair[0] & 1;
        let lo = pair.get(1).copied().unwrap_or(0) & 1;
        out.push(Nucleotide::from_bits((hi << 1) | lo).as_char());
    }
    out
}
