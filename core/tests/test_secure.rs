// Password envelope tier. One test runs the full 100k-iteration KDF; the
// rest use a reduced count through `SecureOptions` to keep the suite quick.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use dna_codec_core::basic;
    use dna_codec_core::codec::SequenceCodec;
    use dna_codec_core::config::{DecodeMode, SecureOptions};
    use dna_codec_core::constants::markers::{START_MARKER, STOP_MARKER};
    use dna_codec_core::crypto::{derive_key, encrypt_cbc, Envelope};
    use dna_codec_core::framing::{strip_markers, wrap_markers};
    use dna_codec_core::secure::{secure_decode, secure_encode, SecureCodec, SecureEnvelopeError};
    use dna_codec_core::types::DnaCodecError;

    const FAST_ITERATIONS: u32 = 1_000;

    fn fast(password: &str) -> SecureCodec {
        SecureCodec::new(password, SecureOptions::default().with_kdf_iterations(FAST_ITERATIONS))
    }

    /// Wrong keys under CBC without a MAC almost always fail the padding
    /// check; when they do not, the output must still differ.
    fn assert_not_opened(result: Result<Vec<u8>, SecureEnvelopeError>, plaintext: &[u8]) {
        match result {
            Err(e) => assert_eq!(e, SecureEnvelopeError::DecodingFailed),
            Ok(p) => assert_ne!(p, plaintext),
        }
    }

// # ✅ 1. Full-strength roundtrip

    #[test]
    fn default_iterations_roundtrip() {
        let seq = secure_encode(b"Hello, World!", "TestPass123!", true).unwrap();
        assert!(seq.starts_with(START_MARKER));
        assert!(seq.ends_with(STOP_MARKER));
        assert!(seq.bytes().all(|b| b"ATCG".contains(&b)));
        assert_eq!(secure_decode(&seq, "TestPass123!", true).unwrap(), b"Hello, World!");
        // error-correction flag does not change the format
        assert_eq!(secure_decode(&seq, "TestPass123!", false).unwrap(), b"Hello, World!");
    }

// # ✅ 2. Layering: markers -> basic -> base64 -> envelope

    #[test]
    fn layers_are_inspectable() {
        let seq = fast("pw").encode_sequence(b"layers").unwrap();
        let text = basic::decode(strip_markers(&seq));
        let env = Envelope::from_base64(&text).unwrap();
        assert_eq!(env.ciphertext.len(), 16);
    }

    #[test]
    fn hand_built_envelope_opens() {
        let salt = [7u8; 16];
        let iv = [8u8; 16];
        let key = derive_key(b"pw", &salt, FAST_ITERATIONS);
        let ct = encrypt_cbc(&key, &iv, b"by hand").unwrap();
        let b64 = Envelope::new(salt, iv, ct).to_base64().unwrap();
        let seq = wrap_markers(&basic::encode(b64.as_bytes()));

        assert_eq!(fast("pw").decode_sequence(&seq).unwrap(), b"by hand");
    }

// # ✅ 3. Password handling

    #[test]
    fn empty_password_rejected_first() {
        assert_eq!(secure_encode(b"x", "", true), Err(SecureEnvelopeError::PasswordRequired));
        assert_eq!(secure_encode(b"", "", true), Err(SecureEnvelopeError::PasswordRequired));
        assert_eq!(secure_decode("", "", true), Err(SecureEnvelopeError::PasswordRequired));
        assert_eq!(secure_decode("ACGT", "", true), Err(SecureEnvelopeError::PasswordRequired));
    }

    #[test]
    fn wrong_password_does_not_open() {
        let seq = fast("right horse").encode_sequence(b"battery staple").unwrap();
        assert_not_opened(fast("wrong horse").decode_sequence(&seq), b"battery staple");
    }

    #[test]
    fn mismatched_iterations_do_not_open() {
        let seq = fast("pw").encode_sequence(b"iterations").unwrap();
        let other = SecureCodec::new("pw", SecureOptions::default().with_kdf_iterations(FAST_ITERATIONS + 1));
        assert_not_opened(other.decode_sequence(&seq), b"iterations");
    }

    #[test]
    fn zero_iterations_rejected() {
        let codec = SecureCodec::new("pw", SecureOptions::default().with_kdf_iterations(0));
        assert!(matches!(codec.encode_sequence(b"x"), Err(SecureEnvelopeError::InvalidOptions(_))));
        assert!(matches!(codec.decode_sequence("ACGT"), Err(SecureEnvelopeError::InvalidOptions(_))));
        // the password check still comes first
        let no_pw = SecureCodec::new("", SecureOptions::default().with_kdf_iterations(0));
        assert_eq!(no_pw.encode_sequence(b"x"), Err(SecureEnvelopeError::PasswordRequired));
    }

    #[test]
    fn debug_redacts_password() {
        let dbg = format!("{:?}", fast("hunter2"));
        assert!(!dbg.contains("hunter2"));
    }

// # ✅ 4. Empty input

    #[test]
    fn empty_plaintext_and_sequence() {
        assert_eq!(fast("pw").encode_sequence(b"").unwrap(), "");
        assert!(fast("pw").decode_sequence("").unwrap().is_empty());
    }

// # ✅ 5. Opaque failures

    #[test]
    fn malformed_sequences_collapse() {
        let codec = fast("pw");
        for bad in ["ACGT", "ATCGATCGCGATATCG", "NNNN", "ATCGATCGTAATCGATATCG"] {
            let err = codec.decode_sequence(bad).unwrap_err();
            assert_eq!(err, SecureEnvelopeError::DecodingFailed);
            assert_eq!(err.to_string(), "decoding failed");
        }
    }

    #[test]
    fn truncated_sequence_collapses() {
        let codec = fast("pw");
        let seq = codec.encode_sequence(b"truncate me").unwrap();
        let cut = &seq[..seq.len() - 40];
        assert_eq!(codec.decode_sequence(cut), Err(SecureEnvelopeError::DecodingFailed));
    }

// # ✅ 6. Fresh salt and IV per call

    #[test]
    fn encodings_are_randomized() {
        let codec = fast("pw");
        let a = codec.encode_sequence(b"same").unwrap();
        let b = codec.encode_sequence(b"same").unwrap();
        assert_ne!(a, b);
        assert_eq!(codec.decode_sequence(&a).unwrap(), codec.decode_sequence(&b).unwrap());
    }

// # ✅ 7. Decode policy applies to the inner basic layer

    #[test]
    fn foreign_symbol_lenient_vs_strict() {
        let lenient = fast("pw");
        let seq = lenient.encode_sequence(b"noise").unwrap();
        let mid = seq.len() / 2;
        let noisy = format!("{}N{}", &seq[..mid], &seq[mid..]);

        assert_eq!(lenient.decode_sequence(&noisy).unwrap(), b"noise");

        let strict = SecureCodec::new(
            "pw",
            SecureOptions { mode: DecodeMode::Strict, ..SecureOptions::default() }.with_kdf_iterations(FAST_ITERATIONS),
        );
        assert_eq!(strict.decode_sequence(&noisy), Err(SecureEnvelopeError::DecodingFailed));
        assert_eq!(strict.decode_sequence(&seq).unwrap(), b"noise");
    }

    #[test]
    fn surrounding_whitespace_lenient_vs_strict() {
        let lenient = fast("pw");
        let seq = lenient.encode_sequence(b"hello").unwrap();

        assert_eq!(lenient.decode_sequence(&format!("{seq}\n")).unwrap(), b"hello");
        assert_eq!(lenient.decode_sequence(&format!(" {seq}")).unwrap(), b"hello");
        assert_eq!(lenient.decode_sequence(&format!("\t{seq}\r\n")).unwrap(), b"hello");

        let strict = SecureCodec::new(
            "pw",
            SecureOptions { mode: DecodeMode::Strict, ..SecureOptions::default() }.with_kdf_iterations(FAST_ITERATIONS),
        );
        assert_eq!(strict.decode_sequence(&format!("{seq}\n")), Err(SecureEnvelopeError::DecodingFailed));
    }

    #[test]
    fn lowercase_sequence_decodes() {
        let codec = fast("pw");
        let seq = codec.encode_sequence(b"case").unwrap().to_ascii_lowercase();
        assert_eq!(codec.decode_sequence(&seq).unwrap(), b"case");
    }

// # ✅ 8. Umbrella error through the trait

    #[test]
    fn trait_maps_into_umbrella() {
        let codec = SecureCodec::with_password("");
        match SequenceCodec::encode(&codec, b"x") {
            Err(DnaCodecError::Secure(SecureEnvelopeError::PasswordRequired)) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 1..128)) {
            let codec = SecureCodec::new("prop", SecureOptions::default().with_kdf_iterations(1));
            let seq = codec.encode_sequence(&data).unwrap();
            prop_assert_eq!(codec.decode_sequence(&seq).unwrap(), data);
        }
    }
}
