#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use dna_codec_core::constants::password::SPECIAL_CHARS;
    use dna_codec_core::crypto::{assess_password, generate_secure_password, security_info, PasswordStrength};

// # ✅ 1. Scoring

    #[test]
    fn strong_password() {
        let r = assess_password("TestPass123!");
        assert!(r.valid);
        assert_eq!(r.score, 6);
        assert_eq!(r.max_score, 6);
        assert_eq!(r.strength, PasswordStrength::Strong);
        assert!(r.issues.is_empty());
    }

    #[test]
    fn weak_password() {
        let r = assess_password("weak");
        assert!(!r.valid);
        assert_eq!(r.score, 1);
        assert_eq!(r.strength, PasswordStrength::Weak);
        assert_eq!(
            r.issues,
            vec![
                "Password should be at least 8 characters",
                "Password should contain uppercase letters",
                "Password should contain numbers",
                "Password should contain special characters",
            ]
        );
    }

    #[test]
    fn moderate_password_missing_symbol() {
        let r = assess_password("Password1");
        assert_eq!(r.score, 4);
        assert_eq!(r.strength, PasswordStrength::Moderate);
        assert!(!r.valid);
        assert_eq!(r.issues, vec!["Password should contain special characters"]);
    }

    #[test]
    fn twelve_characters_is_advisory() {
        // valid without the length bonus
        let r = assess_password("Pass123!");
        assert!(r.valid);
        assert_eq!(r.score, 5);
        assert_eq!(r.strength, PasswordStrength::Strong);
    }

    #[test]
    fn length_alone_scores_two() {
        // '~' is outside the symbol set
        let r = assess_password("~~~~~~~~~~~~");
        assert_eq!(r.score, 2);
        assert_eq!(r.strength, PasswordStrength::Weak);
        assert!(!r.valid);
        assert_eq!(r.issues.len(), 4);
    }

    #[test]
    fn ten_character_mixed_password() {
        let r = assess_password("Password1!");
        assert_eq!(r.score, 5);
        assert_eq!(r.strength, PasswordStrength::Strong);
        assert!(r.valid);
        assert!(r.issues.is_empty());
    }

    #[test]
    fn empty_password() {
        let r = assess_password("");
        assert!(!r.valid);
        assert_eq!(r.score, 0);
        assert_eq!(r.strength, PasswordStrength::Weak);
        assert_eq!(r.issues, vec!["Password is required"]);
    }

    #[test]
    fn report_serializes() {
        let json = serde_json::to_string(&assess_password("TestPass123!")).unwrap();
        assert!(json.contains("\"strength\":\"Strong\""));
        assert!(json.contains("\"max_score\":6"));
    }

// # ✅ 2. Generation

    #[test]
    fn generated_length_has_floor() {
        assert_eq!(generate_secure_password(4).chars().count(), 12);
        assert_eq!(generate_secure_password(20).chars().count(), 20);
    }

    #[test]
    fn security_info_matches_constants() {
        let info = security_info();
        assert_eq!(info.encryption_algorithm, "AES-256-CBC");
        assert_eq!(info.key_derivation, "PBKDF2-HMAC-SHA256");
        assert_eq!(info.pbkdf2_iterations, 100_000);
        assert_eq!((info.key_size_bits, info.iv_size_bits, info.salt_size_bits), (256, 128, 128));
        assert_eq!(info.padding_scheme, "PKCS7");
    }

    proptest! {
        #[test]
        fn prop_generated_passwords_are_strong(len in 0usize..48) {
            let pw = generate_secure_password(len);
            prop_assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
            prop_assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert!(pw.chars().any(|c| c.is_ascii_digit()));
            prop_assert!(pw.chars().any(|c| SPECIAL_CHARS.contains(c)));

            let r = assess_password(&pw);
            prop_assert!(r.valid);
            prop_assert_eq!(r.strength, PasswordStrength::Strong);
        }
    }
}
