//! crypto/password.rs
//! Password strength scoring and generation.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::constants::password::{
    MAX_SCORE, MIN_GENERATED_LENGTH, MIN_LENGTH, SPECIAL_CHARS, STRONG_LENGTH,
};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3..=4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub valid: bool,
    pub score: u8,
    pub max_score: u8,
    pub strength: PasswordStrength,
    pub issues: Vec<String>,
}

/// Score a password against the six criteria: length >= 8, length >= 12,
/// uppercase, lowercase, digit, symbol. Only the 12-character criterion is
/// advisory; every other miss is reported in `issues`.
pub fn assess_password(password: &str) -> PasswordReport {
    if password.is_empty() {
        return PasswordReport {
            valid: false,
            score: 0,
            max_score: MAX_SCORE,
            strength: PasswordStrength::Weak,
            issues: vec!["Password is required".to_string()],
        };
    }

    let mut issues = Vec::new();
    let mut score = 0u8;
    let len = password.chars().count();

    let mut criterion = |met: bool, issue: Option<&str>| {
        if met {
            score += 1;
        } else if let Some(msg) = issue {
            issues.push(msg.to_string());
        }
    };

    criterion(len >= MIN_LENGTH, Some("Password should be at least 8 characters"));
    criterion(len >= STRONG_LENGTH, None);
    criterion(
        password.chars().any(char::is_uppercase),
        Some("Password should contain uppercase letters"),
    );
    criterion(
        password.chars().any(char::is_lowercase),
        Some("Password should contain lowercase letters"),
    );
    criterion(
        password.chars().any(|c| c.is_ascii_digit()),
        Some("Password should contain numbers"),
    );
    criterion(
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        Some("Password should contain special characters"),
    );

    PasswordReport {
        valid: issues.is_empty(),
        score,
        max_score: MAX_SCORE,
        strength: PasswordStrength::from_score(score),
        issues,
    }
}

/// Random password of `max(length, 12)` characters with at least one
/// lowercase letter, uppercase letter, digit and symbol.
pub fn generate_secure_password(length: usize) -> String {
    let length = length.max(MIN_GENERATED_LENGTH);
    let special = SPECIAL_CHARS.as_bytes();
    let all: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, special].concat();

    let mut rng = rand::thread_rng();
    let mut pick = |set: &[u8]| set[rng.gen_range(0..set.len())];

    let mut out = vec![pick(LOWERCASE), pick(UPPERCASE), pick(DIGITS), pick(special)];
    while out.len() < length {
        out.push(pick(&all[..]));
    }
    out.shuffle(&mut rand::thread_rng());

    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bands() {
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_score(6), PasswordStrength::Strong);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 11 chars, 19 bytes
        let r = assess_password("ééééééééA1!");
        assert!(r.issues.iter().all(|i| !i.contains("8 characters")));
    }
}
