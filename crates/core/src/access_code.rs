//! Session access codes.
//!
//! Codes are short, case-insensitive tokens participants type to join a
//! session. They are stored uppercase so lookups can normalize input the
//! same way.

use rand::Rng;

use crate::error::CoreError;

/// Length of server-generated codes.
pub const GENERATED_LENGTH: usize = 6;
pub const MIN_LENGTH: usize = 4;
/// Must not exceed the width enforced by `ck_live_sessions_access_code`.
pub const MAX_LENGTH: usize = 12;

/// Characters used for generated codes. Omits `0`, `O`, `1` and `I`, which
/// are easy to confuse when read off a projector.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a random access code of [`GENERATED_LENGTH`] characters.
pub fn generate() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Normalize user-supplied input: trim surrounding whitespace and uppercase.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Validate a normalized access code.
pub fn validate(code: &str) -> Result<(), CoreError> {
    let len = code.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Access code must be between {MIN_LENGTH} and {MAX_LENGTH} characters"
        )));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::Validation(
            "Access code may only contain letters and digits".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_valid() {
        for _ in 0..100 {
            let code = generate();
            assert_eq!(code.len(), GENERATED_LENGTH);
            assert!(validate(&code).is_ok(), "generated invalid code {code}");
            assert_eq!(normalize(&code), code);
        }
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  abc123 "), "ABC123");
    }

    #[test]
    fn length_bounds_enforced() {
        assert!(validate("ABC").is_err());
        assert!(validate("ABCD").is_ok());
        assert!(validate("ABCDEFGHJKLM").is_ok());
        assert!(validate("ABCDEFGHJKLMN").is_err());
    }

    #[test]
    fn punctuation_rejected() {
        assert!(validate("ABC-123").is_err());
        assert!(validate("ABC 12").is_err());
    }
}
