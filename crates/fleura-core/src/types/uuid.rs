//! UUID validation and normalization helpers.
//!
//! Entity identifiers arrive as raw strings from route parameters and admin
//! forms. Services call [`parse_uuid`] before any database lookup so that a
//! malformed identifier is rejected as a validation failure without ever
//! reaching the store. [`normalize_uuid`] is the permissive variant used to
//! round-trip form input; its result is not guaranteed to be a valid UUID.

use uuid::Uuid;

use crate::error::AppError;
use crate::result::AppResult;

/// Check whether a string matches the canonical 8-4-4-4-12 hexadecimal
/// UUID shape, case-insensitively. Pure, no side effects.
pub fn is_valid_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (i, &b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

/// Parse a string and re-encode it as a lowercase hyphenated UUID.
///
/// On parse failure the original input is returned unchanged, so callers
/// must not assume the result is a valid UUID. Lookup paths use the strict
/// [`parse_uuid`] instead.
pub fn normalize_uuid(s: &str) -> String {
    match Uuid::parse_str(s) {
        Ok(uuid) => uuid.as_hyphenated().to_string(),
        Err(_) => s.to_string(),
    }
}

/// Strictly parse an identifier, rejecting anything that is not in the
/// canonical 8-4-4-4-12 shape.
pub fn parse_uuid(s: &str) -> AppResult<Uuid> {
    if !is_valid_uuid(s) {
        return Err(AppError::validation(format!("Invalid identifier: {s}")));
    }
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid identifier: {s}")))
}

/// Generate a new random (version 4) UUID string.
pub fn generate_uuid() -> String {
    Uuid::new_v4().as_hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_is_valid_uuid_accepts_canonical_forms() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
        assert!(is_valid_uuid(&generate_uuid()));
    }

    #[test]
    fn test_is_valid_uuid_rejects_malformed_input() {
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-4466554400000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000g"));
        assert!(!is_valid_uuid("550e8400_e29b_41d4_a716_446655440000"));
    }

    #[test]
    fn test_normalize_uuid_lowercases_valid_input() {
        assert_eq!(
            normalize_uuid("550E8400-E29B-41D4-A716-446655440000"),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_normalize_uuid_is_idempotent_on_valid_input() {
        let raw = "550E8400-E29B-41D4-A716-446655440000";
        let once = normalize_uuid(raw);
        assert_eq!(normalize_uuid(&once), once);
    }

    #[test]
    fn test_normalize_uuid_passes_through_invalid_input() {
        assert_eq!(normalize_uuid("garbage"), "garbage");
        assert_eq!(normalize_uuid(""), "");
    }

    #[test]
    fn test_parse_uuid_rejects_malformed_with_validation_kind() {
        let err = parse_uuid("garbage").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_parse_uuid_accepts_generated_ids() {
        let raw = generate_uuid();
        let parsed = parse_uuid(&raw).expect("generated ids must parse");
        assert_eq!(parsed.as_hyphenated().to_string(), raw);
    }

    #[test]
    fn test_generate_uuid_is_valid_and_unique() {
        let a = generate_uuid();
        let b = generate_uuid();
        assert!(is_valid_uuid(&a));
        assert_ne!(a, b);
    }
}
