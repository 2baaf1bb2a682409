//! Canonical naming rules.
//!
//! Names are the join key between stocked ingredients, recipe requirements and
//! the collections that own them, so every name goes through the same
//! canonical form: first character upper-cased, the remainder lower-cased.

use crate::error::{DomainError, DomainResult};

/// Canonicalize `raw`: first character upper-cased, the rest lower-cased.
///
/// Does not trim; callers validate surrounding whitespace first.
pub fn canonicalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validate an entity name and return its canonical form.
///
/// Rejects blank names and names with leading or trailing whitespace.
pub fn validate_name(raw: &str, what: &str) -> DomainResult<String> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(format!("{what} cannot be blank")));
    }
    if raw.starts_with(char::is_whitespace) || raw.ends_with(char::is_whitespace) {
        return Err(DomainError::validation(format!(
            "{what} cannot start or end with whitespace"
        )));
    }
    Ok(canonicalize(raw))
}

/// Validate free text (descriptions, instructions) and return its canonical form.
pub fn validate_text(raw: &str, what: &str) -> DomainResult<String> {
    if raw.trim().is_empty() {
        return Err(DomainError::validation(format!("{what} cannot be blank")));
    }
    Ok(canonicalize(raw))
}

/// Validate a key used to look up an entity by name.
pub fn validate_lookup_key(name: &str, what: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{what} cannot be blank or empty"
        )));
    }
    Ok(())
}
