//! Page content addressing rules.
//!
//! Page slugs and section keys come straight from the URL path of
//! `PUT /pages/{slug}/{section_key}`, so they are checked before an upsert
//! can create a row under a malformed key.

use crate::error::CoreError;

/// Maximum length of a page slug or section key (matches `VARCHAR(100)`).
pub const MAX_IDENTIFIER_LENGTH: usize = 100;

/// Validate a page slug or section key.
///
/// Allowed: lowercase ASCII letters, digits, `-` and `_`, starting with a
/// letter or digit. `field` names the identifier in the error message.
pub fn validate_identifier(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() || value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be between 1 and {MAX_IDENTIFIER_LENGTH} characters"
        )));
    }

    let mut chars = value.chars();
    let first_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    let rest_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

    if first_ok && rest_ok {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}': use lowercase letters, digits, '-' and '_'"
        )))
    }
}

/// Section content must be a JSON value other than `null`.
pub fn validate_section_content(content: &serde_json::Value) -> Result<(), CoreError> {
    if content.is_null() {
        return Err(CoreError::Validation("content is required".to_string()));
    }
    Ok(())
}
