//! Input validation and sanitization functions for contactbook
//!
//! Form fields are masked as they are typed (see [`crate::core::mask`]);
//! the functions here cover the free-text name and the endpoint URL.

use crate::core::remote::Endpoint;

/// Maximum stored length of a contact name, in characters
pub const NAME_MAX_CHARS: usize = 120;

/// Sanitizes a contact name for storage.
///
/// Trims surrounding whitespace, drops control characters, collapses runs
/// of internal whitespace and caps the length.
///
/// # Examples
///
/// ```
/// use contactbook::validators::sanitize_name;
///
/// assert_eq!(sanitize_name("  Ana   Silva "), "Ana Silva");
/// assert_eq!(sanitize_name("Ana\tSilva\n"), "Ana Silva");
/// ```
pub fn sanitize_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(NAME_MAX_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Validates the endpoint URL entered in settings.
///
/// Empty (or whitespace-only) input means "no endpoint" and yields
/// `Ok(None)`.
///
/// # Errors
///
/// Returns `Err` with a user-facing message if the URL does not parse or
/// is not http(s).
pub fn validate_endpoint(input: &str) -> Result<Option<Endpoint>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Endpoint::parse(trimmed)
        .map(Some)
        .map_err(|_| "Enter a full http:// or https:// URL".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("João da Silva"), "João da Silva");
        assert_eq!(sanitize_name("   "), "");
        assert_eq!(sanitize_name("Ana\u{0007}Bell"), "AnaBell");
    }

    #[test]
    fn test_sanitize_name_caps_length() {
        let long = "a".repeat(NAME_MAX_CHARS + 20);
        assert_eq!(sanitize_name(&long).chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn test_validate_endpoint() {
        assert_eq!(validate_endpoint(""), Ok(None));
        assert_eq!(validate_endpoint("  "), Ok(None));

        let endpoint = validate_endpoint(" https://script.google.com/macros/s/x/exec ")
            .unwrap()
            .unwrap();
        assert_eq!(endpoint.as_str(), "https://script.google.com/macros/s/x/exec");

        assert!(validate_endpoint("script.google.com/macros").is_err());
        assert!(validate_endpoint("mailto:someone@example.com").is_err());
        assert!(validate_endpoint("file:///etc/passwd").is_err());
    }
}
