//! Address normalization and company name derivation.
//!
//! Both helpers are deliberately naive string operations. `derive_name` takes
//! the first host label after an optional `www.`, which is wrong for
//! multi-part public suffixes (`example.co.uk` works, `shop.example.co.uk`
//! yields `Shop`). That limitation is known and kept.

use crate::errors::CoreError;

/// Name used when no host label can be derived.
pub const FALLBACK_NAME: &str = "Entity";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Validate raw operator input before it is normalized.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the input is empty or whitespace.
pub fn validate_input(field: &str, input: &str) -> Result<(), CoreError> {
    if input.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} URL must not be empty")));
    }
    Ok(())
}

/// Prepend `https://` unless the input already carries an HTTP(S) scheme.
///
/// Idempotent: normalizing an already normalized address returns it unchanged.
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Whether `input` starts with `http://` or `https://` (case-insensitive).
#[must_use]
pub fn has_http_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Derive a display name from an address.
///
/// Strips the scheme and a leading `www.`, takes the first dot-separated
/// label of the host and capitalizes it. Returns [`FALLBACK_NAME`] when no
/// label remains.
///
/// ```
/// use scout_core::address::derive_name;
///
/// assert_eq!(derive_name("https://www.Example.com/path"), "Example");
/// assert_eq!(derive_name("example.com"), "Example");
/// ```
#[must_use]
pub fn derive_name(url: &str) -> String {
    let lower = url.trim().to_lowercase();
    let without_scheme = lower.split_once("://").map_or(lower.as_str(), |(_, rest)| rest);
    let host = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let label = host
        .split(['.', '/', ':', '?', '#'])
        .next()
        .unwrap_or_default();

    capitalize(label).unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn capitalize(label: &str) -> Option<String> {
    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", "https://example.com")]
    #[case("  example.com ", "https://example.com")]
    #[case("https://example.com", "https://example.com")]
    #[case("http://example.com", "http://example.com")]
    #[case("HTTPS://Example.com", "HTTPS://Example.com")]
    #[case("httpbin.org", "https://httpbin.org")]
    fn normalize_prepends_https_once(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_url(input), expected);
    }

    #[rstest]
    #[case("example.com")]
    #[case("https://www.example.com/careers")]
    #[case("http://example.com")]
    fn normalize_is_idempotent(#[case] input: &str) {
        let once = normalize_url(input);
        assert_eq!(normalize_url(&once), once);
        assert_eq!(once.matches("://").count(), 1);
    }

    #[rstest]
    #[case("https://www.Example.com/path", "Example")]
    #[case("example.com", "Example")]
    #[case("EXAMPLE.COM", "Example")]
    #[case("https://acme.io:8443/x", "Acme")]
    #[case("http://localhost", "Localhost")]
    #[case("https://shop.example.co.uk", "Shop")]
    #[case("https://", "Entity")]
    #[case("", "Entity")]
    fn derive_name_cases(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(derive_name(url), expected);
    }

    #[test]
    fn derive_name_is_scheme_and_www_insensitive() {
        assert_eq!(
            derive_name("https://www.Example.com/path"),
            derive_name("example.com")
        );
    }

    #[test]
    fn validate_rejects_blank_input() {
        assert!(validate_input("target", "   ").is_err());
        assert!(validate_input("target", "acme.com").is_ok());
    }
}
