//! URL normalization and validation.

use std::fmt;

use url::Url;

use crate::error::{Result, Web2TxtError};

/// Scheme prepended when the user omits one.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

const RECOGNIZED_PREFIXES: &[&str] = &["http://", "https://"];

/// A URL that passed validation.
///
/// Keeps the normalized string as the user will see it alongside the parsed
/// form handed to the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetUrl {
    normalized: String,
    parsed: Url,
}

impl TargetUrl {
    /// The normalized URL string (scheme added if it was missing).
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.parsed
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn has_recognized_prefix(url: &str) -> bool {
    RECOGNIZED_PREFIXES.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Normalize and validate a user-supplied URL.
///
/// Adds `https://` when no `http://`/`https://` prefix is present and
/// requires the result to carry a non-empty host. Never touches the network.
pub fn validate_url(raw: &str) -> Result<TargetUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Web2TxtError::InvalidUrl("URL cannot be empty".into()));
    }

    let normalized = if has_recognized_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    let invalid = || Web2TxtError::InvalidUrl(format!("Invalid URL format: {normalized}"));

    let parsed = Url::parse(&normalized).map_err(|e| {
        tracing::debug!("url parse failed for {normalized}: {e}");
        invalid()
    })?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(invalid()),
    }

    Ok(TargetUrl { normalized, parsed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let err = validate_url("").unwrap_err();
        assert!(matches!(err, Web2TxtError::InvalidUrl(ref m) if m == "URL cannot be empty"));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert!(matches!(
            validate_url("   \t"),
            Err(Web2TxtError::InvalidUrl(_))
        ));
    }

    #[test]
    fn missing_scheme_defaults_to_https() {
        for raw in ["example.com", "example.com/docs?page=2", "sub.domain.org:8080/x"] {
            let target = validate_url(raw).unwrap();
            assert_eq!(target.as_str(), format!("https://{raw}"));
            assert_eq!(target.url().scheme(), "https");
            assert!(!target.url().host_str().unwrap().is_empty());
        }
    }

    #[test]
    fn existing_scheme_is_kept() {
        let target = validate_url("http://example.com/a").unwrap();
        assert_eq!(target.as_str(), "http://example.com/a");
        assert_eq!(target.url().scheme(), "http");

        let target = validate_url("HTTPS://Example.com").unwrap();
        assert_eq!(target.as_str(), "HTTPS://Example.com");
        assert_eq!(target.url().host_str(), Some("example.com"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let target = validate_url("  example.com  ").unwrap();
        assert_eq!(target.as_str(), "https://example.com");
    }

    #[test]
    fn hostless_urls_are_invalid() {
        let err = validate_url("https://").unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL format: https://");

        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(Web2TxtError::InvalidUrl(_))
        ));
    }

    #[test]
    fn display_uses_normalized_form() {
        let target = validate_url("example.com").unwrap();
        assert_eq!(target.to_string(), "https://example.com");
    }
}
