//! URL validation and normalization for bookmark targets.

use url::Url;

use crate::{Error, Result};

/// Schemes accepted for bookmarks.
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// Check that `raw` is an absolute URL with a supported scheme and a host.
pub fn validate(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::Invalid("URL cannot be empty".into()));
    }
    let parsed = Url::parse(raw).map_err(|e| Error::Invalid(format!("invalid URL format: {e}")))?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(Error::Invalid(format!(
            "unsupported URL scheme: {}",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::Invalid("URL must include a host".into()));
    }
    Ok(parsed)
}

/// Trim, default the scheme to `https://`, validate and re-serialize.
///
/// ```rust
/// use ubm_core::urls::normalize;
///
/// assert_eq!(normalize("example.com").unwrap(), "https://example.com/");
/// assert_eq!(normalize("  http://Example.com/a ").unwrap(), "http://example.com/a");
/// assert!(normalize("gopher://example.com").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    validate(&candidate).map(String::from)
}

/// Host of `raw` without a leading `www.`; used as a default title.
pub fn domain(raw: &str) -> String {
    let host = Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| {
            let stripped = raw
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            stripped.split('/').next().unwrap_or(stripped).to_string()
        });
    host.trim_start_matches("www.").to_string()
}
