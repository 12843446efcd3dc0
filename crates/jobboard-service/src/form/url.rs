//! URL normalization for user-entered links.

/// Normalize a user-entered URL.
///
/// Trims whitespace and trailing slashes, keeps an existing `http://` or
/// `https://` scheme and otherwise prefixes `https://`. Blank input yields
/// an empty string.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_scheme() {
        assert_eq!(normalize_url("linkedin.com/in/dev"), "https://linkedin.com/in/dev");
        assert_eq!(normalize_url("www.acme.io"), "https://www.acme.io");
    }

    #[test]
    fn test_keeps_scheme_and_strips_slashes() {
        assert_eq!(normalize_url("  http://acme.io///  "), "http://acme.io");
        assert_eq!(normalize_url("HTTPS://Acme.io/"), "HTTPS://Acme.io");
    }

    #[test]
    fn test_blank() {
        assert_eq!(normalize_url("   "), "");
        assert_eq!(normalize_url("///"), "");
    }
}
