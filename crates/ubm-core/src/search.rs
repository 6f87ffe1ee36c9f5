//! Naive substring matching shared by menu filtering and bookmark search.

/// Lowercase `text` and drop all whitespace.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive substring match that ignores whitespace on both sides.
///
/// An empty (or all-whitespace) query matches everything.
///
/// ```rust
/// use ubm_core::search::matches;
///
/// assert!(matches("Rust Book https://doc.rust-lang.org/book", "rustbook"));
/// assert!(matches("GitHub", "git hub"));
/// assert!(!matches("GitHub", "gitlab"));
/// ```
pub fn matches(haystack: &str, query: &str) -> bool {
    normalize(haystack).contains(&normalize(query))
}

/// Plain case-insensitive substring match (whitespace significant).
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello \t World\n"), "helloworld");
        assert_eq!(normalize("ÄBC"), "äbc");
    }

    #[test]
    fn test_matches_ignores_case_and_whitespace() {
        assert!(matches("📁 Dev Tools (3)", "devtools"));
        assert!(matches("example.com", "EXAMPLE"));
        assert!(matches("anything", ""));
        assert!(matches("anything", "   "));
        assert!(!matches("short", "shorter"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Rust Book", "rust b"));
        assert!(!contains_ignore_case("Rust Book", "rustb"));
    }
}
