//! Validation helpers for manifest parsing.

use miette::SourceSpan;

/// Find the span of a `name = "..."` entry in the TOML source.
///
/// Tables and columns are both declared with a `name` key, so the first
/// matching entry at or after `from` is used.
pub(crate) fn find_name_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let from = from.min(src.len());
    for quote in ['"', '\''] {
        let pattern = format!("name = {quote}{name}{quote}");
        if let Some(pos) = src[from..].find(&pattern) {
            // The name starts after `name = "` (8 characters)
            let start = from + pos + 8;
            return Some(SourceSpan::from((start, name.len())));
        }
    }
    None
}

/// Validate that a name is a plain SQL identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("users").is_none());
        assert!(validate_identifier("order_items").is_none());
        assert!(validate_identifier("_tmp2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("order-items").is_some());
        assert!(validate_identifier("order items").is_some());
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[tables]]\nname = \"users\"\n";
        let span = find_name_span(src, "users", 0).unwrap();
        assert_eq!(span.offset(), 19);
        assert_eq!(span.len(), 5);

        assert!(find_name_span(src, "users", 20).is_none());
        assert!(find_name_span(src, "orders", 0).is_none());
    }
}
