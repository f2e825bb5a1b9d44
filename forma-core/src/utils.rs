//! Shared utility functions for code generation.

/// Split an identifier into words on `_`, `-` and whitespace.
///
/// Empty segments (e.g. from `a__b`) are dropped.
pub fn split_words(s: &str) -> Vec<&str> {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn first_letter_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn first_letter_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
