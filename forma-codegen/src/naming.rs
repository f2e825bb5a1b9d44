//! Go naming conventions.
//!
//! Every artifact derives its identifiers through these functions, so a
//! table or column always maps to the same name wherever it appears.

use forma_core::{first_letter_lower, first_letter_upper, split_words};

/// Words rendered fully upper-case in Go identifiers (`user_id` -> `UserID`).
pub const INITIALISMS: &[&str] = &[
    "acl", "api", "ascii", "cpu", "css", "dns", "eof", "guid", "html", "http", "https", "id",
    "ip", "json", "lhs", "qps", "ram", "rhs", "rpc", "sku", "sla", "smtp", "sql", "ssh", "tcp",
    "tls", "ttl", "udp", "ui", "uid", "uri", "url", "utf8", "uuid", "vm", "xml", "xmpp", "xsrf",
    "xss",
];

/// Check if a word is a known initialism.
pub fn is_initialism(word: &str) -> bool {
    INITIALISMS.contains(&word.to_ascii_lowercase().as_str())
}

fn exported_word(word: &str) -> String {
    if is_initialism(word) {
        word.to_ascii_uppercase()
    } else {
        first_letter_upper(word)
    }
}

/// Canonical type name for a table: last word singularized, upper camel case.
///
/// `order_items` -> `OrderItem`, `api_keys` -> `APIKey`.
pub fn type_name(table: &str) -> String {
    let mut words: Vec<String> = split_words(table).into_iter().map(str::to_string).collect();
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.iter().map(|w| exported_word(w)).collect()
}

/// Exported Go field name for a column (`created_at` -> `CreatedAt`, `sku` -> `SKU`).
pub fn field_name(column: &str) -> String {
    split_words(column).into_iter().map(exported_word).collect()
}

/// JSON key for a column (`created_at` -> `createdAt`, `user_id` -> `userID`).
pub fn json_name(column: &str) -> String {
    let mut words = split_words(column).into_iter();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut name = if is_initialism(first) {
        first.to_ascii_lowercase()
    } else {
        first_letter_lower(first)
    };
    name.extend(words.map(exported_word));
    name
}

/// Unexported variant of a type name (`OrderItem` -> `orderItem`, `APIKey` -> `apiKey`).
pub fn unexported(type_name: &str) -> String {
    let upper = type_name
        .chars()
        .take_while(|c| c.is_ascii_uppercase())
        .count();
    let lowered = match upper {
        0 | 1 => return first_letter_lower(type_name),
        n if n == type_name.len() => n,
        // the last capital starts the next word
        n => n - 1,
    };
    let (head, tail) = type_name.split_at(lowered);
    format!("{}{}", head.to_ascii_lowercase(), tail)
}

fn singularize(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_singularizes_last_word() {
        assert_eq!(type_name("order_items"), "OrderItem");
        assert_eq!(type_name("users"), "User");
        assert_eq!(type_name("user"), "User");
    }

    #[test]
    fn test_type_name_initialisms() {
        assert_eq!(type_name("api_keys"), "APIKey");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("sku"), "SKU");
        assert_eq!(field_name("qty"), "Qty");
        assert_eq!(field_name("created_at"), "CreatedAt");
        assert_eq!(field_name("user_id"), "UserID");
        assert_eq!(field_name("id"), "ID");
        // camelCase input keeps its humps
        assert_eq!(field_name("userName"), "UserName");
    }

    #[test]
    fn test_json_name() {
        assert_eq!(json_name("created_at"), "createdAt");
        assert_eq!(json_name("user_id"), "userID");
        assert_eq!(json_name("ID"), "id");
        assert_eq!(json_name("userName"), "userName");
        assert_eq!(json_name(""), "");
    }

    #[test]
    fn test_unexported() {
        assert_eq!(unexported("OrderItem"), "orderItem");
        assert_eq!(unexported("APIKey"), "apiKey");
        assert_eq!(unexported("ID"), "id");
    }

    #[test]
    fn test_collisions_after_conversion() {
        assert_eq!(field_name("user_name"), field_name("userName"));
        assert_eq!(field_name("user__name"), field_name("user_name"));
    }
}
