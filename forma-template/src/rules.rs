//! Ordered substitution rules.
//!
//! Rules run in list order, each one over the output of the previous one.
//! Reordering a rule list can change the result, so callers build the list
//! deliberately.

use forma_core::first_letter_lower;

use crate::{Result, markers};

/// One rewriting step applied to template content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Replace every occurrence of `find`.
    Replace {
        find: String,
        replace: String,
        case_sensitive: bool,
    },
    /// Delete or unwrap every `start ... end` block.
    Markers {
        start: String,
        end: String,
        keep_body: bool,
    },
    /// Case-sensitive replacement that also applies to file paths.
    Rename { find: String, replace: String },
}

impl Rule {
    pub fn replace(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Rule::Replace {
            find: find.into(),
            replace: replace.into(),
            case_sensitive: true,
        }
    }

    /// Replace matches regardless of ASCII letter case.
    pub fn replace_ignore_case(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Rule::Replace {
            find: find.into(),
            replace: replace.into(),
            case_sensitive: false,
        }
    }

    pub fn delete_markers(start: impl Into<String>, end: impl Into<String>) -> Self {
        Rule::Markers {
            start: start.into(),
            end: end.into(),
            keep_body: false,
        }
    }

    pub fn unwrap_markers(start: impl Into<String>, end: impl Into<String>) -> Self {
        Rule::Markers {
            start: start.into(),
            end: end.into(),
            keep_body: true,
        }
    }

    pub fn rename(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Rule::Rename {
            find: find.into(),
            replace: replace.into(),
        }
    }

    fn apply(&self, file: &str, content: &str) -> Result<String> {
        Ok(match self {
            Rule::Replace {
                find,
                replace,
                case_sensitive: true,
            }
            | Rule::Rename { find, replace } => replace_all(content, find, replace),
            Rule::Replace {
                find,
                replace,
                case_sensitive: false,
            } => replace_all_ignore_case(content, find, replace),
            Rule::Markers {
                start,
                end,
                keep_body,
            } => markers::strip(file, content, start, end, *keep_body)?,
        })
    }
}

/// Run `rules` over `content` in order. `file` names the content in errors.
pub fn transform(file: &str, content: &str, rules: &[Rule]) -> Result<String> {
    let mut buffer = content.to_string();
    for rule in rules {
        buffer = rule.apply(file, &buffer)?;
    }
    Ok(buffer)
}

/// Apply the rename rules of `rules` to a relative file path.
pub fn rename_path(path: &str, rules: &[Rule]) -> String {
    rules.iter().fold(path.to_string(), |path, rule| match rule {
        Rule::Rename { find, replace } => replace_all(&path, find, replace),
        _ => path,
    })
}

/// Rules pointing imports at the caller's module.
///
/// Each `preserve` sub-path (e.g. `pkg`) is turned back to the template's
/// module afterwards, so shared libraries keep their original import path.
pub fn module_rules(template_module: &str, caller_module: &str, preserve: &[String]) -> Vec<Rule> {
    if template_module == caller_module {
        return Vec::new();
    }
    let mut rules = vec![Rule::replace(template_module, caller_module)];
    rules.extend(preserve.iter().map(|sub| {
        Rule::replace(
            format!("{}/{}", caller_module, sub),
            format!("{}/{}", template_module, sub),
        )
    }));
    rules
}

/// Rules renaming the template's placeholder entity to a synthesized type.
///
/// Both the exported (`UserExample`) and unexported (`userExample`) forms
/// are renamed, in content and in file paths.
pub fn placeholder_rules(placeholder: &str, type_name: &str, unexported: &str) -> Vec<Rule> {
    vec![
        Rule::rename(placeholder, type_name),
        Rule::rename(first_letter_lower(placeholder), unexported),
    ]
}

fn replace_all(content: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return content.to_string();
    }
    content.replace(find, replace)
}

fn replace_all_ignore_case(content: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return content.to_string();
    }
    // ASCII lowering keeps byte offsets aligned with `content`
    let haystack = content.to_ascii_lowercase();
    let needle = find.to_ascii_lowercase();

    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for (pos, _) in haystack.match_indices(&needle) {
        out.push_str(&content[last..pos]);
        out.push_str(replace);
        last = pos + needle.len();
    }
    out.push_str(&content[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_apply_in_order() {
        let rules = [Rule::replace("a", "b"), Rule::replace("b", "c")];
        assert_eq!(transform("f", "ab", &rules).unwrap(), "cc");

        let reversed = [Rule::replace("b", "c"), Rule::replace("a", "b")];
        assert_eq!(transform("f", "ab", &reversed).unwrap(), "bc");
    }

    #[test]
    fn test_case_insensitive_replace() {
        let rules = [Rule::replace_ignore_case("userexample", "Order")];
        assert_eq!(
            transform("f", "UserExample userEXAMPLE other", &rules).unwrap(),
            "Order Order other"
        );
    }

    #[test]
    fn test_case_insensitive_keeps_non_ascii_text() {
        let rules = [Rule::replace_ignore_case("ID", "Key")];
        assert_eq!(transform("f", "Größe id Ü", &rules).unwrap(), "Größe Key Ü");
    }

    #[test]
    fn test_empty_find_is_noop() {
        let rules = [Rule::replace("", "x"), Rule::replace_ignore_case("", "x")];
        assert_eq!(transform("f", "abc", &rules).unwrap(), "abc");
    }

    #[test]
    fn test_marker_errors_name_file() {
        let rules = [Rule::delete_markers("<<", ">>")];
        let err = transform("internal/dao/userExample.go", "a << b", &rules).unwrap_err();
        assert!(err.to_string().contains("'internal/dao/userExample.go'"));
    }

    #[test]
    fn test_module_rules_preserve_sub_paths() {
        let rules = module_rules(
            "github.com/forma-rs/skeleton",
            "example.com/shop",
            &["pkg".to_string()],
        );
        let content = "import (\n\t\"github.com/forma-rs/skeleton/internal/model\"\n\t\"github.com/forma-rs/skeleton/pkg/ggorm\"\n)\n";

        assert_eq!(
            transform("f", content, &rules).unwrap(),
            "import (\n\t\"example.com/shop/internal/model\"\n\t\"github.com/forma-rs/skeleton/pkg/ggorm\"\n)\n"
        );
        assert!(module_rules("same", "same", &[]).is_empty());
    }

    #[test]
    fn test_placeholder_rules_rename_paths_and_content() {
        let rules = placeholder_rules("UserExample", "OrderItem", "orderItem");

        assert_eq!(
            transform("f", "type UserExample struct{}\nvar userExample UserExample", &rules).unwrap(),
            "type OrderItem struct{}\nvar orderItem OrderItem"
        );
        assert_eq!(
            rename_path("internal/types/userExample_types.go", &rules),
            "internal/types/orderItem_types.go"
        );
    }

    #[test]
    fn test_rename_path_ignores_content_rules() {
        let rules = [Rule::replace("internal", "pkg")];
        assert_eq!(rename_path("internal/a.go", &rules), "internal/a.go");
    }
}
