//! Choosing which template files a generator works on.

use crate::tree::{TemplateFile, TemplateTree};

/// Include/exclude filter over a template tree.
///
/// Directory entries are `/`-separated paths relative to the template root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Only files under one of these directories; empty selects everything
    pub include_dirs: Vec<String>,
    pub exclude_dirs: Vec<String>,
    /// File names, or full relative paths, to skip
    pub exclude_files: Vec<String>,
}

impl Selection {
    /// Whether `file` passes the filter.
    pub fn matches(&self, file: &TemplateFile<'_>) -> bool {
        let dir = file.dir();

        let included = self.include_dirs.is_empty()
            || self.include_dirs.iter().any(|inc| is_within(dir, inc));
        if !included {
            return false;
        }

        let excluded_dir = self.exclude_dirs.iter().any(|ex| {
            let ex = normalize(ex);
            !ex.is_empty() && (is_within(dir, ex) || dir.split('/').any(|c| c == ex))
        });
        let excluded_file = self
            .exclude_files
            .iter()
            .any(|ex| ex == file.file_name() || ex == file.path);

        !excluded_dir && !excluded_file
    }
}

fn normalize(dir: &str) -> &str {
    dir.trim_matches('/')
}

/// `dir` equals `ancestor` or lies beneath it.
fn is_within(dir: &str, ancestor: &str) -> bool {
    let ancestor = normalize(ancestor);
    if ancestor.is_empty() {
        return true;
    }
    dir == ancestor
        || dir
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Files of `tree` passing `selection`, in lexical path order.
pub fn select<'a>(tree: &'a TemplateTree, selection: &Selection) -> Vec<TemplateFile<'a>> {
    tree.files().filter(|file| selection.matches(file)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::settings::TemplateSettings;

    fn tree(paths: &[&str]) -> TemplateTree {
        let settings = TemplateSettings {
            placeholder: "UserExample".to_string(),
            start_mark: "<".to_string(),
            end_mark: ">".to_string(),
            marks: Default::default(),
            preserve: Vec::new(),
            kinds: Default::default(),
            randomize: Vec::new(),
        };
        let files: BTreeMap<String, String> = paths
            .iter()
            .map(|p| (p.to_string(), String::new()))
            .collect();
        TemplateTree::new("skeleton", "example.com/skeleton", settings, files)
    }

    fn paths(tree: &TemplateTree, selection: &Selection) -> Vec<String> {
        select(tree, selection)
            .into_iter()
            .map(|f| f.path.to_string())
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const PATHS: &[&str] = &[
        "go.mod",
        "internal/model/userExample.go",
        "internal/model/init.go",
        "internal/dao/userExample.go",
        "internal/dao/testdata/fixture.go",
        "internal/modelx/other.go",
        "cmd/main.go",
    ];

    #[test]
    fn test_empty_selection_takes_everything_in_order() {
        let tree = tree(PATHS);

        assert_eq!(
            paths(&tree, &Selection::default()),
            [
                "cmd/main.go",
                "go.mod",
                "internal/dao/testdata/fixture.go",
                "internal/dao/userExample.go",
                "internal/model/init.go",
                "internal/model/userExample.go",
                "internal/modelx/other.go",
            ]
        );
    }

    #[test]
    fn test_include_dirs_match_whole_components() {
        let tree = tree(PATHS);
        let selection = Selection {
            include_dirs: strings(&["internal/model/"]),
            ..Default::default()
        };

        assert_eq!(
            paths(&tree, &selection),
            ["internal/model/init.go", "internal/model/userExample.go"]
        );
    }

    #[test]
    fn test_exclude_files_drops_init() {
        let tree = tree(PATHS);
        let selection = Selection {
            include_dirs: strings(&["internal/model"]),
            exclude_files: strings(&["init.go"]),
            ..Default::default()
        };

        assert_eq!(paths(&tree, &selection), ["internal/model/userExample.go"]);
    }

    #[test]
    fn test_exclude_dirs_by_prefix_or_component() {
        let tree = tree(PATHS);
        let selection = Selection {
            include_dirs: strings(&["internal"]),
            exclude_dirs: strings(&["testdata", "internal/model"]),
            ..Default::default()
        };

        assert_eq!(
            paths(&tree, &selection),
            ["internal/dao/userExample.go", "internal/modelx/other.go"]
        );
    }

    #[test]
    fn test_exclude_by_full_path() {
        let tree = tree(PATHS);
        let selection = Selection {
            exclude_files: strings(&["internal/dao/userExample.go", "go.mod"]),
            ..Default::default()
        };

        let selected = paths(&tree, &selection);
        assert!(!selected.contains(&"internal/dao/userExample.go".to_string()));
        assert!(!selected.contains(&"go.mod".to_string()));
        assert!(selected.contains(&"internal/model/userExample.go".to_string()));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let tree = tree(PATHS);
        let selection = Selection {
            include_dirs: strings(&["internal/dao", "cmd"]),
            ..Default::default()
        };

        assert_eq!(paths(&tree, &selection), paths(&tree, &selection));
    }
}
