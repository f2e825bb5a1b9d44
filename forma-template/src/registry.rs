use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    Error, Result,
    tree::{SETTINGS_FILE, TemplateTree},
};

/// Named template trees available to a materializer.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateTree>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every sub-directory of `root` that holds a `template.toml`.
    pub fn load(root: &Path) -> Result<Self> {
        let mut registry = Self::new();
        let entries = fs::read_dir(root).map_err(|e| Error::io(root, e))?;
        for entry in entries {
            let path = entry.map_err(|e| Error::io(root, e))?.path();
            if path.is_dir() && path.join(SETTINGS_FILE).is_file() {
                registry.insert(TemplateTree::load(&path)?);
            }
        }
        Ok(registry)
    }

    /// Add a template, replacing any with the same name.
    pub fn insert(&mut self, tree: TemplateTree) {
        self.templates.insert(tree.name().to_string(), tree);
    }

    pub fn get(&self, name: &str) -> Result<&TemplateTree> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
                available: self.available(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    fn available(&self) -> String {
        if self.templates.is_empty() {
            "(none)".to_string()
        } else {
            self.names().collect::<Vec<_>>().join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_template(root: &Path, name: &str) {
        let dir = root.join(name);
        forma_core::write_file(&dir.join("template.toml"), "placeholder = \"UserExample\"\n")
            .unwrap();
        forma_core::write_file(&dir.join("go.mod"), "module example.com/skeleton\n").unwrap();
    }

    #[test]
    fn test_load_skips_plain_directories() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "skeleton");
        write_template(temp.path(), "minimal");
        forma_core::write_file(&temp.path().join("notes/readme.md"), "hi").unwrap();

        let registry = TemplateRegistry::load(temp.path()).unwrap();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["minimal", "skeleton"]);
        assert_eq!(registry.get("skeleton").unwrap().module_path(), "example.com/skeleton");
    }

    #[test]
    fn test_unknown_template_lists_available() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path(), "skeleton");
        let registry = TemplateRegistry::load(temp.path()).unwrap();

        let err = registry.get("web").unwrap_err();
        assert_eq!(
            err.to_string(),
            "template 'web' not found (available: skeleton)"
        );

        let err = TemplateRegistry::new().get("web").unwrap_err();
        assert!(err.to_string().ends_with("(available: (none))"));
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = TemplateRegistry::load(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
