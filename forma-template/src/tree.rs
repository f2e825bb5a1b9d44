//! Template trees loaded from disk.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use forma_core::relative_path;

use crate::{Error, Result, settings::TemplateSettings};

/// Name of the settings file at a template root.
pub const SETTINGS_FILE: &str = "template.toml";

/// A file of a template tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile<'a> {
    /// Path relative to the template root, `/`-separated
    pub path: &'a str,
    pub content: &'a str,
}

impl TemplateFile<'_> {
    /// Directory part of the path, empty for files at the root.
    pub fn dir(&self) -> &str {
        self.path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit_once('/').map(|(_, name)| name).unwrap_or(self.path)
    }
}

/// A read-only template: settings, module path and file contents.
#[derive(Debug, Clone)]
pub struct TemplateTree {
    name: String,
    module_path: String,
    settings: TemplateSettings,
    files: BTreeMap<String, String>,
}

impl TemplateTree {
    pub fn new(
        name: impl Into<String>,
        module_path: impl Into<String>,
        settings: TemplateSettings,
        files: BTreeMap<String, String>,
    ) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            settings,
            files,
        }
    }

    /// Load a template from its root directory.
    ///
    /// The root must contain `template.toml` and a `go.mod` declaring the
    /// template's module path.
    pub fn load(root: &Path) -> Result<Self> {
        let settings = TemplateSettings::load(&root.join(SETTINGS_FILE))?;

        let mut files = BTreeMap::new();
        collect_files(root, root, &mut files)?;

        let module_path = files
            .get("go.mod")
            .and_then(|go_mod| module_line(go_mod))
            .ok_or_else(|| Error::Settings {
                path: root.join("go.mod"),
                message: "missing `module` line".to_string(),
            })?
            .to_string();

        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, module_path, settings, files))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn settings(&self) -> &TemplateSettings {
        &self.settings
    }

    /// All files in lexical path order.
    pub fn files(&self) -> impl Iterator<Item = TemplateFile<'_>> {
        self.files.iter().map(|(path, content)| TemplateFile {
            path: path.as_str(),
            content: content.as_str(),
        })
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let path: PathBuf = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
            continue;
        }

        let relative = relative_path(path.strip_prefix(root).unwrap_or(&path));
        if relative == SETTINGS_FILE {
            continue;
        }
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        files.insert(relative, content);
    }
    Ok(())
}

/// The module path declared in a `go.mod` file.
pub fn module_line(go_mod: &str) -> Option<&str> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        let module = rest.trim().trim_matches('"');
        (!module.is_empty() && rest.starts_with(char::is_whitespace)).then_some(module)
    })
}
