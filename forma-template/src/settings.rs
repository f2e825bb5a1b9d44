//! `template.toml` settings.
//!
//! ```toml
//! placeholder = "UserExample"
//! preserve = ["pkg"]
//!
//! [marks]
//! model = "// todo generate model code to here"
//!
//! [kinds.model]
//! include_dirs = ["internal/model"]
//! init_files = ["init.go"]
//!
//! [[randomize]]
//! find = "userExampleNO       = 1"
//! replace = "userExampleNO = {n}"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, rules::Rule, selector::Selection};

const DEFAULT_START_MARK: &str = "// delete the templates code start";
const DEFAULT_END_MARK: &str = "// delete the templates code end";

/// Settings of one template tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    /// Entity name used throughout the template, in upper camel case
    pub placeholder: String,
    #[serde(default = "default_start_mark")]
    pub start_mark: String,
    #[serde(default = "default_end_mark")]
    pub end_mark: String,
    #[serde(default)]
    pub marks: ArtifactMarks,
    /// Module sub-paths that keep pointing at the template's module
    #[serde(default)]
    pub preserve: Vec<String>,
    /// File selection per generator kind, in declaration order
    #[serde(default)]
    pub kinds: IndexMap<String, KindSettings>,
    #[serde(default)]
    pub randomize: Vec<RandomizedConstant>,
}

fn default_start_mark() -> String {
    DEFAULT_START_MARK.to_string()
}

fn default_end_mark() -> String {
    DEFAULT_END_MARK.to_string()
}

impl TemplateSettings {
    /// Parse settings from TOML text; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        if settings.placeholder.trim().is_empty() {
            return Err(Error::Settings {
                path: path.to_path_buf(),
                message: "placeholder must not be empty".to_string(),
            });
        }
        if settings.start_mark.is_empty() || settings.end_mark.is_empty() {
            return Err(Error::Settings {
                path: path.to_path_buf(),
                message: "start_mark and end_mark must not be empty".to_string(),
            });
        }
        Ok(settings)
    }

    /// Load settings from a `template.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Selection settings for a generator kind.
    pub fn kind(&self, kind: &str) -> Option<&KindSettings> {
        self.kinds.get(kind)
    }

    /// Rule deleting every marked block, or only its marker lines when
    /// `keep_body` is set.
    pub fn marker_rule(&self, keep_body: bool) -> Rule {
        if keep_body {
            Rule::unwrap_markers(&self.start_mark, &self.end_mark)
        } else {
            Rule::delete_markers(&self.start_mark, &self.end_mark)
        }
    }
}

/// Lines in the template where synthesized artifacts are spliced in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactMarks {
    pub model: String,
    pub dao: String,
    pub handler: String,
}

impl Default for ArtifactMarks {
    fn default() -> Self {
        Self {
            model: "// todo generate model code to here".to_string(),
            dao: "// todo generate the update fields code to here".to_string(),
            handler: "// todo generate the request and response struct to here".to_string(),
        }
    }
}

/// Files a generator kind works on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KindSettings {
    pub include_dirs: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
    /// Database bootstrap files, skipped unless explicitly requested
    pub init_files: Vec<String>,
}

impl KindSettings {
    pub fn selection(&self, include_init: bool) -> Selection {
        let mut exclude_files = self.exclude_files.clone();
        if !include_init {
            exclude_files.extend(self.init_files.iter().cloned());
        }
        Selection {
            include_dirs: self.include_dirs.clone(),
            exclude_dirs: self.exclude_dirs.clone(),
            exclude_files,
        }
    }
}

/// A template constant replaced with a fresh number on every run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomizedConstant {
    pub find: String,
    /// Replacement text; `{n}` is substituted with the number
    pub replace: String,
}

impl RandomizedConstant {
    pub fn rule(&self, n: u32) -> Rule {
        Rule::replace(&self.find, self.replace.replace("{n}", &n.to_string()))
    }
}
