use std::path::PathBuf;

use crate::{
    Result,
    registry::TemplateRegistry,
    rules::{Rule, rename_path, transform},
    selector::{Selection, select},
    writer::{OutputTarget, write},
};

/// A transformed template file, path already renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

/// Everything one materialization run needs.
#[derive(Debug, Clone)]
pub struct MaterializeRequest {
    pub template: String,
    pub selection: Selection,
    pub rules: Vec<Rule>,
    pub target: OutputTarget,
}

impl MaterializeRequest {
    pub fn new(template: impl Into<String>, target: OutputTarget) -> Self {
        Self {
            template: template.into(),
            selection: Selection::default(),
            rules: Vec::new(),
            target,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }
}

/// Selects, transforms and writes template files.
#[derive(Debug, Clone, Copy)]
pub struct Materializer<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> Materializer<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Transform the selected files without touching the filesystem.
    pub fn render(&self, request: &MaterializeRequest) -> Result<Vec<RenderedFile>> {
        let tree = self.registry.get(&request.template)?;
        select(tree, &request.selection)
            .into_iter()
            .map(|file| {
                Ok(RenderedFile {
                    path: rename_path(file.path, &request.rules),
                    content: transform(file.path, file.content, &request.rules)?,
                })
            })
            .collect()
    }

    /// Render and write, returning the output directory.
    pub fn materialize(&self, request: &MaterializeRequest) -> Result<PathBuf> {
        let files = self.render(request)?;
        write(&files, &request.target)
    }
}
