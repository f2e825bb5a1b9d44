//! Artifact renderers.

mod dao;
mod handler;
mod model;

use std::collections::BTreeMap;

use forma_schema::{GenerationOptions, TableSchema};

pub use dao::DaoFragment;
pub use handler::{HandlerFragment, adjust_id_type};
pub use model::ModelFile;

use crate::{Result, analyze::analyze};

/// The kinds of text a synthesis run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    Model,
    Dao,
    Handler,
    TypeName,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Model,
        ArtifactKind::Dao,
        ArtifactKind::Handler,
        ArtifactKind::TypeName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Dao => "dao",
            ArtifactKind::Handler => "handler",
            ArtifactKind::TypeName => "type_name",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered piece of Go source.
pub trait Artifact {
    fn kind(&self) -> ArtifactKind;

    fn render(&self) -> String;
}

/// All artifacts synthesized from one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    items: BTreeMap<ArtifactKind, String>,
}

impl Artifacts {
    pub fn get(&self, kind: ArtifactKind) -> &str {
        self.items.get(&kind).map(String::as_str).unwrap_or_default()
    }

    pub fn model(&self) -> &str {
        self.get(ArtifactKind::Model)
    }

    pub fn dao(&self) -> &str {
        self.get(ArtifactKind::Dao)
    }

    pub fn handler(&self) -> &str {
        self.get(ArtifactKind::Handler)
    }

    pub fn type_name(&self) -> &str {
        self.get(ArtifactKind::TypeName)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        self.items.iter().map(|(kind, text)| (*kind, text.as_str()))
    }
}

/// Synthesize every artifact for `schema`.
///
/// The schema is analyzed once and every renderer reads the same
/// [`TableModel`](crate::analyze::TableModel), so identical inputs always
/// produce byte-identical output.
pub fn synthesize(schema: &TableSchema, options: &GenerationOptions) -> Result<Artifacts> {
    let table = analyze(schema, options)?;

    let model = ModelFile::new(&table, options);
    let dao = DaoFragment::new(&table, &options.output_package_name);
    let handler = HandlerFragment::new(&table);
    let renderers: [&dyn Artifact; 3] = [&model, &dao, &handler];

    let mut items: BTreeMap<ArtifactKind, String> = renderers
        .iter()
        .map(|artifact| (artifact.kind(), artifact.render()))
        .collect();
    items.insert(ArtifactKind::TypeName, table.type_name.clone());

    Ok(Artifacts { items })
}

/// Join struct tag entries (`json:"sku"`) into a backtick tag, or nothing.
fn struct_tag(entries: &[String]) -> String {
    if entries.is_empty() {
        String::new()
    } else {
        format!("`{}`", entries.join(" "))
    }
}

/// One struct field line before alignment.
struct FieldLine {
    name: String,
    ty: String,
    tag: String,
    comment: String,
}

impl FieldLine {
    fn new(name: &str, ty: &str, tag: String) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            tag,
            comment: String::new(),
        }
    }

    fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.trim().to_string();
        self
    }
}

/// Align struct field lines the way gofmt does: names, then types, padded
/// to the widest entry.
fn align_fields(lines: &[FieldLine]) -> Vec<String> {
    let name_width = lines.iter().map(|l| l.name.len()).max().unwrap_or(0);
    let type_width = lines.iter().map(|l| l.ty.len()).max().unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            let mut out = format!("{:<name_width$} {}", l.name, l.ty);
            if !l.tag.is_empty() {
                out = format!("{:<width$} {}", out, l.tag, width = name_width + 1 + type_width);
            }
            if !l.comment.is_empty() {
                out.push_str(" // ");
                out.push_str(&l.comment);
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_fields() {
        let lines = vec![
            FieldLine::new("SKU", "string", "`json:\"sku\"`".to_string()),
            FieldLine::new("Quantity", "int", "`json:\"quantity\"`".to_string())
                .with_comment("units"),
            FieldLine::new("On", "bool", String::new()),
        ];

        assert_eq!(
            align_fields(&lines),
            [
                "SKU      string `json:\"sku\"`",
                "Quantity int    `json:\"quantity\"` // units",
                "On       bool",
            ]
        );
    }

    #[test]
    fn test_struct_tag() {
        assert_eq!(struct_tag(&[]), "");
        assert_eq!(
            struct_tag(&["gorm:\"column:a\"".to_string(), "json:\"a\"".to_string()]),
            "`gorm:\"column:a\" json:\"a\"`"
        );
    }

    #[test]
    fn test_artifact_kind_names() {
        let names: Vec<_> = ArtifactKind::ALL.iter().map(ArtifactKind::as_str).collect();
        assert_eq!(names, ["model", "dao", "handler", "type_name"]);
    }
}
