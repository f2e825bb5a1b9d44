use forma_schema::GenerationOptions;

use super::{Artifact, ArtifactKind, FieldLine, align_fields, struct_tag};
use crate::{
    analyze::{FieldModel, TableModel},
    builder::CodeBuilder,
};

/// The complete model file for one table.
pub struct ModelFile<'a> {
    table: &'a TableModel,
    options: &'a GenerationOptions,
}

impl<'a> ModelFile<'a> {
    pub fn new(table: &'a TableModel, options: &'a GenerationOptions) -> Self {
        Self { table, options }
    }

    fn field_line(&self, field: &FieldModel) -> FieldLine {
        let mut tags = Vec::new();
        if self.options.include_orm_tags {
            let mut gorm = format!(
                "column:{};type:{}",
                field.column.name(),
                field.ty.tag_hint
            );
            if field.is_primary_key() {
                gorm.push_str(";primary_key");
            }
            if !field.column.is_nullable() && !field.is_primary_key() {
                gorm.push_str(";not null");
            }
            tags.push(format!("gorm:\"{}\"", gorm));
        }
        if self.options.include_json_tags {
            tags.push(format!("json:\"{}\"", field.json_name));
        }

        FieldLine::new(&field.name, &field.ty.name, struct_tag(&tags))
            .with_comment(field.column.comment())
    }
}

impl Artifact for ModelFile<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Model
    }

    fn render(&self) -> String {
        let table = self.table;
        let options = self.options;
        let imports = table.imports();
        let base_import = Some(options.base_model_import.as_str())
            .filter(|path| table.embed && !path.is_empty());
        let fields: Vec<FieldLine> = table.declared_fields().map(|f| self.field_line(f)).collect();
        let lines = align_fields(&fields);

        CodeBuilder::new()
            .line(&format!("package {}", options.output_package_name))
            .blank()
            .when(!imports.is_empty() || base_import.is_some(), |b| {
                b.block("import (", ")", |b| {
                    b.each(&imports, |b, pkg| b.line(&format!("\"{}\"", pkg)))
                        // standard library first, then the base model package
                        .when(!imports.is_empty() && base_import.is_some(), |b| b.blank())
                        .each(base_import, |b, pkg| b.line(&format!("\"{}\"", pkg)))
                })
                .blank()
            })
            .comment(&format!("{} table {}", table.type_name, table.table_name))
            .block(&format!("type {} struct {{", table.type_name), "}", |b| {
                b.when(table.embed, |b| {
                    let b = b.line(&format!(
                        "{} `gorm:\"embedded\"` // embed id and time",
                        options.base_model
                    ));
                    if lines.is_empty() { b } else { b.blank() }
                })
                .each(&lines, |b, line| b.line(line))
            })
            .blank()
            .comment("TableName table name")
            .block(
                &format!("func (m *{}) TableName() string {{", table.type_name),
                "}",
                |b| b.line(&format!("return \"{}\"", table.table_name)),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use forma_schema::{Column, TableSchema};

    use super::*;
    use crate::analyze::analyze;

    fn render(schema: &TableSchema, options: &GenerationOptions) -> String {
        let table = analyze(schema, options).unwrap();
        ModelFile::new(&table, options).render()
    }

    #[test]
    fn test_plain_struct_without_embed() {
        let schema = TableSchema::new(
            "events",
            vec![
                Column::new("id", "bigint unsigned", 1).primary_key(),
                Column::new("title", "varchar(100)", 2).with_comment("display title"),
                Column::new("ends_at", "datetime", 3).nullable(true),
            ],
        )
        .unwrap();
        let options = GenerationOptions {
            embed_base_model: false,
            ..Default::default()
        };

        let code = render(&schema, &options);

        assert!(code.starts_with("package model\n\nimport (\n\t\"time\"\n)\n\n// Event table events\n"));
        assert!(code.contains(
            "\tID     uint64     `gorm:\"column:id;type:bigint unsigned;primary_key\" json:\"id\"`\n"
        ));
        assert!(code.contains("`gorm:\"column:title;type:varchar(100);not null\" json:\"title\"` // display title\n"));
        assert!(code.contains("\tEndsAt *time.Time `gorm:\"column:ends_at;type:datetime\" json:\"endsAt\"`\n"));
        assert!(!code.contains("ggorm"));
    }

    #[test]
    fn test_tags_can_be_disabled() {
        let schema =
            TableSchema::new("flags", vec![Column::new("enabled", "tinyint(1)", 1)]).unwrap();
        let options = GenerationOptions {
            include_json_tags: false,
            include_orm_tags: false,
            output_package_name: "entity".to_string(),
            base_model: "BaseModel".to_string(),
            base_model_import: String::new(),
            ..Default::default()
        };

        let code = render(&schema, &options);

        assert!(code.starts_with("package entity\n\n// Flag table flags\n"));
        assert!(code.contains("\tBaseModel `gorm:\"embedded\"` // embed id and time\n\n\tEnabled bool\n}"));
        assert!(!code.contains("json:"));
    }

    #[test]
    fn test_embed_only_struct_has_no_trailing_blank() {
        let schema = TableSchema::new(
            "audits",
            vec![
                Column::new("id", "int", 1).primary_key(),
                Column::new("created_at", "datetime", 2),
            ],
        )
        .unwrap();

        let code = render(&schema, &GenerationOptions::default());

        assert!(code.starts_with(
            "package model\n\nimport (\n\t\"github.com/forma-rs/skeleton/pkg/ggorm\"\n)\n\n// Audit table audits\n"
        ));
        assert!(code.contains("type Audit struct {\n\tggorm.Model `gorm:\"embedded\"` // embed id and time\n}\n"));
        assert!(code.ends_with("func (m *Audit) TableName() string {\n\treturn \"audits\"\n}\n"));
    }

    #[test]
    fn test_imports_group_standard_library_first() {
        let schema = TableSchema::new(
            "events",
            vec![
                Column::new("id", "int", 1).primary_key(),
                Column::new("starts_at", "datetime", 2),
            ],
        )
        .unwrap();

        let code = render(&schema, &GenerationOptions::default());

        assert!(code.starts_with(
            "package model\n\nimport (\n\t\"time\"\n\n\t\"github.com/forma-rs/skeleton/pkg/ggorm\"\n)\n\n"
        ));
        assert!(code.contains("\tggorm.Model `gorm:\"embedded\"` // embed id and time\n\n\tStartsAt time.Time"));
    }
}
