//! Schema manifest (`forma.toml`) parsing.
//!
//! ```toml
//! [options]
//! embed = true
//!
//! [[tables]]
//! name = "order_items"
//! columns = [
//!     { name = "id", type = "bigint unsigned", primary_key = true },
//!     { name = "sku", type = "varchar(64)", comment = "stock keeping unit" },
//! ]
//! ```

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Column, Error, GenerationOptions, Result, TableSchema,
    error::SourceContext,
    validate::{find_name_span, validate_identifier},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    options: GenerationOptions,
    #[serde(default)]
    tables: Vec<RawTable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    name: String,
    #[serde(default)]
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    nullable: bool,
    #[serde(default)]
    comment: String,
}

/// Parsed schema manifest: generation options plus tables in declaration order.
#[derive(Debug, Clone)]
pub struct SchemaManifest {
    options: GenerationOptions,
    tables: Vec<TableSchema>,
}

impl FromStr for SchemaManifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "forma.toml")
    }
}

impl SchemaManifest {
    /// Parse a schema manifest from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawManifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let mut tables: Vec<TableSchema> = Vec::with_capacity(raw.tables.len());
        for raw_table in raw.tables {
            let table = build_table(&ctx, raw_table)?;
            if tables.iter().any(|t| t.table_name() == table.table_name()) {
                return Err(ctx.validation_error(
                    format!("table '{}' is declared more than once", table.table_name()),
                    find_name_span(content, table.table_name(), 0),
                ));
            }
            tables.push(table);
        }

        Ok(Self {
            options: raw.options,
            tables,
        })
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .iter()
            .find(|t| t.table_name() == name)
            .ok_or_else(|| {
                let available: Vec<&str> = self.tables.iter().map(|t| t.table_name()).collect();
                Box::new(Error::TableNotFound {
                    table: name.to_string(),
                    available: if available.is_empty() {
                        "(none)".to_string()
                    } else {
                        available.join(", ")
                    },
                })
            })
    }
}

fn build_table(ctx: &SourceContext, raw: RawTable) -> Result<TableSchema> {
    let src = ctx.src();
    let table_span = find_name_span(src, &raw.name, 0);
    if let Some(reason) = validate_identifier(&raw.name) {
        return Err(ctx.validation_error(
            format!("invalid table name '{}': {}", raw.name, reason),
            table_span,
        ));
    }

    // Column spans are searched after the table's own name entry
    let after_table = table_span.map(|s| s.offset() + s.len()).unwrap_or(0);
    let mut columns = Vec::with_capacity(raw.columns.len());
    for (i, col) in raw.columns.into_iter().enumerate() {
        if let Some(reason) = validate_identifier(&col.name) {
            return Err(ctx.validation_error(
                format!("invalid column name '{}' in table '{}': {}", col.name, raw.name, reason),
                find_name_span(src, &col.name, after_table),
            ));
        }
        if col.sql_type.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("column '{}' in table '{}' has an empty type", col.name, raw.name),
                find_name_span(src, &col.name, after_table),
            ));
        }

        let mut column = Column::new(col.name, col.sql_type.trim(), i + 1)
            .nullable(col.nullable)
            .with_comment(col.comment);
        if col.primary_key {
            column = column.primary_key();
        }
        columns.push(column);
    }

    TableSchema::new(&raw.name, columns).map_err(|err| {
        let span = match err.as_ref() {
            Error::DuplicateColumn { column, .. } => {
                // Point at the second declaration
                find_name_span(src, column, after_table)
                    .and_then(|first| find_name_span(src, column, first.offset() + first.len()))
            }
            _ => table_span,
        };
        ctx.validation_error(err.to_string(), span)
    })
}
