//! Schema analysis shared by all artifact renderers.
//!
//! A [`TableModel`] is computed once per synthesis run. Renderers only read it,
//! which keeps type, field and JSON names identical across artifacts.

use std::collections::HashMap;

use forma_schema::{Column, GenerationOptions, TableSchema};

use crate::{
    Error, Result, naming,
    type_mapper::{FieldType, GoTypeMapper, TypeKind, TypeMapper},
};

/// Columns provided by the embedded base model.
pub const AUDIT_COLUMNS: &[&str] = &["id", "created_at", "updated_at", "deleted_at"];

/// One column with its derived Go names and type.
#[derive(Debug, Clone)]
pub struct FieldModel {
    pub column: Column,
    pub name: String,
    pub json_name: String,
    pub ty: FieldType,
    /// Provided by the base model embed rather than declared explicitly
    pub audit: bool,
}

impl FieldModel {
    pub fn is_primary_key(&self) -> bool {
        self.column.is_primary_key()
    }
}

/// The field the DAO and handler use to address a single row.
#[derive(Debug, Clone)]
pub struct KeyField {
    pub name: String,
    pub json_name: String,
    pub ty: FieldType,
    /// Provided by the embedded base model rather than a declared column
    pub embedded: bool,
}

impl KeyField {
    /// The `ID uint64` key every embedded base model carries.
    fn base_model() -> Self {
        Self {
            name: "ID".to_string(),
            json_name: "id".to_string(),
            ty: FieldType {
                name: "uint64".to_string(),
                tag_hint: "bigint(20) unsigned".to_string(),
                import: None,
                kind: TypeKind::Int,
                pointer: false,
            },
            embedded: true,
        }
    }
}

/// Analyzed view of one table.
#[derive(Debug, Clone)]
pub struct TableModel {
    pub table_name: String,
    pub type_name: String,
    pub fields: Vec<FieldModel>,
    pub key: Option<KeyField>,
    pub embed: bool,
}

impl TableModel {
    /// Fields declared explicitly in the model struct.
    pub fn declared_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields.iter().filter(|f| !f.audit)
    }

    /// Fields that can be written through the update path.
    pub fn updatable_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields
            .iter()
            .filter(|f| !f.audit && !f.is_primary_key())
    }

    /// Packages the model file has to import.
    pub fn imports(&self) -> Vec<&'static str> {
        let mut imports: Vec<&'static str> =
            self.declared_fields().filter_map(|f| f.ty.import).collect();
        imports.sort_unstable();
        imports.dedup();
        imports
    }
}

fn is_audit_column(name: &str) -> bool {
    AUDIT_COLUMNS.iter().any(|c| c.eq_ignore_ascii_case(name))
}

/// Analyze a table schema.
pub fn analyze(schema: &TableSchema, options: &GenerationOptions) -> Result<TableModel> {
    if schema.is_empty() {
        return Err(Error::EmptySchema {
            table: schema.table_name().to_string(),
        });
    }

    let table = schema.table_name();
    let mapper = GoTypeMapper;
    let embed = options.embed_base_model;

    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut fields = Vec::with_capacity(schema.columns().len());
    for column in schema.columns() {
        let name = naming::field_name(column.name());
        if let Some(first) = seen.insert(name.clone(), column.name()) {
            return Err(Error::DuplicateFieldName {
                table: table.to_string(),
                field: name,
                first: first.to_string(),
                second: column.name().to_string(),
            });
        }

        fields.push(FieldModel {
            column: column.clone(),
            json_name: naming::json_name(column.name()),
            ty: mapper.map(table, column)?,
            audit: embed && is_audit_column(column.name()),
            name,
        });
    }

    let key = match fields.iter().find(|f| f.is_primary_key()) {
        Some(pk) if !pk.audit => Some(KeyField {
            name: pk.name.clone(),
            json_name: pk.json_name.clone(),
            ty: pk.ty.clone(),
            embedded: false,
        }),
        // an absorbed key column is replaced by the base model's ID
        Some(_) => Some(KeyField::base_model()),
        None if embed => Some(KeyField::base_model()),
        None => None,
    };

    Ok(TableModel {
        table_name: table.to_string(),
        type_name: naming::type_name(table),
        fields,
        key,
        embed,
    })
}
