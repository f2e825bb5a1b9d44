//! Table and column descriptors.

use crate::{Error, Result};

/// One column of a table, as reported by the schema provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    sql_type: String,
    is_primary_key: bool,
    is_nullable: bool,
    comment: String,
    ordinal: usize,
}

impl Column {
    /// Create a non-key, non-nullable column without a comment.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            is_primary_key: false,
            is_nullable: false,
            comment: String::new(),
            ordinal,
        }
    }

    /// Mark the column as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.is_nullable = nullable;
        self
    }

    /// Attach a column comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

/// A table and its columns in ordinal order.
///
/// Column names are unique and at most one column is the primary key;
/// both are checked on construction. An empty column list is accepted here
/// and rejected by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table_name: String,
    columns: Vec<Column>,
}

impl TableSchema {
    /// Build a table schema, sorting columns by ordinal.
    pub fn new(table_name: impl Into<String>, mut columns: Vec<Column>) -> Result<Self> {
        let table_name = table_name.into();
        columns.sort_by_key(|c| c.ordinal);

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(Box::new(Error::DuplicateColumn {
                    table: table_name,
                    column: column.name.clone(),
                }));
            }
        }

        let keys: Vec<String> = columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.clone())
            .collect();
        if keys.len() > 1 {
            return Err(Box::new(Error::CompositeKey {
                table: table_name,
                columns: keys.join(", "),
            }));
        }

        Ok(Self {
            table_name,
            columns,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The primary key column, if the table declares one.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_primary_key)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
