//! Check operation - synthesize every table without writing files.

use std::path::Path;

use eyre::{Context, Result};
use forma_codegen::synthesize;
use forma_schema::SchemaManifest;

use crate::reports::{CheckReport, TableCheck};

/// Execute the check operation.
///
/// Every table is synthesized with the manifest's options; the first table
/// that fails aborts the check.
pub fn check(manifest: &SchemaManifest, schema_path: &Path) -> Result<CheckReport> {
    let options = manifest.options();
    let mut tables = Vec::with_capacity(manifest.tables().len());
    let mut warnings = Vec::new();

    for schema in manifest.tables() {
        let name = schema.table_name();
        let artifacts = synthesize(schema, options)
            .wrap_err_with(|| format!("Table '{}' cannot be generated", name))?;

        if schema.primary_key().is_none() && !options.embed_base_model {
            warnings.push(format!(
                "table '{}' has no primary key, its update code has no key guard",
                name
            ));
        }

        tables.push(TableCheck {
            table: name.to_string(),
            type_name: artifacts.type_name().to_string(),
            columns: schema.columns().len(),
        });
    }

    if tables.is_empty() {
        warnings.push("no tables declared".to_string());
    }

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        tables,
        warnings,
    })
}
