//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema manifest.
    pub schema_path: PathBuf,
    /// Tables that synthesized cleanly, in declaration order.
    pub tables: Vec<TableCheck>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// Summary of one table.
#[derive(Debug)]
pub struct TableCheck {
    pub table: String,
    pub type_name: String,
    pub columns: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        if self.tables.is_empty() {
            return;
        }

        out.newline();
        out.section(&format!(
            "{} table{}",
            self.tables.len(),
            if self.tables.len() == 1 { "" } else { "s" }
        ));
        for table in &self.tables {
            out.list_item(&format!(
                "{} -> {} ({} column{})",
                table.table,
                table.type_name,
                table.columns,
                if table.columns == 1 { "" } else { "s" }
            ));
        }
    }
}
