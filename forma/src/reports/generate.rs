//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Generator kind (model, dao or handler).
    pub kind: String,
    /// Directory the files were written to; unset for previews.
    pub output_dir: Option<PathBuf>,
    /// Tables in generation order.
    pub tables: Vec<GeneratedTable>,
    /// Rendered files when running as a dry-run.
    pub preview: Option<Vec<PreviewFile>>,
}

/// Files produced for one table.
#[derive(Debug)]
pub struct GeneratedTable {
    pub table: String,
    pub type_name: String,
    /// Paths relative to the output directory.
    pub files: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(files) = &self.preview {
            for file in files {
                out.divider(&file.path);
                out.preformatted(&file.content);
            }
            out.divider("Summary");
            out.preformatted(&format!("{} files would be generated", files.len()));
            return;
        }

        for table in &self.tables {
            out.section(&format!("{} ({})", table.table, table.type_name));
            for file in &table.files {
                out.added_item(file);
            }
        }
        out.newline();

        if let Some(dir) = &self.output_dir {
            out.key_value(
                &format!("generate '{}' codes successfully, out", self.kind),
                &dir.display().to_string(),
            );
        }
    }
}
