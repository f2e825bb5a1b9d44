use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use forma_schema::SchemaManifest;
use forma_template::TemplateRegistry;

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, GeneratorKind, generate},
    reports::{Report, TerminalOutput},
};

/// Arguments shared by every generator command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the schema manifest
    #[arg(short, long, default_value = "forma.toml")]
    pub schema: PathBuf,

    /// Table names, repeatable or comma separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub table: Vec<String>,

    /// Module name written into imports (read from <out>/go.mod when present)
    #[arg(short, long)]
    pub module_name: Option<String>,

    /// Output directory (defaults to ./<kind>_<time>); existing files are never overwritten
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Directory holding template trees
    #[arg(long, default_value = "templates")]
    pub templates: PathBuf,

    /// Template tree to materialize
    #[arg(long, default_value = "skeleton")]
    pub template: String,

    /// Embed the base model (overrides forma.toml)
    #[arg(long)]
    pub embed: Option<bool>,

    /// Keep the template's example code instead of the synthesized code
    #[arg(long)]
    pub keep_example: bool,

    /// Preview rendered files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    fn run(&self, kind: GeneratorKind, include_init: bool) -> Result<()> {
        let manifest = SchemaManifest::from_file(&self.schema).unwrap_or_exit();
        let registry = TemplateRegistry::load(&self.templates)
            .wrap_err_with(|| format!("Failed to load templates from {}", self.templates.display()))?;

        let report = generate(
            &manifest,
            &registry,
            GenerateOptions {
                kind,
                tables: &self.table,
                module_name: self.module_name.as_deref(),
                out: self.out.as_deref(),
                template: &self.template,
                embed: self.embed,
                include_init,
                keep_example: self.keep_example,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[derive(Args)]
pub struct ModelCommand {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Keep the database init files of the template
    #[arg(short, long)]
    pub include_init_db: bool,
}

impl ModelCommand {
    pub fn run(&self) -> Result<()> {
        self.args.run(GeneratorKind::Model, self.include_init_db)
    }
}

#[derive(Args)]
pub struct DaoCommand {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Keep the database init files of the template
    #[arg(short, long)]
    pub include_init_db: bool,
}

impl DaoCommand {
    pub fn run(&self) -> Result<()> {
        self.args.run(GeneratorKind::Dao, self.include_init_db)
    }
}

#[derive(Args)]
pub struct HandlerCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

impl HandlerCommand {
    pub fn run(&self) -> Result<()> {
        self.args.run(GeneratorKind::Handler, false)
    }
}
