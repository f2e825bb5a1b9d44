use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use forma_schema::SchemaManifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema manifest (defaults to ./forma.toml)
    #[arg(short, long, default_value = "forma.toml")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = SchemaManifest::from_file(&self.schema).unwrap_or_exit();
        let report = ops::check(&manifest, &self.schema)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
