//! Writing rendered files into an output tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use forma_core::File;

use crate::{Error, Result, materializer::RenderedFile};

/// Where a materialization run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Explicit output directory; synthesized from `base` and `kind` when unset
    pub dir: Option<PathBuf>,
    /// Generator kind, used as the synthesized directory's prefix
    pub kind: String,
    pub base: PathBuf,
}

impl OutputTarget {
    /// A fresh `<kind>_<yymmddHHMMSS>` directory under the working directory.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            dir: None,
            kind: kind.into(),
            base: PathBuf::from("."),
        }
    }

    /// Write into `dir`, refusing to overwrite existing files.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Parent directory for synthesized output directories.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    /// The directory files will be written to.
    pub fn resolve(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.clone(),
            None => unused_dir(&self.base, &self.kind, Local::now().naive_local()),
        }
    }
}

fn stamp(now: NaiveDateTime) -> String {
    now.format("%y%m%d%H%M%S").to_string()
}

/// `<base>/<kind>_<stamp>`, with `_<n>` appended until the path is free.
fn unused_dir(base: &Path, kind: &str, now: NaiveDateTime) -> PathBuf {
    let name = format!("{}_{}", kind, stamp(now));
    let mut dir = base.join(&name);
    let mut n = 1;
    while dir.exists() {
        dir = base.join(format!("{}_{}", name, n));
        n += 1;
    }
    dir
}

/// Write `files` into the target directory and return it.
///
/// Every target path is checked before anything is written: if one already
/// holds content the whole write fails with [`Error::OutputExists`].
pub fn write(files: &[RenderedFile], target: &OutputTarget) -> Result<PathBuf> {
    let dir = target.resolve();
    let outputs: Vec<File> = files
        .iter()
        .map(|f| File::new(dir.join(&f.path), f.content.as_str()))
        .collect();

    if let Some(taken) = outputs.iter().find(|f| f.is_occupied()) {
        return Err(Error::OutputExists {
            path: taken.path().to_path_buf(),
        });
    }

    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    for file in &outputs {
        file.write().map_err(|e| Error::io(file.path(), e))?;
    }
    Ok(dir)
}
