use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Render a relative path with `/` separators regardless of platform.
pub fn relative_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// A file to be written into an output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if something already occupies the path.
    ///
    /// Directories and non-empty files count as occupied; an empty file does not.
    pub fn is_occupied(&self) -> bool {
        match std::fs::metadata(&self.path) {
            Ok(meta) => meta.is_dir() || meta.len() > 0,
            Err(_) => false,
        }
    }

    /// Write the file, replacing whatever is at the path
    pub fn write(&self) -> io::Result<()> {
        write_file(&self.path, &self.content)
    }
}
