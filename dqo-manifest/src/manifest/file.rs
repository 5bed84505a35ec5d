use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a dqo.toml file with both raw content and parsed manifest.
pub struct DqoToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl DqoToml {
    /// Open and parse a dqo.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory generated files go to: `[generator].output` resolved
    /// against the manifest's directory.
    pub fn output_dir(&self) -> PathBuf {
        let base = self.path.parent().unwrap_or(Path::new("."));
        base.join(self.manifest.generator.output_dir())
    }
}
