use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Result, error::SourceContext};

/// A tagforge.toml file with both raw content and parsed manifest.
///
/// The raw content is kept so checks that need the project directory (such
/// as the entry source index) can still point into the file.
#[derive(Debug, Clone)]
pub struct TagforgeToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TagforgeToml {
    pub const FILE_NAME: &'static str = "tagforge.toml";

    /// Open and parse a tagforge.toml file.
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

    /// A manifest with every default, for projects without a tagforge.toml.
    pub fn implicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: String::new(),
            manifest: Manifest::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub(crate) fn source_context(&self) -> SourceContext {
        SourceContext::new(self.content.as_str(), self.path.display().to_string())
    }
}
