use std::path::{Path, PathBuf};

use crate::{GeneratedUnit, Result};

/// Where generated units go and how they are wrapped.
///
/// Every unit becomes `<dir>/<name>.<extension>`:
///
/// ```text
/// #pragma once
///
/// <includes>
///
/// namespace <namespace>
/// {
/// <content>
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    extension: String,
    namespace: String,
}

impl OutputLayout {
    pub const DEFAULT_DIR: &'static str = "g";
    pub const DEFAULT_EXTENSION: &'static str = "g.h";
    pub const DEFAULT_NAMESPACE: &'static str = "g";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Output path of the unit named `unit`.
    pub fn path_for(&self, unit: &str) -> PathBuf {
        self.dir.join(format!("{unit}.{}", self.extension))
    }

    /// The full file text of `unit`.
    pub fn render(&self, unit: &GeneratedUnit) -> Result<String> {
        Ok(self.wrap(&unit.build_includes(), &unit.build()?))
    }

    /// The file text with no includes and no content, for headers that must
    /// exist before their first generation.
    pub fn prepared(&self) -> String {
        self.wrap("", "")
    }

    fn wrap(&self, includes: &str, content: &str) -> String {
        format!(
            "#pragma once\n\n{includes}\n\nnamespace {}\n{{\n{}\n}}\n",
            self.namespace,
            content.trim_end_matches('\n')
        )
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIR)
    }
}
