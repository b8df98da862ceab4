//! AST provider contract.

use std::path::{Path, PathBuf};

use crate::{ParseError, Tree};

/// Produces the declaration tree for one run.
///
/// Parsing itself happens outside tagforge; a provider only hands over the
/// result. Providers are called once per orchestrator run.
pub trait AstProvider {
    fn parse(&self) -> Result<Tree, ParseError>;
}

impl<F> AstProvider for F
where
    F: Fn() -> Result<Tree, ParseError>,
{
    fn parse(&self) -> Result<Tree, ParseError> {
        self()
    }
}

/// Reads a JSON dump written by the external parse step.
#[derive(Debug, Clone)]
pub struct JsonDumpProvider {
    path: PathBuf,
}

impl JsonDumpProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AstProvider for JsonDumpProvider {
    fn parse(&self) -> Result<Tree, ParseError> {
        Tree::from_json_file(&self.path)
    }
}
