use std::path::PathBuf;

use thiserror::Error;

/// Result type for builder, collector and template operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations raised while generating code.
///
/// None of these are recoverable within a run: tools propagate them and the
/// orchestrator aborts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("key '{key}' is already registered in unit '{unit}'")]
    DuplicateKey { unit: String, key: String },

    #[error("unbalanced scopes in `{piece}`: {detail}")]
    ScopeImbalance { piece: String, detail: String },

    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("failed to read template '{name}' from '{path}'")]
    TemplateIo {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Short category name used when reporting tool failures.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "InvalidInput",
            Error::DuplicateKey { .. } => "DuplicateKey",
            Error::ScopeImbalance { .. } => "ScopeImbalance",
            Error::TemplateNotFound { .. } => "TemplateNotFound",
            Error::TemplateIo { .. } => "TemplateIo",
        }
    }
}
