use std::path::PathBuf;

use thiserror::Error;

/// The AST provider could not produce a tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read AST dump '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed AST dump{}", .path.as_ref().map(|p| format!(" '{}'", p.display())).unwrap_or_default())]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("AST root must be a translation unit, found '{found}'")]
    UnexpectedRoot { found: String },

    #[error("{0}")]
    Provider(String),
}
