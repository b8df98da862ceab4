use std::path::PathBuf;

use tagforge_ast::ParseError;
use thiserror::Error;

/// Why a run aborted.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to parse the declaration tree")]
    Parse(#[from] ParseError),

    #[error("tool '{tool}' failed with {category}: {message}")]
    Tool {
        tool: String,
        /// [`Error::category`](crate::Error::category), `DuplicateUnit`, or
        /// `Error` for failures outside the code generation contract.
        category: &'static str,
        message: String,
    },

    #[error("failed to write '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl RunError {
    /// A tool failure, categorized by the first [`crate::Error`] in the chain.
    pub(crate) fn tool(tool: &str, report: &eyre::Report) -> Self {
        let category = report
            .chain()
            .find_map(|e| e.downcast_ref::<crate::Error>())
            .map_or("Error", crate::Error::category);

        Self::Tool {
            tool: tool.to_string(),
            category,
            message: format!("{report:#}"),
        }
    }

    /// The failing tool, if a tool failed.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::Tool { tool, .. } => Some(tool),
            _ => None,
        }
    }
}
