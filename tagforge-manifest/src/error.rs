use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of a manifest, for error reporting.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn unknown_tool_error(
        &self,
        name: impl Into<String>,
        known: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownTool {
            src: self.named_source(),
            span,
            name: name.into(),
            known: known.into(),
        })
    }

    pub fn conflicting_tool_error(
        &self,
        name: impl Into<String>,
        periodic_span: Option<SourceSpan>,
        manual_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ConflictingTool {
            src: self.named_source(),
            periodic_span,
            manual_span,
            name: name.into(),
        })
    }

    pub fn entry_out_of_range_error(
        &self,
        entry: usize,
        count: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::EntryOutOfRange {
            src: self.named_source(),
            span,
            entry,
            count,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a tagforge.toml at the project root, or pass --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tagforge.toml")]
    #[diagnostic(code(tagforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown tool '{name}'")]
    #[diagnostic(code(tagforge::unknown_tool), help("available tools: {known}"))]
    UnknownTool {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a registered tool")]
        span: Option<SourceSpan>,
        name: String,
        known: String,
    },

    #[error("tool '{name}' is listed as both periodic and manual")]
    #[diagnostic(
        code(tagforge::conflicting_tool),
        help("remove '{name}' from one of the two lists")
    )]
    ConflictingTool {
        #[source_code]
        src: NamedSource<String>,
        #[label("periodic here")]
        periodic_span: Option<SourceSpan>,
        #[label("manual here")]
        manual_span: Option<SourceSpan>,
        name: String,
    },

    #[error("entry source {entry} is out of range")]
    #[diagnostic(
        code(tagforge::entry_out_of_range),
        help("the project has {count} source file(s); entry is a 0-based index into them")
    )]
    EntryOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("no source at this index")]
        span: Option<SourceSpan>,
        entry: usize,
        count: usize,
    },

    #[error("{message}")]
    #[diagnostic(code(tagforge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to discover sources under '{}'", root.display())]
    #[diagnostic(code(tagforge::discover_error))]
    Discover {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
