//! Validation of a parsed manifest against its source text.

use miette::SourceSpan;
use tagforge_tools::ToolRegistry;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Source text of a manifest being validated, used to point errors at the
/// offending entry.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    source: SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &str) -> Self {
        Self {
            src,
            source: SourceContext::new(src, filename),
        }
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Span of the value of `key = ...`, if the key is written out.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.src, key)
    }

    /// Span of the string `"name"` after `after`.
    pub fn find_quoted_span(&self, name: &str, after: Option<SourceSpan>) -> Option<SourceSpan> {
        find_quoted_span(self.src, name, after.map_or(0, |s| s.offset()))
    }

    pub fn validate(&self, manifest: &Manifest, registry: &ToolRegistry) -> Result<()> {
        if manifest.project.extension.trim().is_empty() {
            return Err(self.source.validation_error(
                "extension must not be empty",
                self.find_key_span("extension"),
            ));
        }
        if manifest.project.namespace.trim().is_empty() {
            return Err(self.source.validation_error(
                "namespace must not be empty",
                self.find_key_span("namespace"),
            ));
        }

        let periodics = self.find_key_span("periodics");
        let manuals = self.find_key_span("manuals");
        self.validate_list(&manifest.tools.periodics, periodics, registry)?;
        self.validate_list(&manifest.tools.manuals, manuals, registry)?;

        for name in &manifest.tools.periodics {
            if manifest.tools.is_manual(name) {
                return Err(self.source.conflicting_tool_error(
                    name,
                    self.find_quoted_span(name, periodics),
                    self.find_quoted_span(name, manuals),
                ));
            }
        }

        for name in manifest.tools.options.keys() {
            if !registry.contains(name) {
                let span = find_table_span(self.src, &format!("tools.options.{name}"));
                return Err(self.unknown_tool(name, registry, span));
            }
        }

        Ok(())
    }

    fn validate_list(
        &self,
        names: &[String],
        list_span: Option<SourceSpan>,
        registry: &ToolRegistry,
    ) -> Result<()> {
        for (i, name) in names.iter().enumerate() {
            if !registry.contains(name) {
                let span = self.find_quoted_span(name, list_span);
                return Err(self.unknown_tool(name, registry, span));
            }
            if names[..i].contains(name) {
                let first = self.find_quoted_span(name, list_span);
                return Err(self.source.validation_error(
                    format!("tool '{name}' is listed twice"),
                    self.find_quoted_span(name, first.map(|s| (s.offset() + 1, 0).into())),
                ));
            }
        }
        Ok(())
    }

    fn unknown_tool(
        &self,
        name: &str,
        registry: &ToolRegistry,
        span: Option<SourceSpan>,
    ) -> Box<crate::Error> {
        let known = registry.names().collect::<Vec<_>>().join(", ");
        self.source.unknown_tool_error(name, known, span)
    }
}

pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(value) = trimmed
            .strip_prefix(key)
            .and_then(|rest| rest.trim_start().strip_prefix('='))
        {
            let value = value.trim_start();
            let start = offset + line.len() - value.len();
            return Some(SourceSpan::from((start, value.trim_end().len())));
        }
        offset += line.len();
    }
    None
}

fn find_quoted_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    let quoted = format!("\"{name}\"");
    let pos = src.get(from..)?.find(&quoted)? + from;
    Some(SourceSpan::from((pos, quoted.len())))
}

fn find_table_span(src: &str, table: &str) -> Option<SourceSpan> {
    let header = format!("[{table}]");
    src.find(&header)
        .map(|pos| SourceSpan::from((pos, header.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[compiler]\nentry = 3\n";
        let span = find_key_span(src, "entry").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "3");
    }

    #[test]
    fn test_find_key_span_ignores_prefixed_keys() {
        let src = "entry_point = 1\n  entry= 2\n";
        let span = find_key_span(src, "entry").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "2");
    }

    #[test]
    fn test_find_quoted_span_after() {
        let src = r#"periodics = ["soa"]
manuals = ["soa"]"#;
        let manuals = find_key_span(src, "manuals").unwrap();
        let span = find_quoted_span(src, "soa", manuals.offset()).unwrap();
        assert_eq!(span.offset(), src.rfind("\"soa\"").unwrap());
    }
}
