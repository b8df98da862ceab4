//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use tagforge_tools::ToolRegistry;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "tagforge.toml", &ToolRegistry::builtin())
    }
}

impl Manifest {
    /// Parse a tagforge.toml file, validating tool names against the
    /// built-in registry.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(
            &content,
            &path.display().to_string(),
            &ToolRegistry::builtin(),
        )
    }

    /// Parse from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename, &ToolRegistry::builtin())
    }
}

/// Parse and validate a manifest against `registry`.
pub fn parse_manifest(content: &str, filename: &str, registry: &ToolRegistry) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ParseContext::new(content, filename).validate(&manifest, registry)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Result<Manifest> {
        src.parse()
    }

    #[test]
    fn test_parse_tools() {
        let manifest = parse(
            r#"
            [tools]
            periodics = ["printable", "struct_repr"]
            manuals = ["class_dump"]
            write_policy = "immediate"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.tools.periodics, ["printable", "struct_repr"]);
        assert!(manifest.tools.is_manual("class_dump"));
        assert_eq!(
            tagforge_codegen::WritePolicy::from(manifest.tools.write_policy),
            tagforge_codegen::WritePolicy::Immediate
        );
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = parse("[tools\nperiodics = []").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = parse("[cli]\nname = \"x\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_tool() {
        let src = "[tools]\nperiodics = [\"printable\", \"reflect\"]\n";
        let err = parse(src).unwrap_err();
        let Error::UnknownTool { name, span, known, .. } = *err else {
            panic!("expected UnknownTool, got {err:?}");
        };
        assert_eq!(name, "reflect");
        assert!(known.contains("struct_repr"));
        let span = span.unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"reflect\"");
    }

    #[test]
    fn test_unknown_tool_options() {
        let err = parse("[tools.options.reflect]\nx = 1\n").unwrap_err();
        assert!(matches!(*err, Error::UnknownTool { ref name, span: Some(_), .. } if name == "reflect"));
    }

    #[test]
    fn test_tool_both_periodic_and_manual() {
        let src = "[tools]\nperiodics = [\"soa\"]\nmanuals = [\"soa\"]\n";
        let err = parse(src).unwrap_err();
        let Error::ConflictingTool {
            name,
            periodic_span,
            manual_span,
            ..
        } = *err
        else {
            panic!("expected ConflictingTool, got {err:?}");
        };
        assert_eq!(name, "soa");
        assert!(periodic_span.unwrap().offset() < manual_span.unwrap().offset());
    }

    #[test]
    fn test_tool_listed_twice() {
        let err = parse("[tools]\nperiodics = [\"soa\", \"soa\"]\n").unwrap_err();
        assert_eq!(err.to_string(), "tool 'soa' is listed twice");
    }

    #[test]
    fn test_empty_extension() {
        let src = "[project]\nextension = \"\"\n";
        let err = parse(src).unwrap_err();
        let Error::Validation { message, span, .. } = *err else {
            panic!("expected Validation, got {err:?}");
        };
        assert_eq!(message, "extension must not be empty");
        assert_eq!(span.unwrap().offset(), src.find("\"\"").unwrap());
    }

    #[test]
    fn test_custom_registry() {
        let registry = ToolRegistry::new();
        let err = parse_manifest("[tools]\nperiodics = [\"printable\"]", "t.toml", &registry)
            .unwrap_err();
        assert!(matches!(*err, Error::UnknownTool { .. }));
    }
}
