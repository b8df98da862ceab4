//! Generate report data structures.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tagforge_codegen::{RunReport, RunState};

use super::output::{Output, Report};

/// Report data from one orchestrator run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root, paths are shown relative to it.
    pub root: PathBuf,
    pub run: RunReport,
}

impl GenerateReport {
    /// The run's failure, if it aborted.
    pub fn into_result(self) -> Result<()> {
        self.run
            .into_result()
            .map(|_| ())
            .wrap_err("generation aborted")
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let written = self.run.written();

        match self.run.state() {
            RunState::Aborted if written.is_empty() => return,
            RunState::Aborted => out.section("Written before abort"),
            _ if written.is_empty() => {
                out.preformatted("No units generated.");
                return;
            }
            _ => out.section("Generated"),
        }

        for unit in written {
            out.added_item(&format!(
                "{} ({})",
                self.relative(&unit.path).display(),
                unit.tool
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use tagforge_ast::{Node, Tree};
    use tagforge_codegen::{
        GeneratedUnit, MemoryTemplates, Orchestrator, OutputLayout, RunConfig, TemplateCache,
        tool_fn,
    };

    use super::*;
    use crate::reports::output::render_to_string;

    fn report(root: &Path, fail: bool) -> GenerateReport {
        let orchestrator = Orchestrator::new(
            RunConfig::new(OutputLayout::new(root.join("g"))),
            TemplateCache::new(MemoryTemplates::new()),
        );
        let tools: Vec<Box<dyn tagforge_codegen::Tool>> = vec![
            Box::new(tool_fn("printable", |_| Ok(vec![GeneratedUnit::new("printables")]))),
            Box::new(tool_fn("broken", move |_| {
                if fail {
                    eyre::bail!("no luck");
                }
                Ok(Vec::new())
            })),
        ];
        let tree = Tree::new(Node::translation_unit("main.cpp"));

        GenerateReport {
            root: root.to_path_buf(),
            run: orchestrator.run_on(&tools, &tree),
        }
    }

    #[test]
    fn test_render_completed() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = report(dir.path(), false);

        insta::assert_snapshot!(render_to_string(&report), @r"
        Generated:
          + g/printables.g.h (printable)
        ");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_render_aborted() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = report(dir.path(), true);

        assert_eq!(render_to_string(&report), "");

        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "generation aborted");
        assert!(format!("{err:#}").contains("tool 'broken' failed with Error: no luck"));
    }
}
