//! Tool orchestrator.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tagforge_ast::{AstProvider, Tree};
use tagforge_core::{File, write_file};
use tracing::{debug, error, info, info_span};

use super::{RunConfig, RunError, RunReport, WritePolicy};
use crate::{TemplateCache, Tool, ToolContext};

/// A unit rendered and waiting to be written.
struct Rendered {
    tool: String,
    unit: String,
    path: PathBuf,
    content: String,
}

/// Runs generation tools against one tree and writes their units.
///
/// # Example
///
/// ```no_run
/// use tagforge_ast::JsonDumpProvider;
/// use tagforge_codegen::{MemoryTemplates, Orchestrator, RunConfig, TemplateCache, Tool};
///
/// let tools: Vec<Box<dyn Tool>> = Vec::new();
/// let orchestrator = Orchestrator::new(
///     RunConfig::default(),
///     TemplateCache::new(MemoryTemplates::new()),
/// );
///
/// let report = orchestrator.run(&tools, &JsonDumpProvider::new("g/ast.json"));
/// for written in report.written() {
///     println!("{}", written.path.display());
/// }
/// ```
#[derive(Debug)]
pub struct Orchestrator {
    config: RunConfig,
    templates: TemplateCache,
}

impl Orchestrator {
    pub fn new(config: RunConfig, templates: TemplateCache) -> Self {
        Self { config, templates }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.templates
    }

    /// Parse once with `provider`, then run `tools` in order.
    ///
    /// A parse failure aborts before any tool runs.
    pub fn run(&self, tools: &[Box<dyn Tool>], provider: &dyn AstProvider) -> RunReport {
        let report = RunReport::start();
        match provider.parse() {
            Ok(tree) => self.run_tools(tools, &tree, report),
            Err(e) => {
                error!(error = %e, "parse failed, no tool was run");
                report.abort(e.into())
            }
        }
    }

    /// Run `tools` in order against an already parsed tree.
    pub fn run_on(&self, tools: &[Box<dyn Tool>], tree: &Tree) -> RunReport {
        self.run_tools(tools, tree, RunReport::start())
    }

    fn run_tools(&self, tools: &[Box<dyn Tool>], tree: &Tree, mut report: RunReport) -> RunReport {
        let cx = ToolContext::new(tree, &self.templates);
        let layout = self.config.layout();
        let policy = self.config.write_policy();

        // unit name -> tool that generated it
        let mut owners: HashMap<String, String> = HashMap::new();
        let mut staged = Vec::new();

        for tool in tools {
            let span = info_span!("tool", name = tool.name());
            let _enter = span.enter();

            let units = match tool.transform(&cx) {
                Ok(units) => units,
                Err(e) => {
                    let err = RunError::tool(tool.name(), &e);
                    error!(error = %err, "tool failed, run aborted");
                    return report.abort(err);
                }
            };

            let mut rendered = Vec::with_capacity(units.len());
            for unit in &units {
                if let Some(owner) = owners.get(unit.name()) {
                    let err = RunError::Tool {
                        tool: tool.name().to_string(),
                        category: "DuplicateUnit",
                        message: format!(
                            "unit '{}' was already generated by tool '{owner}'",
                            unit.name()
                        ),
                    };
                    error!(error = %err, "tool failed, run aborted");
                    return report.abort(err);
                }
                owners.insert(unit.name().to_string(), tool.name().to_string());

                let content = match layout.render(unit) {
                    Ok(content) => content,
                    Err(e) => {
                        let err = RunError::Tool {
                            tool: tool.name().to_string(),
                            category: e.category(),
                            message: e.to_string(),
                        };
                        error!(error = %err, "tool failed, run aborted");
                        return report.abort(err);
                    }
                };
                debug!(unit = unit.name(), pieces = unit.len(), "unit rendered");

                rendered.push(Rendered {
                    tool: tool.name().to_string(),
                    unit: unit.name().to_string(),
                    path: layout.path_for(unit.name()),
                    content,
                });
            }

            match policy {
                WritePolicy::Immediate => {
                    for unit in rendered {
                        if let Err(err) = write(&unit, &mut report) {
                            return report.abort(err);
                        }
                    }
                }
                WritePolicy::Staged => staged.extend(rendered),
            }
        }

        commit(staged, report)
    }
}

fn write(unit: &Rendered, report: &mut RunReport) -> Result<(), RunError> {
    File::new(unit.path.clone(), unit.content.as_str())
        .write()
        .map_err(|e| write_error(&unit.path, &e))?;

    wrote(unit, report);
    Ok(())
}

/// Write staged units to sibling temp files, then rename each into place.
///
/// A failed temp write removes the temp files written so far; no destination
/// path is touched.
fn commit(staged: Vec<Rendered>, mut report: RunReport) -> RunReport {
    let mut temps: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for unit in &staged {
        let temp = temp_path(&unit.path);
        if let Err(e) = write_file(&temp, &unit.content) {
            discard(&temps);
            return report.abort(write_error(&unit.path, &e));
        }
        temps.push(temp);
    }

    for (i, (unit, temp)) in staged.iter().zip(&temps).enumerate() {
        if let Err(e) = fs::rename(temp, &unit.path) {
            discard(&temps[i..]);
            return report.abort(write_error(&unit.path, &eyre::Report::new(e)));
        }
        wrote(unit, &mut report);
    }

    info!(files = report.written().len(), "run completed");
    report.complete()
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn discard(temps: &[PathBuf]) {
    for temp in temps {
        if let Err(e) = fs::remove_file(temp) {
            debug!(path = %temp.display(), error = %e, "failed to remove temp file");
        }
    }
}

fn write_error(path: &Path, e: &eyre::Report) -> RunError {
    let err = RunError::Write {
        path: path.to_path_buf(),
        message: format!("{e:#}"),
    };
    error!(error = %err, "write failed, run aborted");
    err
}

fn wrote(unit: &Rendered, report: &mut RunReport) {
    info!(tool = %unit.tool, path = %unit.path.display(), "wrote {}", unit.unit);
    report.record(&unit.tool, &unit.unit, &unit.path);
}
