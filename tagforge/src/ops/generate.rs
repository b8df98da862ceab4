//! Generate operation - run tools over the project's declaration tree.

use eyre::Result;
use tagforge_ast::JsonDumpProvider;
use tagforge_codegen::{LayeredTemplates, Orchestrator, TemplateCache, TemplateDir, Tool};
use tagforge_manifest::Project;
use tagforge_tools::{ToolRegistry, templates};
use tracing::{debug, info};

use crate::reports::GenerateReport;

/// Build the named tools with their manifest options.
pub fn instantiate(project: &Project, names: &[String]) -> Result<Vec<Box<dyn Tool>>> {
    let registry = ToolRegistry::builtin();
    let tools = &project.manifest().tools;
    names
        .iter()
        .map(|name| Ok(registry.create(name, &tools.options_for(name))?))
        .collect()
}

/// Run `tools` in order against the project's AST dump.
pub fn generate(project: &Project, tools: &[Box<dyn Tool>]) -> Result<GenerateReport> {
    let templates = LayeredTemplates::new()
        .layer(TemplateDir::new(project.template_dir()))
        .layer(templates::builtin());
    let orchestrator = Orchestrator::new(project.run_config(), TemplateCache::new(templates));

    let provider = JsonDumpProvider::new(project.ast_dump());
    debug!(dump = %provider.path().display(), "declaration tree");
    info!(count = tools.len(), "running tools");

    let run = orchestrator.run(tools, &provider);
    Ok(GenerateReport {
        root: project.root().to_path_buf(),
        run,
    })
}
