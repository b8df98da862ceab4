use std::path::Path;

use clap::Args;
use eyre::Result;
use tagforge_manifest::Project;

use super::load_project;
use crate::{
    ops,
    reports::{CompileReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Only run the periodic tools, do not compile
    #[arg(long)]
    pub no_compile: bool,
}

impl BuildCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        if self.no_compile {
            return generate_periodics(&project);
        }
        build(&project).map(|_| ())
    }
}

/// Run the periodic tools, then compile. Shared with `run`.
pub(super) fn build(project: &Project) -> Result<CompileReport> {
    generate_periodics(project)?;

    let report = ops::compile(project)?;
    report.render(&mut TerminalOutput::new());
    Ok(report)
}

fn generate_periodics(project: &Project) -> Result<()> {
    let tools = ops::instantiate(project, &project.manifest().tools.periodics)?;
    let report = ops::generate(project, &tools)?;
    report.render(&mut TerminalOutput::new());
    report.into_result()
}
