use std::path::Path;

use clap::Args;
use eyre::{Result, bail};

use super::load_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ApplyCommand {
    /// Tool to run, or `.` for every manual tool
    pub tool: String,
}

impl ApplyCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        let names = self.selected(&project.manifest().tools.manuals)?;

        let tools = ops::instantiate(&project, &names)?;
        let report = ops::generate(&project, &tools)?;
        report.render(&mut TerminalOutput::new());
        report.into_result()
    }

    fn selected(&self, manuals: &[String]) -> Result<Vec<String>> {
        if self.tool == "." {
            if manuals.is_empty() {
                bail!("no manual tools configured in [tools].manuals");
            }
            return Ok(manuals.to_vec());
        }
        // unknown names are reported by the registry, with the known list
        Ok(vec![self.tool.clone()])
    }
}
