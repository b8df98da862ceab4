use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ToolsCommand {}

impl ToolsCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        ops::tools(project.manifest()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
