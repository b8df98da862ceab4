use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_project;
use crate::{
    ops::{self, prepare::PrepareOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PrepareCommand {
    /// Header name, without directory or extension (e.g. `repr`)
    pub header: String,

    /// Replace the header if it already exists
    #[arg(short, long)]
    pub force: bool,
}

impl PrepareCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        let report = ops::prepare(
            &project,
            PrepareOptions {
                header: &self.header,
                force: self.force,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
