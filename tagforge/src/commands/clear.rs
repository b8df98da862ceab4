use std::path::Path;

use clap::Args;
use eyre::Result;

use super::load_project;
use crate::{
    ops::{self, clear::ClearOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ClearCommand {
    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl ClearCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        let report = ops::clear(
            &project,
            ClearOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
