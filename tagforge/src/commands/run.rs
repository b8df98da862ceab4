use std::{path::Path, process::Command};

use clap::Args;
use eyre::{Result, WrapErr};
use tracing::info;

use super::{build::build, load_project};

#[derive(Args)]
pub struct RunCommand {
    /// Arguments to pass to the program
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl RunCommand {
    pub fn run(&self, config: &Path) -> Result<()> {
        let project = load_project(config);
        let report = build(&project)?;

        info!(binary = %report.binary.display(), "running");
        let status = Command::new(&report.binary)
            .args(&self.args)
            .status()
            .wrap_err_with(|| format!("failed to run '{}'", report.binary.display()))?;

        std::process::exit(status.code().unwrap_or(1));
    }
}
