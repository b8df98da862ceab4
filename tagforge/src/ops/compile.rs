//! Compile operation - invoke the host compiler.

use std::process::Command;

use eyre::{Result, WrapErr, bail};
use tagforge_manifest::Project;
use tracing::info;

use crate::reports::CompileReport;

pub fn compile(project: &Project) -> Result<CompileReport> {
    if project.sources().is_empty() {
        bail!(
            "no sources found under '{}'",
            project.root().display()
        );
    }

    let output_dir = project.output_dir();
    std::fs::create_dir_all(&output_dir)
        .wrap_err_with(|| format!("failed to create '{}'", output_dir.display()))?;

    let command = project.compile_command();
    info!(%command, "compiling");

    let status = Command::new(&command.program)
        .args(&command.args)
        .current_dir(project.root())
        .status()
        .wrap_err_with(|| format!("failed to run '{}'", command.program))?;

    if !status.success() {
        bail!("{} failed ({status})", command.program);
    }

    Ok(CompileReport {
        command: command.to_string(),
        binary: project.binary_path(),
    })
}
