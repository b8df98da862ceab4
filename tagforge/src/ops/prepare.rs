//! Prepare operation - create an empty generated header.

use eyre::Result;
use tagforge_core::{File, Overwrite, WriteResult};
use tagforge_manifest::Project;

use crate::reports::PrepareReport;

/// Options for the prepare operation.
pub struct PrepareOptions<'a> {
    /// Header name, without directory or extension.
    pub header: &'a str,
    /// Replace an existing header.
    pub force: bool,
}

pub fn prepare(project: &Project, opts: PrepareOptions) -> Result<PrepareReport> {
    let path = project.header_path(opts.header);
    let overwrite = if opts.force {
        Overwrite::Always
    } else {
        Overwrite::IfMissing
    };

    let result = File::new(&path, project.output_layout().prepared())
        .with_overwrite(overwrite)
        .write()?;

    Ok(PrepareReport {
        path,
        written: result == WriteResult::Written,
    })
}
