//! Compile report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a host compiler run.
#[derive(Debug)]
pub struct CompileReport {
    /// The command line that was run.
    pub command: String,
    /// The produced executable.
    pub binary: PathBuf,
}

impl Report for CompileReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Compiled", &self.command);
        out.key_value("Binary", &self.binary.display().to_string());
    }
}
