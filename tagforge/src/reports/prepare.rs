//! Prepare report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from preparing an empty header.
#[derive(Debug)]
pub struct PrepareReport {
    pub path: PathBuf,
    /// False when an existing header was left alone.
    pub written: bool,
}

impl Report for PrepareReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        if self.written {
            out.section("Prepared");
            out.added_item(&path);
        } else {
            out.warning(&format!(
                "'{path}' already exists, pass --force to replace it"
            ));
        }
    }
}
