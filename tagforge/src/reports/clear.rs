//! Clear report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from clearing generated files.
#[derive(Debug)]
pub struct ClearReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Project root, paths are shown relative to it.
    pub root: PathBuf,
    /// Deleted files and directories.
    pub removed: Vec<PathBuf>,
}

impl Report for ClearReport {
    fn render(&self, out: &mut dyn Output) {
        if self.removed.is_empty() {
            out.preformatted("Nothing to clear.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        for path in &self.removed {
            let path = path.strip_prefix(&self.root).unwrap_or(path);
            out.removed_item(&path.display().to_string());
        }
    }
}
