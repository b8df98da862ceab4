//! Source file discovery.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Every `*.c` (and `*.cpp` when `cpp`) file below `root`, relative to
/// `root` and sorted. Hidden directories and the `skip` directories
/// (relative to `root`) are not entered.
pub fn discover(root: &Path, cpp: bool, skip: &[&Path]) -> Result<Vec<PathBuf>> {
    let skip: Vec<PathBuf> = skip.iter().map(|dir| root.join(dir)).collect();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // the root itself may be hidden (temporary directories are)
            entry.depth() == 0 || !(is_hidden(entry) || skip.iter().any(|dir| entry.path() == dir))
        });

    let mut sources = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| {
            Box::new(Error::Discover {
                root: root.to_path_buf(),
                source,
            })
        })?;
        if !entry.file_type().is_file() || !is_source(entry.path(), cpp) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            sources.push(relative.to_path_buf());
        }
    }

    sources.sort();
    Ok(sources)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_source(path: &Path, cpp: bool) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("c") => true,
        Some("cpp") => cpp,
        _ => false,
    }
}
