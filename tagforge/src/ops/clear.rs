//! Clear operation - remove generated headers and build outputs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use tagforge_manifest::Project;
use tracing::debug;

use crate::reports::ClearReport;

/// Options for the clear operation.
pub struct ClearOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Delete every generated header in the generated directory and everything
/// in the output directory. Other files in the generated directory (such as
/// the AST dump) are kept.
pub fn clear(project: &Project, opts: ClearOptions) -> Result<ClearReport> {
    let suffix = format!(".{}", project.manifest().project.extension);
    let mut removed = Vec::new();

    for path in entries(&project.gen_dir())? {
        let generated = path.is_file()
            && path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(&suffix));
        if generated {
            removed.push(path);
        }
    }
    removed.extend(entries(&project.output_dir())?);

    if !opts.dry_run {
        for path in &removed {
            debug!(path = %path.display(), "remove");
            let result = if path.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            };
            result.wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
        }
    }

    Ok(ClearReport {
        dry_run: opts.dry_run,
        root: project.root().to_path_buf(),
        removed,
    })
}

/// Sorted entries of `dir`; nothing when it does not exist.
fn entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use tagforge_manifest::TagforgeToml;

    use super::*;

    #[test]
    fn test_clear_keeps_ast_dump() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path();
        for path in ["g/repr.g.h", "g/soa.g.h", "g/ast.json", "o/demo.out", "main.cpp"] {
            let path = root.join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let file = TagforgeToml::implicit(root.join(TagforgeToml::FILE_NAME));
        let project = Project::resolve(&file, root).unwrap();

        let preview = clear(&project, ClearOptions { dry_run: true }).unwrap();
        assert_eq!(preview.removed.len(), 3);
        assert!(root.join("g/repr.g.h").exists());

        let report = clear(&project, ClearOptions { dry_run: false }).unwrap();
        assert_eq!(
            report.removed,
            [
                root.join("g/repr.g.h"),
                root.join("g/soa.g.h"),
                root.join("o/demo.out"),
            ]
        );
        assert!(!root.join("g/repr.g.h").exists());
        assert!(!root.join("o/demo.out").exists());
        assert!(root.join("g/ast.json").exists());
        assert!(root.join("main.cpp").exists());
    }
}
