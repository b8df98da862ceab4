//! A manifest resolved against its project directory.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use tagforge_codegen::{OutputLayout, RunConfig};
use tracing::debug;

use crate::{Manifest, Result, TagforgeToml, sources};

/// Everything a command needs to know about the project, with defaults
/// applied and sources discovered.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    name: String,
    manifest: Manifest,
    sources: Vec<PathBuf>,
}

impl Project {
    /// Resolve `file` against `root`, discovering sources when the manifest
    /// does not list them.
    pub fn resolve(file: &TagforgeToml, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let manifest = file.manifest().clone();
        let compiler = &manifest.compiler;

        let sources = match &compiler.sources {
            Some(sources) => sources.clone(),
            None => sources::discover(
                &root,
                compiler.cpp,
                &[
                    manifest.project.gen_dir.as_path(),
                    manifest.project.output_dir.as_path(),
                ],
            )?,
        };
        debug!(count = sources.len(), "sources");

        if !sources.is_empty() && compiler.entry >= sources.len() {
            let ctx = file.source_context();
            let span = crate::manifest::ParseContext::new(file.content(), ctx.filename())
                .find_key_span("entry");
            return Err(ctx.entry_out_of_range_error(compiler.entry, sources.len(), span));
        }

        Ok(Self {
            name: manifest.name_or(&root),
            root,
            manifest,
            sources,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Source files, relative to the root.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// The source handed to the external parse step.
    pub fn entry_source(&self) -> Option<&Path> {
        self.sources
            .get(self.manifest.compiler.entry)
            .map(PathBuf::as_path)
    }

    pub fn gen_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.project.gen_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.project.output_dir)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.output_dir().join(format!("{}.out", self.name))
    }

    pub fn ast_dump(&self) -> PathBuf {
        self.root.join(self.manifest.ast_dump())
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.tools.templates)
    }

    pub fn header_path(&self, header: &str) -> PathBuf {
        self.root.join(self.manifest.header_path(header))
    }

    pub fn output_layout(&self) -> OutputLayout {
        OutputLayout::new(self.gen_dir())
            .with_extension(&self.manifest.project.extension)
            .with_namespace(&self.manifest.project.namespace)
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.output_layout())
            .with_write_policy(self.manifest.tools.write_policy.into())
    }

    /// `<cc> <sources...> -o <output_dir>/<name>.out <flags...>`, run from
    /// the project root.
    pub fn compile_command(&self) -> CompileCommand {
        let mut args: Vec<String> = self
            .sources
            .iter()
            .map(|source| source.display().to_string())
            .collect();
        args.push("-o".to_string());
        args.push(
            self.manifest
                .project
                .output_dir
                .join(format!("{}.out", self.name))
                .display()
                .to_string(),
        );
        args.extend(self.manifest.compiler.flags.iter().cloned());

        CompileCommand {
            program: self.manifest.compiler.program().to_string(),
            args,
        }
    }
}

/// A host compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
