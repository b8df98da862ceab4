//! Manifest types and parsing for tagforge.toml files.

mod file;
mod parse;
mod validate;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub use file::TagforgeToml;
pub use parse::parse_manifest;
use serde::Deserialize;
use tagforge_codegen::WritePolicy;
use tagforge_tools::ToolOptions;
pub use validate::ParseContext;

/// Root manifest for tagforge.toml. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub project: ProjectConfig,
    pub compiler: CompilerConfig,
    pub ast: AstConfig,
    pub tools: ToolsConfig,
}

/// `[project]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name of the produced binary; the project directory name when unset.
    pub name: Option<String>,
    /// Where the compiler writes `<name>.out`.
    pub output_dir: PathBuf,
    /// Where generated headers go.
    pub gen_dir: PathBuf,
    /// Extension of generated headers, without the leading dot.
    pub extension: String,
    /// Namespace wrapping every generated header.
    pub namespace: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            output_dir: PathBuf::from("o"),
            gen_dir: PathBuf::from("g"),
            extension: "g.h".to_string(),
            namespace: "g".to_string(),
        }
    }
}

/// `[compiler]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub cc: String,
    /// Compile as C++ and pick up `*.cpp` sources.
    pub cpp: bool,
    pub flags: Vec<String>,
    /// Explicit source list; discovered from the project directory when unset.
    pub sources: Option<Vec<PathBuf>>,
    /// Index of the source handed to the AST provider.
    pub entry: usize,
}

impl CompilerConfig {
    /// The compiler to invoke: `gcc` becomes `g++` for C++ projects.
    pub fn program(&self) -> &str {
        if self.cpp && self.cc == "gcc" {
            "g++"
        } else {
            &self.cc
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            cc: "gcc".to_string(),
            cpp: true,
            flags: vec!["-std=c++17".to_string(), "-Wno-attributes".to_string()],
            sources: None,
            entry: 0,
        }
    }
}

/// `[ast]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AstConfig {
    /// JSON dump written by the external parse step; `<gen_dir>/ast.json`
    /// when unset.
    pub dump: Option<PathBuf>,
}

/// `[tools]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Tools run on every build, in order.
    pub periodics: Vec<String>,
    /// Tools run only through `apply`.
    pub manuals: Vec<String>,
    /// Project templates, looked up before the built-in ones.
    pub templates: PathBuf,
    pub write_policy: WritePolicySetting,
    /// `[tools.options.<tool>]`
    pub options: HashMap<String, ToolOptions>,
}

impl ToolsConfig {
    /// Options of `tool`, empty when none are configured.
    pub fn options_for(&self, tool: &str) -> ToolOptions {
        self.options.get(tool).cloned().unwrap_or_default()
    }

    pub fn is_periodic(&self, tool: &str) -> bool {
        self.periodics.iter().any(|t| t == tool)
    }

    pub fn is_manual(&self, tool: &str) -> bool {
        self.manuals.iter().any(|t| t == tool)
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            periodics: Vec::new(),
            manuals: Vec::new(),
            templates: PathBuf::from("templates"),
            write_policy: WritePolicySetting::default(),
            options: HashMap::new(),
        }
    }
}

/// `write_policy = "staged" | "immediate"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicySetting {
    #[default]
    Staged,
    Immediate,
}

impl From<WritePolicySetting> for WritePolicy {
    fn from(setting: WritePolicySetting) -> Self {
        match setting {
            WritePolicySetting::Staged => WritePolicy::Staged,
            WritePolicySetting::Immediate => WritePolicy::Immediate,
        }
    }
}

impl Manifest {
    /// The AST dump path, relative to the project root.
    pub fn ast_dump(&self) -> PathBuf {
        self.ast
            .dump
            .clone()
            .unwrap_or_else(|| self.project.gen_dir.join("ast.json"))
    }

    /// The generated header path for `header`, relative to the project root.
    pub fn header_path(&self, header: &str) -> PathBuf {
        self.project
            .gen_dir
            .join(format!("{header}.{}", self.project.extension))
    }

    /// The project name, falling back to the name of `root`.
    pub fn name_or(&self, root: &Path) -> String {
        self.project.name.clone().unwrap_or_else(|| {
            root.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "main".to_string())
        })
    }
}
