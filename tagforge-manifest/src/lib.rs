//! `tagforge.toml` project manifests.
//!
//! ```toml
//! [project]
//! name = "lexer"          # defaults to the project directory name
//!
//! [compiler]
//! cc = "gcc"              # g++ when cpp = true
//! flags = ["-std=c++17", "-Wno-attributes"]
//!
//! [tools]
//! periodics = ["printable", "struct_repr"]
//! manuals = ["class_dump"]
//!
//! [tools.options.struct_repr]
//! skip_unregistered_records = true
//! ```
//!
//! A parsed [`Manifest`] is resolved against its directory into a
//! [`Project`], which hands out the orchestrator's [`RunConfig`] and the
//! compiler invocation.
//!
//! [`RunConfig`]: tagforge_codegen::RunConfig

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod project;
pub mod sources;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    AstConfig, CompilerConfig, Manifest, ParseContext, ProjectConfig, TagforgeToml, ToolsConfig,
    WritePolicySetting, parse_manifest,
};
pub use project::{CompileCommand, Project};
