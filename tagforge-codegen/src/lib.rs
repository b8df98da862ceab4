//! Code generation engine for tagforge.
//!
//! Generation tools scan a shared declaration tree for tagged declarations
//! and assemble output through the builders in this crate; the orchestrator
//! runs tools in order and writes one file per generated unit.
//!
//! # Module Organization
//!
//! - [`collect`] - Tag collector (recursive, container-transparent, non-inheriting)
//! - [`builder`] - [`CodeBuilder`], [`Piece`] and the [`GeneratedUnit`] registry
//! - [`template`] - Process-wide template cache with macro-parameter injection
//! - [`tool`] - The [`Tool`] abstraction and its per-run [`ToolContext`]
//! - [`orchestrator`] - Runs tools against one tree and writes their units
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod collect;
mod error;
pub mod orchestrator;
pub mod template;
pub mod tool;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, GeneratedUnit, Indent, Piece};
pub use collect::collect_tagged;
pub use error::{Error, Result};
pub use orchestrator::{
    Orchestrator, OutputLayout, RunConfig, RunError, RunReport, RunState, WritePolicy,
    WrittenUnit,
};
pub use template::{LayeredTemplates, MemoryTemplates, TemplateCache, TemplateDir, TemplateSource};
pub use tool::{FnTool, Tool, ToolContext, tool_fn};
