//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod clear;
mod compile;
mod generate;
mod output;
mod prepare;
mod tools;

pub use clear::ClearReport;
pub use compile::CompileReport;
pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
pub use prepare::PrepareReport;
pub use tools::{ToolInfo, ToolRole, ToolsReport};
