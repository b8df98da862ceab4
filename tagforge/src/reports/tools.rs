//! Tools report data structures.

use std::fmt;

use super::output::{Output, Report};

/// How the manifest schedules a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRole {
    Periodic,
    Manual,
    Unused,
}

impl fmt::Display for ToolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToolRole::Periodic => "periodic",
            ToolRole::Manual => "manual",
            ToolRole::Unused => "-",
        })
    }
}

#[derive(Debug)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub role: ToolRole,
}

/// Report data listing registered tools.
#[derive(Debug)]
pub struct ToolsReport {
    pub tools: Vec<ToolInfo>,
}

impl Report for ToolsReport {
    fn render(&self, out: &mut dyn Output) {
        let width = self.tools.iter().map(|t| t.name.len()).max().unwrap_or(0);

        out.section(&format!("Tools ({})", self.tools.len()));
        for tool in &self.tools {
            out.list_item(&format!(
                "{:width$}  {:8}  {}",
                tool.name,
                tool.role.to_string(),
                tool.description
            ));
        }
    }
}
