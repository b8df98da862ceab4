//! Tools operation - list registered tools and how the project uses them.

use tagforge_manifest::Manifest;
use tagforge_tools::ToolRegistry;

use crate::reports::{ToolInfo, ToolRole, ToolsReport};

pub fn tools(manifest: &Manifest) -> ToolsReport {
    let config = &manifest.tools;
    let tools = ToolRegistry::builtin()
        .descriptions()
        .map(|(name, description)| ToolInfo {
            name: name.to_string(),
            description: description.to_string(),
            role: if config.is_periodic(name) {
                ToolRole::Periodic
            } else if config.is_manual(name) {
                ToolRole::Manual
            } else {
                ToolRole::Unused
            },
        })
        .collect();

    ToolsReport { tools }
}
