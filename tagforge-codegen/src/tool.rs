//! Generation tool abstraction.

use std::fmt;

use tagforge_ast::{Node, NodeKind, Tree};
use tracing::debug;

use crate::{GeneratedUnit, Piece, Result, TemplateCache, collect_tagged};

/// What a tool sees during one run: the shared tree and the template cache.
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    tree: &'a Tree,
    templates: &'a TemplateCache,
}

impl<'a> ToolContext<'a> {
    pub fn new(tree: &'a Tree, templates: &'a TemplateCache) -> Self {
        Self { tree, templates }
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn root(&self) -> &'a Node {
        self.tree.root()
    }

    /// [`collect_tagged`] from the root.
    pub fn collect(&self, tags: &[&str], kinds: &[NodeKind]) -> Result<Vec<&'a Node>> {
        collect_tagged(self.tree.root(), tags, kinds)
    }

    /// [`ToolContext::collect`] without anonymous records, which have no
    /// name to generate code against.
    pub fn collect_named(&self, tags: &[&str], kinds: &[NodeKind]) -> Result<Vec<&'a Node>> {
        let mut nodes = self.collect(tags, kinds)?;
        nodes.retain(|node| {
            let named = !node.is_anonymous();
            if !named {
                debug!(kind = %node.kind(), "skipping anonymous record");
            }
            named
        });
        Ok(nodes)
    }

    /// [`TemplateCache::template`].
    pub fn template(&self, name: &str, params: &[(&str, &str)]) -> Result<Piece> {
        self.templates.template(name, params)
    }
}

/// A generation tool.
///
/// Tools are pure with respect to external state: they read the tree and
/// return the units they generated. Files are written by the orchestrator.
///
/// # Example
///
/// ```
/// use tagforge_ast::NodeKind;
/// use tagforge_codegen::{GeneratedUnit, Piece, Tool, ToolContext};
///
/// struct Counter;
///
/// impl Tool for Counter {
///     fn name(&self) -> &str {
///         "counter"
///     }
///
///     fn description(&self) -> &str {
///         "Counts tagged structs"
///     }
///
///     fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
///         let found = cx.collect(&["counted"], &[NodeKind::StructDecl])?;
///         let mut unit = GeneratedUnit::new("count");
///         unit.register(
///             "COUNT",
///             Piece::declaration(format!("static int const COUNT = {}", found.len())),
///         )?;
///         Ok(vec![unit])
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// Name used in the manifest, the command line and failure reports.
    fn name(&self) -> &str;

    /// One-line human-readable description.
    fn description(&self) -> &str;

    /// Generate units from the tree.
    ///
    /// # Errors
    ///
    /// Any error aborts the run. Errors that originate from
    /// [`Error`](crate::Error) are reported with their category.
    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>>;
}

/// A tool backed by a closure.
pub struct FnTool<F> {
    name: String,
    description: String,
    transform: F,
}

impl<F> FnTool<F> {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl<F> Tool for FnTool<F>
where
    F: Fn(&ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        (self.transform)(cx)
    }
}

impl<F> fmt::Debug for FnTool<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool").field("name", &self.name).finish()
    }
}

/// Wrap a closure as a [`Tool`].
pub fn tool_fn<F>(name: impl Into<String>, transform: F) -> FnTool<F>
where
    F: Fn(&ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> + Send + Sync,
{
    FnTool {
        name: name.into(),
        description: String::new(),
        transform,
    }
}
