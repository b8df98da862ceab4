//! Tag collector.
//!
//! Finds declarations of the requested kinds that carry a requested tag.
//! Containers (namespaces, records, `extern` blocks, the translation unit)
//! are always descended into, whatever their own tag state, and tags never
//! inherit: only a node's own attribute markers count.

use tagforge_ast::{Node, NodeKind};
use tracing::debug;

use crate::{Error, Result};

/// Collect the nodes under `root` whose kind is in `kinds` and that are
/// directly tagged with one of `tags`.
///
/// Results are in depth-first pre-order, i.e. source declaration order.
/// Tags are matched case-insensitively. Every kind must be a declaration
/// kind (`*_decl`), and at least one tag is required.
///
/// # Example
///
/// ```
/// use tagforge_ast::{Node, NodeKind, Tree};
/// use tagforge_codegen::collect_tagged;
///
/// let tree = Tree::new(
///     Node::translation_unit("main.cpp").with_child(
///         Node::new(NodeKind::Namespace, "geo")
///             .with_child(Node::new(NodeKind::StructDecl, "Point").with_tag("Printable")),
///     ),
/// );
///
/// let found = collect_tagged(tree.root(), &["printable"], &[NodeKind::StructDecl])?;
/// assert_eq!(found[0].qualified_name(), "geo::Point");
/// # Ok::<(), tagforge_codegen::Error>(())
/// ```
pub fn collect_tagged<'t>(root: &'t Node, tags: &[&str], kinds: &[NodeKind]) -> Result<Vec<&'t Node>> {
    if tags.iter().all(|t| t.trim().is_empty()) {
        return Err(Error::InvalidInput("no tag to collect".to_string()));
    }
    if let Some(kind) = kinds.iter().find(|k| !k.is_declaration()) {
        return Err(Error::InvalidInput(format!(
            "`{kind}` is not a declaration kind and cannot carry tags"
        )));
    }

    let mut found = Vec::new();
    visit(root, tags, kinds, &mut found);
    debug!(tags = ?tags, count = found.len(), "collected tagged declarations");
    Ok(found)
}

fn visit<'t>(node: &'t Node, tags: &[&str], kinds: &[NodeKind], found: &mut Vec<&'t Node>) {
    if kinds.contains(node.kind()) && node.tags().contains_any(tags) {
        found.push(node);
    }
    if node.kind().is_container() {
        for child in node.children() {
            visit(child, tags, kinds, found);
        }
    }
}
