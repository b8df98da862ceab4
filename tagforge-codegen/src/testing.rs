//! Test utilities for generation tools.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use tagforge_ast::{Node, NodeKind, Tree, TypeCategory, TypeInfo};

use crate::{MemoryTemplates, TemplateCache, ToolContext};

/// Call `f` with a context over `tree` and an empty template cache.
pub fn with_context<R>(tree: &Tree, f: impl FnOnce(&ToolContext<'_>) -> R) -> R {
    with_templates(tree, MemoryTemplates::new(), f)
}

/// Call `f` with a context over `tree` and a cache backed by `templates`.
pub fn with_templates<R>(
    tree: &Tree,
    templates: MemoryTemplates,
    f: impl FnOnce(&ToolContext<'_>) -> R,
) -> R {
    let cache = TemplateCache::new(templates);
    f(&ToolContext::new(tree, &cache))
}

/// `int` field.
pub fn int_field(name: &str) -> Node {
    Node::field(name, TypeInfo::new("int", TypeCategory::Other))
}

/// Field of record type `record`, declared as `record`.
pub fn record_field(name: &str, record: &str) -> Node {
    Node::field(
        name,
        TypeInfo::new(record, TypeCategory::Record).with_declaration(record),
    )
}

/// A struct declaration with the given tags and children.
pub fn tagged_struct(name: &str, tags: &[&str], children: impl IntoIterator<Item = Node>) -> Node {
    tags.iter()
        .fold(Node::new(NodeKind::StructDecl, name), |node, tag| {
            node.with_tag(*tag)
        })
        .with_children(children)
}

/// `struct Point { int x; int y; }` tagged with `tag`.
pub fn point_tree(tag: &str) -> Tree {
    Tree::new(Node::translation_unit("main.cpp").with_child(tagged_struct(
        "Point",
        &[tag],
        [int_field("x"), int_field("y")],
    )))
}
