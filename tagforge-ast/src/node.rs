//! Declaration nodes.

use serde::{Deserialize, Serialize};

use crate::{NodeKind, TagSet, TypeInfo, tree::SCOPE_SEPARATOR};

/// One node of the declaration tree.
///
/// Nodes are deserialized from the parser dump (or assembled with the
/// `with_*` builders in tests) and normalized once when wrapped in a
/// [`Tree`](crate::Tree): the qualified name and tag set are only meaningful
/// after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    #[serde(default)]
    name: String,
    #[serde(skip)]
    qualified_name: String,
    #[serde(skip)]
    tags: TagSet,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    ty: Option<TypeInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            qualified_name: String::new(),
            tags: TagSet::new(),
            ty: None,
            children: Vec::new(),
        }
    }

    /// A translation unit root.
    pub fn translation_unit(name: impl Into<String>) -> Self {
        Self::new(NodeKind::TranslationUnit, name)
    }

    /// A field declaration of the given type.
    pub fn field(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self::new(NodeKind::FieldDecl, name).with_type(ty)
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach an attribute marker child carrying `tag`.
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_child(Node::new(NodeKind::AnnotateAttr, tag))
    }

    pub fn with_type(mut self, ty: TypeInfo) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the enclosing declarations and this one, joined by `::`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn ty(&self) -> Option<&TypeInfo> {
        self.ty.as_ref()
    }

    /// Tags attached directly to this node.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The subset of `tags` attached directly to this node, in argument order.
    pub fn matching_tags<'a>(&self, tags: &[&'a str]) -> Vec<&'a str> {
        tags.iter()
            .copied()
            .filter(|t| self.tags.contains(t))
            .collect()
    }

    /// Raw texts of the direct attribute marker children.
    pub fn attribute_texts(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .filter(|c| c.kind == NodeKind::AnnotateAttr)
            .map(|c| c.name.as_str())
    }

    /// An unnamed record (`struct { ... } x;`), which has no qualified name.
    pub fn is_anonymous(&self) -> bool {
        self.kind.is_record() && self.name.is_empty()
    }

    pub fn is_declaration(&self) -> bool {
        self.kind.is_declaration()
    }

    /// Direct field declarations, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Node> {
        self.children_of_kind(NodeKind::FieldDecl)
    }

    /// Direct enumerators, in declaration order.
    pub fn enum_constants(&self) -> impl Iterator<Item = &Node> {
        self.children_of_kind(NodeKind::EnumConstantDecl)
    }

    fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Compute the qualified name and tag set of this subtree.
    ///
    /// Unnamed namespaces and linkage blocks are transparent. Anonymous
    /// records get an empty name; their members stay in the enclosing scope.
    pub(crate) fn normalize(&mut self, scope: &str) {
        let (own, inner) = if self.kind.is_scoping() && !self.name.is_empty() {
            let name = if scope.is_empty() {
                self.name.clone()
            } else {
                format!("{scope}{SCOPE_SEPARATOR}{}", self.name)
            };
            (name.clone(), name)
        } else if self.is_anonymous() {
            (String::new(), scope.to_string())
        } else {
            (scope.to_string(), scope.to_string())
        };
        self.qualified_name = own;

        self.tags = self.attribute_texts().collect();

        for child in &mut self.children {
            child.normalize(&inner);
        }
    }
}
