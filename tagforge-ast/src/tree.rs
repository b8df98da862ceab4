//! Normalized declaration tree.

use std::{collections::HashMap, path::Path};

use crate::{Node, NodeKind, ParseError};

/// Separator between scope names in qualified names.
pub const SCOPE_SEPARATOR: &str = "::";

/// A parsed translation unit, normalized and indexed.
///
/// A tree is built once per run and shared read-only by every tool.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    /// Qualified record name -> child index path from the root.
    records: HashMap<String, Vec<usize>>,
}

impl Tree {
    /// Normalize `root` and index its record declarations.
    pub fn new(mut root: Node) -> Self {
        root.normalize("");

        let mut records = HashMap::new();
        let mut path = Vec::new();
        index_records(&root, &mut path, &mut records);

        Self { root, records }
    }

    /// Load a tree from a JSON dump.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let root: Node =
            serde_json::from_str(json).map_err(|source| ParseError::Json { path: None, source })?;
        Self::checked(root)
    }

    /// Load a tree from a JSON dump file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Node = serde_json::from_str(&content).map_err(|source| ParseError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Self::checked(root)
    }

    fn checked(root: Node) -> Result<Self, ParseError> {
        if *root.kind() != NodeKind::TranslationUnit {
            return Err(ParseError::UnexpectedRoot {
                found: root.kind().to_string(),
            });
        }
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolve a record declaration (class, struct, union, enum) by qualified name.
    ///
    /// When a record is both forward-declared and defined, the definition wins.
    pub fn record(&self, qualified_name: &str) -> Option<&Node> {
        let path = self.records.get(qualified_name)?;
        let mut node = &self.root;
        for &i in path {
            node = node.children().get(i)?;
        }
        Some(node)
    }
}

fn index_records(node: &Node, path: &mut Vec<usize>, records: &mut HashMap<String, Vec<usize>>) {
    if node.kind().is_record() && !node.qualified_name().is_empty() {
        let is_definition = node
            .children()
            .iter()
            .any(|c| *c.kind() != NodeKind::AnnotateAttr);
        let keep_existing = records.contains_key(node.qualified_name()) && !is_definition;
        if !keep_existing {
            records.insert(node.qualified_name().to_string(), path.clone());
        }
    }

    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        index_records(child, path, records);
        path.pop();
    }
}
