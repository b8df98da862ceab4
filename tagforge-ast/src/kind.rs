//! Declaration categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The category of a node in the declaration tree.
///
/// Wire names are the lowercase cursor kind spellings of the parser
/// (`struct_decl`, `annotate_attr`, ...). Parsing is case-insensitive and
/// never fails: unknown spellings are kept as [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    TranslationUnit,
    Namespace,
    /// `extern "C"` blocks.
    LinkageSpec,
    ClassDecl,
    StructDecl,
    UnionDecl,
    EnumDecl,
    EnumConstantDecl,
    FieldDecl,
    FunctionDecl,
    VarDecl,
    TypedefDecl,
    CxxMethod,
    /// An attribute marker; its text is the tag.
    AnnotateAttr,
    Other(String),
}

impl NodeKind {
    /// The lowercase wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TranslationUnit => "translation_unit",
            Self::Namespace => "namespace",
            Self::LinkageSpec => "linkage_spec",
            Self::ClassDecl => "class_decl",
            Self::StructDecl => "struct_decl",
            Self::UnionDecl => "union_decl",
            Self::EnumDecl => "enum_decl",
            Self::EnumConstantDecl => "enum_constant_decl",
            Self::FieldDecl => "field_decl",
            Self::FunctionDecl => "function_decl",
            Self::VarDecl => "var_decl",
            Self::TypedefDecl => "typedef_decl",
            Self::CxxMethod => "cxx_method",
            Self::AnnotateAttr => "annotate_attr",
            Self::Other(name) => name,
        }
    }

    /// Containers are always traversed, whatever their own tag state.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::ClassDecl
                | Self::StructDecl
                | Self::UnionDecl
                | Self::Namespace
                | Self::TranslationUnit
                | Self::LinkageSpec
        )
    }

    /// Whether nodes of this kind can carry tags.
    ///
    /// Only `*_decl` kinds support attribute markers.
    pub fn is_declaration(&self) -> bool {
        self.as_str().ends_with("_decl")
    }

    /// Record-like declarations that can be the target of a field's type.
    pub fn is_record(&self) -> bool {
        matches!(
            self,
            Self::ClassDecl | Self::StructDecl | Self::UnionDecl | Self::EnumDecl
        )
    }

    /// Whether a node of this kind names a scope in qualified names.
    pub(crate) fn is_scoping(&self) -> bool {
        !matches!(self, Self::TranslationUnit | Self::AnnotateAttr)
    }
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "translation_unit" => Self::TranslationUnit,
            "namespace" => Self::Namespace,
            "linkage_spec" => Self::LinkageSpec,
            "class_decl" => Self::ClassDecl,
            "struct_decl" => Self::StructDecl,
            "union_decl" => Self::UnionDecl,
            "enum_decl" => Self::EnumDecl,
            "enum_constant_decl" => Self::EnumConstantDecl,
            "field_decl" => Self::FieldDecl,
            "function_decl" => Self::FunctionDecl,
            "var_decl" => Self::VarDecl,
            "typedef_decl" => Self::TypedefDecl,
            "cxx_method" => Self::CxxMethod,
            "annotate_attr" => Self::AnnotateAttr,
            _ => Self::Other(lower),
        }
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(NodeKind::from("STRUCT_DECL"), NodeKind::StructDecl);
        assert_eq!(NodeKind::from("Namespace"), NodeKind::Namespace);
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let kind = NodeKind::from("Concept_Decl");
        assert_eq!(kind, NodeKind::Other("concept_decl".to_string()));
        assert!(kind.is_declaration());
    }

    #[test]
    fn test_containers() {
        assert!(NodeKind::StructDecl.is_container());
        assert!(NodeKind::LinkageSpec.is_container());
        assert!(!NodeKind::EnumDecl.is_container());
        assert!(!NodeKind::FieldDecl.is_container());
    }

    #[test]
    fn test_declaration_kinds() {
        assert!(NodeKind::StructDecl.is_declaration());
        assert!(NodeKind::EnumConstantDecl.is_declaration());
        assert!(!NodeKind::Namespace.is_declaration());
        assert!(!NodeKind::TranslationUnit.is_declaration());
        assert!(!NodeKind::CxxMethod.is_declaration());
    }

    #[test]
    fn test_serde_round_names() {
        let kind: NodeKind = serde_json::from_str("\"enum_decl\"").unwrap();
        assert_eq!(kind, NodeKind::EnumDecl);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"enum_decl\"");
    }
}
