//! Type descriptors attached to typed declarations (fields, variables).

use serde::{Deserialize, Serialize};

/// Coarse classification of a canonical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Bool,
    /// Any of `char`, `signed char`, `unsigned char`.
    Char,
    Pointer,
    /// Class, struct or union.
    Record,
    #[default]
    #[serde(other)]
    Other,
}

/// Type of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// The type as written in source (`uint8_t`, `SubPerson`).
    pub spelling: String,
    /// The canonical spelling (`unsigned char`, `Person::SubPerson`).
    pub canonical: String,
    #[serde(default)]
    pub category: TypeCategory,
    /// Qualified name of the declaration the spelling refers to, if any
    /// (`int8_t` for a typedef, `std::string` for an alias).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointee: Option<Box<TypeInfo>>,
}

impl TypeInfo {
    pub fn new(spelling: impl Into<String>, category: TypeCategory) -> Self {
        let spelling = spelling.into();
        Self {
            canonical: spelling.clone(),
            spelling,
            category,
            declaration: None,
            pointee: None,
        }
    }

    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = canonical.into();
        self
    }

    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    pub fn with_pointee(mut self, pointee: TypeInfo) -> Self {
        self.pointee = Some(Box::new(pointee));
        self
    }

    /// The alias or record name the type was spelled through, falling back to
    /// the written spelling.
    pub fn alias(&self) -> &str {
        self.declaration.as_deref().unwrap_or(&self.spelling)
    }

    /// `char*`-like pointers.
    pub fn is_c_string(&self) -> bool {
        self.category == TypeCategory::Pointer
            && self
                .pointee
                .as_ref()
                .is_some_and(|p| p.category == TypeCategory::Char)
    }

    /// `std::string` (canonically `std::basic_string<char>`).
    pub fn is_std_string(&self) -> bool {
        self.category == TypeCategory::Record
            && self.alias() == "std::string"
            && self.canonical == "std::basic_string<char>"
    }
}
