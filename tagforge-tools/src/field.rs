//! Field classification shared by the printing tools.

use tagforge_ast::{Node, TypeCategory, TypeInfo};

/// How a field's value can be streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldClass<'a> {
    Bool,
    /// `int8_t`, printed as a number.
    Int8,
    /// `uint8_t`, printed as a number.
    UInt8,
    Char,
    /// `char*`-like pointer.
    CString,
    Pointer,
    StdString,
    Record(&'a TypeInfo),
    /// Left to `operator<<`.
    Other,
}

impl<'a> FieldClass<'a> {
    pub(crate) fn of(field: &'a Node) -> Self {
        let Some(ty) = field.ty() else {
            return Self::Other;
        };

        match ty.category {
            TypeCategory::Bool => Self::Bool,
            TypeCategory::Char => match ty.alias() {
                "int8_t" => Self::Int8,
                "uint8_t" => Self::UInt8,
                _ => Self::Char,
            },
            TypeCategory::Pointer if ty.is_c_string() => Self::CString,
            TypeCategory::Pointer => Self::Pointer,
            TypeCategory::Record if ty.is_std_string() => Self::StdString,
            TypeCategory::Record => Self::Record(ty),
            TypeCategory::Other => Self::Other,
        }
    }
}

/// `self.<name>`
pub(crate) fn access(field: &Node) -> String {
    format!("self.{}", field.name())
}

#[cfg(test)]
mod tests {
    use tagforge_ast::TypeInfo;

    use super::*;

    fn field(ty: TypeInfo) -> Node {
        Node::field("f", ty)
    }

    #[test]
    fn test_char_aliases() {
        let int8 = field(
            TypeInfo::new("int8_t", TypeCategory::Char)
                .with_canonical("signed char")
                .with_declaration("int8_t"),
        );
        let plain = field(TypeInfo::new("char", TypeCategory::Char));

        assert_eq!(FieldClass::of(&int8), FieldClass::Int8);
        assert_eq!(FieldClass::of(&plain), FieldClass::Char);
    }

    #[test]
    fn test_pointers_and_records() {
        let text = field(
            TypeInfo::new("const char *", TypeCategory::Pointer)
                .with_pointee(TypeInfo::new("const char", TypeCategory::Char)),
        );
        let raw = field(TypeInfo::new("void *", TypeCategory::Pointer));
        let string = field(
            TypeInfo::new("std::string", TypeCategory::Record)
                .with_canonical("std::basic_string<char>")
                .with_declaration("std::string"),
        );
        let record = field(TypeInfo::new("Point", TypeCategory::Record));

        assert_eq!(FieldClass::of(&text), FieldClass::CString);
        assert_eq!(FieldClass::of(&raw), FieldClass::Pointer);
        assert_eq!(FieldClass::of(&string), FieldClass::StdString);
        assert!(matches!(FieldClass::of(&record), FieldClass::Record(ty) if ty.alias() == "Point"));
    }

    #[test]
    fn test_untyped_field_is_other() {
        assert_eq!(FieldClass::of(&Node::new(tagforge_ast::NodeKind::FieldDecl, "f")), FieldClass::Other);
        assert_eq!(access(&Node::new(tagforge_ast::NodeKind::FieldDecl, "x")), "self.x");
    }
}
