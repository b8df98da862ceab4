//! Boilerplate shipped with the built-in tools.
//!
//! Every name can be overridden by a file of the same relative path in the
//! project's template directory.

use tagforge_codegen::MemoryTemplates;

/// `normalize_char` and `repr_s` string escaping helpers.
pub const STRUCT_REPR_ESCAPE: &str = "struct_repr/escape.h";
/// Primary `EnumInfo<EnumT>` template.
pub const ENUM_INFO_UNBOUND: &str = "enum_info/unbound.h";
/// Primary `Soa<StructT, Capacity>` template.
pub const SOA_UNBOUND: &str = "soa/unbound.h";

/// The built-in templates.
pub fn builtin() -> MemoryTemplates {
    MemoryTemplates::new()
        .with(
            STRUCT_REPR_ESCAPE,
            include_str!("../templates/struct_repr/escape.h"),
        )
        .with(
            ENUM_INFO_UNBOUND,
            include_str!("../templates/enum_info/unbound.h"),
        )
        .with(SOA_UNBOUND, include_str!("../templates/soa/unbound.h"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = builtin().names().map(str::to_string).collect();
        assert_eq!(names, [STRUCT_REPR_ESCAPE, ENUM_INFO_UNBOUND, SOA_UNBOUND]);
    }
}
