//! `enum_info`: an `EnumInfo<E>` specialization per tagged enum.

use tagforge_ast::{Node, NodeKind};
use tagforge_codegen::{GeneratedUnit, Piece, Result, Tool, ToolContext};

use crate::templates;

/// Compile-time enumerator count and a `repr` for tagged enums.
///
/// ```cpp
/// g::EnumInfo<TokenKind>::Count;               // number of enumerators
/// g::EnumInfo<TokenKind>::repr(TokenKind::eof); // "TokenKind::eof"
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumInfo;

impl EnumInfo {
    pub const NAME: &'static str = "enum_info";
    pub const DESCRIPTION: &'static str = "EnumInfo<E> with Count and repr for enums tagged `enum_info`";
    pub const TAG: &'static str = "enum_info";
    pub const UNIT: &'static str = "enum_info";

    const UNBOUND_KEY: &'static str = "unbound_enum_info";

    fn specialization(enumeration: &Node) -> Result<Piece> {
        let name = enumeration.qualified_name();
        let constants: Vec<&Node> = enumeration.enum_constants().collect();

        let mut piece = Piece::flat();
        piece
            .line("template<>")
            .line(&format!("struct EnumInfo<{name}>"))
            .line("{")
            .indent();
        piece
            .line(&format!(
                "static constexpr unsigned int Count = {};",
                constants.len()
            ))
            .blank()
            .line(&format!("static std::string repr({name} self)"))
            .open_scope()
            .line("switch (self)")
            .open_scope();

        for constant in &constants {
            let qualified = format!("{name}::{}", constant.name());
            piece
                .line(&format!("case {qualified}:"))
                .indent()
                .line(&format!("return \"{qualified}\";"))
                .dedent()?;
        }

        piece.close_scope()?;
        piece.line(&format!(
            r#"return (std::stringstream() << "{name}::(" << (int)self << ")").str();"#
        ));
        piece.close_scope()?.dedent()?;
        piece.line("};");
        Ok(piece)
    }
}

impl Tool for EnumInfo {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        let mut unit = GeneratedUnit::new(Self::UNIT).with_includes(["<string>", "<sstream>"]);
        unit.register(
            Self::UNBOUND_KEY,
            cx.template(templates::ENUM_INFO_UNBOUND, &[])?,
        )?;

        for enumeration in cx.collect_named(&[Self::TAG], &[NodeKind::EnumDecl])? {
            unit.register(
                enumeration.qualified_name(),
                Self::specialization(enumeration)?,
            )?;
        }

        Ok(vec![unit])
    }
}
