//! `class_dump`: plain field dump of `printable` structs.

use tagforge_ast::{Node, NodeKind};
use tagforge_codegen::{GeneratedUnit, Piece, Result, Tool, ToolContext};

use crate::{Printable, field::access};

/// Like [`Printable`], but every field goes straight to `operator<<`.
///
/// Meant to be applied by hand when `printable` is too opinionated for a
/// type; both tools emit `print_class`, so include only one of their units.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassDump;

impl ClassDump {
    pub const NAME: &'static str = "class_dump";
    pub const DESCRIPTION: &'static str = "print_class(T&) streaming every field as is, for structs tagged `printable`";
    pub const UNIT: &'static str = "dump";

    fn dump(record: &Node) -> Result<Piece> {
        let name = record.qualified_name();
        let mut piece = Piece::new(format!("void print_class({name}& self)"));
        piece
            .line("std::cout")
            .indent()
            .line(&format!(r#"<< "{name}\n""#))
            .line(r#"<< "{\n""#);
        for field in record.fields() {
            piece.line(&format!(
                r#"<< "    .{} = " << {} << ",\n""#,
                field.name(),
                access(field)
            ));
        }
        piece.line(r#"<< "}" << std::endl;"#).dedent()?;
        Ok(piece)
    }
}

impl Tool for ClassDump {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        let mut unit = GeneratedUnit::new(Self::UNIT).with_includes(["<iostream>"]);
        for record in cx.collect_named(&[Printable::TAG], &[NodeKind::StructDecl])? {
            unit.register(record.qualified_name(), Self::dump(record)?)?;
        }
        Ok(vec![unit])
    }
}
