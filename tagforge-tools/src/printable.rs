//! `printable`: one `print_class` overload per tagged struct.

use tagforge_ast::{Node, NodeKind};
use tagforge_codegen::{GeneratedUnit, Piece, Result, Tool, ToolContext};

use crate::field::{FieldClass, access};

/// Prints tagged structs field by field to `std::cout`.
///
/// ```cpp
/// struct PRINTABLE Point { int x; int y; };
/// g::print_class(p);
/// // Point
/// // {
/// //     .x = 1,
/// //     .y = 2,
/// // }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Printable;

impl Printable {
    pub const NAME: &'static str = "printable";
    pub const DESCRIPTION: &'static str = "print_class(T&) for structs tagged `printable`";
    pub const TAG: &'static str = "printable";
    pub const UNIT: &'static str = "printables";

    const REPR_KEY: &'static str = "std::string repr";

    fn repr_helper() -> Result<Piece> {
        let mut piece = Piece::new("std::string repr(const std::string& s)");
        piece
            .line("std::stringstream ss;")
            .line(r#"ss << "\"";"#)
            .line("for (char c : s)")
            .open_scope()
            .line("switch (c)")
            .open_scope();
        for (c, escaped) in [
            (r#"'"'"#, r#""\\\"""#),
            (r"'\\'", r#""\\\\""#),
            (r"'\n'", r#""\\n""#),
            (r"'\t'", r#""\\t""#),
            (r"'\r'", r#""\\r""#),
            (r"'\0'", r#""\\0""#),
        ] {
            piece.line(&format!("case {c}: ss << {escaped}; break;"));
        }
        piece.line("default: ss << c; break;");
        piece.close_scope()?.close_scope()?;
        piece.line(r#"ss << "\"";"#).line("return ss.str();");
        Ok(piece)
    }

    fn print_class(record: &Node) -> Result<Piece> {
        let name = record.qualified_name();
        let mut piece = Piece::new(format!("void print_class({name}& self)"));
        piece.line("std::cout").indent();
        piece
            .line(&format!(r#"<< "{name}\n""#))
            .line(r#"<< "{\n""#);

        for field in record.fields() {
            piece
                .indented(&format!(r#"<< "    .{} = " << "#, field.name()))
                .raw(&field_value(field))
                .raw(r#" << ",\n""#)
                .blank();
        }

        piece.line(r#"<< "}" << std::endl;"#).dedent()?;
        Ok(piece)
    }
}

fn field_value(field: &Node) -> String {
    let value = access(field);
    match FieldClass::of(field) {
        FieldClass::Bool => format!(r#"({value} ? "true" : "false")"#),
        FieldClass::Int8 => format!("int({value})"),
        FieldClass::UInt8 => format!("uint({value})"),
        FieldClass::Char => format!(r"'\'' << {value} << '\''"),
        FieldClass::CString => format!("repr({value})"),
        FieldClass::Pointer => format!("(void*){value}"),
        FieldClass::StdString => format!(r#""std::string(" << repr({value}) << ")""#),
        FieldClass::Record(ty) => format!(r#""{}(...)""#, ty.alias()),
        FieldClass::Other => value,
    }
}

impl Tool for Printable {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        let mut unit =
            GeneratedUnit::new(Self::UNIT).with_includes(["<iostream>", "<string>", "<sstream>"]);
        unit.register(Self::REPR_KEY, Self::repr_helper()?)?;

        for record in cx.collect_named(&[Self::TAG], &[NodeKind::StructDecl])? {
            unit.register(record.qualified_name(), Self::print_class(record)?)?;
        }

        Ok(vec![unit])
    }
}
