//! `struct_repr`: `std::string repr(T const&, size_t indent)` per tagged struct.
//!
//! Fields of record type recurse: the field's record gets its own `repr`
//! (registered before the struct that needs it), and the unit registry makes
//! sure a record reached through several fields is emitted once.

use serde::Deserialize;
use tagforge_ast::{Node, NodeKind, Tree};
use tagforge_codegen::{Error, GeneratedUnit, Piece, Result, Tool, ToolContext};
use tracing::debug;

use crate::{
    field::{FieldClass, access},
    templates,
};

/// Width of the indentation buffer shared by every `repr`.
const PRECOMPUTED_INDENT_WIDTH: usize = 255;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructReprOptions {
    /// Render fields whose record is not tagged as `Name(...)` instead of
    /// recursing into them.
    pub skip_unregistered_records: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StructRepr {
    options: StructReprOptions,
}

impl StructRepr {
    pub const NAME: &'static str = "struct_repr";
    pub const DESCRIPTION: &'static str = "repr(T const&) for structs tagged `struct_repr` or `struct_repr_inline`";
    pub const TAG: &'static str = "struct_repr";
    /// Like [`TAG`](Self::TAG), rendered on a single line.
    pub const INLINE_TAG: &'static str = "struct_repr_inline";
    pub const UNIT: &'static str = "repr";

    const ESCAPE_KEY: &'static str = "std::string and char repr";
    const INDENT_KEY: &'static str = "PRECOMPUTED_INDENT";

    pub fn new(options: StructReprOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> StructReprOptions {
        self.options
    }
}

impl Tool for StructRepr {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        let mut unit = GeneratedUnit::new(Self::UNIT).with_includes(["<string>", "<sstream>"]);
        unit.register(
            Self::ESCAPE_KEY,
            cx.template(templates::STRUCT_REPR_ESCAPE, &[])?,
        )?;
        unit.register(
            Self::INDENT_KEY,
            Piece::declaration(format!(
                "static char const PRECOMPUTED_INDENT[] = \"{}\"",
                " ".repeat(PRECOMPUTED_INDENT_WIDTH)
            )),
        )?;

        let tagged =
            cx.collect_named(&[Self::TAG, Self::INLINE_TAG], &[NodeKind::StructDecl])?;
        let mut emitter = Emitter {
            tree: cx.tree(),
            tagged: &tagged,
            options: self.options,
            unit,
            visiting: Vec::new(),
        };
        for record in &tagged {
            emitter.emit(record)?;
        }

        Ok(vec![emitter.unit])
    }
}

struct Emitter<'a, 't> {
    tree: &'t Tree,
    tagged: &'a [&'t Node],
    options: StructReprOptions,
    unit: GeneratedUnit,
    /// Records whose piece is being built, outermost first.
    visiting: Vec<String>,
}

impl Emitter<'_, '_> {
    fn emit(&mut self, record: &Node) -> Result<()> {
        let name = record.qualified_name();
        if self.unit.contains(name) {
            return Ok(());
        }
        if self.visiting.iter().any(|v| v == name) {
            return Err(Error::InvalidInput(format!(
                "record `{name}` contains itself by value"
            )));
        }

        self.visiting.push(name.to_string());
        let piece = self.repr(record);
        self.visiting.pop();

        debug!(record = name, "emit repr");
        self.unit.register(name, piece?)
    }

    fn repr(&mut self, record: &Node) -> Result<Piece> {
        let name = record.qualified_name();
        let mut piece = Piece::new(format!("std::string repr({name} const& self, size_t indent)"))
            .with_head(format!(
                "std::string repr({name} const& self, size_t indent = 0)"
            ));

        if record.has_tag(StructRepr::INLINE_TAG) {
            piece
                .line(r#"char const* sindent = "";"#)
                .line(r#"char const* padding = "";"#)
                .line(r#"char const* fields_sep = " ";"#);
        } else {
            piece
                .line("std::string sindent = std::string(PRECOMPUTED_INDENT, indent);")
                .line(r#"char const* padding = "    ";"#)
                .line(r#"char const* fields_sep = "\n";"#);
        }

        piece.line("std::stringstream ss;").line("ss").indent();
        piece
            .line(&format!(r#"<< "{name}" << fields_sep"#))
            .line(r#"<< sindent << "{" << fields_sep"#);

        for field in record.fields() {
            let value = self.field_value(field)?;
            piece
                .indented(&format!(
                    r#"<< sindent << padding << ".{} = " << "#,
                    field.name()
                ))
                .raw(&value)
                .raw(r#" << "," << fields_sep"#)
                .blank();
        }

        piece.line(r#"<< sindent << "}";"#).dedent()?;
        piece.line("return ss.str();");
        Ok(piece)
    }

    fn field_value(&mut self, field: &Node) -> Result<String> {
        let value = access(field);
        Ok(match FieldClass::of(field) {
            FieldClass::Bool => format!(r#"({value} ? "true" : "false")"#),
            FieldClass::Int8 => format!("int({value})"),
            FieldClass::UInt8 => format!("uint({value})"),
            FieldClass::Char => format!(r"'\''; normalize_char(ss, {value}); ss << '\''"),
            FieldClass::CString => format!("repr_s(std::string({value}))"),
            FieldClass::Pointer => format!("(void*){value}"),
            FieldClass::StdString => format!(r#""std::string(" << repr_s({value}) << ")""#),
            FieldClass::Record(ty) => {
                let target = self
                    .tree
                    .record(ty.alias())
                    .or_else(|| self.tree.record(&ty.canonical));

                match target {
                    Some(target) if self.should_recurse(target) => {
                        self.emit(target)?;
                        format!("repr({value}, indent + 4)")
                    }
                    Some(target) => format!(r#""{}(...)""#, target.qualified_name()),
                    None => format!(r#""{}(...)""#, ty.alias()),
                }
            }
            FieldClass::Other => value,
        })
    }

    fn should_recurse(&self, target: &Node) -> bool {
        !self.options.skip_unregistered_records
            || self
                .tagged
                .iter()
                .any(|t| t.qualified_name() == target.qualified_name())
    }
}
