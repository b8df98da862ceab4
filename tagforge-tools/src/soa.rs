//! `soa`: structure-of-arrays containers for tagged structs.

use tagforge_ast::{Node, NodeKind};
use tagforge_codegen::{Error, GeneratedUnit, Piece, Result, Tool, ToolContext};

use crate::templates;

#[derive(Debug, Clone, Copy, Default)]
pub struct Soa;

impl Soa {
    pub const NAME: &'static str = "soa";
    pub const DESCRIPTION: &'static str = "Soa<T, Capacity> containers for structs tagged `soa`";
    pub const TAG: &'static str = "soa";
    pub const UNIT: &'static str = "soa";

    const UNBOUND_KEY: &'static str = "unbound_soa";

    fn specialization(record: &Node) -> Result<Piece> {
        let name = record.qualified_name();

        let mut piece = Piece::flat();
        piece
            .line("template<size_t Capacity>")
            .line(&format!("struct Soa<{name}, Capacity>"))
            .line("{")
            .indent();

        let mut get = Piece::nested(format!("inline {name} get(size_t idx)"), 1);
        let mut set = Piece::nested(format!("inline void set(size_t idx, {name} value)"), 1);
        get.line(&format!("{name} r;"));

        for field in record.fields() {
            let field_name = field.name();
            let ty = field
                .ty()
                .map(|ty| ty.spelling.as_str())
                .ok_or_else(|| {
                    Error::InvalidInput(format!("field `{name}.{field_name}` has no type"))
                })?;
            let array = format!("arr_{field_name}");

            piece
                .line(&format!("// array for field `{name}.{field_name}`"))
                .line(&format!("{ty} {array}[Capacity];"))
                .blank()
                .line(&format!("inline {ty} get_{field_name}(size_t idx)"))
                .open_scope()
                .line(&format!("return {array}[idx];"))
                .close_scope()?
                .blank()
                .line(&format!(
                    "inline void set_{field_name}(size_t idx, {ty} value)"
                ))
                .open_scope()
                .line(&format!("{array}[idx] = value;"))
                .close_scope()?
                .blank();

            get.line(&format!("r.{field_name} = get_{field_name}(idx);"));
            set.line(&format!("set_{field_name}(idx, value.{field_name});"));
        }
        get.line("return r;");

        piece
            .line("// full getter")
            .raw(&get.build()?)
            .blank()
            .line("// full setter")
            .raw(&set.build()?)
            .dedent()?;
        piece.line("};");
        Ok(piece)
    }
}

impl Tool for Soa {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn transform(&self, cx: &ToolContext<'_>) -> eyre::Result<Vec<GeneratedUnit>> {
        let mut unit = GeneratedUnit::new(Self::UNIT).with_includes(["<stddef.h>"]);
        unit.register(Self::UNBOUND_KEY, cx.template(templates::SOA_UNBOUND, &[])?)?;

        for record in cx.collect_named(&[Self::TAG], &[NodeKind::StructDecl])? {
            unit.register(record.qualified_name(), Self::specialization(record)?)?;
        }

        Ok(vec![unit])
    }
}
