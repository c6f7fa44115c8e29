//! Type-to-string rendering.
//!
//! The rewrite pass uses this for exactly one thing: recovering literal
//! values by stringifying a literal type and parsing the text back. The
//! literal syntaxes below are therefore load-bearing: numbers print the way
//! `f64` displays, strings carry one double quote per side, bigints carry a
//! trailing `n`.

use crate::def::DeclarationStore;
use crate::intern::TypeInterner;
use crate::types::{FunctionShape, IntrinsicKind, LiteralValue, TypeId, TypeKey};

pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
    decls: &'a DeclarationStore,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner, decls: &'a DeclarationStore) -> TypeFormatter<'a> {
        TypeFormatter { interner, decls }
    }

    pub fn format(&self, ty: TypeId) -> String {
        match self.interner.key(ty) {
            TypeKey::Intrinsic(kind) => intrinsic_name(*kind).to_string(),
            TypeKey::Literal(LiteralValue::Number(n)) => format!("{}", n.0),
            TypeKey::Literal(LiteralValue::String(atom)) => {
                format!("\"{}\"", self.interner.resolve_atom(*atom))
            }
            TypeKey::Literal(LiteralValue::Boolean(b)) => {
                if *b { "true" } else { "false" }.to_string()
            }
            TypeKey::Literal(LiteralValue::BigInt(atom)) => {
                format!("{}n", self.interner.resolve_atom(*atom))
            }
            TypeKey::TypeParameter(atom) => self.interner.resolve_atom(*atom).to_string(),
            TypeKey::Union(parts) => self.format_list(parts, " | "),
            TypeKey::Intersection(parts) => self.format_list(parts, " & "),
            TypeKey::Object(shape_id) => {
                let shape = self.interner.object_shape(*shape_id);
                if shape.properties.is_empty() {
                    return "{}".to_string();
                }
                let members: Vec<String> = shape
                    .properties
                    .iter()
                    .map(|p| {
                        format!(
                            "{}: {}",
                            self.interner.resolve_atom(p.name),
                            self.format(p.ty)
                        )
                    })
                    .collect();
                format!("{{ {} }}", members.join("; "))
            }
            TypeKey::Function(shape_id) => {
                let FunctionShape {
                    parameters,
                    return_type,
                } = self.interner.function_shape(*shape_id);
                let params: Vec<String> = parameters
                    .iter()
                    .enumerate()
                    .map(|(i, &p)| format!("arg{}: {}", i, self.format(p)))
                    .collect();
                format!("({}) => {}", params.join(", "), self.format(*return_type))
            }
            TypeKey::Application { target, args } => {
                let name = self
                    .decls
                    .get(*target)
                    .map(|info| self.interner.resolve_atom(info.name).to_string())
                    .unwrap_or_else(|| "<unresolved>".to_string());
                let args: Vec<String> = args.iter().map(|&a| self.format(a)).collect();
                format!("{}<{}>", name, args.join(", "))
            }
        }
    }

    fn format_list(&self, parts: &[TypeId], separator: &str) -> String {
        parts
            .iter()
            .map(|&p| self.format(p))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn intrinsic_name(kind: IntrinsicKind) -> &'static str {
    match kind {
        IntrinsicKind::Any => "any",
        IntrinsicKind::Unknown => "unknown",
        IntrinsicKind::Never => "never",
        IntrinsicKind::Void => "void",
        IntrinsicKind::Undefined => "undefined",
        IntrinsicKind::Null => "null",
        IntrinsicKind::Number => "number",
        IntrinsicKind::Boolean => "boolean",
        IntrinsicKind::BigInt => "bigint",
        IntrinsicKind::String => "string",
        IntrinsicKind::Symbol => "symbol",
        IntrinsicKind::NonPrimitive => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_round_trip_syntax() {
        let mut interner = TypeInterner::new();
        let decls = DeclarationStore::new();
        let n = interner.literal_number(42.0);
        let s = interner.literal_string("ok");
        let b = interner.literal_bigint("123");
        let formatter = TypeFormatter::new(&interner, &decls);
        assert_eq!(formatter.format(n), "42");
        assert_eq!(formatter.format(s), "\"ok\"");
        assert_eq!(formatter.format(b), "123n");
        assert_eq!(formatter.format(TypeId::STRING), "string");
    }

    #[test]
    fn union_and_object_rendering() {
        let mut interner = TypeInterner::new();
        let decls = DeclarationStore::new();
        let u = interner.union(vec![TypeId::STRING, TypeId::NUMBER]);
        let o = interner.object([("x", TypeId::NUMBER)]);
        let formatter = TypeFormatter::new(&interner, &decls);
        assert_eq!(formatter.format(u), "string | number");
        assert_eq!(formatter.format(o), "{ x: number }");
    }
}
