//! The type classifier.
//!
//! Turns a static type into a `TypeRep` descriptor. The classifier is a
//! pure function of the type table and is total: anything it cannot place
//! falls back to `Any`, and a self-referential structural walk is cut with
//! `Opaque` instead of diverging.
//!
//! Category tests run in a fixed priority order; the first match wins.

use crate::rep::TypeRep;
use rustc_hash::FxHashSet;
use tracing::trace;
use tyrep_solver::{TypeFlags, TypeId, TypeKey, TypeOracle};

/// Classify a static type into its runtime descriptor.
pub fn classify<O: TypeOracle + ?Sized>(ty: TypeId, oracle: &O) -> TypeRep {
    let mut in_progress = FxHashSet::default();
    classify_inner(ty, oracle, &mut in_progress)
}

fn classify_inner<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    in_progress: &mut FxHashSet<TypeId>,
) -> TypeRep {
    // Cycle cut: `in_progress` holds the ids on the current walk path, not
    // every id ever seen, so repeated siblings classify normally.
    if !in_progress.insert(ty) {
        trace!(?ty, "recursive type cut to opaque descriptor");
        return TypeRep::Opaque;
    }
    let rep = classify_uncycled(ty, oracle, in_progress);
    in_progress.remove(&ty);
    rep
}

fn classify_uncycled<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    in_progress: &mut FxHashSet<TypeId>,
) -> TypeRep {
    // Unions and intersections first: their members are classified
    // individually, in source order.
    match oracle.key(ty) {
        TypeKey::Union(parts) => {
            let parts = parts.clone();
            return TypeRep::Union {
                parts: parts
                    .iter()
                    .map(|&p| classify_inner(p, oracle, in_progress))
                    .collect(),
            };
        }
        TypeKey::Intersection(parts) => {
            let parts = parts.clone();
            return TypeRep::Intersection {
                parts: parts
                    .iter()
                    .map(|&p| classify_inner(p, oracle, in_progress))
                    .collect(),
            };
        }
        _ => {}
    }

    let flags = oracle.flags(ty);
    if flags.intersects(TypeFlags::NUMBER_LIKE) {
        return TypeRep::Number {
            literal: number_literal(ty, oracle, flags),
        };
    }
    if flags.intersects(TypeFlags::BOOLEAN_LIKE) {
        return TypeRep::Boolean {
            literal: boolean_literal(ty, oracle, flags),
        };
    }
    if flags.intersects(TypeFlags::BIGINT_LIKE) {
        return TypeRep::BigInt {
            literal: bigint_literal(ty, oracle, flags),
        };
    }
    if flags.intersects(TypeFlags::STRING_LIKE) {
        return TypeRep::String {
            literal: string_literal(ty, oracle, flags),
        };
    }
    if flags.contains(TypeFlags::ES_SYMBOL) {
        return TypeRep::Symbol;
    }
    if flags.contains(TypeFlags::NULL) {
        return TypeRep::Null;
    }
    if flags.contains(TypeFlags::UNDEFINED) {
        return TypeRep::Undefined;
    }
    if flags.contains(TypeFlags::VOID) {
        return TypeRep::Void;
    }
    if flags.contains(TypeFlags::NEVER) {
        return TypeRep::Never;
    }
    if flags.contains(TypeFlags::OBJECT) {
        // An object with a call signature is a function; only the first
        // signature is modeled.
        if let Some((parameters, return_type)) = oracle.call_signature(ty) {
            return TypeRep::Function {
                parameters: parameters
                    .iter()
                    .map(|&p| classify_inner(p, oracle, in_progress))
                    .collect(),
                return_type: Box::new(classify_inner(return_type, oracle, in_progress)),
            };
        }
        // Members in the oracle's (declaration) order. A type with nothing
        // to enumerate yields an empty property list.
        let properties = match oracle.properties_of(ty) {
            Some(members) => members
                .into_iter()
                .map(|(name, member_ty)| {
                    (
                        oracle.resolve_atom(name).to_string(),
                        classify_inner(member_ty, oracle, in_progress),
                    )
                })
                .collect(),
            None => Vec::new(),
        };
        return TypeRep::Object { properties };
    }
    if flags.contains(TypeFlags::NON_PRIMITIVE) {
        return TypeRep::NonPrimitive;
    }
    if flags.contains(TypeFlags::UNKNOWN) {
        return TypeRep::Unknown;
    }
    // Exhaustive fallback: `any` covers everything unclassifiable,
    // including bare type parameters that reach the classifier.
    TypeRep::Any
}

// =============================================================================
// Literal recovery
// =============================================================================
//
// Literal values are recovered exclusively by stringifying the type and
// parsing the text back: the formatter's literal syntax is the contract.

fn number_literal<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    flags: TypeFlags,
) -> Option<f64> {
    if !flags.contains(TypeFlags::NUMBER_LITERAL) {
        return None;
    }
    oracle.type_to_string(ty).parse().ok()
}

fn boolean_literal<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    flags: TypeFlags,
) -> Option<bool> {
    if !flags.contains(TypeFlags::BOOLEAN_LITERAL) {
        return None;
    }
    Some(oracle.type_to_string(ty) == "true")
}

fn bigint_literal<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    flags: TypeFlags,
) -> Option<String> {
    if !flags.contains(TypeFlags::BIGINT_LITERAL) {
        return None;
    }
    let text = oracle.type_to_string(ty);
    Some(text.strip_suffix('n').unwrap_or(&text).to_string())
}

fn string_literal<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    flags: TypeFlags,
) -> Option<String> {
    if !flags.contains(TypeFlags::STRING_LITERAL) {
        return None;
    }
    let text = oracle.type_to_string(ty);
    // Strip one quote character from each side; an oracle that renders the
    // literal unquoted gets its text taken verbatim.
    match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => Some(inner.to_string()),
        None => Some(text),
    }
}
