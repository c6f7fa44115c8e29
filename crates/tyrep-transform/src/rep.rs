//! The runtime type descriptor model.
//!
//! `TypeRep` is the value a `typeRep<T>()` call evaluates to after the
//! transform: a closed tagged union describing the shape of `T`. A
//! descriptor is transient pure data: the classifier builds it, the encoder
//! serializes it into literal syntax, and it is discarded. It has no
//! persistent identity and is never mutated after construction.

use crate::encode::Value;
use serde::Serialize;

/// Discriminant tags, with the numeric codes runtime descriptors carry.
///
/// Several kinds are declared but not yet produced by the classifier
/// (`Enum`, `This`, `Array`, `Tuple`, `TemplateLiteral`); they reserve
/// codes for future structural modeling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TypeKind {
    Any = 0,
    Number = 1,
    Boolean = 2,
    String = 3,
    Symbol = 4,
    BigInt = 5,
    Null = 6,
    Undefined = 7,
    NonPrimitive = 8,
    Unknown = 9,
    Never = 10,
    Void = 11,
    Enum = 12,
    This = 13,
    Object = 14,
    Function = 15,
    Array = 16,
    Tuple = 17,
    Union = 18,
    Intersection = 19,
    TemplateLiteral = 20,
    /// Recursion sentinel: a self-referential structural type was cut here.
    Opaque = 21,
}

impl TypeKind {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A static type's shape, reified.
///
/// `kind` (the variant) fully determines which fields are populated:
/// `literal` is present only for singleton literal types, `properties` only
/// for objects (declaration order, unique names), `parts` only for
/// unions/intersections (source order, non-empty), `parameters`/
/// `return_type` only for functions (first call signature).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TypeRep {
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        literal: Option<f64>,
    },
    Boolean {
        #[serde(skip_serializing_if = "Option::is_none")]
        literal: Option<bool>,
    },
    BigInt {
        /// Digits only, no `n` suffix.
        #[serde(skip_serializing_if = "Option::is_none")]
        literal: Option<String>,
    },
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        literal: Option<String>,
    },
    Symbol,
    Null,
    Undefined,
    Void,
    Any,
    Unknown,
    Never,
    NonPrimitive,
    Object {
        properties: Vec<(String, TypeRep)>,
    },
    Union {
        parts: Vec<TypeRep>,
    },
    Intersection {
        parts: Vec<TypeRep>,
    },
    Function {
        parameters: Vec<TypeRep>,
        return_type: Box<TypeRep>,
    },
    Opaque,
}

impl TypeRep {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeRep::Number { .. } => TypeKind::Number,
            TypeRep::Boolean { .. } => TypeKind::Boolean,
            TypeRep::BigInt { .. } => TypeKind::BigInt,
            TypeRep::String { .. } => TypeKind::String,
            TypeRep::Symbol => TypeKind::Symbol,
            TypeRep::Null => TypeKind::Null,
            TypeRep::Undefined => TypeKind::Undefined,
            TypeRep::Void => TypeKind::Void,
            TypeRep::Any => TypeKind::Any,
            TypeRep::Unknown => TypeKind::Unknown,
            TypeRep::Never => TypeKind::Never,
            TypeRep::NonPrimitive => TypeKind::NonPrimitive,
            TypeRep::Object { .. } => TypeKind::Object,
            TypeRep::Union { .. } => TypeKind::Union,
            TypeRep::Intersection { .. } => TypeKind::Intersection,
            TypeRep::Function { .. } => TypeKind::Function,
            TypeRep::Opaque => TypeKind::Opaque,
        }
    }

    /// Lower the descriptor into the runtime value model the encoder
    /// serializes. Only populated fields appear; `kind` is the numeric code.
    pub fn to_value(&self) -> Value {
        let mut entries = vec![(
            "kind".to_string(),
            Value::Number(f64::from(self.kind().code())),
        )];
        match self {
            TypeRep::Number { literal } => {
                if let Some(n) = literal {
                    entries.push(("literal".to_string(), Value::Number(*n)));
                }
            }
            TypeRep::Boolean { literal } => {
                if let Some(b) = literal {
                    entries.push(("literal".to_string(), Value::Boolean(*b)));
                }
            }
            TypeRep::BigInt { literal } => {
                if let Some(digits) = literal {
                    entries.push(("literal".to_string(), Value::BigInt(digits.clone())));
                }
            }
            TypeRep::String { literal } => {
                if let Some(s) = literal {
                    entries.push(("literal".to_string(), Value::String(s.clone())));
                }
            }
            TypeRep::Object { properties } => {
                let pairs = properties
                    .iter()
                    .map(|(name, rep)| {
                        Value::Array(vec![Value::String(name.clone()), rep.to_value()])
                    })
                    .collect();
                entries.push(("properties".to_string(), Value::Array(pairs)));
            }
            TypeRep::Union { parts } | TypeRep::Intersection { parts } => {
                let parts = parts.iter().map(TypeRep::to_value).collect();
                entries.push(("parts".to_string(), Value::Array(parts)));
            }
            TypeRep::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters.iter().map(TypeRep::to_value).collect();
                entries.push(("parameters".to_string(), Value::Array(parameters)));
                entries.push(("returnType".to_string(), return_type.to_value()));
            }
            TypeRep::Symbol
            | TypeRep::Null
            | TypeRep::Undefined
            | TypeRep::Void
            | TypeRep::Any
            | TypeRep::Unknown
            | TypeRep::Never
            | TypeRep::NonPrimitive
            | TypeRep::Opaque => {}
        }
        Value::Object(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_match_declaration_order() {
        assert_eq!(TypeKind::Any.code(), 0);
        assert_eq!(TypeKind::Number.code(), 1);
        assert_eq!(TypeKind::String.code(), 3);
        assert_eq!(TypeKind::Object.code(), 14);
        assert_eq!(TypeKind::Union.code(), 18);
    }

    #[test]
    fn to_value_omits_absent_literal() {
        let general = TypeRep::Number { literal: None };
        let Value::Object(entries) = general.to_value() else {
            panic!("expected object value");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "kind");

        let singleton = TypeRep::Number { literal: Some(42.0) };
        let Value::Object(entries) = singleton.to_value() else {
            panic!("expected object value");
        };
        assert_eq!(entries[1], ("literal".to_string(), Value::Number(42.0)));
    }

    #[test]
    fn serde_shape_is_kind_tagged() {
        let rep = TypeRep::Union {
            parts: vec![
                TypeRep::String { literal: None },
                TypeRep::Number { literal: None },
            ],
        };
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "Union",
                "parts": [{ "kind": "String" }, { "kind": "Number" }],
            })
        );
    }
}
