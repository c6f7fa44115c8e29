//! Serializing runtime values into literal syntax.
//!
//! The encoder is not descriptor-specific: it turns any `Value` into an
//! expression that reconstructs it at runtime. Object entries are folded
//! right to left, preserving property order; values with no literal syntax
//! (the `Opaque` category) encode as `void 0` rather than failing.

use tyrep_syntax::{Node, NodeFactory};

/// The runtime value model the encoder understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    Boolean(bool),
    /// Digits only; encoded with the `n` suffix.
    BigInt(String),
    Null,
    Undefined,
    /// A description-bearing symbol; reconstructed by a `Symbol(...)` call.
    Symbol(Option<String>),
    Array(Vec<Value>),
    /// Ordered (key, value) entries of a plain record.
    Object(Vec<(String, Value)>),
    /// Anything with no literal syntax (functions, exotic host values).
    Opaque,
}

/// Encode a value as an expression that rebuilds it.
pub fn encode(value: &Value, factory: &mut NodeFactory) -> Node {
    match value {
        Value::Number(n) => factory.numeric_literal(*n),
        Value::String(s) => factory.string_literal(s.clone()),
        Value::Boolean(true) => factory.true_literal(),
        Value::Boolean(false) => factory.false_literal(),
        Value::BigInt(digits) => factory.big_int_literal(digits),
        Value::Null => factory.null_literal(),
        Value::Undefined => factory.void_zero(),
        Value::Symbol(description) => {
            let callee = factory.identifier("Symbol");
            let arguments = match description {
                Some(text) => vec![factory.string_literal(text.clone())],
                None => vec![],
            };
            factory.call(callee, arguments)
        }
        Value::Array(elements) => {
            let elements = elements.iter().map(|e| encode(e, factory)).collect();
            factory.array_literal(elements)
        }
        Value::Object(entries) => encode_object(entries, factory),
        Value::Opaque => factory.void_zero(),
    }
}

fn encode_object(entries: &[(String, Value)], factory: &mut NodeFactory) -> Node {
    // Right-to-left fold over the entries; each encoded assignment is
    // prepended so declaration order survives.
    let mut properties: Vec<(String, Node)> = Vec::with_capacity(entries.len());
    for (name, value) in entries.iter().rev() {
        let encoded = encode(value, factory);
        properties.insert(0, factory.property_assignment(name.clone(), encoded));
    }
    factory.object_literal(properties)
}
