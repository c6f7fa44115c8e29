//! Node construction and identity-preserving updates.
//!
//! The factory is the only allocator of `NodeId`s for synthesized nodes.
//! Hosts hand their parser's factory (or a fresh one seeded past the
//! parsed tree's ids) to the transform so synthesized identities never
//! collide with parsed ones.
//!
//! `update_*` helpers mirror `ts.factory.update*`: they produce a node with
//! new children but the *same* identity, so oracle resolutions recorded
//! against the original node keep working on the replacement.

use crate::ast::{
    CallExpr, FunctionKind, FunctionLike, Node, NodeId, Param, SourceFile, TypeNode, TypeParamDecl,
};
use tyrep_common::Span;

/// Factory for syntax nodes.
#[derive(Debug)]
pub struct NodeFactory {
    next_id: u32,
}

impl NodeFactory {
    /// A factory whose ids start after `first_free_id`.
    pub fn starting_at(first_free_id: u32) -> NodeFactory {
        NodeFactory {
            next_id: first_free_id,
        }
    }

    pub fn new() -> NodeFactory {
        NodeFactory::starting_at(0)
    }

    pub fn next_node_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    // =========================================================================
    // Leaf constructors
    // =========================================================================

    pub fn identifier(&mut self, name: impl Into<String>) -> Node {
        Node::Identifier(name.into())
    }

    pub fn numeric_literal(&mut self, value: f64) -> Node {
        Node::NumericLiteral(format!("{value}"))
    }

    pub fn string_literal(&mut self, value: impl Into<String>) -> Node {
        Node::StringLiteral(value.into())
    }

    pub fn true_literal(&mut self) -> Node {
        Node::BooleanLiteral(true)
    }

    pub fn false_literal(&mut self) -> Node {
        Node::BooleanLiteral(false)
    }

    /// `void 0`, the canonical `undefined` expression.
    pub fn void_zero(&mut self) -> Node {
        Node::VoidZero
    }

    /// BigInt literal; `digits` excludes the trailing `n`.
    pub fn big_int_literal(&mut self, digits: &str) -> Node {
        Node::BigIntLiteral(format!("{digits}n"))
    }

    pub fn null_literal(&mut self) -> Node {
        Node::NullLiteral
    }

    // =========================================================================
    // Compound constructors
    // =========================================================================

    pub fn array_literal(&mut self, elements: Vec<Node>) -> Node {
        Node::ArrayLiteral(elements)
    }

    pub fn object_literal(&mut self, properties: Vec<(String, Node)>) -> Node {
        Node::ObjectLiteral(properties)
    }

    pub fn property_assignment(&mut self, name: impl Into<String>, value: Node) -> (String, Node) {
        (name.into(), value)
    }

    pub fn call(&mut self, callee: Node, arguments: Vec<Node>) -> Node {
        Node::Call(CallExpr {
            id: self.next_node_id(),
            span: Span::SYNTHESIZED,
            callee: Box::new(callee),
            type_args: Vec::new(),
            arguments,
        })
    }

    pub fn parameter(&mut self, name: impl Into<String>) -> Param {
        Param { name: name.into() }
    }

    pub fn type_param(&mut self, name: impl Into<String>) -> TypeParamDecl {
        TypeParamDecl { name: name.into() }
    }

    pub fn type_node(&mut self, text: impl Into<String>) -> TypeNode {
        TypeNode {
            id: self.next_node_id(),
            span: Span::SYNTHESIZED,
            text: text.into(),
        }
    }

    pub fn function(
        &mut self,
        kind: FunctionKind,
        name: Option<String>,
        type_params: Vec<TypeParamDecl>,
        parameters: Vec<Param>,
        body: Vec<Node>,
    ) -> Node {
        Node::Function(Box::new(FunctionLike {
            id: self.next_node_id(),
            span: Span::SYNTHESIZED,
            kind,
            name,
            type_params,
            parameters,
            body,
            is_expression_body: false,
        }))
    }

    // =========================================================================
    // Identity-preserving updates
    // =========================================================================

    /// New arguments, same call identity.
    pub fn update_call_arguments(&mut self, call: CallExpr, arguments: Vec<Node>) -> Node {
        Node::Call(CallExpr { arguments, ..call })
    }

    /// New parameter list, same function identity. Everything else (kind,
    /// name, type parameters, body) is carried over untouched.
    pub fn update_function_parameters(
        &mut self,
        function: FunctionLike,
        parameters: Vec<Param>,
    ) -> Node {
        Node::Function(Box::new(FunctionLike {
            parameters,
            ..function
        }))
    }

    pub fn update_source_file(&mut self, file: SourceFile, statements: Vec<Node>) -> SourceFile {
        SourceFile {
            statements,
            ..file
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        NodeFactory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_call_preserves_identity() {
        let mut factory = NodeFactory::new();
        let call = factory.call(Node::Identifier("f".to_string()), vec![]);
        let Node::Call(call) = call else { unreachable!() };
        let id = call.id;

        let updated = factory.update_call_arguments(call, vec![Node::NumericLiteral("1".into())]);
        let Node::Call(updated) = updated else { unreachable!() };
        assert_eq!(updated.id, id);
        assert_eq!(updated.arguments.len(), 1);
    }

    #[test]
    fn synthesized_ids_are_distinct() {
        let mut factory = NodeFactory::starting_at(100);
        let a = factory.next_node_id();
        let b = factory.next_node_id();
        assert_ne!(a, b);
        assert_eq!(a, NodeId(100));
    }
}
