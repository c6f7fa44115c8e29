//! Generic child-rebuilding driver.
//!
//! `visit_children` is the tree-walking half the rewrite pass registers
//! into: it rebuilds every direct child of a node through the visitor
//! exactly once and reassembles the parent. The visitor itself decides
//! whether to recurse further (the transform does, after substituting the
//! node it was given).

use crate::ast::{CallExpr, FunctionLike, Node};

/// Rebuild `node` with every direct child mapped through `visitor`.
///
/// Type arguments, parameter lists and names are not children in this
/// sense; only expression/statement positions are visited.
pub fn visit_children<F>(node: Node, visitor: &mut F) -> Node
where
    F: FnMut(Node) -> Node,
{
    match node {
        // Leaves
        Node::NumericLiteral(_)
        | Node::StringLiteral(_)
        | Node::BooleanLiteral(_)
        | Node::BigIntLiteral(_)
        | Node::NullLiteral
        | Node::VoidZero
        | Node::Identifier(_) => node,

        Node::ArrayLiteral(elements) => {
            Node::ArrayLiteral(elements.into_iter().map(&mut *visitor).collect())
        }

        Node::ObjectLiteral(properties) => Node::ObjectLiteral(
            properties
                .into_iter()
                .map(|(name, value)| (name, visitor(value)))
                .collect(),
        ),

        Node::PropertyAccess { object, property } => Node::PropertyAccess {
            object: Box::new(visitor(*object)),
            property,
        },

        Node::Call(call) => Node::Call(CallExpr {
            callee: Box::new(visitor(*call.callee)),
            arguments: call.arguments.into_iter().map(&mut *visitor).collect(),
            ..call
        }),

        Node::Function(function) => {
            let function = *function;
            Node::Function(Box::new(FunctionLike {
                body: function.body.into_iter().map(&mut *visitor).collect(),
                ..function
            }))
        }

        Node::Class { name, members } => Node::Class {
            name,
            members: members.into_iter().map(&mut *visitor).collect(),
        },

        Node::VarDecl { name, initializer } => Node::VarDecl {
            name,
            initializer: initializer.map(|init| Box::new(visitor(*init))),
        },

        Node::ExpressionStatement(expr) => {
            Node::ExpressionStatement(Box::new(visitor(*expr)))
        }

        Node::ReturnStatement(expr) => {
            Node::ReturnStatement(expr.map(|e| Box::new(visitor(*e))))
        }

        Node::Block(statements) => {
            Node::Block(statements.into_iter().map(&mut *visitor).collect())
        }
    }
}
