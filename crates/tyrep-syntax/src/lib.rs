//! Syntax tree for the tyrep transform.
//!
//! This crate owns the tree the rewrite pass operates on:
//!
//! - `ast`: a flat, owned node enum covering the JavaScript/TypeScript
//!   constructs the pass needs to recognize and synthesize
//! - `factory`: node construction and identity-preserving updates
//! - `visit`: the generic child-rebuilding driver the pass recurses through
//! - `printer`: JavaScript emission for hosts and tests
//!
//! The tree carries node identity (`NodeId`) only where the type oracle
//! needs to resolve against it: calls, function-likes and type nodes.

pub mod ast;
pub mod factory;
pub mod printer;
pub mod visit;

pub use ast::{
    CallExpr, FunctionKind, FunctionLike, Node, NodeId, Param, SourceFile, TypeNode, TypeParamDecl,
};
pub use factory::NodeFactory;
pub use printer::Printer;
pub use visit::visit_children;
