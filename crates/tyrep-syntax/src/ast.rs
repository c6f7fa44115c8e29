//! Owned syntax tree nodes.
//!
//! The tree is a single flat `Node` enum, expression and statement variants
//! side by side. Only the nodes the oracle resolves against carry identity:
//! `CallExpr`, `FunctionLike` and `TypeNode` have a `NodeId` and a `Span`;
//! everything else is plain data. Synthesized nodes get fresh ids from the
//! factory and `Span::SYNTHESIZED`.

use tyrep_common::Span;

/// Identity of a resolvable syntax node, assigned by the host's parser (or
/// the `NodeFactory` for synthesized nodes). The oracle keys node-to-type
/// and call-to-declaration resolution on these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A syntactic type reference, opaque to this crate. The oracle resolves it
/// to a static type by id; `text` is the source text of the reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub id: NodeId,
    pub span: Span,
    pub text: String,
}

/// Call expression: `callee<T, ...>(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub id: NodeId,
    pub span: Span,
    pub callee: Box<Node>,
    pub type_args: Vec<TypeNode>,
    pub arguments: Vec<Node>,
}

/// The function-like shapes subject to the generic-declaration rewrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Declaration,
    Expression,
    Arrow,
    Method,
    Getter,
    Setter,
    Constructor,
}

/// Type parameter declaration: the `T` in `function f<T>() {}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamDecl {
    pub name: String,
}

/// Ordinary value parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
}

/// Any function-like declaration or expression.
///
/// One shape covers all seven `FunctionKind`s; the printer renders them
/// differently but the rewrite treats them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLike {
    pub id: NodeId,
    pub span: Span,
    pub kind: FunctionKind,
    pub name: Option<String>,
    pub type_params: Vec<TypeParamDecl>,
    pub parameters: Vec<Param>,
    pub body: Vec<Node>,
    /// Arrow functions with a bare expression body (`x => x + 1`): the body
    /// holds exactly one expression node and no statement wrapping.
    pub is_expression_body: bool,
}

/// Syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14`
    NumericLiteral(String),

    /// String literal: `"hello"`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// BigInt literal: `123n` (text includes the suffix)
    BigIntLiteral(String),

    /// Null literal: `null`
    NullLiteral,

    /// Undefined: `void 0`
    VoidZero,

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Identifier: `foo`
    Identifier(String),

    /// Array literal: `[a, b, c]`
    ArrayLiteral(Vec<Node>),

    /// Object literal: `{ key: value, ... }`, property order preserved
    ObjectLiteral(Vec<(String, Node)>),

    /// Property access: `object.property`
    PropertyAccess { object: Box<Node>, property: String },

    /// Call expression
    Call(CallExpr),

    /// Function-like expression or declaration
    Function(Box<FunctionLike>),

    // =========================================================================
    // Statements & declarations
    // =========================================================================
    /// Class declaration; members are `Node::Function` with method-ish kinds
    Class { name: String, members: Vec<Node> },

    /// Variable declaration: `const name = initializer;`
    VarDecl {
        name: String,
        initializer: Option<Box<Node>>,
    },

    /// Expression statement: `expr;`
    ExpressionStatement(Box<Node>),

    /// Return statement: `return expr;`
    ReturnStatement(Option<Box<Node>>),

    /// Block statement: `{ statements }`
    Block(Vec<Node>),
}

impl Node {
    /// The function-like payload, if this node is one.
    pub fn as_function(&self) -> Option<&FunctionLike> {
        match self {
            Node::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Node::Call(call) => Some(call),
            _ => None,
        }
    }
}

/// One compilation unit's tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub file_name: String,
    pub statements: Vec<Node>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, statements: Vec<Node>) -> SourceFile {
        SourceFile {
            file_name: file_name.into(),
            statements,
        }
    }
}
