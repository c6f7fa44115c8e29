//! Interned static-type table for the tyrep transform.
//!
//! The host compiler's mutable, reflective type checker is replaced here by
//! an explicit, immutable interning table built once per compilation unit:
//!
//! - **Interning**: O(1) type equality via `TypeId` comparison
//! - **Purity**: classification and polymorphism detection operate over
//!   interned indices only, with no hidden resolution cost
//! - **Oracle**: the `TypeOracle` trait is the exact interface the rewrite
//!   pass consumes; `TypeTable` is the in-memory implementation hosts (and
//!   tests) populate the way a checker would

mod def;
mod format;
mod intern;
mod oracle;
pub mod types;

pub use def::{DeclarationInfo, DeclarationStore, DefId};
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use oracle::{TypeOracle, TypeTable};
pub use types::{
    FunctionShape, FunctionShapeId, IntrinsicKind, LiteralValue, ObjectShape, ObjectShapeId,
    OrderedFloat, PropertyInfo, TypeFlags, TypeId, TypeKey,
};
