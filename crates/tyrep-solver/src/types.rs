//! Structural type representation.
//!
//! Types are interned: a `TypeId` is an index into the `TypeInterner`'s
//! arena and two structurally identical types always share one id. The
//! intrinsics are pre-registered at fixed ids so they can be named as
//! constants.

use crate::def::DefId;
use bitflags::bitflags;
use tyrep_common::Atom;

/// Interned type identity. Equality is structural identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const NUMBER: TypeId = TypeId(6);
    pub const BOOLEAN: TypeId = TypeId(7);
    pub const BIGINT: TypeId = TypeId(8);
    pub const STRING: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);
    /// The `object` supertype (any non-primitive value).
    pub const NON_PRIMITIVE: TypeId = TypeId(11);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_DYNAMIC: u32 = 12;
}

/// The built-in primitive/top/bottom types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Number,
    Boolean,
    BigInt,
    String,
    Symbol,
    NonPrimitive,
}

impl IntrinsicKind {
    /// Registration order; must line up with the `TypeId` constants.
    pub const ALL: [IntrinsicKind; 12] = [
        IntrinsicKind::Any,
        IntrinsicKind::Unknown,
        IntrinsicKind::Never,
        IntrinsicKind::Void,
        IntrinsicKind::Undefined,
        IntrinsicKind::Null,
        IntrinsicKind::Number,
        IntrinsicKind::Boolean,
        IntrinsicKind::BigInt,
        IntrinsicKind::String,
        IntrinsicKind::Symbol,
        IntrinsicKind::NonPrimitive,
    ];
}

/// `f64` wrapper comparing and hashing by bit pattern, so number literals
/// can live inside hashable type keys.
#[derive(Copy, Clone, Debug)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// A singleton literal type's value. Strings and bigints are interned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Number(OrderedFloat),
    String(Atom),
    Boolean(bool),
    /// Digits only; the source-level `n` suffix is not stored.
    BigInt(Atom),
}

/// One named member of an object shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub ty: TypeId,
}

impl PropertyInfo {
    pub fn new(name: Atom, ty: TypeId) -> PropertyInfo {
        PropertyInfo { name, ty }
    }
}

/// Structural object shape. Property order is declaration order and names
/// are unique; the interner enforces both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShape {
    pub properties: Vec<PropertyInfo>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShapeId(pub u32);

/// First (and only modeled) call signature of a function type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub parameters: Vec<TypeId>,
    pub return_type: TypeId,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

/// Structural key for one interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    Object(ObjectShapeId),
    Function(FunctionShapeId),
    /// Constituents in source order. Never normalized: the classifier must
    /// observe exactly the members the source declared, in order.
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
    /// An unresolved type parameter, by name.
    TypeParameter(Atom),
    /// A parameterized reference `Target<Args>`, kept unexpanded; only its
    /// arguments matter to the pipeline (polymorphism propagation).
    Application { target: DefId, args: Vec<TypeId> },
}

bitflags! {
    /// Category flags for a type, in the style of the host language's
    /// checker flags. The classifier's fixed-priority chain tests these.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const NEVER = 1 << 2;
        const VOID = 1 << 3;
        const UNDEFINED = 1 << 4;
        const NULL = 1 << 5;
        const NUMBER = 1 << 6;
        const BOOLEAN = 1 << 7;
        const BIGINT = 1 << 8;
        const STRING = 1 << 9;
        const ES_SYMBOL = 1 << 10;
        const NON_PRIMITIVE = 1 << 11;
        const NUMBER_LITERAL = 1 << 12;
        const BOOLEAN_LITERAL = 1 << 13;
        const BIGINT_LITERAL = 1 << 14;
        const STRING_LITERAL = 1 << 15;
        const OBJECT = 1 << 16;
        const UNION = 1 << 17;
        const INTERSECTION = 1 << 18;
        const TYPE_PARAMETER = 1 << 19;

        const NUMBER_LIKE = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const BIGINT_LIKE = Self::BIGINT.bits() | Self::BIGINT_LITERAL.bits();
        const STRING_LIKE = Self::STRING.bits() | Self::STRING_LITERAL.bits();
        const LITERAL = Self::NUMBER_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits()
            | Self::BIGINT_LITERAL.bits()
            | Self::STRING_LITERAL.bits();
    }
}

impl TypeKey {
    /// Derive the category flags for this key.
    pub fn flags(&self) -> TypeFlags {
        match self {
            TypeKey::Intrinsic(kind) => match kind {
                IntrinsicKind::Any => TypeFlags::ANY,
                IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
                IntrinsicKind::Never => TypeFlags::NEVER,
                IntrinsicKind::Void => TypeFlags::VOID,
                IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
                IntrinsicKind::Null => TypeFlags::NULL,
                IntrinsicKind::Number => TypeFlags::NUMBER,
                IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
                IntrinsicKind::BigInt => TypeFlags::BIGINT,
                IntrinsicKind::String => TypeFlags::STRING,
                IntrinsicKind::Symbol => TypeFlags::ES_SYMBOL,
                IntrinsicKind::NonPrimitive => TypeFlags::NON_PRIMITIVE,
            },
            TypeKey::Literal(value) => match value {
                LiteralValue::Number(_) => TypeFlags::NUMBER_LITERAL,
                LiteralValue::String(_) => TypeFlags::STRING_LITERAL,
                LiteralValue::Boolean(_) => TypeFlags::BOOLEAN_LITERAL,
                LiteralValue::BigInt(_) => TypeFlags::BIGINT_LITERAL,
            },
            TypeKey::Object(_) | TypeKey::Function(_) => TypeFlags::OBJECT,
            TypeKey::Union(_) => TypeFlags::UNION,
            TypeKey::Intersection(_) => TypeFlags::INTERSECTION,
            TypeKey::TypeParameter(_) => TypeFlags::TYPE_PARAMETER,
            // An unexpanded application is object-like for category purposes.
            TypeKey::Application { .. } => TypeFlags::OBJECT,
        }
    }
}
