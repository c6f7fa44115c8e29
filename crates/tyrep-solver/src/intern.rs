//! The type interning table.
//!
//! One `TypeInterner` is built per compilation unit. Interning gives O(1)
//! structural equality (`TypeId` comparison) and guarantees the type graph
//! is acyclic by construction: every key can only reference ids that
//! already exist.

use crate::def::DefId;
use crate::types::{
    FunctionShape, FunctionShapeId, IntrinsicKind, LiteralValue, ObjectShape, ObjectShapeId,
    OrderedFloat, PropertyInfo, TypeFlags, TypeId, TypeKey,
};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;
use tyrep_common::{Atom, Interner};

#[derive(Debug)]
pub struct TypeInterner {
    keys: Vec<TypeKey>,
    dedup: FxHashMap<TypeKey, TypeId>,
    object_shapes: Vec<ObjectShape>,
    object_dedup: FxHashMap<ObjectShape, ObjectShapeId>,
    function_shapes: Vec<FunctionShape>,
    function_dedup: FxHashMap<FunctionShape, FunctionShapeId>,
    strings: Interner,
}

impl TypeInterner {
    /// A fresh interner with the intrinsics pre-registered at their
    /// constant ids.
    pub fn new() -> TypeInterner {
        let mut interner = TypeInterner {
            keys: Vec::new(),
            dedup: FxHashMap::default(),
            object_shapes: Vec::new(),
            object_dedup: FxHashMap::default(),
            function_shapes: Vec::new(),
            function_dedup: FxHashMap::default(),
            strings: Interner::new(),
        };
        for kind in IntrinsicKind::ALL {
            interner.intern(TypeKey::Intrinsic(kind));
        }
        debug_assert_eq!(interner.keys.len() as u32, TypeId::FIRST_DYNAMIC);
        interner
    }

    fn intern(&mut self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.dedup.get(&key) {
            return id;
        }
        let id = TypeId(self.keys.len() as u32);
        trace!(?id, ?key, "intern type");
        self.keys.push(key.clone());
        self.dedup.insert(key, id);
        id
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Number(OrderedFloat(value))))
    }

    pub fn literal_string(&mut self, value: &str) -> TypeId {
        let atom = self.strings.intern(value);
        self.intern(TypeKey::Literal(LiteralValue::String(atom)))
    }

    pub fn literal_boolean(&mut self, value: bool) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Boolean(value)))
    }

    /// `digits` excludes the `n` suffix.
    pub fn literal_bigint(&mut self, digits: &str) -> TypeId {
        let atom = self.strings.intern(digits);
        self.intern(TypeKey::Literal(LiteralValue::BigInt(atom)))
    }

    /// Structural object type. Declaration order is preserved; a repeated
    /// property name keeps its first occurrence.
    pub fn object<'a>(&mut self, properties: impl IntoIterator<Item = (&'a str, TypeId)>) -> TypeId {
        let mut unique: IndexMap<Atom, TypeId> = IndexMap::new();
        for (name, ty) in properties {
            let atom = self.strings.intern(name);
            unique.entry(atom).or_insert(ty);
        }
        let shape = ObjectShape {
            properties: unique
                .into_iter()
                .map(|(name, ty)| PropertyInfo::new(name, ty))
                .collect(),
        };
        let shape_id = self.intern_object_shape(shape);
        self.intern(TypeKey::Object(shape_id))
    }

    pub fn function(&mut self, parameters: Vec<TypeId>, return_type: TypeId) -> TypeId {
        let shape = FunctionShape {
            parameters,
            return_type,
        };
        let shape_id = self.intern_function_shape(shape);
        self.intern(TypeKey::Function(shape_id))
    }

    /// Union in source order. Not normalized: the classifier reports
    /// constituents exactly as declared. Hosts must supply at least one
    /// constituent.
    pub fn union(&mut self, parts: Vec<TypeId>) -> TypeId {
        debug_assert!(!parts.is_empty(), "union requires at least one constituent");
        self.intern(TypeKey::Union(parts))
    }

    /// Intersection in source order; same non-empty contract as `union`.
    pub fn intersection(&mut self, parts: Vec<TypeId>) -> TypeId {
        debug_assert!(
            !parts.is_empty(),
            "intersection requires at least one constituent"
        );
        self.intern(TypeKey::Intersection(parts))
    }

    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        let atom = self.strings.intern(name);
        self.intern(TypeKey::TypeParameter(atom))
    }

    pub fn application(&mut self, target: DefId, args: Vec<TypeId>) -> TypeId {
        self.intern(TypeKey::Application { target, args })
    }

    fn intern_object_shape(&mut self, shape: ObjectShape) -> ObjectShapeId {
        if let Some(&id) = self.object_dedup.get(&shape) {
            return id;
        }
        let id = ObjectShapeId(self.object_shapes.len() as u32);
        self.object_shapes.push(shape.clone());
        self.object_dedup.insert(shape, id);
        id
    }

    fn intern_function_shape(&mut self, shape: FunctionShape) -> FunctionShapeId {
        if let Some(&id) = self.function_dedup.get(&shape) {
            return id;
        }
        let id = FunctionShapeId(self.function_shapes.len() as u32);
        self.function_shapes.push(shape.clone());
        self.function_dedup.insert(shape, id);
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn lookup(&self, id: TypeId) -> Option<&TypeKey> {
        self.keys.get(id.0 as usize)
    }

    /// Key of an id known to be valid.
    pub fn key(&self, id: TypeId) -> &TypeKey {
        &self.keys[id.0 as usize]
    }

    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.key(id).flags()
    }

    pub fn object_shape(&self, id: ObjectShapeId) -> &ObjectShape {
        &self.object_shapes[id.0 as usize]
    }

    pub fn function_shape(&self, id: FunctionShapeId) -> &FunctionShape {
        &self.function_shapes[id.0 as usize]
    }

    pub fn intern_string(&mut self, text: &str) -> Atom {
        self.strings.intern(text)
    }

    pub fn resolve_atom(&self, atom: Atom) -> &str {
        self.strings.resolve(atom)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        TypeInterner::new()
    }
}
