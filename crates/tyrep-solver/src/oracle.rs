//! The type-resolution oracle.
//!
//! `TypeOracle` is the complete interface the rewrite pass consumes from
//! the host compiler: node-to-type resolution, call-target resolution,
//! post-inference call type arguments, member enumeration, and the
//! stringification used for literal round-tripping.
//!
//! `TypeTable` is the in-memory implementation: an immutable (once
//! populated) table a host builds per compilation unit from its checker's
//! knowledge. Tests populate it directly.

use crate::def::{DeclarationInfo, DeclarationStore, DefId};
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::{TypeFlags, TypeId, TypeKey};
use rustc_hash::FxHashMap;
use tyrep_common::Atom;
use tyrep_syntax::NodeId;

pub trait TypeOracle {
    /// Static type of a syntactic type reference (a call's explicit type
    /// argument), post resolution.
    fn resolve_type_node(&self, node: NodeId) -> Option<TypeId>;

    /// Declaration a call expression resolves to, if any.
    fn resolve_call_target(&self, call: NodeId) -> Option<DefId>;

    /// Type arguments of a generic call in callee declaration order,
    /// including inferred (implicit) instantiations.
    fn resolve_call_type_arguments(&self, call: NodeId) -> Option<&[TypeId]>;

    fn declaration(&self, def: DefId) -> Option<&DeclarationInfo>;

    fn key(&self, ty: TypeId) -> &TypeKey;

    fn flags(&self, ty: TypeId) -> TypeFlags;

    /// Stringify a type. Used only for literal-value round-tripping.
    fn type_to_string(&self, ty: TypeId) -> String;

    /// Members of an object type, in declaration order with unique names.
    /// `None` for types with no members to enumerate.
    fn properties_of(&self, ty: TypeId) -> Option<Vec<(Atom, TypeId)>>;

    /// First call signature of a function type: parameter types and return
    /// type. Overloads beyond the first are not modeled.
    fn call_signature(&self, ty: TypeId) -> Option<(Vec<TypeId>, TypeId)>;

    fn resolve_atom(&self, atom: Atom) -> &str;
}

/// In-memory oracle implementation over an interned type table.
#[derive(Default, Debug)]
pub struct TypeTable {
    types: TypeInterner,
    decls: DeclarationStore,
    node_types: FxHashMap<NodeId, TypeId>,
    call_targets: FxHashMap<NodeId, DefId>,
    call_type_args: FxHashMap<NodeId, Vec<TypeId>>,
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable {
            types: TypeInterner::new(),
            decls: DeclarationStore::new(),
            node_types: FxHashMap::default(),
            call_targets: FxHashMap::default(),
            call_type_args: FxHashMap::default(),
        }
    }

    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeInterner {
        &mut self.types
    }

    /// Register a function-like declaration with its type parameters, in
    /// declaration order.
    pub fn add_declaration(&mut self, name: &str, type_params: &[&str]) -> DefId {
        let name = self.types.intern_string(name);
        let type_params = type_params
            .iter()
            .map(|p| self.types.intern_string(p))
            .collect();
        self.decls.add(DeclarationInfo { name, type_params })
    }

    /// Record the resolved static type of a type node.
    pub fn set_node_type(&mut self, node: NodeId, ty: TypeId) {
        self.node_types.insert(node, ty);
    }

    /// Record which declaration a call resolves to.
    pub fn set_call_target(&mut self, call: NodeId, def: DefId) {
        self.call_targets.insert(call, def);
    }

    /// Record a call's resolved type arguments (explicit or inferred), in
    /// callee declaration order.
    pub fn set_call_type_arguments(&mut self, call: NodeId, args: Vec<TypeId>) {
        self.call_type_args.insert(call, args);
    }
}

impl TypeOracle for TypeTable {
    fn resolve_type_node(&self, node: NodeId) -> Option<TypeId> {
        self.node_types.get(&node).copied()
    }

    fn resolve_call_target(&self, call: NodeId) -> Option<DefId> {
        self.call_targets.get(&call).copied()
    }

    fn resolve_call_type_arguments(&self, call: NodeId) -> Option<&[TypeId]> {
        self.call_type_args.get(&call).map(|args| args.as_slice())
    }

    fn declaration(&self, def: DefId) -> Option<&DeclarationInfo> {
        self.decls.get(def)
    }

    fn key(&self, ty: TypeId) -> &TypeKey {
        self.types.key(ty)
    }

    fn flags(&self, ty: TypeId) -> TypeFlags {
        self.types.flags(ty)
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        TypeFormatter::new(&self.types, &self.decls).format(ty)
    }

    fn properties_of(&self, ty: TypeId) -> Option<Vec<(Atom, TypeId)>> {
        match self.types.key(ty) {
            TypeKey::Object(shape_id) => {
                let shape = self.types.object_shape(*shape_id);
                Some(
                    shape
                        .properties
                        .iter()
                        .map(|p| (p.name, p.ty))
                        .collect(),
                )
            }
            _ => None,
        }
    }

    fn call_signature(&self, ty: TypeId) -> Option<(Vec<TypeId>, TypeId)> {
        match self.types.key(ty) {
            TypeKey::Function(shape_id) => {
                let shape = self.types.function_shape(*shape_id);
                Some((shape.parameters.clone(), shape.return_type))
            }
            _ => None,
        }
    }

    fn resolve_atom(&self, atom: Atom) -> &str {
        self.types.resolve_atom(atom)
    }
}
