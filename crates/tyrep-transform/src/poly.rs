//! Polymorphism detection.
//!
//! A type is polymorphic when it depends on a not-yet-resolved type
//! parameter: it is one itself, or it is a parameterized reference one of
//! whose arguments is (recursively) polymorphic. Polymorphic types get a
//! witness reference instead of a concrete descriptor.

use rustc_hash::FxHashSet;
use tyrep_solver::{TypeId, TypeKey, TypeOracle};

/// Does `ty` depend, directly or through type-argument nesting, on an
/// unresolved type parameter?
pub fn is_polymorphic<O: TypeOracle + ?Sized>(ty: TypeId, oracle: &O) -> bool {
    let mut in_progress = FxHashSet::default();
    is_polymorphic_inner(ty, oracle, &mut in_progress)
}

fn is_polymorphic_inner<O: TypeOracle + ?Sized>(
    ty: TypeId,
    oracle: &O,
    in_progress: &mut FxHashSet<TypeId>,
) -> bool {
    if !in_progress.insert(ty) {
        // Self-referential instantiation; the cycle contributes nothing new.
        return false;
    }
    let result = match oracle.key(ty) {
        TypeKey::TypeParameter(_) => true,
        TypeKey::Application { args, .. } => {
            let args = args.clone();
            args.iter()
                .any(|&arg| is_polymorphic_inner(arg, oracle, in_progress))
        }
        _ => false,
    };
    in_progress.remove(&ty);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tyrep_solver::TypeTable;

    #[test]
    fn bare_type_parameter_is_polymorphic() {
        let mut table = TypeTable::new();
        let t = table.types_mut().type_parameter("T");
        assert!(is_polymorphic(t, &table));
    }

    #[test]
    fn concrete_types_are_not_polymorphic() {
        let mut table = TypeTable::new();
        let object = table.types_mut().object([("x", TypeId::NUMBER)]);
        let union = table.types_mut().union(vec![TypeId::STRING, TypeId::NUMBER]);
        assert!(!is_polymorphic(TypeId::STRING, &table));
        assert!(!is_polymorphic(object, &table));
        assert!(!is_polymorphic(union, &table));
    }

    #[test]
    fn application_propagates_through_nesting() {
        let mut table = TypeTable::new();
        let container = table.add_declaration("Box", &["T"]);
        let t = table.types_mut().type_parameter("T");
        let box_of_t = table.types_mut().application(container, vec![t]);
        let box_of_box_of_t = table.types_mut().application(container, vec![box_of_t]);
        let box_of_string = table
            .types_mut()
            .application(container, vec![TypeId::STRING]);

        assert!(is_polymorphic(box_of_t, &table));
        assert!(is_polymorphic(box_of_box_of_t, &table));
        assert!(!is_polymorphic(box_of_string, &table));
    }
}
