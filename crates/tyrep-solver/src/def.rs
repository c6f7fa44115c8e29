//! Declaration identifiers and storage.
//!
//! `DefId` identifies a function-like declaration the oracle can resolve a
//! call to. Allocation is sequential per compilation unit; id 0 is the
//! invalid sentinel.

use tyrep_common::Atom;

/// Stable identifier for a resolved declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

impl DefId {
    /// Sentinel value for an invalid `DefId`.
    pub const INVALID: DefId = DefId(0);

    pub const FIRST_VALID: u32 = 1;

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

/// What the rewrite pass needs to know about a call target: its name (the
/// marker is recognized by name) and its type parameters, in declaration
/// order (witness arguments bind to these positionally).
#[derive(Clone, Debug)]
pub struct DeclarationInfo {
    pub name: Atom,
    pub type_params: Vec<Atom>,
}

/// Sequentially allocated declaration store.
#[derive(Default, Debug)]
pub struct DeclarationStore {
    infos: Vec<DeclarationInfo>,
}

impl DeclarationStore {
    pub fn new() -> DeclarationStore {
        DeclarationStore::default()
    }

    pub fn add(&mut self, info: DeclarationInfo) -> DefId {
        self.infos.push(info);
        DefId(self.infos.len() as u32)
    }

    pub fn get(&self, def: DefId) -> Option<&DeclarationInfo> {
        if !def.is_valid() {
            return None;
        }
        self.infos.get((def.0 - 1) as usize)
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_allocation_starts_valid() {
        let mut store = DeclarationStore::new();
        let def = store.add(DeclarationInfo {
            name: Atom(0),
            type_params: vec![],
        });
        assert!(def.is_valid());
        assert!(store.get(def).is_some());
        assert!(store.get(DefId::INVALID).is_none());
    }
}
