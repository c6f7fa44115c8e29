//! String interning for identifier deduplication.
//!
//! Property names and type-parameter names are interned once and referred to
//! by `Atom` afterwards, so structural type keys stay `Copy + Eq + Hash`.

use rustc_hash::FxHashMap;

/// Interned string handle.
///
/// Atoms are only meaningful relative to the `Interner` that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// Sentinel for "no atom". Never returned by `Interner::intern`.
    pub const NONE: Atom = Atom(u32::MAX);

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// Append-only string interner.
///
/// Lookup is hash-based; resolution is an index into the backing arena.
#[derive(Default, Debug)]
pub struct Interner {
    map: FxHashMap<Box<str>, Atom>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner::default()
    }

    /// Intern a string, returning a stable `Atom` for it.
    pub fn intern(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.map.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        self.strings.push(text.into());
        self.map.insert(text.into(), atom);
        atom
    }

    /// Resolve an atom back to its string.
    ///
    /// Panics if the atom is `Atom::NONE` or from a different interner.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    /// Resolve an atom, returning `None` for the sentinel.
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        if atom.is_none() {
            None
        } else {
            self.strings.get(atom.0 as usize).map(|s| &**s)
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
