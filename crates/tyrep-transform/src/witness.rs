//! Witness naming and scoping.
//!
//! The declaration-site rewrite (hidden parameters) and the call-site
//! rewrite (forwarded identifiers) must agree program-wide on how a type
//! parameter's witness is named. That derivation lives here, in one
//! function, and nowhere else.
//!
//! The walker additionally threads an explicit scope stack of the type
//! parameters whose witnesses are in scope, so a witness reference can be
//! validated instead of trusted blindly.

/// Reserved prefix for hidden witness parameters.
pub const WITNESS_PREFIX: &str = "_typeRep_typeParameter_";

/// The hidden parameter/identifier name carrying the witness for a type
/// parameter.
pub fn witness_name(type_param: &str) -> String {
    format!("{WITNESS_PREFIX}{type_param}")
}

/// Stack of in-scope type-parameter witness bindings, one frame per
/// enclosing generic function-like.
#[derive(Default, Debug)]
pub struct WitnessScopes {
    frames: Vec<Vec<String>>,
}

impl WitnessScopes {
    pub fn new() -> WitnessScopes {
        WitnessScopes::default()
    }

    /// Enter a generic function-like; its type parameters' witnesses become
    /// referenceable.
    pub fn enter(&mut self, type_params: Vec<String>) {
        self.frames.push(type_params);
    }

    pub fn exit(&mut self) {
        self.frames.pop();
    }

    /// Is a witness for `type_param` bound by some enclosing declaration?
    pub fn contains(&self, type_param: &str) -> bool {
        self.frames
            .iter()
            .rev()
            .any(|frame| frame.iter().any(|p| p == type_param))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
