//! The three rewrite rules.
//!
//! Applied per node in priority order, first match wins:
//!
//! 1. marker call: `typeRep<T>()` becomes a descriptor literal (or a
//!    witness reference when `T` is polymorphic)
//! 2. generic declaration: a function-like with type parameters gains one
//!    trailing witness parameter per type parameter
//! 3. generic call: a call to a generic declaration gains one trailing
//!    witness argument per resolved type argument
//!
//! Rules 2 and 3 bind purely positionally, so the argument-append order
//! here must mirror the parameter-append order exactly; both go through
//! `witness::witness_name`.

use crate::classify::classify;
use crate::encode::encode;
use crate::poly::is_polymorphic;
use crate::witness::witness_name;
use crate::TypeRepTransformer;
use tracing::trace;
use tyrep_common::diagnostic_codes as codes;
use tyrep_common::{DiagnosticCategory, Span};
use tyrep_solver::{TypeId, TypeKey, TypeOracle};
use tyrep_syntax::{CallExpr, FunctionLike, Node};

/// Name the marker declaration is recognized by. Detection goes through the
/// oracle's call-target resolution, not the callee's source text, so
/// aliased imports of the marker still match.
pub const MARKER_FUNCTION_NAME: &str = "typeRep";

impl<O: TypeOracle + ?Sized> TypeRepTransformer<'_, O> {
    /// Rule 1: replace a marker call with the reified type.
    ///
    /// A marker call with anything other than exactly one explicit type
    /// argument is diagnosed and passed through unchanged.
    pub(crate) fn eval_marker_call(&mut self, call: CallExpr) -> Node {
        let oracle = self.oracle;
        if call.type_args.len() != 1 {
            let count = call.type_args.len().to_string();
            self.report(
                DiagnosticCategory::Error,
                call.span,
                codes::MARKER_TYPE_ARGUMENT_COUNT,
                &[&count],
            );
            return Node::Call(call);
        }
        let type_node = &call.type_args[0];
        let Some(ty) = oracle.resolve_type_node(type_node.id) else {
            let text = type_node.text.clone();
            self.report(
                DiagnosticCategory::Error,
                type_node.span,
                codes::UNRESOLVED_TYPE_ARGUMENT,
                &[&text],
            );
            return Node::Call(call);
        };
        trace!(?ty, "marker call reified");
        self.type_rep_expr(ty, call.span)
    }

    /// Rule 2: append one hidden witness parameter per type parameter.
    /// Everything else about the declaration is preserved, in order.
    pub(crate) fn extend_generic_function(&mut self, function: FunctionLike) -> Node {
        let mut function = function;
        trace!(
            name = function.name.as_deref().unwrap_or("<anonymous>"),
            type_params = function.type_params.len(),
            "generic declaration extended"
        );
        let appended: Vec<_> = function
            .type_params
            .iter()
            .map(|tp| self.factory.parameter(witness_name(&tp.name)))
            .collect();
        let mut parameters = std::mem::take(&mut function.parameters);
        parameters.extend(appended);
        self.factory.update_function_parameters(function, parameters)
    }

    /// Rule 3: append one witness argument per resolved type argument, in
    /// callee declaration order.
    pub(crate) fn extend_generic_call(&mut self, call: CallExpr, expected: usize) -> Node {
        let oracle = self.oracle;
        let resolved = oracle.resolve_call_type_arguments(call.id);
        let Some(type_args) = resolved.filter(|args| args.len() == expected) else {
            self.report(
                DiagnosticCategory::Error,
                call.span,
                codes::UNRESOLVED_CALL_TYPE_ARGUMENTS,
                &[],
            );
            return Node::Call(call);
        };
        let type_args = type_args.to_vec();
        trace!(count = type_args.len(), "generic call extended");
        let witnesses: Vec<Node> = type_args
            .into_iter()
            .map(|ty| self.type_rep_expr(ty, call.span))
            .collect();
        let mut call = call;
        let mut arguments = std::mem::take(&mut call.arguments);
        arguments.extend(witnesses);
        self.factory.update_call_arguments(call, arguments)
    }

    /// The witness expression for one type: a concrete descriptor literal,
    /// or a reference to the enclosing declaration's hidden parameter.
    pub(crate) fn type_rep_expr(&mut self, ty: TypeId, span: Span) -> Node {
        let oracle = self.oracle;
        if is_polymorphic(ty, oracle) {
            if let TypeKey::TypeParameter(atom) = oracle.key(ty) {
                let name = oracle.resolve_atom(*atom).to_string();
                if !self.scopes.contains(&name) {
                    self.report(
                        DiagnosticCategory::Warning,
                        span,
                        codes::WITNESS_NOT_IN_SCOPE,
                        &[&name],
                    );
                }
                return self.factory.identifier(witness_name(&name));
            }
            // A composite polymorphic type (`Box<T>` rather than `T`) has
            // no single witness to forward.
            let rendered = oracle.type_to_string(ty);
            self.report(
                DiagnosticCategory::Error,
                span,
                codes::COMPOSITE_POLYMORPHIC_FORWARD,
                &[&rendered],
            );
            return self.factory.void_zero();
        }
        let descriptor = classify(ty, oracle);
        encode(&descriptor.to_value(), self.factory)
    }
}
