//! Type reification and witness propagation.
//!
//! This crate is the core of the tyrep transform: it makes static type
//! information observable at runtime by rewriting a syntax tree once per
//! compilation unit.
//!
//! - a marker call `typeRep<T>()` is replaced by a literal descriptor of
//!   `T`'s shape
//! - every generic function-like declaration gains one hidden trailing
//!   parameter per type parameter (its *witness*)
//! - every call to a generic declaration supplies the matching witnesses:
//!   concrete descriptors for concrete type arguments, forwarded witness
//!   identifiers for polymorphic ones
//!
//! The pass is synchronous and single-threaded: each node is transformed
//! before its (already replaced) children are visited, driven by
//! `tyrep_syntax::visit_children`. Nothing in the pipeline fails: partial
//! information degrades to best-effort output, and every degradation that
//! stems from user code is reported through the returned diagnostics.

mod classify;
mod encode;
mod poly;
mod rep;
mod rewrite;
mod witness;

pub use classify::classify;
pub use encode::{Value, encode};
pub use poly::is_polymorphic;
pub use rep::{TypeKind, TypeRep};
pub use rewrite::MARKER_FUNCTION_NAME;
pub use witness::{WITNESS_PREFIX, WitnessScopes, witness_name};

use tracing::debug;
use tyrep_common::{
    Diagnostic, DiagnosticCategory, Span, format_message, get_message_template,
};
use tyrep_solver::TypeOracle;
use tyrep_syntax::{Node, NodeFactory, SourceFile, visit_children};

/// Result of rewriting one compilation unit.
#[derive(Debug)]
pub struct TransformOutput {
    pub file: SourceFile,
    pub diagnostics: Vec<Diagnostic>,
}

/// One file's rewrite pass. Holds no state that survives the file.
pub struct TypeRepTransformer<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    factory: &'a mut NodeFactory,
    scopes: WitnessScopes,
    diagnostics: Vec<Diagnostic>,
    file_name: String,
}

impl<'a, O: TypeOracle + ?Sized> TypeRepTransformer<'a, O> {
    fn new(oracle: &'a O, factory: &'a mut NodeFactory, file_name: String) -> Self {
        TypeRepTransformer {
            oracle,
            factory,
            scopes: WitnessScopes::new(),
            diagnostics: Vec::new(),
            file_name,
        }
    }

    /// Per-node dispatch, priority order, first match wins. The marker rule
    /// shadows the generic-call rule: the marker declaration is itself
    /// generic, and must never receive witness arguments.
    fn transform_node(&mut self, node: Node) -> Node {
        match node {
            Node::Call(call) => {
                let oracle = self.oracle;
                let declaration = oracle
                    .resolve_call_target(call.id)
                    .and_then(|def| oracle.declaration(def));
                match declaration {
                    Some(info) if oracle.resolve_atom(info.name) == MARKER_FUNCTION_NAME => {
                        self.eval_marker_call(call)
                    }
                    Some(info) if !info.type_params.is_empty() => {
                        let expected = info.type_params.len();
                        self.extend_generic_call(call, expected)
                    }
                    // Unresolved target or non-generic callee: not a match.
                    _ => Node::Call(call),
                }
            }
            Node::Function(function) if !function.type_params.is_empty() => {
                self.extend_generic_function(*function)
            }
            other => other,
        }
    }

    /// Transform a node, then recurse into the replacement's children.
    /// Witness scopes follow the descent through generic function-likes.
    fn travel(&mut self, node: Node) -> Node {
        let node = self.transform_node(node);
        let entered = match &node {
            Node::Function(f) if !f.type_params.is_empty() => {
                self.scopes
                    .enter(f.type_params.iter().map(|tp| tp.name.clone()).collect());
                true
            }
            _ => false,
        };
        let node = visit_children(node, &mut |child| self.travel(child));
        if entered {
            self.scopes.exit();
        }
        node
    }

    pub(crate) fn report(
        &mut self,
        category: DiagnosticCategory,
        span: Span,
        code: u32,
        args: &[&str],
    ) {
        let template = get_message_template(code).unwrap_or_default();
        let message = format_message(template, args);
        self.diagnostics.push(Diagnostic {
            category,
            code,
            file: self.file_name.clone(),
            start: span.start,
            length: span.len(),
            message_text: message,
        });
    }
}

/// Rewrite one source file. The factory must be the one that owns the
/// file's node ids (or be seeded past them) so synthesized nodes get fresh
/// identities.
pub fn transform_source_file<O: TypeOracle + ?Sized>(
    oracle: &O,
    factory: &mut NodeFactory,
    file: SourceFile,
) -> TransformOutput {
    debug!(file = %file.file_name, statements = file.statements.len(), "reification pass");
    let SourceFile {
        file_name,
        statements,
    } = file;
    let mut pass = TypeRepTransformer::new(oracle, factory, file_name.clone());
    let statements = statements
        .into_iter()
        .map(|statement| pass.travel(statement))
        .collect();
    TransformOutput {
        file: SourceFile {
            file_name,
            statements,
        },
        diagnostics: pass.diagnostics,
    }
}

/// The plugin-shaped entry point: given a compilation context (the oracle),
/// produce the per-file rewrite function.
pub fn transformer<O: TypeOracle + ?Sized>(
    oracle: &O,
) -> impl Fn(SourceFile, &mut NodeFactory) -> TransformOutput + '_ {
    move |file, factory| transform_source_file(oracle, factory, file)
}
