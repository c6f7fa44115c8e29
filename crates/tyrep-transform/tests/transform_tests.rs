//! End-to-end rewrite tests: build a tree and an oracle the way a host
//! compiler would, run the pass, and assert on the emitted JavaScript and
//! the collected diagnostics.

use tyrep_common::{DiagnosticCategory, Span, diagnostic_codes as codes};
use tyrep_solver::{DefId, TypeId, TypeTable};
use tyrep_syntax::{
    CallExpr, FunctionKind, Node, NodeFactory, Printer, SourceFile, TypeNode,
};
use tyrep_transform::{TransformOutput, transform_source_file, transformer};

/// A miniature host: a node factory, a populated type table, and the marker
/// declaration every fixture needs.
struct Fixture {
    factory: NodeFactory,
    table: TypeTable,
    marker: DefId,
}

impl Fixture {
    fn new() -> Fixture {
        let mut table = TypeTable::new();
        let marker = table.add_declaration("typeRep", &["T"]);
        Fixture {
            factory: NodeFactory::new(),
            table,
            marker,
        }
    }

    fn type_node(&mut self, text: &str, resolved: Option<TypeId>) -> TypeNode {
        let node = self.factory.type_node(text);
        if let Some(ty) = resolved {
            self.table.set_node_type(node.id, ty);
        }
        node
    }

    /// `typeRep<T>()` with the given explicit type arguments, resolved to
    /// the marker declaration.
    fn marker_call(&mut self, type_args: Vec<TypeNode>) -> Node {
        let id = self.factory.next_node_id();
        self.table.set_call_target(id, self.marker);
        Node::Call(CallExpr {
            id,
            span: Span::new(10, 30),
            callee: Box::new(Node::Identifier("typeRep".to_string())),
            type_args,
            arguments: Vec::new(),
        })
    }

    /// A call to `callee` resolved against a (usually generic) declaration,
    /// with the oracle's post-inference type arguments.
    fn generic_call(
        &mut self,
        callee: &str,
        target: DefId,
        type_args: Option<Vec<TypeId>>,
        arguments: Vec<Node>,
    ) -> Node {
        let id = self.factory.next_node_id();
        self.table.set_call_target(id, target);
        if let Some(args) = type_args {
            self.table.set_call_type_arguments(id, args);
        }
        Node::Call(CallExpr {
            id,
            span: Span::new(40, 60),
            callee: Box::new(Node::Identifier(callee.to_string())),
            type_args: Vec::new(),
            arguments,
        })
    }

    fn run(&mut self, statements: Vec<Node>) -> TransformOutput {
        let file = SourceFile::new("main.ts", statements);
        transform_source_file(&self.table, &mut self.factory, file)
    }

    fn emit(&mut self, statements: Vec<Node>) -> (String, TransformOutput) {
        let output = self.run(statements);
        (Printer::emit_to_string(&output.file), output)
    }
}

fn const_decl(name: &str, initializer: Node) -> Node {
    Node::VarDecl {
        name: name.to_string(),
        initializer: Some(Box::new(initializer)),
    }
}

#[test]
fn marker_call_reifies_object_type() {
    let mut fx = Fixture::new();
    let point = fx
        .table
        .types_mut()
        .object([("x", TypeId::NUMBER), ("y", TypeId::STRING)]);
    let type_arg = fx.type_node("Point", Some(point));
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![const_decl("p", call)]);
    assert_eq!(
        js,
        "const p = { kind: 14, properties: [[\"x\", { kind: 1 }], [\"y\", { kind: 3 }]] };\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn marker_call_reifies_union_in_source_order() {
    let mut fx = Fixture::new();
    let union = fx
        .table
        .types_mut()
        .union(vec![TypeId::STRING, TypeId::NUMBER]);
    let type_arg = fx.type_node("string | number", Some(union));
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![const_decl("u", call)]);
    assert_eq!(
        js,
        "const u = { kind: 18, parts: [{ kind: 3 }, { kind: 1 }] };\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn marker_call_reifies_intersection_in_source_order() {
    let mut fx = Fixture::new();
    let intersection = fx
        .table
        .types_mut()
        .intersection(vec![TypeId::STRING, TypeId::NUMBER, TypeId::BOOLEAN]);
    let type_arg = fx.type_node("A & B & C", Some(intersection));
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![const_decl("i", call)]);
    assert_eq!(
        js,
        "const i = { kind: 19, parts: [{ kind: 3 }, { kind: 1 }, { kind: 2 }] };\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn marker_call_carries_literal_values() {
    let mut fx = Fixture::new();
    let lit = fx.table.types_mut().literal_string("x");
    let type_arg = fx.type_node("\"x\"", Some(lit));
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![const_decl("k", call)]);
    assert_eq!(js, "const k = { kind: 3, literal: \"x\" };\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn marker_detection_follows_resolution_not_callee_text() {
    // `import { typeRep as rep }` style aliasing: the callee identifier
    // differs, the resolved declaration is still the marker.
    let mut fx = Fixture::new();
    let type_arg = fx.type_node("number", Some(TypeId::NUMBER));
    let Node::Call(mut call) = fx.marker_call(vec![type_arg]) else {
        unreachable!()
    };
    call.callee = Box::new(Node::Identifier("rep".to_string()));

    let (js, output) = fx.emit(vec![const_decl("n", Node::Call(call))]);
    assert_eq!(js, "const n = { kind: 1 };\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn generic_declaration_gains_trailing_witness_parameter() {
    let mut fx = Fixture::new();
    let t = fx.factory.type_param("T");
    let value = fx.factory.parameter("value");
    let f = fx.factory.function(
        FunctionKind::Declaration,
        Some("f".to_string()),
        vec![t],
        vec![value],
        vec![Node::ReturnStatement(Some(Box::new(Node::Identifier(
            "value".to_string(),
        ))))],
    );

    let (js, output) = fx.emit(vec![f]);
    assert_eq!(
        js,
        "function f(value, _typeRep_typeParameter_T) {\n    return value;\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn generic_call_gains_concrete_witness_argument() {
    let mut fx = Fixture::new();
    let f = fx.table.add_declaration("f", &["T"]);
    let call = fx.generic_call(
        "f",
        f,
        Some(vec![TypeId::STRING]),
        vec![Node::StringLiteral("x".to_string())],
    );

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "f(\"x\", { kind: 3 });\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn inferred_type_arguments_are_reified_like_explicit_ones() {
    // `identity(42)` with T inferred as the literal type 42.
    let mut fx = Fixture::new();
    let identity = fx.table.add_declaration("identity", &["T"]);
    let forty_two = fx.table.types_mut().literal_number(42.0);
    let call = fx.generic_call(
        "identity",
        identity,
        Some(vec![forty_two]),
        vec![Node::NumericLiteral("42".to_string())],
    );

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "identity(42, { kind: 1, literal: 42 });\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn nested_generic_forwards_enclosing_witness() {
    let mut fx = Fixture::new();
    let f = fx.table.add_declaration("f", &["T"]);
    let t_param = fx.table.types_mut().type_parameter("T");
    let inner = fx.generic_call(
        "f",
        f,
        Some(vec![t_param]),
        vec![Node::Identifier("x".to_string())],
    );
    let t = fx.factory.type_param("T");
    let x = fx.factory.parameter("x");
    let g = fx.factory.function(
        FunctionKind::Declaration,
        Some("g".to_string()),
        vec![t],
        vec![x],
        vec![Node::ReturnStatement(Some(Box::new(inner)))],
    );

    let (js, output) = fx.emit(vec![g]);
    assert_eq!(
        js,
        "function g(x, _typeRep_typeParameter_T) {\n    return f(x, _typeRep_typeParameter_T);\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn marker_inside_generic_body_becomes_witness_reference() {
    let mut fx = Fixture::new();
    let t_param = fx.table.types_mut().type_parameter("T");
    let type_arg = fx.type_node("T", Some(t_param));
    let marker = fx.marker_call(vec![type_arg]);
    let t = fx.factory.type_param("T");
    let f = fx.factory.function(
        FunctionKind::Declaration,
        Some("f".to_string()),
        vec![t],
        vec![],
        vec![Node::ReturnStatement(Some(Box::new(marker)))],
    );

    let (js, output) = fx.emit(vec![f]);
    assert_eq!(
        js,
        "function f(_typeRep_typeParameter_T) {\n    return _typeRep_typeParameter_T;\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn witness_reference_outside_any_scope_is_flagged() {
    // A bare `typeRep<T>()` at top level still emits the witness
    // identifier, with a warning that nothing binds it.
    let mut fx = Fixture::new();
    let t_param = fx.table.types_mut().type_parameter("T");
    let type_arg = fx.type_node("T", Some(t_param));
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "_typeRep_typeParameter_T;\n");
    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.category, DiagnosticCategory::Warning);
    assert_eq!(diagnostic.code, codes::WITNESS_NOT_IN_SCOPE);
    assert!(diagnostic.message_text.contains('T'));
}

#[test]
fn marker_arity_mismatch_is_diagnosed_and_left_alone() {
    let mut fx = Fixture::new();
    let zero = fx.marker_call(vec![]);
    let a = fx.type_node("A", Some(TypeId::NUMBER));
    let b = fx.type_node("B", Some(TypeId::STRING));
    let two = fx.marker_call(vec![a, b]);

    let (js, output) = fx.emit(vec![
        Node::ExpressionStatement(Box::new(zero)),
        Node::ExpressionStatement(Box::new(two)),
    ]);
    // Type arguments are erased on emission; the calls themselves survive.
    assert_eq!(js, "typeRep();\ntypeRep();\n");
    assert_eq!(output.diagnostics.len(), 2);
    for diagnostic in &output.diagnostics {
        assert_eq!(diagnostic.category, DiagnosticCategory::Error);
        assert_eq!(diagnostic.code, codes::MARKER_TYPE_ARGUMENT_COUNT);
        assert_eq!(diagnostic.file, "main.ts");
    }
    assert!(output.diagnostics[0].message_text.contains('0'));
    assert!(output.diagnostics[1].message_text.contains('2'));
}

#[test]
fn unresolved_marker_type_argument_is_diagnosed() {
    let mut fx = Fixture::new();
    let type_arg = fx.type_node("Missing", None);
    let call = fx.marker_call(vec![type_arg]);

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "typeRep();\n");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, codes::UNRESOLVED_TYPE_ARGUMENT);
    assert!(output.diagnostics[0].message_text.contains("Missing"));
}

#[test]
fn composite_polymorphic_witness_degrades_to_void_zero() {
    // `f<Box<T>>(x)` inside `g<T>`: Box<T> depends on T but is not T
    // itself, so there is no single witness to forward.
    let mut fx = Fixture::new();
    let f = fx.table.add_declaration("f", &["T"]);
    let container = fx.table.add_declaration("Box", &["T"]);
    let t_param = fx.table.types_mut().type_parameter("T");
    let box_of_t = fx.table.types_mut().application(container, vec![t_param]);
    let inner = fx.generic_call(
        "f",
        f,
        Some(vec![box_of_t]),
        vec![Node::Identifier("x".to_string())],
    );
    let t = fx.factory.type_param("T");
    let x = fx.factory.parameter("x");
    let g = fx.factory.function(
        FunctionKind::Declaration,
        Some("g".to_string()),
        vec![t],
        vec![x],
        vec![Node::ExpressionStatement(Box::new(inner))],
    );

    let (js, output) = fx.emit(vec![g]);
    assert_eq!(
        js,
        "function g(x, _typeRep_typeParameter_T) {\n    f(x, void 0);\n}\n"
    );
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].code,
        codes::COMPOSITE_POLYMORPHIC_FORWARD
    );
    assert_eq!(output.diagnostics[0].category, DiagnosticCategory::Error);
    assert!(output.diagnostics[0].message_text.contains("Box<T>"));
}

#[test]
fn generic_call_without_resolved_type_arguments_is_diagnosed() {
    let mut fx = Fixture::new();
    let f = fx.table.add_declaration("f", &["T"]);
    let call = fx.generic_call("f", f, None, vec![Node::Identifier("x".to_string())]);

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "f(x);\n");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].code,
        codes::UNRESOLVED_CALL_TYPE_ARGUMENTS
    );
}

#[test]
fn generic_call_with_wrong_arity_resolution_is_diagnosed() {
    let mut fx = Fixture::new();
    let pair = fx.table.add_declaration("pair", &["A", "B"]);
    // Oracle answered with one type for a two-parameter declaration.
    let call = fx.generic_call("pair", pair, Some(vec![TypeId::NUMBER]), vec![]);

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "pair();\n");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].code,
        codes::UNRESOLVED_CALL_TYPE_ARGUMENTS
    );
}

#[test]
fn multiple_type_parameters_append_in_declaration_order() {
    let mut fx = Fixture::new();
    let pair = fx.table.add_declaration("pair", &["A", "B"]);
    let call = fx.generic_call(
        "pair",
        pair,
        Some(vec![TypeId::STRING, TypeId::BOOLEAN]),
        vec![
            Node::StringLiteral("a".to_string()),
            Node::BooleanLiteral(true),
        ],
    );

    let (js, output) = fx.emit(vec![Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "pair(\"a\", true, { kind: 3 }, { kind: 2 });\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn non_generic_calls_and_functions_pass_through() {
    let mut fx = Fixture::new();
    let log = fx.table.add_declaration("log", &[]);
    let call = fx.generic_call("log", log, None, vec![Node::StringLiteral("hi".to_string())]);
    let param = fx.factory.parameter("message");
    let plain = fx.factory.function(
        FunctionKind::Declaration,
        Some("log".to_string()),
        vec![],
        vec![param],
        vec![],
    );

    let (js, output) = fx.emit(vec![plain, Node::ExpressionStatement(Box::new(call))]);
    assert_eq!(js, "function log(message) { }\nlog(\"hi\");\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn generic_arrow_gains_witness_parameter() {
    let mut fx = Fixture::new();
    let t = fx.factory.type_param("T");
    let v = fx.factory.parameter("v");
    let arrow = fx.factory.function(FunctionKind::Arrow, None, vec![t], vec![v], vec![]);
    let (js, output) = fx.emit(vec![const_decl("id", arrow)]);
    assert_eq!(js, "const id = (v, _typeRep_typeParameter_T) => { };\n");
    assert!(output.diagnostics.is_empty());
}

#[test]
fn generic_class_method_gains_witness_parameter() {
    // The marker in the method body resolves against the method's own
    // type parameter, bound by the scope the walker opens for it.
    let mut fx = Fixture::new();
    let t_param = fx.table.types_mut().type_parameter("T");
    let type_arg = fx.type_node("T", Some(t_param));
    let marker = fx.marker_call(vec![type_arg]);
    let t = fx.factory.type_param("T");
    let v = fx.factory.parameter("v");
    let method = fx.factory.function(
        FunctionKind::Method,
        Some("wrap".to_string()),
        vec![t],
        vec![v],
        vec![Node::ReturnStatement(Some(Box::new(marker)))],
    );
    let class = Node::Class {
        name: "Box".to_string(),
        members: vec![method],
    };

    let (js, output) = fx.emit(vec![class]);
    assert_eq!(
        js,
        "class Box {\n    wrap(v, _typeRep_typeParameter_T) {\n        return _typeRep_typeParameter_T;\n    }\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn generic_constructor_gains_witness_parameter() {
    let mut fx = Fixture::new();
    let t = fx.factory.type_param("T");
    let value = fx.factory.parameter("value");
    let ctor = fx.factory.function(
        FunctionKind::Constructor,
        None,
        vec![t],
        vec![value],
        vec![],
    );
    let class = Node::Class {
        name: "Cell".to_string(),
        members: vec![ctor],
    };

    let (js, output) = fx.emit(vec![class]);
    assert_eq!(
        js,
        "class Cell {\n    constructor(value, _typeRep_typeParameter_T) { }\n}\n"
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn transformer_entry_point_runs_per_file() {
    let mut table = TypeTable::new();
    let marker = table.add_declaration("typeRep", &["T"]);
    let mut factory = NodeFactory::new();
    let type_arg = factory.type_node("boolean");
    table.set_node_type(type_arg.id, TypeId::BOOLEAN);
    let id = factory.next_node_id();
    table.set_call_target(id, marker);
    let call = Node::Call(CallExpr {
        id,
        span: Span::new(0, 18),
        callee: Box::new(Node::Identifier("typeRep".to_string())),
        type_args: vec![type_arg],
        arguments: Vec::new(),
    });

    let pass = transformer(&table);
    let output = pass(
        SourceFile::new("lib.ts", vec![const_decl("b", call)]),
        &mut factory,
    );
    assert_eq!(
        Printer::emit_to_string(&output.file),
        "const b = { kind: 2 };\n"
    );
    assert!(output.diagnostics.is_empty());
}
