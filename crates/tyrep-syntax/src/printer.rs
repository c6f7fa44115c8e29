//! JavaScript emission from the syntax tree.
//!
//! Types are erased on the way out: type parameters and type arguments are
//! not printed. The transform has already lowered every type-dependent
//! construct into plain runtime syntax by the time a tree reaches this
//! printer.

use crate::ast::{FunctionKind, FunctionLike, Node, SourceFile};

/// String-building printer.
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Printer {
        Printer {
            out: String::new(),
            indent: 0,
        }
    }

    /// Emit a whole source file, one statement per line.
    pub fn emit_to_string(file: &SourceFile) -> String {
        let mut printer = Printer::new();
        for statement in &file.statements {
            printer.emit_statement(statement);
        }
        printer.out
    }

    /// Emit a single node (expression position).
    pub fn emit_node_to_string(node: &Node) -> String {
        let mut printer = Printer::new();
        printer.emit_expr(node);
        printer.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
    }

    fn emit_statement(&mut self, node: &Node) {
        self.write_indent();
        match node {
            Node::Function(f) if f.kind == FunctionKind::Declaration => {
                self.emit_function(f);
            }
            Node::Class { name, members } => {
                self.write("class ");
                self.write(name);
                self.write(" {");
                self.newline();
                self.indent += 1;
                for member in members {
                    self.write_indent();
                    if let Node::Function(f) = member {
                        self.emit_function(f);
                    }
                    self.newline();
                }
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            Node::VarDecl { name, initializer } => {
                self.write("const ");
                self.write(name);
                if let Some(init) = initializer {
                    self.write(" = ");
                    self.emit_expr(init);
                }
                self.write(";");
            }
            Node::ExpressionStatement(expr) => {
                self.emit_expr(expr);
                self.write(";");
            }
            Node::ReturnStatement(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_expr(expr);
                }
                self.write(";");
            }
            Node::Block(statements) => {
                self.write("{");
                self.newline();
                self.indent += 1;
                for statement in statements {
                    self.emit_statement(statement);
                }
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            // An expression in statement position (defensive; hosts build
            // statements, but nothing breaks if they don't).
            other => {
                self.emit_expr(other);
                self.write(";");
            }
        }
        self.newline();
    }

    fn emit_expr(&mut self, node: &Node) {
        match node {
            Node::NumericLiteral(text) | Node::BigIntLiteral(text) => self.write(text),
            Node::StringLiteral(value) => {
                self.write("\"");
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                self.write(&escaped);
                self.write("\"");
            }
            Node::BooleanLiteral(true) => self.write("true"),
            Node::BooleanLiteral(false) => self.write("false"),
            Node::NullLiteral => self.write("null"),
            Node::VoidZero => self.write("void 0"),
            Node::Identifier(name) => self.write(name),
            Node::ArrayLiteral(elements) => {
                self.write("[");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expr(element);
                }
                self.write("]");
            }
            Node::ObjectLiteral(properties) => {
                if properties.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                for (i, (name, value)) in properties.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.write(name);
                    self.write(": ");
                    self.emit_expr(value);
                }
                self.write(" }");
            }
            Node::PropertyAccess { object, property } => {
                self.emit_expr(object);
                self.write(".");
                self.write(property);
            }
            Node::Call(call) => {
                self.emit_expr(&call.callee);
                self.write("(");
                for (i, argument) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.emit_expr(argument);
                }
                self.write(")");
            }
            Node::Function(f) => self.emit_function(f),
            // Statement nodes in expression position print as-is; the tree
            // shape makes this unreachable from well-formed input.
            other => {
                let mut inner = Printer::new();
                inner.indent = self.indent;
                inner.emit_statement(other);
                let text = inner.out.trim_end().to_string();
                self.write(&text);
            }
        }
    }

    fn emit_params(&mut self, f: &FunctionLike) {
        self.write("(");
        for (i, param) in f.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&param.name);
        }
        self.write(")");
    }

    fn emit_body(&mut self, f: &FunctionLike) {
        if f.body.is_empty() {
            self.write("{ }");
            return;
        }
        self.write("{");
        self.newline();
        self.indent += 1;
        for statement in &f.body {
            self.emit_statement(statement);
        }
        self.indent -= 1;
        self.write_indent();
        self.write("}");
    }

    fn emit_function(&mut self, f: &FunctionLike) {
        match f.kind {
            FunctionKind::Declaration | FunctionKind::Expression => {
                self.write("function");
                if let Some(name) = &f.name {
                    self.write(" ");
                    self.write(name);
                }
                self.emit_params(f);
                self.write(" ");
                self.emit_body(f);
            }
            FunctionKind::Arrow => {
                self.emit_params(f);
                self.write(" => ");
                if f.is_expression_body {
                    if let Some(expr) = f.body.first() {
                        self.emit_expr(expr);
                    }
                } else {
                    self.emit_body(f);
                }
            }
            FunctionKind::Method => {
                if let Some(name) = &f.name {
                    self.write(name);
                }
                self.emit_params(f);
                self.write(" ");
                self.emit_body(f);
            }
            FunctionKind::Getter | FunctionKind::Setter => {
                self.write(if f.kind == FunctionKind::Getter {
                    "get "
                } else {
                    "set "
                });
                if let Some(name) = &f.name {
                    self.write(name);
                }
                self.emit_params(f);
                self.write(" ");
                self.emit_body(f);
            }
            FunctionKind::Constructor => {
                self.write("constructor");
                self.emit_params(f);
                self.write(" ");
                self.emit_body(f);
            }
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::NodeFactory;

    #[test]
    fn emits_object_literal_in_order() {
        let mut factory = NodeFactory::new();
        let object = factory.object_literal(vec![
            ("kind".into(), Node::NumericLiteral("14".into())),
            ("literal".into(), Node::StringLiteral("ok".into())),
        ]);
        assert_eq!(
            Printer::emit_node_to_string(&object),
            "{ kind: 14, literal: \"ok\" }"
        );
    }

    #[test]
    fn emits_function_declaration() {
        let mut factory = NodeFactory::new();
        let param = factory.parameter("t");
        let f = factory.function(
            FunctionKind::Declaration,
            Some("f".into()),
            vec![],
            vec![param],
            vec![Node::ReturnStatement(Some(Box::new(Node::Identifier(
                "t".into(),
            ))))],
        );
        let file = SourceFile::new("test.ts", vec![f]);
        assert_eq!(
            Printer::emit_to_string(&file),
            "function f(t) {\n    return t;\n}\n"
        );
    }

    #[test]
    fn emits_void_zero_and_bigint() {
        let mut factory = NodeFactory::new();
        let array = factory.array_literal(vec![Node::VoidZero, Node::BigIntLiteral("12n".into())]);
        assert_eq!(Printer::emit_node_to_string(&array), "[void 0, 12n]");
    }
}
