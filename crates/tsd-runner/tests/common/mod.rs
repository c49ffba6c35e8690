//! Shared test support: a linear source builder that keeps node spans in
//! sync with the generated text, and a fake type oracle.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use tsd_common::{RawDiagnostic, SourceLocation};
use tsd_runner::oracle::{Symbol, TypeId, TypeOracle};
use tsd_syntax::{
    AccessExprData, CallExprData, NodeArena, NodeIndex, NodeRef, Program, SourceFile, SyntaxKind,
};

pub const NEVER: TypeId = TypeId(0);
pub const STRING: TypeId = TypeId(1);
pub const NUMBER: TypeId = TypeId(2);
pub const BOOLEAN: TypeId = TypeId(3);
pub const UNKNOWN: TypeId = TypeId(99);

/// An argument of a built call.
pub enum Arg<'s> {
    Str(&'s str),
    Num(&'s str),
    Re(&'s str),
    Id(&'s str),
}

/// Builds one source file front to back, so every node's span matches the
/// text exactly.
pub struct SourceBuilder {
    text: String,
    arena: NodeArena,
    statements: Vec<NodeIndex>,
}

impl SourceBuilder {
    pub fn new() -> SourceBuilder {
        SourceBuilder { text: String::new(), arena: NodeArena::new(), statements: Vec::new() }
    }

    fn pos(&self) -> u32 {
        self.text.len() as u32
    }

    fn push(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let pos = self.pos();
        self.push(name);
        self.arena.add_identifier(pos, self.pos(), name)
    }

    fn type_ref(&mut self, text: &str) -> NodeIndex {
        let pos = self.pos();
        self.push(text);
        self.arena.add_type_reference(pos, self.pos(), text)
    }

    fn string_literal(&mut self, value: &str) -> NodeIndex {
        let pos = self.pos();
        self.push("'");
        self.push(value);
        self.push("'");
        self.arena.add_literal(SyntaxKind::StringLiteral, pos, self.pos(), value)
    }

    fn numeric_literal(&mut self, value: &str) -> NodeIndex {
        let pos = self.pos();
        self.push(value);
        self.arena.add_literal(SyntaxKind::NumericLiteral, pos, self.pos(), value)
    }

    fn regex_literal(&mut self, pattern: &str) -> NodeIndex {
        let pos = self.pos();
        self.push("/");
        self.push(pattern);
        self.push("/");
        self.arena.add_literal(SyntaxKind::RegexLiteral, pos, self.pos(), pattern)
    }

    fn argument(&mut self, arg: &Arg<'_>) -> NodeIndex {
        match arg {
            Arg::Str(value) => self.string_literal(value),
            Arg::Num(value) => self.numeric_literal(value),
            Arg::Re(pattern) => self.regex_literal(pattern),
            Arg::Id(name) => self.ident(name),
        }
    }

    fn call_tail(&mut self, type_args: &[&str], args: &[Arg<'_>]) -> (Option<Vec<NodeIndex>>, Vec<NodeIndex>) {
        let type_nodes = if type_args.is_empty() {
            None
        } else {
            self.push("<");
            let mut nodes = Vec::new();
            for (i, text) in type_args.iter().enumerate() {
                if i > 0 {
                    self.push(", ");
                }
                nodes.push(self.type_ref(text));
            }
            self.push(">");
            Some(nodes)
        };
        self.push("(");
        let mut arg_nodes = Vec::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            arg_nodes.push(self.argument(arg));
        }
        self.push(")");
        (type_nodes, arg_nodes)
    }

    /// `name<T, ...>(arg, ...)` as a free-standing call expression.
    pub fn call(&mut self, name: &str, type_args: &[&str], args: &[Arg<'_>]) -> NodeIndex {
        let start = self.pos();
        let callee = self.ident(name);
        let (type_nodes, arg_nodes) = self.call_tail(type_args, args);
        self.arena.add_call_expr(
            start,
            self.pos(),
            CallExprData {
                expression: callee,
                type_arguments: type_nodes.map(Into::into),
                arguments: arg_nodes.into(),
            },
        )
    }

    /// `name<'value'>(arg, ...)` - a call whose single type argument is a
    /// string literal rather than a type reference.
    pub fn call_string_type_arg(&mut self, name: &str, value: &str, args: &[Arg<'_>]) -> NodeIndex {
        let start = self.pos();
        let callee = self.ident(name);
        self.push("<");
        let type_arg = self.string_literal(value);
        self.push(">(");
        let mut arg_nodes = Vec::new();
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            arg_nodes.push(self.argument(arg));
        }
        self.push(")");
        self.arena.add_call_expr(
            start,
            self.pos(),
            CallExprData {
                expression: callee,
                type_arguments: Some(vec![type_arg].into()),
                arguments: arg_nodes.into(),
            },
        )
    }

    /// `name(<inner>)` where the single argument is built by the closure.
    pub fn call_wrapping(
        &mut self,
        name: &str,
        build_inner: impl FnOnce(&mut SourceBuilder) -> NodeIndex,
    ) -> NodeIndex {
        let start = self.pos();
        let callee = self.ident(name);
        self.push("(");
        let inner = build_inner(self);
        self.push(")");
        self.arena.add_call_expr(
            start,
            self.pos(),
            CallExprData { expression: callee, type_arguments: None, arguments: vec![inner].into() },
        )
    }

    /// `.name` hanging off an already-built receiver.
    pub fn member(&mut self, receiver: NodeIndex, name: &str) -> NodeIndex {
        let start = self.arena.get(receiver).map(|node| node.pos).unwrap_or(0);
        self.push(".");
        let name_node = self.ident(name);
        self.arena.add_access_expr(start, self.pos(), AccessExprData { expression: receiver, name: name_node })
    }

    /// `<access><T, ...>(arg, ...)` - invoke an already-built member access.
    pub fn invoke(&mut self, access: NodeIndex, type_args: &[&str], args: &[Arg<'_>]) -> NodeIndex {
        let start = self.arena.get(access).map(|node| node.pos).unwrap_or(0);
        let (type_nodes, arg_nodes) = self.call_tail(type_args, args);
        self.arena.add_call_expr(
            start,
            self.pos(),
            CallExprData {
                expression: access,
                type_arguments: type_nodes.map(Into::into),
                arguments: arg_nodes.into(),
            },
        )
    }

    /// Close an expression off as a statement.
    pub fn stmt(&mut self, expression: NodeIndex) {
        let start = self.arena.get(expression).map(|node| node.pos).unwrap_or(0);
        self.push(";\n");
        let statement = self.arena.add_expression_statement(start, self.pos(), expression);
        self.statements.push(statement);
    }

    /// Convenience: build a simple assertion call and close it off.
    pub fn stmt_call(&mut self, name: &str, type_args: &[&str], args: &[Arg<'_>]) -> NodeIndex {
        let call = self.call(name, type_args, args);
        self.stmt(call);
        call
    }

    pub fn finish(mut self, file_name: &str) -> SourceFile {
        let end = self.pos();
        let statements = std::mem::take(&mut self.statements);
        let root = self.arena.add_source_file(0, end, statements.into());
        SourceFile::new(file_name, self.text, self.arena, root)
    }
}

pub fn single_file_program(builder: SourceBuilder) -> Program {
    Program::new(vec![builder.finish("index.test-d.ts")])
}

pub fn location_of(program: &Program, file: tsd_syntax::FileId, node: NodeIndex) -> SourceLocation {
    program.file(file).source_location(node).expect("node has a location")
}

/// Fake oracle: symbols come from identifier text, types are keyed by the
/// node's source text, relations are explicit pair sets (plus reflexivity).
pub struct FakeOracle<'a> {
    pub program: &'a Program,
    /// Identifier names that resolve to no symbol (ordinary code).
    pub unresolved: HashSet<String>,
    /// Alias resolution: name -> original name.
    pub aliases: HashMap<String, String>,
    /// Node source text -> type.
    pub types_by_text: HashMap<String, TypeId>,
    pub rendered: HashMap<TypeId, String>,
    pub assignable_pairs: HashSet<(TypeId, TypeId)>,
    pub identical_pairs: HashSet<(TypeId, TypeId)>,
    pub subtype_pairs: HashSet<(TypeId, TypeId)>,
    /// Node source text -> JSDoc tag names.
    pub doc_tags: HashMap<String, Vec<String>>,
    /// Node source text -> doc comment.
    pub doc_comments: HashMap<String, String>,
    pub raw: Vec<RawDiagnostic>,
}

impl<'a> FakeOracle<'a> {
    pub fn new(program: &'a Program) -> FakeOracle<'a> {
        let mut oracle = FakeOracle {
            program,
            unresolved: HashSet::new(),
            aliases: HashMap::new(),
            types_by_text: HashMap::new(),
            rendered: HashMap::new(),
            assignable_pairs: HashSet::new(),
            identical_pairs: HashSet::new(),
            subtype_pairs: HashSet::new(),
            doc_tags: HashMap::new(),
            doc_comments: HashMap::new(),
            raw: Vec::new(),
        };
        for (text, ty, name) in [
            ("never", NEVER, "never"),
            ("string", STRING, "string"),
            ("number", NUMBER, "number"),
            ("boolean", BOOLEAN, "boolean"),
        ] {
            oracle.types_by_text.insert(text.to_string(), ty);
            oracle.rendered.insert(ty, name.to_string());
        }
        oracle
    }

    pub fn set_type(&mut self, node_text: &str, ty: TypeId) {
        self.types_by_text.insert(node_text.to_string(), ty);
    }

    /// Mark two types identical, including both assignability directions.
    pub fn mark_identical(&mut self, a: TypeId, b: TypeId) {
        self.identical_pairs.insert((a, b));
        self.assignable_pairs.insert((a, b));
        self.assignable_pairs.insert((b, a));
    }

    pub fn mark_assignable(&mut self, source: TypeId, target: TypeId) {
        self.assignable_pairs.insert((source, target));
    }

    pub fn mark_subtype(&mut self, source: TypeId, target: TypeId) {
        self.subtype_pairs.insert((source, target));
    }

    fn node_text(&self, node: NodeRef) -> &str {
        self.program.file(node.file).node_text(node.node)
    }

    fn type_by_text(&self, node: NodeRef) -> TypeId {
        self.types_by_text.get(self.node_text(node)).copied().unwrap_or(UNKNOWN)
    }
}

impl TypeOracle for FakeOracle<'_> {
    fn resolve_symbol(&self, node: NodeRef) -> Option<Symbol> {
        let file = self.program.file(node.file);
        let name = file.arena.identifier_text(node.node)?;
        if self.unresolved.contains(name) {
            return None;
        }
        Some(Symbol::new(name))
    }

    fn resolve_alias(&self, symbol: &Symbol) -> Symbol {
        match self.aliases.get(&symbol.name) {
            Some(original) => Symbol::new(original),
            None => symbol.clone(),
        }
    }

    fn type_of_node(&self, node: NodeRef) -> TypeId {
        self.type_by_text(node)
    }

    fn type_from_annotation(&self, node: NodeRef) -> TypeId {
        self.type_by_text(node)
    }

    fn render_type(&self, ty: TypeId) -> String {
        self.rendered.get(&ty).cloned().unwrap_or_else(|| format!("type#{}", ty.0))
    }

    fn is_assignable(&self, source: TypeId, target: TypeId) -> bool {
        source == target || self.assignable_pairs.contains(&(source, target))
    }

    fn is_identical(&self, a: TypeId, b: TypeId) -> bool {
        a == b || self.identical_pairs.contains(&(a, b)) || self.identical_pairs.contains(&(b, a))
    }

    fn is_subtype(&self, source: TypeId, target: TypeId) -> bool {
        source == target || self.subtype_pairs.contains(&(source, target))
    }

    fn never_type(&self) -> TypeId {
        NEVER
    }

    fn resolve_doc_tags(&self, node: NodeRef) -> Vec<String> {
        self.doc_tags.get(self.node_text(node)).cloned().unwrap_or_default()
    }

    fn resolve_doc_comment(&self, node: NodeRef) -> Option<String> {
        self.doc_comments.get(self.node_text(node)).cloned()
    }

    fn raw_diagnostics(&self) -> Vec<RawDiagnostic> {
        self.raw.clone()
    }
}
