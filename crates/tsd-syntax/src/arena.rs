//! Flat node arena with typed data pools.
//!
//! Nodes are stored in one `Vec` and addressed by `NodeIndex`; per-kind
//! payloads live in side pools referenced through a data index. Parent
//! pointers are maintained by the `add_*` constructors - children are
//! created bottom-up, before their parents, so a child index is always
//! valid by the time its parent is added.

use smallvec::SmallVec;
use tsd_common::Span;

/// Index of a node within its arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }
}

/// The node kinds the assertion runner inspects.
///
/// Host code surrounding assertions does not need faithful modeling;
/// anything the runner never looks inside is `OtherExpression` with an
/// opaque child list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    Block,
    ExpressionStatement,
    CallExpression,
    PropertyAccessExpression,
    Identifier,
    StringLiteral,
    NumericLiteral,
    RegexLiteral,
    TypeReference,
    OtherExpression,
}

/// A thin node: kind, byte span, and an index into the kind's data pool.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    data_index: u32,
}

impl Node {
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub text: String,
}

/// Literal payload. `text` holds the cooked value: string contents without
/// quotes, numeric digits as written, regex pattern without delimiters.
#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub arguments: NodeList,
}

#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    parents: Vec<NodeIndex>,
    identifiers: Vec<IdentifierData>,
    literals: Vec<LiteralData>,
    call_exprs: Vec<CallExprData>,
    access_exprs: Vec<AccessExprData>,
    lists: Vec<NodeList>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    fn push_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node { kind, pos, end, data_index });
        self.parents.push(NodeIndex::NONE);
        NodeIndex(index)
    }

    /// Set the parent for a single child node.
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if !child.is_none()
            && let Some(slot) = self.parents.get_mut(child.0 as usize)
        {
            *slot = parent;
        }
    }

    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    fn set_parent_opt_list(&mut self, list: &Option<NodeList>, parent: NodeIndex) {
        if let Some(list) = list {
            self.set_parent_list(list, parent);
        }
    }

    // ========================================================================
    // Node creation
    // ========================================================================

    pub fn add_identifier(&mut self, pos: u32, end: u32, text: impl Into<String>) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { text: text.into() });
        self.push_node(SyntaxKind::Identifier, pos, end, data_index)
    }

    /// Add a type-annotation node. The text is the annotation as written;
    /// the runner treats it as opaque and hands it to the type oracle.
    pub fn add_type_reference(&mut self, pos: u32, end: u32, text: impl Into<String>) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData { text: text.into() });
        self.push_node(SyntaxKind::TypeReference, pos, end, data_index)
    }

    /// Add a literal node (`StringLiteral`, `NumericLiteral`, or
    /// `RegexLiteral`).
    pub fn add_literal(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        text: impl Into<String>,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::RegexLiteral
        ));
        let data_index = self.literals.len() as u32;
        self.literals.push(LiteralData { text: text.into() });
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_call_expr(&mut self, pos: u32, end: u32, data: CallExprData) -> NodeIndex {
        let expression = data.expression;
        let type_arguments = data.type_arguments.clone();
        let arguments = data.arguments.clone();

        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(SyntaxKind::CallExpression, pos, end, data_index);

        self.set_parent(expression, parent);
        self.set_parent_opt_list(&type_arguments, parent);
        self.set_parent_list(&arguments, parent);
        parent
    }

    pub fn add_access_expr(&mut self, pos: u32, end: u32, data: AccessExprData) -> NodeIndex {
        let expression = data.expression;
        let name = data.name;

        let data_index = self.access_exprs.len() as u32;
        self.access_exprs.push(data);
        let parent = self.push_node(SyntaxKind::PropertyAccessExpression, pos, end, data_index);

        self.set_parent(expression, parent);
        self.set_parent(name, parent);
        parent
    }

    pub fn add_expression_statement(&mut self, pos: u32, end: u32, expression: NodeIndex) -> NodeIndex {
        self.add_list_node(SyntaxKind::ExpressionStatement, pos, end, vec![expression].into())
    }

    pub fn add_block(&mut self, pos: u32, end: u32, statements: NodeList) -> NodeIndex {
        self.add_list_node(SyntaxKind::Block, pos, end, statements)
    }

    /// Add an opaque expression the runner never inspects beyond walking
    /// its children for nested call expressions.
    pub fn add_other_expression(&mut self, pos: u32, end: u32, children: NodeList) -> NodeIndex {
        self.add_list_node(SyntaxKind::OtherExpression, pos, end, children)
    }

    pub fn add_source_file(&mut self, pos: u32, end: u32, statements: NodeList) -> NodeIndex {
        self.add_list_node(SyntaxKind::SourceFile, pos, end, statements)
    }

    fn add_list_node(&mut self, kind: SyntaxKind, pos: u32, end: u32, children: NodeList) -> NodeIndex {
        let data_index = self.lists.len() as u32;
        self.lists.push(children.clone());
        let parent = self.push_node(kind, pos, end, data_index);
        self.set_parent_list(&children, parent);
        parent
    }

    // ========================================================================
    // Node access
    // ========================================================================

    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get the parent of a node, or `NodeIndex::NONE` for roots.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        if index.is_none() {
            NodeIndex::NONE
        } else {
            self.parents.get(index.0 as usize).copied().unwrap_or(NodeIndex::NONE)
        }
    }

    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if matches!(node.kind, SyntaxKind::Identifier | SyntaxKind::TypeReference) {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if matches!(
            node.kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::RegexLiteral
        ) {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        if node.kind == SyntaxKind::CallExpression {
            self.call_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        if node.kind == SyntaxKind::PropertyAccessExpression {
            self.access_exprs.get(node.data_index as usize)
        } else {
            None
        }
    }

    fn get_list(&self, node: &Node) -> Option<&NodeList> {
        if matches!(
            node.kind,
            SyntaxKind::SourceFile
                | SyntaxKind::Block
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::OtherExpression
        ) {
            self.lists.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Resolve an identifier or type-reference node's text.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.text.as_str())
    }

    /// Collect the direct children of a node in source order.
    pub fn children(&self, index: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut children = SmallVec::new();
        let Some(node) = self.get(index) else {
            return children;
        };
        match node.kind {
            SyntaxKind::CallExpression => {
                if let Some(call) = self.get_call_expr(node) {
                    children.push(call.expression);
                    if let Some(type_arguments) = &call.type_arguments {
                        children.extend(type_arguments.nodes.iter().copied());
                    }
                    children.extend(call.arguments.nodes.iter().copied());
                }
            }
            SyntaxKind::PropertyAccessExpression => {
                if let Some(access) = self.get_access_expr(node) {
                    children.push(access.expression);
                    children.push(access.name);
                }
            }
            _ => {
                if let Some(list) = self.get_list(node) {
                    children.extend(list.nodes.iter().copied());
                }
            }
        }
        children
    }
}
