//! Program snapshot: source files and cross-file node handles.

use crate::arena::{NodeArena, NodeIndex};
use tsd_common::{LineMap, SourceLocation};

/// Index of a source file within its program.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileId(pub u32);

/// A node handle that carries its owning file, the unit the runner passes
/// to the type oracle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub file: FileId,
    pub node: NodeIndex,
}

/// One parsed source file: its text, its arena, and the root node.
pub struct SourceFile {
    pub file_name: String,
    pub text: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
    line_map: LineMap,
}

impl SourceFile {
    pub fn new(
        file_name: impl Into<String>,
        text: impl Into<String>,
        arena: NodeArena,
        root: NodeIndex,
    ) -> SourceFile {
        let text = text.into();
        let line_map = LineMap::new(&text);
        SourceFile { file_name: file_name.into(), text, arena, root, line_map }
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// Resolve a node's source location (file, span, line/column of start).
    pub fn source_location(&self, node: NodeIndex) -> Option<SourceLocation> {
        let node = self.arena.get(node)?;
        Some(SourceLocation::from_span(&self.file_name, &self.line_map, node.span()))
    }

    /// The original source text covered by a node's span.
    pub fn node_text(&self, node: NodeIndex) -> &str {
        let Some(node) = self.arena.get(node) else {
            return "";
        };
        self.text.get(node.pos as usize..node.end as usize).unwrap_or("")
    }
}

/// An immutable, fully-built program snapshot: the ordered list of source
/// files the walker visits.
pub struct Program {
    files: Vec<SourceFile>,
}

impl Program {
    pub fn new(files: Vec<SourceFile>) -> Program {
        Program { files }
    }

    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0 as usize]
    }

    pub fn files(&self) -> impl Iterator<Item = (FileId, &SourceFile)> {
        self.files.iter().enumerate().map(|(i, file)| (FileId(i as u32), file))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::SyntaxKind;

    #[test]
    fn node_text_slices_the_original_source() {
        let text = "printType(abc);";
        let mut arena = NodeArena::new();
        let callee = arena.add_identifier(0, 9, "printType");
        let arg = arena.add_identifier(10, 13, "abc");
        let call = arena.add_call_expr(
            0,
            14,
            crate::arena::CallExprData {
                expression: callee,
                type_arguments: None,
                arguments: vec![arg].into(),
            },
        );
        let statement = arena.add_expression_statement(0, 15, call);
        let root = arena.add_source_file(0, 15, vec![statement].into());
        let file = SourceFile::new("index.test-d.ts", text, arena, root);

        assert_eq!(file.node_text(arg), "abc");
        assert_eq!(file.node_text(call), "printType(abc)");
        let location = file.source_location(call).expect("located");
        assert_eq!((location.line, location.column), (1, 0));
        assert_eq!(file.arena.get(root).map(|n| n.kind), Some(SyntaxKind::SourceFile));
    }
}
