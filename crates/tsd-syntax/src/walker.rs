//! Depth-first pre-order call-expression walker.

use crate::arena::{NodeIndex, SyntaxKind};
use crate::program::{FileId, Program, SourceFile};

/// Visit every call-expression node of every source file exactly once,
/// depth-first, pre-order.
///
/// The walker is stateless and produces no diagnostics; side effects are
/// confined to whatever the callback accumulates. All files of the program
/// are walked - the runner does not filter by file.
pub fn for_each_call_expression<F>(program: &Program, mut callback: F)
where
    F: FnMut(FileId, NodeIndex),
{
    for (file_id, file) in program.files() {
        visit(file, file_id, file.root, &mut callback);
    }
}

fn visit<F>(file: &SourceFile, file_id: FileId, index: NodeIndex, callback: &mut F)
where
    F: FnMut(FileId, NodeIndex),
{
    if let Some(node) = file.arena.get(index)
        && node.kind == SyntaxKind::CallExpression
    {
        callback(file_id, index);
    }
    for child in file.arena.children(index) {
        visit(file, file_id, child, callback);
    }
}
