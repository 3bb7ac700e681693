use crate::types::{EditorAction, MarkId};

/// Host-provided view of a text buffer.
///
/// Positions are absolute `char` offsets into the document, counting
/// newlines. Lines are zero-indexed. The selection is the pair of the
/// buffer's insert and selection-bound positions; it is *unordered* —
/// `insert` may sit before or after `bound`.
///
/// Marks must survive edits: when text before a mark is deleted the mark
/// shifts left, and a mark inside a deleted range collapses to the start
/// of that range (left gravity).
pub trait TextOps {
    // Basic queries
    fn char_count(&self) -> usize;
    fn line_count(&self) -> usize;
    fn char_at(&self, offset: usize) -> Option<char>;

    fn line_of(&self, offset: usize) -> usize;
    fn line_start_offset(&self, line: usize) -> usize;
    /// Offset of the end of the line's content, before its newline. For
    /// the last line this is the end of the buffer.
    fn line_end_offset(&self, line: usize) -> usize;

    /// Column of `offset` within its line.
    fn column(&self, offset: usize) -> usize {
        offset - self.line_start_offset(self.line_of(offset))
    }

    // Selection
    /// Current `(insert, selection_bound)` offsets, in that order.
    fn selection(&self) -> (usize, usize);
    fn has_selection(&self) -> bool {
        let (insert, bound) = self.selection();
        insert != bound
    }
    /// Move insert to `insert` and selection bound to `bound`. Passing the
    /// same offset twice collapses the selection to a plain cursor.
    fn select_range(&mut self, insert: usize, bound: usize);

    // Marks
    fn create_mark(&mut self, offset: usize) -> MarkId;
    fn move_mark(&mut self, mark: MarkId, offset: usize);
    fn delete_mark(&mut self, mark: MarkId);
    fn mark_offset(&self, mark: MarkId) -> usize;

    // Text extraction and edits (start <= end)
    fn slice(&self, start: usize, end: usize) -> String;
    fn delete_range(&mut self, start: usize, end: usize);

    // Undo manager queries; undo/redo are no-ops when unavailable
    fn can_undo(&self) -> bool;
    fn undo(&mut self);
    fn can_redo(&self) -> bool;
    fn redo(&mut self);
}

pub trait Clipboard {
    fn get(&mut self) -> Option<String>;
    fn set(&mut self, text: String);
}

/// Sink for the named actions a recognized command triggers.
///
/// The engine never implements these; it only requests them.
pub trait ActionDispatcher {
    fn dispatch(&mut self, action: EditorAction);
}
