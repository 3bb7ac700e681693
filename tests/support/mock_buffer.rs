use std::collections::HashMap;

use emacs_mini::traits::TextOps;
use emacs_mini::types::MarkId;
use ropey::Rope;

/// Rope-backed buffer with marks, a selection and snapshot undo, providing
/// the text-view semantics the engine expects from a host.
pub struct MockBuffer {
    rope: Rope,
    insert: usize,
    bound: usize,
    marks: HashMap<MarkId, usize>,
    next_mark: u64,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            insert: 0,
            bound: 0,
            marks: HashMap::new(),
            next_mark: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert position; equals the cursor when the selection is collapsed.
    pub fn cursor(&self) -> usize {
        self.insert
    }

    pub fn live_mark_count(&self) -> usize {
        self.marks.len()
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.rope.len_chars())
    }

    /// Left-gravity adjustment after deleting `start..end`.
    fn adjust_after_delete(offset: usize, start: usize, end: usize) -> usize {
        if offset >= end {
            offset - (end - start)
        } else if offset > start {
            start
        } else {
            offset
        }
    }
}

impl TextOps for MockBuffer {
    fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.rope.len_chars() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.rope.char_to_line(self.clamp(offset))
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.rope.line_to_char(line)
    }

    fn line_end_offset(&self, line: usize) -> usize {
        let start = self.rope.line_to_char(line);
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        start + len
    }

    fn selection(&self) -> (usize, usize) {
        (self.insert, self.bound)
    }

    fn select_range(&mut self, insert: usize, bound: usize) {
        self.insert = self.clamp(insert);
        self.bound = self.clamp(bound);
    }

    fn create_mark(&mut self, offset: usize) -> MarkId {
        let id = MarkId(self.next_mark);
        self.next_mark += 1;
        self.marks.insert(id, self.clamp(offset));
        id
    }

    fn move_mark(&mut self, mark: MarkId, offset: usize) {
        let offset = self.clamp(offset);
        *self.marks.get_mut(&mark).expect("mark is live") = offset;
    }

    fn delete_mark(&mut self, mark: MarkId) {
        self.marks.remove(&mark).expect("mark is live");
    }

    fn mark_offset(&self, mark: MarkId) -> usize {
        self.marks[&mark]
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.rope.slice(start..end).to_string()
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        self.undo_stack.push(self.rope.to_string());
        self.redo_stack.clear();

        self.rope.remove(start..end);

        self.insert = Self::adjust_after_delete(self.insert, start, end);
        self.bound = Self::adjust_after_delete(self.bound, start, end);
        for offset in self.marks.values_mut() {
            *offset = Self::adjust_after_delete(*offset, start, end);
        }
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn undo(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.redo_stack.push(self.rope.to_string());
            self.rope = Rope::from_str(&previous);
            self.insert = self.clamp(self.insert);
            self.bound = self.clamp(self.bound);
        }
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn redo(&mut self) {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(self.rope.to_string());
            self.rope = Rope::from_str(&next);
            self.insert = self.clamp(self.insert);
            self.bound = self.clamp(self.bound);
        }
    }
}
