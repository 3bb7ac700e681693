use log::{debug, trace};

use crate::commands::{self, Action};
use crate::key::KeyEvent;
use crate::motion;
use crate::token;
use crate::traits::{ActionDispatcher, Clipboard, TextOps};
use crate::types::{EditorAction, MarkId};

/// The Emacs key-sequence engine.
///
/// The engine owns a pending token sequence and the selection-extension
/// state, but never the buffer itself: every call takes the host's buffer,
/// clipboard and action sink by reference. It must be [`attach`]ed before
/// it sees events and [`detach`]ed when the view goes away; attach and
/// detach calls must pair exactly.
///
/// [`attach`]: Engine::attach
/// [`detach`]: Engine::detach
#[derive(Debug, Default, Clone)]
pub struct Engine {
    pending: String,
    extend_active: bool,
    selection_begin: Option<MarkId>,
    selection_end: Option<MarkId>,
    floating_column: usize,
    attached: bool,
    enabled: bool,
}

/// Read-only view of the engine state, for hosts and tests.
#[derive(Debug, Clone)]
pub struct EngineSnapshot {
    pub pending: String,
    pub extend_active: bool,
    pub floating_column: usize,
    pub attached: bool,
    pub enabled: bool,
}

// GTK-style line iteration. `backward_line` always lands on the start of
// the previous line (start of the buffer on line 0); `forward_to_line_end`
// skips to the *next* line's end when already sitting on a line end, which
// is what makes empty lines behave the way the vertical extension expects.

fn backward_line<T: TextOps + ?Sized>(buffer: &T, offset: usize) -> usize {
    let line = buffer.line_of(offset);
    if line == 0 {
        0
    } else {
        buffer.line_start_offset(line - 1)
    }
}

fn forward_line<T: TextOps + ?Sized>(buffer: &T, offset: usize) -> usize {
    let line = buffer.line_of(offset);
    if line + 1 < buffer.line_count() {
        buffer.line_start_offset(line + 1)
    } else {
        buffer.char_count()
    }
}

fn forward_to_line_end<T: TextOps + ?Sized>(buffer: &T, offset: usize) -> usize {
    let line = buffer.line_of(offset);
    let end = buffer.line_end_offset(line);
    if offset < end {
        end
    } else if line + 1 < buffer.line_count() {
        buffer.line_end_offset(line + 1)
    } else {
        buffer.char_count()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            pending: self.pending.clone(),
            extend_active: self.extend_active,
            floating_column: self.floating_column,
            attached: self.attached,
            enabled: self.enabled,
        }
    }

    /// Mark the engine as wired to a view.
    ///
    /// # Panics
    ///
    /// Panics if the engine is already attached; attach/detach must pair.
    pub fn attach(&mut self) {
        assert!(!self.attached, "engine is already attached");
        self.attached = true;
        debug!("engine attached");
    }

    /// Unwire the engine from its view, releasing marks and transient state.
    ///
    /// # Panics
    ///
    /// Panics if the engine is not attached.
    pub fn detach<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        assert!(self.attached, "engine is not attached");
        self.pending.clear();
        self.release_selection_marks(buffer);
        self.attached = false;
        debug!("engine detached");
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable event handling. Disabling clears the pending
    /// sequence and tears down any active selection extension.
    ///
    /// # Panics
    ///
    /// Panics when enabling an unattached engine.
    pub fn set_enabled<T: TextOps + ?Sized>(&mut self, buffer: &mut T, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if enabled {
            assert!(self.attached, "cannot enable an unattached engine");
            self.enabled = true;
        } else {
            self.pending.clear();
            self.release_selection_marks(buffer);
            self.enabled = false;
        }
        debug!("engine enabled: {}", self.enabled);
    }

    /// Feed one key press to the engine.
    ///
    /// Returns `true` when the key contributed a token to the pending
    /// sequence (and was therefore consumed), `false` when the host should
    /// handle the key itself.
    ///
    /// # Panics
    ///
    /// Panics if the engine is not attached.
    pub fn handle_key_press<T, C, D>(
        &mut self,
        buffer: &mut T,
        clipboard: &mut C,
        actions: &mut D,
        event: KeyEvent,
    ) -> bool
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
        D: ActionDispatcher + ?Sized,
    {
        assert!(self.attached, "engine is not attached");
        if !self.enabled {
            return false;
        }

        self.check_extension_drift(buffer);

        let Some(token) = token::encode(event, self.extend_active, &self.pending) else {
            return false;
        };

        if !self.pending.is_empty() {
            self.pending.push(' ');
        }
        self.pending.push_str(&token);
        trace!("pending sequence: {:?}", self.pending);

        self.eval(buffer, clipboard, actions);
        true
    }

    fn eval<T, C, D>(&mut self, buffer: &mut T, clipboard: &mut C, actions: &mut D)
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
        D: ActionDispatcher + ?Sized,
    {
        let Some(binding) = commands::lookup(&self.pending) else {
            return;
        };
        debug!("{:?} matched {:?}", self.pending, binding.action);
        let action = binding.action;
        self.run(buffer, clipboard, actions, action);
        self.pending.clear();
    }

    fn run<T, C, D>(&mut self, buffer: &mut T, clipboard: &mut C, actions: &mut D, action: Action)
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
        D: ActionDispatcher + ?Sized,
    {
        match action {
            Action::Abort => self.cmd_abort(buffer),
            Action::BeginExtend => self.cmd_begin_extend(buffer),
            Action::Cut => self.cmd_cut(buffer, clipboard),
            Action::Copy => self.cmd_copy(buffer, clipboard),
            Action::Yank => actions.dispatch(EditorAction::Paste),
            Action::ExtendUp => self.cmd_extend_up(buffer),
            Action::ExtendDown => self.cmd_extend_down(buffer),
            Action::ExtendLeft => self.cmd_extend_left(buffer),
            Action::ExtendRight => self.cmd_extend_right(buffer),
            Action::Quit => actions.dispatch(EditorAction::Quit),
            Action::CloseDocument => actions.dispatch(EditorAction::CloseDocument),
            Action::OpenFile => actions.dispatch(EditorAction::OpenFile),
            Action::SaveFile => actions.dispatch(EditorAction::SaveFile),
            Action::SaveAll => actions.dispatch(EditorAction::SaveAll),
            Action::FocusFind => actions.dispatch(EditorAction::FocusFind),
            Action::SaveFileAs => actions.dispatch(EditorAction::SaveFileAs),
            Action::Undo => {
                if buffer.can_undo() {
                    buffer.undo();
                }
            }
            Action::Redo => {
                if buffer.can_redo() {
                    buffer.redo();
                }
            }
            Action::ForwardChar => Self::cmd_forward_char(buffer),
            Action::BackwardChar => Self::cmd_backward_char(buffer),
            Action::DeleteForwardChar => Self::cmd_delete_forward_char(buffer, clipboard),
            Action::ForwardWord => Self::cmd_forward_word(buffer),
            Action::BackwardWord => Self::cmd_backward_word(buffer),
        }
    }

    /// Cancel the extension when the buffer's actual selection no longer
    /// matches the marks. Cancels only when *both* endpoints have moved
    /// away from the marks; a single drifted endpoint is tolerated.
    fn check_extension_drift<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        if !self.extend_active {
            return;
        }
        let (Some(begin), Some(end)) = (self.selection_begin, self.selection_end) else {
            return;
        };

        let (real_begin, real_end) = buffer.selection();
        if buffer.mark_offset(begin) != real_begin && buffer.mark_offset(end) != real_end {
            debug!("selection drifted away from extension marks; cancelling");
            self.clear_extension(buffer);
        }
    }

    /// Deactivate the extension, collapsing the visible selection onto the
    /// moving end so the cursor stays where the extension left it.
    fn clear_extension<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        if self.extend_active
            && self.selection_begin.is_some()
            && let Some(end) = self.selection_end
        {
            let end_offset = buffer.mark_offset(end);
            buffer.select_range(end_offset, end_offset);
        }
        self.extend_active = false;
        self.floating_column = 0;
        self.release_marks(buffer);
    }

    /// Drop extension state without touching the visible selection. Used on
    /// detach/disable, where the view may be on its way out.
    fn release_selection_marks<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        self.extend_active = false;
        self.floating_column = 0;
        self.release_marks(buffer);
    }

    fn release_marks<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        if let Some(mark) = self.selection_begin.take() {
            buffer.delete_mark(mark);
        }
        if let Some(mark) = self.selection_end.take() {
            buffer.delete_mark(mark);
        }
    }

    fn cmd_abort<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        self.pending.clear();
        self.clear_extension(buffer);
    }

    fn cmd_begin_extend<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        self.extend_active = true;

        let (insert, _) = buffer.selection();
        if buffer.has_selection() {
            buffer.select_range(insert, insert);
        }

        // Marks are never reused across activations.
        self.release_marks(buffer);
        self.selection_begin = Some(buffer.create_mark(insert));
        self.selection_end = Some(buffer.create_mark(insert));
        self.floating_column = buffer.column(insert);
    }

    fn cmd_cut<T, C>(&mut self, buffer: &mut T, clipboard: &mut C)
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
    {
        if !buffer.has_selection() {
            return;
        }
        let (insert, bound) = buffer.selection();
        let (begin, end) = (insert.min(bound), insert.max(bound));
        clipboard.set(buffer.slice(begin, end));
        buffer.delete_range(begin, end);
        self.clear_extension(buffer);
    }

    fn cmd_copy<T, C>(&mut self, buffer: &mut T, clipboard: &mut C)
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
    {
        if !buffer.has_selection() {
            return;
        }
        let (insert, bound) = buffer.selection();
        let (begin, end) = (insert.min(bound), insert.max(bound));
        clipboard.set(buffer.slice(begin, end));

        // Collapse onto the extension's moving end when one is active,
        // otherwise onto the selection bound.
        let collapse_to = match (self.extend_active, self.selection_end) {
            (true, Some(mark)) => buffer.mark_offset(mark),
            _ => bound,
        };
        buffer.select_range(collapse_to, collapse_to);
        self.clear_extension(buffer);
    }

    fn cmd_extend_up<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        let (Some(begin_mark), Some(end_mark)) = (self.selection_begin, self.selection_end) else {
            return;
        };
        if !self.extend_active {
            return;
        }

        let begin = buffer.mark_offset(begin_mark);
        let mut end = buffer.mark_offset(end_mark);

        let current_line = buffer.line_of(end);
        if current_line == 0 {
            return;
        }

        end = backward_line(buffer, end);
        end = forward_to_line_end(buffer, end);

        if buffer.line_of(end) == current_line {
            // Landed back on the starting line: the previous line is empty.
            end = backward_line(buffer, end);
        } else {
            while self.floating_column < buffer.column(end) {
                end -= 1;
            }
        }

        buffer.move_mark(end_mark, end);
        buffer.select_range(begin, end);
    }

    fn cmd_extend_down<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        let (Some(begin_mark), Some(end_mark)) = (self.selection_begin, self.selection_end) else {
            return;
        };
        if !self.extend_active {
            return;
        }

        let begin = buffer.mark_offset(begin_mark);
        let mut end = buffer.mark_offset(end_mark);

        let current_line = buffer.line_of(end);
        if buffer.line_count() == current_line + 1 {
            return;
        }

        end = forward_line(buffer, end);
        end = forward_to_line_end(buffer, end);

        if buffer.line_of(end) == current_line + 2 {
            // Overshot past an empty line; step back onto it.
            end = backward_line(buffer, end);
        } else {
            while self.floating_column < buffer.column(end) {
                end -= 1;
            }
        }

        buffer.move_mark(end_mark, end);
        buffer.select_range(begin, end);
    }

    fn cmd_extend_left<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        let (Some(begin_mark), Some(end_mark)) = (self.selection_begin, self.selection_end) else {
            return;
        };
        if !self.extend_active {
            return;
        }

        let begin = buffer.mark_offset(begin_mark);
        let end = buffer.mark_offset(end_mark).saturating_sub(1);

        buffer.move_mark(end_mark, end);
        buffer.select_range(begin, end);
        self.floating_column = buffer.column(end);
    }

    fn cmd_extend_right<T: TextOps + ?Sized>(&mut self, buffer: &mut T) {
        let (Some(begin_mark), Some(end_mark)) = (self.selection_begin, self.selection_end) else {
            return;
        };
        if !self.extend_active {
            return;
        }

        let begin = buffer.mark_offset(begin_mark);
        let end = (buffer.mark_offset(end_mark) + 1).min(buffer.char_count());

        buffer.move_mark(end_mark, end);
        buffer.select_range(begin, end);
        self.floating_column = buffer.column(end);
    }

    fn cmd_forward_char<T: TextOps + ?Sized>(buffer: &mut T) {
        let (insert, _) = buffer.selection();
        if insert < buffer.char_count() {
            buffer.select_range(insert + 1, insert + 1);
        }
    }

    fn cmd_backward_char<T: TextOps + ?Sized>(buffer: &mut T) {
        let (insert, _) = buffer.selection();
        if insert > 0 {
            buffer.select_range(insert - 1, insert - 1);
        }
    }

    /// `C-d`: collapse any selection onto the insert position, then delete
    /// the next character, falling back to the previous character at a
    /// line end. An empty line is left alone.
    fn cmd_delete_forward_char<T, C>(buffer: &mut T, clipboard: &mut C)
    where
        T: TextOps + ?Sized,
        C: Clipboard + ?Sized,
    {
        if buffer.has_selection() {
            let (insert, _) = buffer.selection();
            buffer.select_range(insert, insert);
        }

        let (insert, bound) = buffer.selection();
        let (mut begin, mut end) = (insert.min(bound), insert.max(bound));

        if begin == end {
            let line = buffer.line_of(end);
            let starts_line = begin == buffer.line_start_offset(line);
            let ends_line = end == buffer.line_end_offset(line);

            if starts_line && ends_line && buffer.column(end) == 0 {
                return;
            } else if !ends_line {
                end = (end + 1).min(buffer.char_count());
            } else if !starts_line {
                if begin == 0 {
                    return;
                }
                begin -= 1;
            } else {
                return;
            }
        }

        clipboard.set(buffer.slice(begin, end));
        buffer.delete_range(begin, end);
    }

    fn cmd_forward_word<T: TextOps + ?Sized>(buffer: &mut T) {
        let (insert, _) = buffer.selection();
        let target = motion::forward_word(buffer, insert).unwrap_or_else(|| buffer.char_count());
        buffer.select_range(target, target);
    }

    fn cmd_backward_word<T: TextOps + ?Sized>(buffer: &mut T) {
        let (insert, _) = buffer.selection();
        let target = motion::backward_word(buffer, insert).unwrap_or(0);
        buffer.select_range(target, target);
    }
}
