//! The static command table.
//!
//! Bindings are matched in table order and the first hit wins; the two
//! abort bindings come first so they outrank everything else. The table is
//! built once at compile time and shared read-only by every engine
//! instance.

use crate::pattern::Pattern;

/// Editing command bound to a key-sequence pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the pending sequence and any active selection extension.
    Abort,
    /// Begin extending a selection from the cursor (`C-space`).
    BeginExtend,
    /// Cut the selection to the clipboard (`C-w`).
    Cut,
    /// Copy the selection to the clipboard (`M-w`).
    Copy,
    /// Request a paste (`C-y`).
    Yank,
    /// Grow the extension one line up.
    ExtendUp,
    /// Grow the extension one line down.
    ExtendDown,
    /// Grow the extension one character left.
    ExtendLeft,
    /// Grow the extension one character right.
    ExtendRight,
    Quit,
    CloseDocument,
    OpenFile,
    SaveFile,
    SaveAll,
    FocusFind,
    SaveFileAs,
    Undo,
    Redo,
    /// Move the cursor forward one character (`C-f`).
    ForwardChar,
    /// Move the cursor backward one character (`C-b`).
    BackwardChar,
    /// Delete forward, falling back to backward at line ends (`C-d`).
    DeleteForwardChar,
    /// Move the cursor forward one word (`M-f`).
    ForwardWord,
    /// Move the cursor backward one word (`M-b`).
    BackwardWord,
}

/// One entry of the command table.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub pattern: Pattern,
    pub action: Action,
}

impl Binding {
    const fn new(pattern: Pattern, action: Action) -> Self {
        Self { pattern, action }
    }
}

/// All registered bindings, in registration order.
pub const COMMANDS: &[Binding] = &[
    Binding::new(Pattern::Suffix("C-g"), Action::Abort),
    Binding::new(Pattern::Suffix("ESC ESC ESC"), Action::Abort),
    Binding::new(Pattern::Exact("C-space"), Action::BeginExtend),
    Binding::new(Pattern::Exact("C-w"), Action::Cut),
    Binding::new(Pattern::Exact("M-w"), Action::Copy),
    Binding::new(Pattern::Exact("C-y"), Action::Yank),
    Binding::new(Pattern::Exact("Up"), Action::ExtendUp),
    Binding::new(Pattern::Exact("Down"), Action::ExtendDown),
    Binding::new(Pattern::Exact("Left"), Action::ExtendLeft),
    Binding::new(Pattern::Exact("Right"), Action::ExtendRight),
    Binding::new(Pattern::Exact("C-x C-c"), Action::Quit),
    Binding::new(Pattern::Exact("C-x k"), Action::CloseDocument),
    Binding::new(Pattern::Exact("C-x C-f"), Action::OpenFile),
    Binding::new(Pattern::Exact("C-x C-s"), Action::SaveFile),
    Binding::new(Pattern::Exact("C-x s"), Action::SaveAll),
    Binding::new(Pattern::Exact("C-s"), Action::FocusFind),
    Binding::new(Pattern::Exact("C-x C-w"), Action::SaveFileAs),
    Binding::new(Pattern::Exact("C-_"), Action::Undo),
    Binding::new(Pattern::Exact("C-x u"), Action::Redo),
    Binding::new(Pattern::Exact("C-f"), Action::ForwardChar),
    Binding::new(Pattern::Exact("C-b"), Action::BackwardChar),
    Binding::new(Pattern::Exact("C-d"), Action::DeleteForwardChar),
    Binding::new(Pattern::Exact("M-f"), Action::ForwardWord),
    Binding::new(Pattern::Exact("M-b"), Action::BackwardWord),
];

/// First binding whose pattern matches `sequence`, if any.
pub fn lookup(sequence: &str) -> Option<&'static Binding> {
    COMMANDS.iter().find(|b| b.pattern.matches(sequence))
}
