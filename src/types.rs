/// A stable handle to a mark owned by the host buffer.
///
/// Marks reference a position that survives buffer edits; the engine only
/// ever stores handles and asks the buffer for the current offset. A mark
/// stays valid until it is explicitly deleted through
/// [`TextOps::delete_mark`](crate::traits::TextOps::delete_mark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkId(pub u64);

/// Opaque requests the engine routes to the hosting application.
///
/// These are the side effects a recognized command asks for but does not
/// implement itself: saving, opening, quitting and so on. The host decides
/// what each of them means (a window action, a menu entry, a no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Quit the application (`C-x C-c`).
    Quit,
    /// Close the current document (`C-x k`).
    CloseDocument,
    /// Open a file (`C-x C-f`).
    OpenFile,
    /// Save the current file (`C-x C-s`).
    SaveFile,
    /// Save the current file under a new name (`C-x C-w`).
    SaveFileAs,
    /// Save all open files (`C-x s`).
    SaveAll,
    /// Focus the find/search UI (`C-s`).
    FocusFind,
    /// Paste the clipboard at the cursor (`C-y`).
    Paste,
}
