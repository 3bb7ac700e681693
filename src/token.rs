//! Canonical token encoding for key presses.
//!
//! Every key press encodes to at most one textual token (`"C-x"`, `"M-f"`,
//! `"ESC"`, ...). Tokens accumulate in the engine's pending sequence,
//! joined by single spaces, and the joined string is what the command
//! patterns match against.

use crate::key::{KeyCode, KeyEvent, Modifiers};

/// Canonical key name as used inside tokens.
fn keyval_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(' ') => Some("space".to_string()),
        KeyCode::Char('_') => Some("underscore".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Up => Some("Up".to_string()),
        KeyCode::Down => Some("Down".to_string()),
        KeyCode::Left => Some("Left".to_string()),
        KeyCode::Right => Some("Right".to_string()),
        KeyCode::Escape => None, // spelled "ESC", handled by the caller
    }
}

/// Encode one key press into a token, or `None` to pass the key through.
///
/// Arrow keys encode (by bare key name, whatever the modifiers) only while
/// a selection extension is active. Command-relevant keys encode according
/// to their modifiers; an unmodified key encodes only when the pending
/// sequence already carries a `C-x` prefix, so that two-key commands like
/// `C-x s` can complete.
pub fn encode(event: KeyEvent, extend_active: bool, pending: &str) -> Option<String> {
    if extend_active && event.code.is_arrow() {
        return keyval_name(event.code);
    }

    if !event.code.is_command_relevant() {
        return None;
    }

    if event.code == KeyCode::Escape {
        return Some("ESC".to_string());
    }

    let name = keyval_name(event.code)?;

    if event.mods == Modifiers::CTRL | Modifiers::ALT {
        Some(format!("C-M-{name}"))
    } else if event.mods == Modifiers::CTRL | Modifiers::SHIFT {
        if name == "underscore" {
            Some("C-_".to_string())
        } else {
            Some(format!("C-{name}"))
        }
    } else if event.mods.contains(Modifiers::CTRL) {
        Some(format!("C-{name}"))
    } else if event.mods.contains(Modifiers::ALT) {
        Some(format!("M-{name}"))
    } else if pending.starts_with("C-x") {
        Some(name)
    } else {
        None
    }
}
