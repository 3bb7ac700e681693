/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
/// Shifted letters are expected to arrive as their uppercase character,
/// the way most toolkits report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key: letters, `'_'`, `' '` and anything else printable.
    Char(char),
    /// The Escape key, used to abort a pending command sequence.
    Escape,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

impl KeyCode {
    /// Whether this is one of the four arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
        )
    }

    /// Whether this key can ever contribute to a command sequence:
    /// letters, underscore, space and Escape. Everything else passes
    /// through to the host untouched.
    pub fn is_command_relevant(self) -> bool {
        match self {
            KeyCode::Escape => true,
            KeyCode::Char(c) => c.is_ascii_alphabetic() || c == '_' || c == ' ',
            _ => false,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
///
/// This represents a single key press, including any modifier keys held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Convenience constructor.
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }
}
