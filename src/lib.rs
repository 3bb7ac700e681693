pub mod commands;
pub mod engine;
pub mod key;
pub mod motion;
pub mod pattern;
pub mod token;
pub mod traits;
pub mod types;

#[cfg(feature = "clipboard")]
pub mod clipboard;

pub use crate::commands::{Action, Binding, COMMANDS};
pub use crate::engine::{Engine, EngineSnapshot};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::traits::{ActionDispatcher, Clipboard, TextOps};
pub use crate::types::{EditorAction, MarkId};
