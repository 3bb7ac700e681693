//! System clipboard integration, behind the `clipboard` feature.

use crate::traits::Clipboard;

/// [`Clipboard`] backed by the system clipboard via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        self.inner.get_text().ok()
    }

    fn set(&mut self, text: String) {
        // Clipboard failures are not the engine's problem; drop them.
        let _ = self.inner.set_text(text);
    }
}
