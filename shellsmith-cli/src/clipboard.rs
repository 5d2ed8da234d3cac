//! Clipboard output
//!
//! A failed copy never fails the command: callers log the error and carry on.
//! On X11 the clipboard is owned by the writing process, so the copied text
//! may not outlive `smith` unless a clipboard manager picks it up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
