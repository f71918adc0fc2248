//! Error types for input collection.

use std::io;

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input ended (Ctrl+D or closed stdin) before a reply was read.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,
}

impl InputError {
    /// Returns `true` if the user ended input rather than the terminal failing.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::PromptCancelled)
    }
}
