//! Line prompts with quit detection.

use crate::terminal::TerminalIO;
use crate::InputError;

/// The word that ends the session from any prompt.
pub const QUIT: &str = "quit";

/// Returns `true` if the reply asks to quit (`quit`, any case).
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT)
}

/// What the user answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Any reply other than the quit word, possibly empty.
    Text(String),
    /// The user typed the quit word.
    Quit,
}

impl Reply {
    /// The reply text, or `None` for [`Reply::Quit`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::Quit => None,
        }
    }
}

/// Simple text prompt.
///
/// Writes the message (followed by `spacing` newlines) and reads one line.
/// An empty line is a valid reply: pressing Enter is how the user moves past
/// the welcome screen.
///
/// # Example
///
/// ```
/// use zensearch_input::{MockTerminal, Prompt, Reply};
///
/// let terminal = MockTerminal::with_responses(["  Admin ", "QUIT"]);
/// let prompt = Prompt::new("Enter search value").spacing(1);
///
/// assert_eq!(prompt.ask(&terminal).unwrap(), Reply::Text("Admin".into()));
/// assert_eq!(prompt.ask(&terminal).unwrap(), Reply::Quit);
/// assert_eq!(terminal.transcript(), "Enter search value\nEnter search value\n");
/// ```
#[derive(Debug, Clone)]
pub struct Prompt {
    message: String,
    spacing: usize,
    trim: bool,
}

impl Prompt {
    /// Create a new prompt.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spacing: 0,
            trim: true,
        }
    }

    /// Number of newlines written after the message.
    ///
    /// Default is `0`, which leaves the cursor on the message line.
    pub fn spacing(mut self, lines: usize) -> Self {
        self.spacing = lines;
        self
    }

    /// Control whether to trim whitespace from the reply.
    ///
    /// Default is `true`. The quit check always ignores surrounding
    /// whitespace.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// The exact text written before reading.
    pub fn render(&self) -> String {
        format!("{}{}", self.message, "\n".repeat(self.spacing))
    }

    /// Write the prompt and read one reply.
    ///
    /// Returns [`InputError::PromptCancelled`] at end of input.
    pub fn ask<T: TerminalIO + ?Sized>(&self, terminal: &T) -> Result<Reply, InputError> {
        terminal.write(&self.render())?;
        let line = terminal.read_line()?;

        // Check for EOF (user pressed Ctrl+D)
        if line.is_empty() {
            return Err(InputError::PromptCancelled);
        }

        if is_quit(&line) {
            return Ok(Reply::Quit);
        }

        let text = if self.trim {
            line.trim().to_string()
        } else {
            // Still need to remove trailing newline from read_line
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string()
        };
        Ok(Reply::Text(text))
    }
}
