//! Terminal abstraction for testability.
//!
//! Everything the application shows or reads goes through [`TerminalIO`],
//! so a scripted [`MockTerminal`] can drive a whole session in tests.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Abstraction over terminal I/O.
pub trait TerminalIO: Send + Sync {
    /// Check if stdout is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Write text as-is (no newline added) and flush.
    fn write(&self, text: &str) -> io::Result<()>;

    /// Read a line, including its trailing newline.
    ///
    /// Returns an empty string at end of input.
    fn read_line(&self) -> io::Result<String>;

    /// Write text followed by a newline.
    fn write_line(&self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }
}

impl<T: TerminalIO + ?Sized> TerminalIO for &T {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read_line(&self) -> io::Result<String> {
        (**self).read_line()
    }
}

/// Real terminal I/O over stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn write(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal for testing.
///
/// Replies are returned in order; once they run out, reads report end of
/// input. Everything written is kept and available through
/// [`transcript`](Self::transcript).
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    output: Mutex<String>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given replies in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            output: Mutex::new(String::new()),
        }
    }

    /// Create a mock that is at end of input from the start.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn transcript(&self) -> String {
        self.output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of replies consumed so far.
    pub fn reads(&self) -> usize {
        self.response_index
            .load(Ordering::SeqCst)
            .min(self.responses.len())
    }
}

impl TerminalIO for MockTerminal {
    fn is_terminal(&self) -> bool {
        false
    }

    fn write(&self, text: &str) -> io::Result<()> {
        self.output
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(text);
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{response}\n")),
            None => Ok(String::new()),
        }
    }
}
