//! Line-oriented terminal prompts.
//!
//! `zensearch-input` reads replies from a terminal behind the [`TerminalIO`]
//! trait. Production code uses [`RealTerminal`]; tests script a
//! [`MockTerminal`] and inspect its transcript.
//!
//! # Quick Start
//!
//! ```no_run
//! use zensearch_input::{Prompt, RealTerminal, Reply};
//!
//! match Prompt::new("Enter search term").spacing(1).ask(&RealTerminal)? {
//!     Reply::Text(term) => println!("searching {term}"),
//!     Reply::Quit => return Ok(()),
//! }
//! # Ok::<(), zensearch_input::InputError>(())
//! ```
//!
//! # Quitting
//!
//! Every prompt treats `quit` (any case) as a request to end the session and
//! returns [`Reply::Quit`]. End of input is reported as
//! [`InputError::PromptCancelled`].

mod error;
mod prompt;
mod terminal;

pub use error::InputError;
pub use prompt::{is_quit, Prompt, Reply, QUIT};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};
