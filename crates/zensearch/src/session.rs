//! The interactive search loop as an explicit state machine.
//!
//! Each [`State`] performs one prompt or one piece of output and names the
//! next state. All I/O goes through the injected [`TerminalIO`], so a
//! session can be scripted end to end with a
//! [`MockTerminal`](zensearch_input::MockTerminal).
//!
//! ```text
//! Welcome       -> MenuSelect
//! MenuSelect    -> DatasetSelect (1) | ListFields (2) | MenuSelect
//! DatasetSelect -> FieldPrompt -> ValuePrompt -> ShowResults
//! ShowResults   -> MenuSelect | DatasetSelect (invalid search term)
//! ListFields    -> MenuSelect
//! ```
//!
//! `quit` at any prompt, or end of input, moves to [`State::Quit`].

use zensearch_input::{InputError, Prompt, Reply, TerminalIO};
use zensearch_seeker::Query;

use crate::catalog::{Catalog, Dataset};
use crate::render::{self, Theme};

pub const WELCOME: &str = "Welcome to Zendesk Search";
pub const CONTINUE_PROMPT: &str = "Type 'quit' to exit at any time, Press 'Enter' to continue";
pub const MENU_LINES: [&str; 3] = [
    "\tSelect search options:",
    "\t * Press 1 to search Zendesk",
    "\t * Press 2 to view a list of searchable fields",
];
pub const MENU_PROMPT: &str = "\t * Type 'quit' to exit";
pub const DATASET_PROMPT: &str = "Select 1) Users or 2) Tickets or 3) Organizations";
pub const FIELD_PROMPT: &str = "Enter search term";
pub const VALUE_PROMPT: &str = "Enter search value";
pub const INVALID_TERM: &str = "Invalid search term.";
pub const NO_DATA: &str = "Not data found.";

/// A step of the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Welcome,
    MenuSelect,
    DatasetSelect,
    FieldPrompt(Dataset),
    ValuePrompt { dataset: Dataset, field: String },
    ShowResults { dataset: Dataset, query: Query },
    ListFields,
    Quit,
}

/// One interactive session over a loaded catalog.
pub struct Session<'c, T: TerminalIO> {
    catalog: &'c Catalog,
    terminal: T,
    theme: Theme,
}

impl<'c, T: TerminalIO> Session<'c, T> {
    pub fn new(catalog: &'c Catalog, terminal: T, theme: Theme) -> Self {
        Session {
            catalog,
            terminal,
            theme,
        }
    }

    /// The terminal the session talks to.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs from [`State::Welcome`] until the user quits.
    pub fn run(&self) -> Result<(), InputError> {
        let mut state = State::Welcome;
        while state != State::Quit {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Performs one state and returns the next.
    ///
    /// Only terminal failures are errors; `quit` and end of input yield
    /// [`State::Quit`].
    pub fn step(&self, state: State) -> Result<State, InputError> {
        log::debug!("session state: {state:?}");
        let next = match state {
            State::Welcome => {
                self.say(&self.theme.heading(WELCOME), 0)?;
                match self.ask(CONTINUE_PROMPT, 2)? {
                    Some(_) => State::MenuSelect,
                    None => State::Quit,
                }
            }
            State::MenuSelect => {
                for line in MENU_LINES {
                    self.say(line, 0)?;
                }
                match self.ask(MENU_PROMPT, 2)?.as_deref() {
                    Some("1") => State::DatasetSelect,
                    Some("2") => State::ListFields,
                    Some(_) => State::MenuSelect,
                    None => State::Quit,
                }
            }
            State::DatasetSelect => match self.ask(DATASET_PROMPT, 1)? {
                Some(input) => match Dataset::from_selector(&input) {
                    Some(dataset) => State::FieldPrompt(dataset),
                    None => State::DatasetSelect,
                },
                None => State::Quit,
            },
            State::FieldPrompt(dataset) => match self.ask(FIELD_PROMPT, 1)? {
                Some(field) => State::ValuePrompt { dataset, field },
                None => State::Quit,
            },
            State::ValuePrompt { dataset, field } => match self.ask(VALUE_PROMPT, 1)? {
                Some(value) => State::ShowResults {
                    dataset,
                    query: Query::new(field, value),
                },
                None => State::Quit,
            },
            State::ShowResults { dataset, query } => self.show_results(dataset, &query)?,
            State::ListFields => {
                self.terminal
                    .write(&render::searchable_fields(self.catalog, &self.theme))?;
                State::MenuSelect
            }
            State::Quit => State::Quit,
        };
        Ok(next)
    }

    fn show_results(&self, dataset: Dataset, query: &Query) -> Result<State, InputError> {
        match self.catalog.search(dataset, query) {
            Ok(found) => {
                log::info!(
                    "searched {dataset} for {}={:?}: {} match(es)",
                    query.field(),
                    query.value(),
                    found.len()
                );
                if found.is_empty() {
                    self.say(NO_DATA, 2)?;
                } else {
                    self.terminal.write(&render::results(&found, &self.theme))?;
                }
                Ok(State::MenuSelect)
            }
            Err(err) => {
                log::warn!("{dataset}: {err}");
                self.say(INVALID_TERM, 2)?;
                Ok(State::DatasetSelect)
            }
        }
    }

    /// Writes a message line followed by `spacing` blank lines.
    fn say(&self, message: &str, spacing: usize) -> Result<(), InputError> {
        self.terminal
            .write(&format!("{message}\n{}", "\n".repeat(spacing)))?;
        Ok(())
    }

    /// Prompts for a reply; `None` means the session should end.
    fn ask(&self, message: &str, spacing: usize) -> Result<Option<String>, InputError> {
        match Prompt::new(message).spacing(spacing).ask(&self.terminal) {
            Ok(Reply::Text(text)) => Ok(Some(text)),
            Ok(Reply::Quit) => Ok(None),
            Err(err) if err.is_cancelled() => {
                log::debug!("input ended");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
