//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ZENSEARCH_DATA_DIR";

/// Interactive search over the users, tickets and organizations datasets.
///
/// Type 'quit' at any prompt to exit.
#[derive(Debug, Clone, Parser)]
#[command(name = "zensearch", version)]
pub struct Config {
    /// Directory holding users.json, tickets.json and organizations.json
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV, default_value = "data")]
    pub data_dir: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    /// Whether output should be styled.
    ///
    /// Color needs an interactive terminal and is also subject to
    /// `console`'s own environment checks (`NO_COLOR`, `CLICOLOR`).
    pub fn use_color(&self, is_terminal: bool) -> bool {
        !self.no_color && is_terminal && console::colors_enabled()
    }
}
