//! Interactive search over the users, tickets and organizations datasets.
//!
//! The binary wires four pieces together:
//!
//! - [`Config`]: command-line and environment configuration
//! - [`Catalog`]: the three datasets, loaded once from JSON files
//! - [`Session`]: the prompt loop, as a state machine over a
//!   [`TerminalIO`](zensearch_input::TerminalIO)
//! - [`render`]: text layout for results and field listings
//!
//! Matching itself lives in `zensearch-seeker`.

pub mod catalog;
mod config;
pub mod render;
pub mod session;

pub use catalog::{Catalog, CatalogError, Dataset};
pub use config::{Config, DATA_DIR_ENV};
pub use render::Theme;
pub use session::{Session, State};
