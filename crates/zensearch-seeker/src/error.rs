//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when executing a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    /// The searched field is missing from a record.
    ///
    /// The scan stops at the first such record; no partial results are kept.
    #[error("invalid search term '{field}': missing from record {position}")]
    InvalidSearchTerm {
        /// The (lowercased) field name.
        field: String,
        /// Index of the first record lacking the field.
        position: usize,
    },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
