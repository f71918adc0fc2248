//! Seeker - case-insensitive field search over JSON record collections.
//!
//! The engine answers one kind of question: which records have `field`
//! equal to `value`? Matching depends on the field's [`FieldValue`]:
//!
//! | Field value | Matches when |
//! |-------------|--------------|
//! | `Text` | lowercased text equals the lowercased value |
//! | `Number` | decimal form equals the value (`101`, `2.5`) |
//! | `Bool` | `true` / `false` equals the value |
//! | `Null` | the value is `none` |
//! | `TextList` | any lowercased element equals the value |
//!
//! # Quick Start
//!
//! ```rust
//! use zensearch_seeker::{search, Record};
//!
//! let tickets: Vec<Record> = serde_json::from_str(r#"[
//!     {"_id": "436bf9b0", "subject": "A Catastrophe in Korea", "tags": ["Ohio", "Urgent"]},
//!     {"_id": "1a227508", "subject": "A Drama in Portugal", "tags": ["Utah"]}
//! ]"#).unwrap();
//!
//! let urgent = search(&tickets, "tags", "urgent").unwrap();
//! assert_eq!(urgent.len(), 1);
//! ```
//!
//! # Missing fields
//!
//! Records in one dataset need not share field sets. A search over a field
//! that any scanned record lacks fails with
//! [`SeekerError::InvalidSearchTerm`] instead of returning partial results.
//! An empty result is not an error.

mod error;
mod query;
mod record;
mod traits;
mod value;

// Re-export public API
pub use error::{Result, SeekerError};
pub use query::{search, Query};
pub use record::Record;
pub use traits::Seekable;
pub use value::{FieldValue, Number};
