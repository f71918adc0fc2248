//! Query construction and execution.
//!
//! A [`Query`] is a single (field, value) predicate. Both parts are
//! lowercased once when the query is built, so every comparison during a
//! scan works on pre-folded input.

use crate::error::{Result, SeekerError};
use crate::record::Record;
use crate::traits::Seekable;

/// A case-insensitive field match.
///
/// # Example
///
/// ```
/// use zensearch_seeker::{Query, Record, SeekerError};
///
/// let users = vec![
///     Record::new().with("name", "Ingrid").with("role", "Admin"),
///     Record::new().with("name", "Cross").with("role", "agent"),
/// ];
///
/// let admins = Query::new("ROLE", "admin").filter(&users).unwrap();
/// assert_eq!(admins.len(), 1);
///
/// let err = Query::new("email", "x").filter(&users).unwrap_err();
/// assert!(matches!(err, SeekerError::InvalidSearchTerm { position: 0, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    field: String,
    value: String,
}

impl Query {
    /// Creates a query, case-folding field and value.
    pub fn new(field: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Query {
            field: field.as_ref().to_lowercase(),
            value: value.as_ref().to_lowercase(),
        }
    }

    /// The lowercased field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The lowercased search value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Tests a single item.
    ///
    /// Returns [`SeekerError::InvalidSearchTerm`] (position 0) if the item
    /// lacks the field.
    pub fn matches<T: Seekable + ?Sized>(&self, item: &T) -> Result<bool> {
        self.matches_at(item, 0)
    }

    fn matches_at<T: Seekable + ?Sized>(&self, item: &T, position: usize) -> Result<bool> {
        match item.seeker_field_value(&self.field) {
            Some(value) => Ok(value.matches_folded(&self.value)),
            None => Err(SeekerError::InvalidSearchTerm {
                field: self.field.clone(),
                position,
            }),
        }
    }

    /// Returns the matching items in their original order.
    ///
    /// The scan is fail-fast: the first item missing the field aborts the
    /// whole search, even if earlier items matched.
    pub fn filter<'a, T: Seekable>(&self, items: &'a [T]) -> Result<Vec<&'a T>> {
        let mut results = Vec::new();
        for (position, item) in items.iter().enumerate() {
            if self.matches_at(item, position)? {
                results.push(item);
            }
        }
        Ok(results)
    }

    /// Counts matching items, with the same missing-field rule as [`filter`](Self::filter).
    pub fn count<T: Seekable>(&self, items: &[T]) -> Result<usize> {
        let mut count = 0;
        for (position, item) in items.iter().enumerate() {
            if self.matches_at(item, position)? {
                count += 1;
            }
        }
        Ok(count)
    }

}

/// Searches `records` for those whose `field` matches `value`.
///
/// Shorthand for `Query::new(field, value).filter(records)`.
pub fn search<'a>(records: &'a [Record], field: &str, value: &str) -> Result<Vec<&'a Record>> {
    Query::new(field, value).filter(records)
}
