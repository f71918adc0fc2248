//! Field access trait used by the query engine.

use crate::value::FieldValue;

/// Trait for types that can be searched by field name.
///
/// [`Record`](crate::Record) implements it for JSON-backed data. Typed
/// structs can implement it by hand to reuse the same matching rules.
///
/// # Example
///
/// ```
/// use zensearch_seeker::{FieldValue, Query, Seekable};
///
/// struct Organization {
///     name: FieldValue,
///     domain_names: FieldValue,
/// }
///
/// impl Seekable for Organization {
///     fn seeker_field_value(&self, field: &str) -> Option<&FieldValue> {
///         match field {
///             "name" => Some(&self.name),
///             "domain_names" => Some(&self.domain_names),
///             _ => None,
///         }
///     }
/// }
///
/// let orgs = vec![Organization {
///     name: "Enthaze".into(),
///     domain_names: vec!["kage.com", "ecratic.com"].into(),
/// }];
///
/// let found = Query::new("domain_names", "KAGE.com").filter(&orgs).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
pub trait Seekable {
    /// Returns the value of a field for comparison.
    ///
    /// `None` means the item has no such field, which aborts a search.
    /// A present field holding JSON `null` is `Some(&FieldValue::Null)`.
    fn seeker_field_value(&self, field: &str) -> Option<&FieldValue>;
}

impl<T: Seekable + ?Sized> Seekable for &T {
    fn seeker_field_value(&self, field: &str) -> Option<&FieldValue> {
        (**self).seeker_field_value(field)
    }
}
