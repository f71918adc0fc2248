//! Runtime value types for field comparison.
//!
//! The [`FieldValue`] enum is the tagged form of a JSON field. It replaces
//! dynamic scalar-vs-list checks with an exhaustive match, so every kind of
//! value has an explicit comparison rule.

use std::fmt;

use serde_json::Value as JsonValue;

/// Search form of JSON `null`.
const NULL_FORM: &str = "none";

/// Value of a single record field.
///
/// # Example
///
/// ```
/// use zensearch_seeker::FieldValue;
///
/// let role = FieldValue::Text("Admin".into());
/// assert!(role.matches_folded("admin"));
///
/// let tags = FieldValue::TextList(vec!["Urgent".into(), "billing".into()]);
/// assert!(tags.matches_folded("urgent"));
/// assert!(!tags.matches_folded("urg"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// JSON `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    Text(String),
    /// List of strings (membership match).
    TextList(Vec<String>),
}

impl FieldValue {
    /// Extracts the list elements, if present.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(items) => Some(items),
            _ => None,
        }
    }

    /// String form used for scalar comparison.
    ///
    /// Booleans become `true`/`false`, numbers their decimal form and `Null`
    /// the word `none`. Lists have no single search form and return `None`.
    pub fn search_form(&self) -> Option<String> {
        match self {
            FieldValue::Null => Some(NULL_FORM.to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::TextList(_) => None,
        }
    }

    /// Checks the value against an already-lowercased needle.
    ///
    /// Scalars match when their lowercased search form equals the needle.
    /// Lists match when any lowercased element equals the needle.
    pub fn matches_folded(&self, needle: &str) -> bool {
        match self {
            FieldValue::TextList(items) => items.iter().any(|item| item.to_lowercase() == needle),
            FieldValue::Text(s) => s.to_lowercase() == needle,
            FieldValue::Null => needle == NULL_FORM,
            FieldValue::Bool(b) => b.to_string() == needle,
            FieldValue::Number(n) => n.to_string() == needle,
        }
    }
}

impl From<&JsonValue> for FieldValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::Bool(b) => FieldValue::Bool(*b),
            JsonValue::Number(n) => FieldValue::Number(Number::from(n)),
            JsonValue::String(s) => FieldValue::Text(s.clone()),
            JsonValue::Array(items) => {
                FieldValue::TextList(items.iter().map(list_element).collect())
            }
            // Flat datasets carry no objects; keep them searchable as text.
            JsonValue::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => FieldValue::Text(s),
            other => FieldValue::from(&other),
        }
    }
}

fn list_element(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => FieldValue::from(other)
            .search_form()
            .unwrap_or_else(|| other.to_string()),
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(Number::I64(n))
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(Number::F64(n))
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::TextList(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::TextList(items.into_iter().map(String::from).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("None"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::TextList(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Numeric value keeping the JSON number kind.
///
/// - `I64` for integers that fit a signed 64-bit value
/// - `U64` for larger unsigned integers
/// - `F64` for everything else
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write_float(f, *n),
        }
    }
}

/// Writes the shortest round-trip form of a float.
///
/// Plain floats keep a fractional part (`1.0`). Very large or small ones use
/// a signed exponent of at least two digits (`1e+16`, `2.5e-05`).
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let repr = format!("{n:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_scalars() {
        assert_eq!(FieldValue::from(&json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(&json!(true)), FieldValue::Bool(true));
        assert_eq!(
            FieldValue::from(&json!(42)),
            FieldValue::Number(Number::I64(42))
        );
        assert_eq!(
            FieldValue::from(&json!(u64::MAX)),
            FieldValue::Number(Number::U64(u64::MAX))
        );
        assert_eq!(
            FieldValue::from(&json!(2.5)),
            FieldValue::Number(Number::F64(2.5))
        );
        assert_eq!(
            FieldValue::from(&json!("hello")),
            FieldValue::Text("hello".into())
        );
    }

    #[test]
    fn from_json_list_stringifies_elements() {
        let value = FieldValue::from(&json!(["Urgent", 3, true, null]));
        assert_eq!(
            value,
            FieldValue::TextList(vec![
                "Urgent".into(),
                "3".into(),
                "true".into(),
                "none".into()
            ])
        );
    }

    #[test]
    fn from_json_object_becomes_text() {
        let value = FieldValue::from(&json!({"a": 1}));
        assert_eq!(value, FieldValue::Text(r#"{"a":1}"#.into()));
    }

    #[test]
    fn search_forms() {
        assert_eq!(FieldValue::Null.search_form(), Some("none".into()));
        assert_eq!(FieldValue::Bool(false).search_form(), Some("false".into()));
        assert_eq!(FieldValue::from(101i64).search_form(), Some("101".into()));
        assert_eq!(FieldValue::from(1.0f64).search_form(), Some("1.0".into()));
        assert_eq!(FieldValue::from("Mixed").search_form(), Some("Mixed".into()));
        assert_eq!(FieldValue::from(vec!["a"]).search_form(), None);
    }

    #[test]
    fn text_matches_case_insensitively() {
        let value = FieldValue::from("Francisca Rasmussen");
        assert!(value.matches_folded("francisca rasmussen"));
        assert!(!value.matches_folded("francisca"));
    }

    #[test]
    fn bool_and_number_match_their_string_form() {
        assert!(FieldValue::Bool(true).matches_folded("true"));
        assert!(!FieldValue::Bool(true).matches_folded("false"));
        assert!(FieldValue::from(71i64).matches_folded("71"));
        assert!(!FieldValue::from(71i64).matches_folded("71.0"));
        assert!(FieldValue::from(2.5f64).matches_folded("2.5"));
    }

    #[test]
    fn null_matches_none_only() {
        assert!(FieldValue::Null.matches_folded("none"));
        assert!(!FieldValue::Null.matches_folded(""));
        assert!(!FieldValue::Null.matches_folded("null"));
    }

    #[test]
    fn list_requires_whole_element() {
        let tags = FieldValue::from(vec!["Springville", "Sutton"]);
        assert!(tags.matches_folded("sutton"));
        assert!(!tags.matches_folded("sut"));
        assert!(!tags.matches_folded("springville, sutton"));
        assert!(!FieldValue::TextList(vec![]).matches_folded(""));
    }

    #[test]
    fn display_forms() {
        assert_eq!(FieldValue::Null.to_string(), "None");
        assert_eq!(FieldValue::from(vec!["a", "b"]).to_string(), r#"["a", "b"]"#);
        assert_eq!(FieldValue::from(3i64).to_string(), "3");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn value_extractors() {
        assert_eq!(FieldValue::from("x").as_list(), None);
        assert_eq!(
            FieldValue::from(vec!["a"]).as_list(),
            Some(&["a".to_string()][..])
        );
    }

    #[test]
    fn float_forms() {
        assert_eq!(Number::F64(0.0001).to_string(), "0.0001");
        assert_eq!(Number::F64(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Number::F64(1e16).to_string(), "1e+16");
        assert_eq!(Number::F64(1e-5).to_string(), "1e-05");
        assert_eq!(Number::F64(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Number::F64(1.5e300).to_string(), "1.5e+300");
    }

    #[test]
    fn exponent_floats_match_signed_exponent() {
        let value = FieldValue::from(1e16f64);
        assert!(value.matches_folded("1e+16"));
        assert!(!value.matches_folded("1e16"));
        assert!(FieldValue::from(1e-5f64).matches_folded("1e-05"));
    }
}
