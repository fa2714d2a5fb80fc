//! Tolerant attribute decoding.
//!
//! Datasets are hand-edited JSON: a rating may be `4` or `"4"`, a date may be
//! `null`, a city may even be an object. Recognized attributes are read as
//! strings when they hold a scalar and never make a record unreadable.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Reads a string or number as `Some(String)`. `null`, booleans, arrays and
/// objects read as `None`; see [`is_displaced`] for how those are kept.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(number_text(&n)),
        _ => None,
    })
}

/// Values a recognized attribute cannot hold as text. They stay in the
/// record's pass-through attributes so they are written back out unchanged.
pub(crate) fn is_displaced(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Array(_) | Value::Object(_))
}

/// `4.0` reads as `"4"`, the way the dataset author typed it.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// `Some` only when the value holds a non-whitespace character.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
