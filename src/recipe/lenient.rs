// src/recipe/lenient.rs

//! Forgiving field decoders
//!
//! Datasets are hand-edited JSON. A `null` where a list belongs, or a
//! quantity written as `"1/2"`, must cost at most that one field, never the
//! whole file. Each helper buffers the raw value and falls back to a default
//! when it does not fit the expected type.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Decode a field, using its default on `null` or a mistyped value
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a list, dropping entries that do not fit
///
/// Anything other than an array (including `null`) becomes an empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(keep_valid(items)),
        _ => Ok(Vec::new()),
    }
}

/// Decode the top-level recipe list
///
/// Unlike [`list`], a non-array here means the document is not a dataset.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(keep_valid(items)),
        other => Err(D::Error::custom(format!(
            "expected an array of recipes, found {}",
            kind(&other)
        ))),
    }
}

/// Decode a quantity: a number, a numeric string, or a fraction like `"1/2"`
pub fn quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_amount(&s),
        _ => None,
    };
    Ok(parsed)
}

fn parse_amount(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', ".");
    if let Some((num, den)) = s.split_once('/') {
        let num: f64 = num.trim().parse().ok()?;
        let den: f64 = den.trim().parse().ok()?;
        return (den != 0.0).then(|| num / den);
    }
    s.parse().ok()
}

fn keep_valid<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Skipping malformed entry: {}", e);
                None
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
