//! Forgiving field deserializers for the generated data file.
//!
//! Every optional field goes through one of these helpers so that a field
//! which is absent, `null`, or of the wrong type becomes its empty default.
//! Nothing here ever returns an error for a well-formed JSON value.
//!
//! | helper       | target            | accepts                                   |
//! |--------------|-------------------|-------------------------------------------|
//! | [`text`]     | `String`          | string, number, bool                      |
//! | [`opt_text`] | `Option<String>`  | like `text`, blank becomes `None`         |
//! | [`count`]    | `u64`             | non-negative number or numeric string     |
//! | [`opt_count`]| `Option<u64>`     | like `count`, unusable becomes `None`     |
//! | [`seq`]      | `Vec<T>`          | array; malformed elements are dropped     |
//! | [`record`]   | `Option<T>`       | object; anything else becomes `None`      |
//! | [`links`]    | `Vec<SocialLink>` | object of string values, in file order    |

use super::SocialLink;
use crate::debug;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Last path segment of a type name, for log messages.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_count(raw: &Value) -> Option<u64> {
    match raw {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(fraction_count)),
        Value::String(s) => {
            let digits = s.trim().replace(',', "");
            digits
                .parse()
                .ok()
                .or_else(|| digits.parse().ok().and_then(fraction_count))
        }
        _ => None,
    }
}

/// Truncate, but keep any positive value nonzero so presence checks hold.
fn fraction_count(f: f64) -> Option<u64> {
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    Some((f as u64).max(u64::from(f > 0.0)))
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(scalar_text(&raw).unwrap_or_default())
}

pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(scalar_text(&raw).filter(|s| !s.trim().is_empty()))
}

pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(scalar_count(&raw).unwrap_or(0))
}

pub fn opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    Ok(scalar_count(&raw))
}

pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!("data"; "expected a list of {}, found {}", short_type_name::<T>(), kind(&other));
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("data"; "dropping malformed {}: {}", short_type_name::<T>(), e);
                None
            }
        })
        .collect())
}

pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        raw @ Value::Object(_) => Ok(serde_json::from_value(raw)
            .inspect_err(|e| debug!("data"; "ignoring malformed {}: {}", short_type_name::<T>(), e))
            .ok()),
        Value::Null => Ok(None),
        other => {
            debug!("data"; "expected {} record, found {}", short_type_name::<T>(), kind(&other));
            Ok(None)
        }
    }
}

pub fn links<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<SocialLink>, D::Error> {
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(platform, url)| match url {
            Value::String(url) if !url.trim().is_empty() => Some(SocialLink { platform, url }),
            _ => None,
        })
        .collect())
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
