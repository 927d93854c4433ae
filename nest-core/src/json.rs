//! Conversion between nested containers and JSON
//!
//! JSON objects become containers whose keys are classified with
//! [`Key::parse`]; JSON arrays become containers keyed `0..n`. On the way
//! back, a container keyed exactly `0..n` in order (including the empty one)
//! becomes an array and anything else becomes an object with stringified
//! keys. Non-finite floats have no JSON form and are written as `null`.
//!
//! Conversions recurse once per nesting level. [`parse_str`] bounds the depth
//! of incoming text with [`Limits`] before any recursion happens.

use crate::error::{NestError, Result};
use crate::key::Key;
use crate::limits::Limits;
use crate::value::{Container, Scalar, Value};
use serde_json::{Map, Number};

/// Convert a JSON value
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Scalar(Scalar::Null),
        serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
        serde_json::Value::Number(n) => Value::Scalar(number_to_scalar(n)),
        serde_json::Value::String(s) => Value::Scalar(Scalar::String(s.clone())),
        serde_json::Value::Array(items) => Value::Container(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (Key::Int(i as i64), from_json(item)))
                .collect(),
        ),
        serde_json::Value::Object(map) => Value::Container(
            map.iter()
                .map(|(key, item)| (Key::parse(key), from_json(item)))
                .collect(),
        ),
    }
}

fn number_to_scalar(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(f) = n.as_f64() {
        Scalar::Float(f)
    } else {
        Scalar::Null
    }
}

/// Convert to a JSON value
///
/// Fails with [`NestError::InvalidInput`] when two keys of one container
/// render to the same JSON object key, which only happens when a
/// [`Key::Str`] was built by hand around canonical integer text.
pub fn to_json(value: &Value) -> Result<serde_json::Value> {
    match value {
        Value::Scalar(scalar) => Ok(scalar_to_json(scalar)),
        Value::Container(container) => container_to_json(container),
    }
}

fn scalar_to_json(scalar: &Scalar) -> serde_json::Value {
    match scalar {
        Scalar::Null => serde_json::Value::Null,
        Scalar::Bool(b) => serde_json::Value::Bool(*b),
        Scalar::Int(i) => serde_json::Value::Number((*i).into()),
        Scalar::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Scalar::String(s) => serde_json::Value::String(s.clone()),
    }
}

/// Convert a container to a JSON array or object
pub fn container_to_json(container: &Container) -> Result<serde_json::Value> {
    if is_list(container) {
        let items = container.values().map(to_json).collect::<Result<Vec<_>>>()?;
        return Ok(serde_json::Value::Array(items));
    }

    let mut map = Map::with_capacity(container.len());
    for (key, value) in container {
        let rendered = key.to_string();
        if map.contains_key(&rendered) {
            return Err(NestError::InvalidInput(format!(
                "keys collide on JSON object key {:?}",
                rendered
            )));
        }
        map.insert(rendered, to_json(value)?);
    }
    Ok(serde_json::Value::Object(map))
}

fn is_list(container: &Container) -> bool {
    container
        .keys()
        .zip(0i64..)
        .all(|(key, expected)| key.as_int() == Some(expected))
}

/// Parse JSON text, rejecting nesting deeper than `limits.max_depth`
///
/// Depth is measured on the raw text before it reaches the JSON parser, so
/// the parser's own recursion ceiling never masks the limit. The hard maximum
/// in [`Limits::hard_maximums`] stays under that ceiling.
pub fn parse_str(text: &str, limits: &Limits) -> Result<Value> {
    let depth = text_depth(text);
    if depth > limits.max_depth {
        return Err(NestError::LimitExceeded(format!(
            "nesting depth {} exceeds max_depth {}",
            depth, limits.max_depth
        )));
    }
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(&json))
}

/// Deepest bracket nesting in JSON text, ignoring brackets inside strings
fn text_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// Render as JSON text
pub fn to_string(value: &Value, pretty: bool) -> Result<String> {
    let json = to_json(value)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
