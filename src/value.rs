//! Entry points over untyped JSON values.
//!
//! Input that arrives as JSON may not have the shape an encoder expects. These functions separate
//! that case from a failed lookup: shape mismatches report an [`ErrorKind::Type`] error.
//!
//! [`ErrorKind::Type`]: crate::ErrorKind::Type

use serde_json::Value;
use tracing::debug;

use crate::{
    morse::{self, MorseError},
    onehot::{self, EncodedRow, OneHotError},
};

/// Return a short name for the kind of `value`.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encode a string, or an array of one-character strings, into Morse code.
pub fn encode_value(value: &Value) -> Result<String, MorseError> {
    match value {
        Value::String(message) => morse::encode(message),
        Value::Array(items) => {
            let characters = items
                .iter()
                .map(single_char)
                .collect::<Option<Vec<_>>>()
                .ok_or(MorseError::NotText { found: "array" })?;
            morse::encode_chars(characters)
        }
        other => Err(not_text(other)),
    }
}

/// Decode a Morse message held in a JSON string.
pub fn decode_value(value: &Value) -> Result<String, MorseError> {
    match value {
        Value::String(message) => morse::decode(message),
        other => Err(not_text(other)),
    }
}

/// One-hot encode the categories held in `value`.
///
/// A string is encoded character by character, an array element by element and an object by
/// key in document order. Array elements must be strings.
pub fn fit_transform_value(value: &Value) -> Result<Vec<EncodedRow<String>>, OneHotError> {
    let categories: Vec<String> = match value {
        Value::String(s) => s.chars().map(String::from).collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(not_sequence(other)),
            })
            .collect::<Result<_, _>>()?,
        Value::Object(map) => map.keys().cloned().collect(),
        other => return Err(not_sequence(other)),
    };
    onehot::fit_transform(categories)
}

fn single_char(value: &Value) -> Option<char> {
    let mut chars = value.as_str()?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn not_text(value: &Value) -> MorseError {
    let found = kind_name(value);
    debug!(found, "expected a Morse message");
    MorseError::NotText { found }
}

fn not_sequence(value: &Value) -> OneHotError {
    let found = kind_name(value);
    debug!(found, "expected a sequence of categories");
    OneHotError::NotSequence { found }
}
