//! Decode a serialized button list into typed, unvalidated button specs.

use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::{
    ButtonSpec, Error,
    error::Result,
    raw::{BUTTON_KEYS, FLAG_KEYS, RESOLVED_KEYS},
};

/// Largest magnitude at which every float is still an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Decode a JSON-encoded array of button objects.
///
/// Integer-valued numbers on text keys are rewritten to their decimal string
/// form before the typed read, so `"outputValue": 2` reads as `"2"`. The
/// boolean flags never fail: `isNextAction` holds only for `true`, and
/// `hideWhenUnavailable` follows loose truthiness.
pub fn decode(raw: &str) -> Result<Vec<ButtonSpec>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| Error::malformed(e.to_string()))?;
    decode_value(value)
}

/// Decode an already-parsed JSON value holding the button array.
pub fn decode_value(value: Value) -> Result<Vec<ButtonSpec>> {
    let Value::Array(items) = value else {
        return Err(Error::malformed(format!(
            "expected an array of buttons, found {}",
            kind_of(&value)
        )));
    };

    let buttons = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_button(index, item))
        .collect::<Result<Vec<_>>>()?;
    debug!(target: "flownav_config::decode", count = buttons.len(), "decoded buttons");
    Ok(buttons)
}

/// Coerce and type-check a single button object.
fn decode_button(index: usize, item: Value) -> Result<ButtonSpec> {
    let Value::Object(mut fields) = item else {
        return Err(Error::malformed(format!(
            "button {} is {}, not an object",
            index + 1,
            kind_of(&item)
        )));
    };

    coerce_integers(&mut fields);
    for key in fields.keys() {
        let key = key.as_str();
        if !BUTTON_KEYS.contains(&key) && !RESOLVED_KEYS.contains(&key) {
            warn!(
                target: "flownav_config::decode",
                button = index + 1,
                key,
                "ignoring unknown button key"
            );
        }
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| Error::malformed(format!("button {}: {}", index + 1, e)))
}

/// Replace every integer-valued number outside the flag keys with its decimal string.
fn coerce_integers(fields: &mut Map<String, Value>) {
    for (key, value) in fields.iter_mut() {
        if FLAG_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Value::Number(n) = value
            && let Some(s) = integer_string(n)
        {
            *value = Value::String(s);
        }
    }
}

/// Decimal form of `n` when it holds an integer, including floats like `3.0`.
fn integer_string(n: &Number) -> Option<String> {
    if n.is_i64() || n.is_u64() {
        return Some(n.to_string());
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER {
        return Some((f as i64).to_string());
    }
    None
}

/// Short description of a JSON value's type for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
