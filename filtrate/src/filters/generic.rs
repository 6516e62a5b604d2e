use crate::value::Value;
use crate::{Error, Result};

/// Returns `fallback` if `value` is empty text, an empty container or `false`
///
/// Every other value, including zero and kinds that have no notion of emptiness, is returned
/// unchanged.
///
/// ```
/// # use filtrate::{filters::default, Value};
/// let fallback = Value::from("default value");
/// assert_eq!(default(&fallback, &Value::from("")), &fallback);
/// assert_eq!(default(&fallback, &Value::from(0)), &Value::from(0));
/// ```
pub fn default<'a>(fallback: &'a Value, value: &'a Value) -> &'a Value {
    let empty = match value {
        Value::Bool(b) => !b,
        Value::Text(_) | Value::Sequence(_) | Value::Mapping(_) => {
            value.is_empty().unwrap_or(false)
        }
        _ => false,
    };
    match empty {
        true => fallback,
        false => value,
    }
}

/// Number of characters of a text or elements of a container, `0` for anything else
#[inline]
pub fn length(value: &Value) -> usize {
    value.len().unwrap_or(0)
}

/// Tests whether [`length()`] of a text or container equals `n`
///
/// Values without a length are a type mismatch.
pub fn lengthis(n: i64, value: &Value) -> Result<bool> {
    let len = value
        .len()
        .ok_or_else(|| Error::mismatch("text, sequence or mapping", value.kind()))?;
    Ok(usize::try_from(n).is_ok_and(|n| n == len))
}
