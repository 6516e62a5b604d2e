use crate::value::Value;
use crate::{Error, Result};

/// Tests whether `value` is a multiple of `divisor`
///
/// If both operands are integers the test is exact, and a zero divisor is out of range.
/// Otherwise both are widened to `f64` and compared with floating-point remainder, which is
/// only reliable for values that are exactly representable in binary.
///
/// ```
/// # use filtrate::{filters::divisibleby, Value};
/// assert!(divisibleby(&Value::from(3), &Value::from(21)).unwrap());
/// assert!(!divisibleby(&Value::from(4), &Value::from(21)).unwrap());
/// ```
pub fn divisibleby(divisor: &Value, value: &Value) -> Result<bool> {
    if let (Some(value), Some(divisor)) = (value.as_i128(), divisor.as_i128()) {
        return match value.checked_rem(divisor) {
            Some(rem) => Ok(rem == 0),
            None => Err(Error::OutOfRange("division by zero".into())),
        };
    }

    let value = value
        .as_f64()
        .ok_or_else(|| Error::mismatch("number", value.kind()))?;
    let divisor = divisor
        .as_f64()
        .ok_or_else(|| Error::mismatch("number", divisor.kind()))?;
    Ok(value % divisor == 0.0)
}

/// Chooses the singular or plural suffix for `count`
///
/// `suffixes` is either `"plural"` or `"singular,plural"`. Exactly `1` selects the singular part,
/// every other number selects the plural part. A `suffixes` with more than one comma is malformed,
/// and a `count` that is not an integer is a type mismatch.
///
/// ```
/// # use filtrate::{filters::pluralize, Value};
/// assert_eq!(pluralize("y,ies", &Value::from(1)).unwrap(), "y");
/// assert_eq!(pluralize("y,ies", &Value::from(2)).unwrap(), "ies");
/// assert_eq!(pluralize("s", &Value::from(0)).unwrap(), "s");
/// ```
pub fn pluralize<'a>(suffixes: &'a str, count: &Value) -> Result<&'a str> {
    let singular = match *count {
        Value::Integer(n) => n == 1,
        Value::Unsigned(n) => n == 1,
        _ => return Err(Error::mismatch("integer", count.kind())),
    };

    let (one, many) = match suffixes.split_once(',') {
        None => ("", suffixes),
        Some((one, many)) if !many.contains(',') => (one, many),
        Some(_) => {
            return Err(Error::MalformedArgument(
                format!("expected at most two comma separated parts, got {suffixes:?}").into(),
            ));
        }
    };
    Ok(match singular {
        true => one,
        false => many,
    })
}
