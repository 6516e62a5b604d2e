use std::fmt;

use crate::value::Value;
use crate::{Error, Result};

const KB: f64 = 1024.0;
const MB: f64 = KB * KB;
const GB: f64 = MB * KB;
const TB: f64 = GB * KB;
const PB: f64 = TB * KB;

/// 2^53, every `f64` of at least this magnitude is an integer
const WHOLE: f64 = 9_007_199_254_740_992.0;

/// `(limit, divisor, suffix)`: the first entry whose limit exceeds the size is used
const UNITS: &[(f64, f64, &str)] = &[
    (KB, 1.0, "bytes"),
    (MB, KB, "KB"),
    (GB, MB, "MB"),
    (TB, GB, "GB"),
    (PB, TB, "TB"),
];

/// Returns adequate string representation (in KB, ..) of number of bytes
///
/// Units are binary (1 KB = 1024 bytes). The number is rounded to one decimal place, and a
/// zero decimal is omitted.
///
/// ```
/// # use filtrate::{filters::filesizeformat, Value};
/// assert_eq!(filesizeformat(&Value::from(234)).unwrap().to_string(), "234 bytes");
/// assert_eq!(filesizeformat(&Value::from(14_868_735_121u64)).unwrap().to_string(), "13.8 GB");
/// ```
pub fn filesizeformat(value: &Value) -> Result<FilesizeFormatFilter> {
    let size = value
        .as_f64()
        .ok_or_else(|| Error::mismatch("number", value.kind()))?;
    match size.is_finite() {
        true => Ok(FilesizeFormatFilter(size)),
        false => Err(Error::OutOfRange(format!("size {size} is not finite").into())),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FilesizeFormatFilter(f64);

impl fmt::Display for FilesizeFormatFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.0;
        let (divisor, suffix) = UNITS
            .iter()
            .find(|&&(limit, ..)| size < limit)
            .map_or((PB, "PB"), |&(_, divisor, suffix)| (divisor, suffix));

        // `{:.1}` alone would round half to even; from 2^53 on every f64 is whole, and
        // scaling by ten could overflow
        let quotient = size / divisor;
        let rounded = match quotient.abs() < WHOLE {
            true => (quotient * 10.0).round() / 10.0,
            false => quotient,
        };
        let formatted = format!("{rounded:.1}");
        let number = formatted.strip_suffix(".0").unwrap_or(&formatted);
        write!(f, "{number} {suffix}")
    }
}
