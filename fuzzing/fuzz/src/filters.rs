use arbitrary::{Arbitrary, Unstructured};
use filtrate::{filters, Value};

/// Calls a typed filter function directly
#[derive(Arbitrary, Debug, Clone, Copy)]
pub struct Scenario<'a> {
    input: &'a str,
    filter: TextFilter<'a>,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum TextFilter<'a> {
    Replace(&'a str),
    Lower,
    Upper,
    Trim,
    Capfirst,
    Title,
    Wordcount,
    Truncatechars(i64),
    Rjust(i16),
    Ljust(i16),
    Center(i16),
    Urlencode,
    Length,
    Lengthis(i64),
}

impl<'a> super::Scenario<'a> for Scenario<'a> {
    type RunError = filtrate::Error;

    fn new(data: &'a [u8]) -> Result<Self, arbitrary::Error> {
        Self::arbitrary_take_rest(Unstructured::new(data))
    }

    fn run(&self) -> Result<(), Self::RunError> {
        let Scenario { input, filter } = *self;
        let _ = match filter {
            TextFilter::Replace(needle) => filters::replace(needle, input),
            TextFilter::Lower => filters::lower(input),
            TextFilter::Upper => filters::upper(input),
            TextFilter::Trim => filters::trim(input),
            TextFilter::Capfirst => filters::capfirst(input),
            TextFilter::Title => filters::title(input),
            TextFilter::Wordcount => filters::wordcount(input).to_string(),
            TextFilter::Truncatechars(n) => filters::truncatechars(n, input),
            TextFilter::Rjust(n) => filters::rjust(n.into(), input)?,
            TextFilter::Ljust(n) => filters::ljust(n.into(), input)?,
            TextFilter::Center(n) => filters::center(n.into(), input)?,
            TextFilter::Urlencode => filters::urlencode(input),
            TextFilter::Length => filters::length(&Value::from(input)).to_string(),
            TextFilter::Lengthis(n) => filters::lengthis(n, &Value::from(input))?.to_string(),
        };
        Ok(())
    }
}
