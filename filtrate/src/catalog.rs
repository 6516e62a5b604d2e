//! The built-in filters: metadata plus the glue between dynamic [`Value`]s and the typed
//! functions in [`crate::filters`].

use crate::filters;
use crate::registry::{Fallback, Filter, FilterMeta, Returns};
use crate::value::Value;
use crate::{Error, Result};

pub(crate) fn builtins() -> Vec<Filter> {
    #[allow(unused_mut)]
    let mut list = vec![
        Filter::new(REPLACE, replace),
        Filter::new(DEFAULT, default),
        Filter::new(LENGTH, length),
        Filter::new(LOWER, lower),
        Filter::new(UPPER, upper),
        Filter::new(TRUNCATECHARS, truncatechars),
        Filter::new(WORDCOUNT, wordcount),
        Filter::new(DIVISIBLEBY, divisibleby),
        Filter::new(LENGTHIS, lengthis),
        Filter::new(TRIM, trim),
        Filter::new(CAPFIRST, capfirst),
        Filter::new(TITLE, title),
        Filter::new(PLURALIZE, pluralize),
        Filter::new(YESNO, yesno),
        Filter::new(RJUST, rjust),
        Filter::new(LJUST, ljust),
        Filter::new(CENTER, center),
        Filter::new(FILESIZEFORMAT, filesizeformat),
        Filter::new(JOIN, join),
    ];
    #[cfg(feature = "urlencode")]
    list.push(Filter::new(URLENCODE, urlencode));
    list
}

const fn meta(
    name: &'static str,
    params: &'static [&'static str],
    returns: Returns,
    fallback: Fallback,
    description: &'static str,
) -> FilterMeta {
    FilterMeta {
        name,
        params,
        returns,
        fallback,
        description,
    }
}

const REPLACE: FilterMeta = meta(
    "replace",
    &["needle"],
    Returns::Text,
    Fallback::Input,
    "removes every occurrence of the needle",
);
const DEFAULT: FilterMeta = meta(
    "default",
    &["fallback"],
    Returns::Any,
    Fallback::Input,
    "replaces empty text, empty containers and false",
);
const LENGTH: FilterMeta = meta(
    "length",
    &[],
    Returns::Integer,
    Fallback::Zero,
    "number of characters or elements",
);
const LOWER: FilterMeta = meta(
    "lower",
    &[],
    Returns::Text,
    Fallback::Input,
    "converts to lowercase",
);
const UPPER: FilterMeta = meta(
    "upper",
    &[],
    Returns::Text,
    Fallback::Input,
    "converts to uppercase",
);
const TRUNCATECHARS: FilterMeta = meta(
    "truncatechars",
    &["n"],
    Returns::Text,
    Fallback::Input,
    "limits the text to n characters, ending in \"...\"",
);
#[cfg(feature = "urlencode")]
const URLENCODE: FilterMeta = meta(
    "urlencode",
    &[],
    Returns::Text,
    Fallback::Empty,
    "escapes the text for a URL query",
);
const WORDCOUNT: FilterMeta = meta(
    "wordcount",
    &[],
    Returns::Integer,
    Fallback::Zero,
    "number of whitespace separated words",
);
const DIVISIBLEBY: FilterMeta = meta(
    "divisibleby",
    &["divisor"],
    Returns::Bool,
    Fallback::False,
    "whether the number is a multiple of the divisor",
);
const LENGTHIS: FilterMeta = meta(
    "lengthis",
    &["n"],
    Returns::Bool,
    Fallback::False,
    "whether the length equals n",
);
const TRIM: FilterMeta = meta(
    "trim",
    &[],
    Returns::Text,
    Fallback::Input,
    "strips leading and trailing whitespace",
);
const CAPFIRST: FilterMeta = meta(
    "capfirst",
    &[],
    Returns::Text,
    Fallback::Input,
    "uppercases the first character",
);
const TITLE: FilterMeta = meta(
    "title",
    &[],
    Returns::Text,
    Fallback::Input,
    "capitalizes every word",
);
const PLURALIZE: FilterMeta = meta(
    "pluralize",
    &["suffixes"],
    Returns::Text,
    Fallback::Empty,
    "singular or plural suffix from \"singular,plural\"",
);
const YESNO: FilterMeta = meta(
    "yesno",
    &["yes", "no"],
    Returns::Text,
    Fallback::Empty,
    "selects a text by a boolean",
);
const RJUST: FilterMeta = meta(
    "rjust",
    &["n"],
    Returns::Text,
    Fallback::Input,
    "right-aligns in a field of n characters",
);
const LJUST: FilterMeta = meta(
    "ljust",
    &["n"],
    Returns::Text,
    Fallback::Input,
    "left-aligns in a field of n characters",
);
const CENTER: FilterMeta = meta(
    "center",
    &["n"],
    Returns::Text,
    Fallback::Input,
    "centers in a field of n characters",
);
const FILESIZEFORMAT: FilterMeta = meta(
    "filesizeformat",
    &[],
    Returns::Text,
    Fallback::Empty,
    "human readable size of a number of bytes",
);
const JOIN: FilterMeta = meta(
    "join",
    &["separator"],
    Returns::Text,
    Fallback::Empty,
    "joins the elements of a sequence",
);

fn arg(args: &[Value], idx: usize) -> Result<&Value> {
    args.get(idx)
        .ok_or_else(|| Error::MalformedArgument(format!("missing argument #{}", idx + 1).into()))
}

fn text(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::mismatch("text", value.kind()))
}

fn integer(value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::mismatch("integer", value.kind()))
}

fn boolean(value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::mismatch("bool", value.kind()))
}

fn count(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn replace(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::replace(text(arg(args, 0)?)?, text(value)?).into())
}

fn default(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::default(arg(args, 0)?, value).clone())
}

fn length(_: &[Value], value: &Value) -> Result<Value> {
    Ok(count(filters::length(value)))
}

fn lower(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::lower(text(value)?).into())
}

fn upper(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::upper(text(value)?).into())
}

fn truncatechars(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::truncatechars(integer(arg(args, 0)?)?, text(value)?).into())
}

#[cfg(feature = "urlencode")]
fn urlencode(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::urlencode(text(value)?).into())
}

fn wordcount(_: &[Value], value: &Value) -> Result<Value> {
    Ok(count(filters::wordcount(text(value)?)))
}

fn divisibleby(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::divisibleby(arg(args, 0)?, value)?.into())
}

fn lengthis(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::lengthis(integer(arg(args, 0)?)?, value)?.into())
}

fn trim(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::trim(text(value)?).into())
}

fn capfirst(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::capfirst(text(value)?).into())
}

fn title(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::title(text(value)?).into())
}

fn pluralize(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::pluralize(text(arg(args, 0)?)?, value)?.into())
}

fn yesno(args: &[Value], value: &Value) -> Result<Value> {
    let yes = text(arg(args, 0)?)?;
    let no = text(arg(args, 1)?)?;
    Ok(filters::yesno(yes, no, boolean(value)?).into())
}

fn rjust(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::rjust(integer(arg(args, 0)?)?, text(value)?)?.into())
}

fn ljust(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::ljust(integer(arg(args, 0)?)?, text(value)?)?.into())
}

fn center(args: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::center(integer(arg(args, 0)?)?, text(value)?)?.into())
}

fn filesizeformat(_: &[Value], value: &Value) -> Result<Value> {
    Ok(filters::filesizeformat(value)?.to_string().into())
}

fn join(args: &[Value], value: &Value) -> Result<Value> {
    let items = value
        .as_sequence()
        .ok_or_else(|| Error::mismatch("sequence", value.kind()))?;
    Ok(filters::join(text(arg(args, 0)?)?, items).into())
}
