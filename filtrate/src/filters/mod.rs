//! The typed filter functions
//!
//! Each function here is the pure body of one registry filter, usable directly from Rust code.
//! The [`Registry`][crate::Registry] wraps them for dynamic invocation and maps their errors to
//! the documented fallback values.
//!
//! Argument order follows the pipe convention of template engines: arguments written after the
//! filter name come first, the piped value comes last, so `{{ value|truncatechars 12 }}` is
//! `truncatechars(12, value)`.

mod builtin;
mod generic;
mod humansize;
mod num;
#[cfg(feature = "urlencode")]
mod urlencode;

pub use builtin::{
    capfirst, center, join, ljust, lower, replace, rjust, title, trim, truncatechars, upper,
    wordcount, yesno, ELLIPSIS,
};
pub use generic::{default, length, lengthis};
pub use humansize::{filesizeformat, FilesizeFormatFilter};
pub use num::{divisibleby, pluralize};
#[cfg(feature = "urlencode")]
pub use urlencode::urlencode;
