use std::borrow::Cow;

use crate::value::Kind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by filters and by the [`Registry`][crate::Registry]
///
/// The first three variants describe why a filter invocation fell back to its default value.
/// They never escape [`Registry::apply()`][crate::Registry::apply] as an `Err`, but are carried
/// inside [`Filtered::Degraded`][crate::Filtered::Degraded] so the host can inspect them.
///
/// The remaining variants are host-level call errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The value's kind is not one the filter supports.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: Kind,
    },
    /// A filter argument could not be interpreted, e.g. `pluralize("a,b,c")`.
    #[error("malformed argument: {0}")]
    MalformedArgument(Cow<'static, str>),
    /// A numeric argument lies outside of what the filter accepts.
    #[error("argument out of range: {0}")]
    OutOfRange(Cow<'static, str>),
    /// No filter with this name is registered.
    #[error("unknown filter `{0}`")]
    UnknownFilter(String),
    /// The filter was called with the wrong number of arguments.
    #[error("filter `{filter}` takes {expected} argument(s), {found} given")]
    Arity {
        filter: &'static str,
        expected: usize,
        found: usize,
    },
    /// Two filters with the same name were added to a registry.
    #[error("filter `{0}` is registered twice")]
    DuplicateFilter(&'static str),
}

impl Error {
    #[inline]
    pub(crate) fn mismatch(expected: &'static str, found: Kind) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Returns `true` for errors that a filter folds into its fallback value.
    pub fn is_degradation(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::MalformedArgument(_) | Self::OutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::mismatch("text", Kind::Integer).to_string(),
            "expected text, found integer"
        );
        assert_eq!(
            Error::Arity {
                filter: "yesno",
                expected: 2,
                found: 1
            }
            .to_string(),
            "filter `yesno` takes 2 argument(s), 1 given"
        );
        assert_eq!(
            Error::UnknownFilter("nope".into()).to_string(),
            "unknown filter `nope`"
        );
    }

    #[test]
    fn degradation_split() {
        assert!(Error::MalformedArgument("x".into()).is_degradation());
        assert!(Error::OutOfRange("x".into()).is_degradation());
        assert!(!Error::UnknownFilter("x".into()).is_degradation());
        assert!(!Error::DuplicateFilter("x").is_degradation());
    }
}
